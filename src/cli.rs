use clap::{Parser, Subcommand};

use fortresscore::errors::CliError;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommand: Commands,

    #[clap(
        global = true,
        short = 'v',
        parse(from_occurrences),
        takes_value = false,
        multiple_occurrences = true,
        help = VERBOSE_HELP,
    )]
    pub verbosity: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search a window of the Nether for fortresses with a 2x2 quad crossing.
    #[clap(arg_required_else_help = true)]
    Search {
        #[clap(value_parser = parse_seed, help = SEED_HELP)]
        seed: i64,

        #[clap(
            short = 'r',
            long = "range",
            default_value = "5000",
            value_parser = parse_range,
            help = "Search radius in blocks, centered on --center"
        )]
        range: i32,

        #[clap(
            short = 'c',
            long = "center",
            number_of_values = 2,
            value_names = &["X", "Z"],
            default_values = &["0", "0"],
            help = "Center block coordinate of the search window"
        )]
        center: Vec<i32>,
    },

    /// Dump the full placed-piece list of one specific fortress chunk.
    #[clap(arg_required_else_help = true)]
    Dump {
        #[clap(value_parser = parse_seed, help = SEED_HELP)]
        seed: i64,

        #[clap(help = "Chunk X coordinate of the fortress")]
        chunk_x: i32,

        #[clap(help = "Chunk Z coordinate of the fortress")]
        chunk_z: i32,
    },

    /// Run the search over an explicit list of seeds in parallel.
    #[clap(arg_required_else_help = true)]
    Batch {
        #[clap(value_parser = parse_seed, required = true, help = "Seeds to search, space separated")]
        seeds: Vec<i64>,

        #[clap(
            short = 'r',
            long = "range",
            default_value = "5000",
            value_parser = parse_range,
            help = "Search radius in blocks, centered on --center"
        )]
        range: i32,

        #[clap(
            short = 'c',
            long = "center",
            number_of_values = 2,
            value_names = &["X", "Z"],
            default_values = &["0", "0"],
            help = "Center block coordinate of the search window"
        )]
        center: Vec<i32>,
    },
}

fn parse_seed(src: &str) -> Result<i64, CliError> {
    src.parse::<i64>().map_err(|_| CliError::InvalidSeed(src.to_string()))
}

fn parse_range(src: &str) -> Result<i32, CliError> {
    let value: i32 = src.parse().map_err(|_| CliError::InvalidSeed(src.to_string()))?;
    if value <= 0 {
        return Err(CliError::NonPositiveRange(value));
    }
    Ok(value)
}

const SEED_HELP: &str = "The 64-bit signed world seed to search.";
const VERBOSE_HELP: &str = "Enable more verbose logging. Repeatable (-v, -vv, -vvv).";
