mod cli;

use std::error::Error;

use clap::Parser;
use cli::{Cli, Commands};
use fortresscore::locator::ChunkPos;
use fortresscore::{batch, report};
use log::info;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    match args.verbosity {
        0 => {}
        1 => SimpleLogger::new().with_level(log::LevelFilter::Warn).init()?,
        2 => SimpleLogger::new().with_level(log::LevelFilter::Info).init()?,
        _ => SimpleLogger::new().with_level(log::LevelFilter::max()).init()?,
    }

    match args.subcommand {
        Commands::Search { seed, range, center } => {
            let center_block = (center[0], center[1]);
            let center_chunk = ChunkPos::new(center_block.0 >> 4, center_block.1 >> 4);
            let radius_chunks = (range + 15) / 16;

            info!("searching seed {} within {} blocks of ({}, {})", seed, range, center_block.0, center_block.1);
            let matches = fortresscore::search(seed, center_chunk, radius_chunks);
            info!("scanned {} fortress chunk(s)", matches.len());

            let with_quads: Vec<_> = matches.iter().filter(|m| !m.quads.is_empty()).collect();
            if with_quads.is_empty() {
                println!("No 2x2 quad crossing found among {} fortress chunk(s).", matches.len());
            } else {
                for m in &with_quads {
                    print!("{}", report::format_fortress(m));
                }
            }
        }

        Commands::Dump { seed, chunk_x, chunk_z } => {
            let pieces = fortresscore::generator::generate(seed, ChunkPos::new(chunk_x, chunk_z));
            for (i, piece) in pieces.iter().enumerate() {
                let b = piece.bounding_box;
                println!(
                    "{:>3}  depth={:<3} {:<28} ({}, {}, {}) -> ({}, {}, {})  facing {:?}",
                    i, piece.gen_depth, piece.kind, b.min_x, b.min_y, b.min_z, b.max_x, b.max_y, b.max_z, piece.direction
                );
            }
        }

        Commands::Batch { seeds, range, center } => {
            let center_block = (center[0], center[1]);
            let center_chunk = ChunkPos::new(center_block.0 >> 4, center_block.1 >> 4);
            let radius_chunks = (range + 15) / 16;

            info!("batch searching {} seed(s)", seeds.len());
            let results = batch::run_batch(&seeds, center_chunk, radius_chunks);

            for (seed, matches) in &results {
                let with_quads: Vec<_> = matches.iter().filter(|m| !m.quads.is_empty()).collect();
                if with_quads.is_empty() {
                    continue;
                }
                println!("seed {}:", seed);
                for m in &with_quads {
                    print!("{}", report::format_fortress(m));
                }
            }
        }
    }

    Ok(())
}
