//! CLI-boundary error type. The simulation core stays infallible; this is
//! the one genuinely recoverable failure class, owned entirely by argument
//! parsing (malformed seed, non-positive radius).

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CliError {
    #[error("invalid world seed '{0}': expected a signed 64-bit decimal integer")]
    InvalidSeed(String),

    #[error("search radius must be positive, got {0}")]
    NonPositiveRange(i32),
}
