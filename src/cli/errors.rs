/// Errors from the command-line layer.
///
/// The formatter itself never fails; only reading input, writing output and
/// setting up logging can.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file could not be read.
    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("Cannot read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// Standard output could not be written.
    #[error("Cannot write output: {0}")]
    Write(#[source] std::io::Error),

    /// An output value could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The log subscriber could not be installed.
    #[error("Cannot initialize logging: {0}")]
    Logging(String),
}

/// Exit code mapping for `CliError` variants.
impl CliError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } | Self::Stdin(_) => 2,
            Self::Write(_) | Self::Json(_) | Self::Logging(_) => 1,
        }
    }
}
