/// CLI layer: argument parsing, input reading, output formatting, logging.
pub mod args;
pub mod errors;
pub mod input;
pub mod logging;
pub mod output;

pub use args::{Cli, OutputFormat};
pub use errors::CliError;
pub use output::{OutputCtx, write_error};
