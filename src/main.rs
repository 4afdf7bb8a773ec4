#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! helpmark: format help markup for fixed-width terminals.

mod cli;
mod commands;
mod types;

use clap::Parser;

use cli::logging::init_logging;
use cli::{Cli, OutputCtx, write_error};
use helpmark::Styles;
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.debug) {
        eprintln!("warning: {err}");
    }

    let ctx = OutputCtx::new(cli.output, cli.json, Styles::from_env());
    tracing::debug!(format = ?ctx.format, "starting");

    match commands::dispatch(&cli.command, &ctx) {
        Ok(()) => {}
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            let error_output = ErrorOutput::from_cli_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
