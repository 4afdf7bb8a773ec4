/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod emphasize;
pub mod indent;
pub mod page;
pub mod render;
pub mod styles;
pub mod title;
pub mod wrap;

use crate::cli::args::Command;
use crate::cli::{CliError, OutputCtx};

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<(), CliError> {
    match command {
        Command::Render(args) => render::run(args, ctx),
        Command::Page(args) => page::run(args, ctx),
        Command::Emphasize(args) => emphasize::run(args, ctx),
        Command::Wrap(args) => wrap::run(args, ctx),
        Command::Indent(args) => indent::run(args, ctx),
        Command::Title(args) => title::run(args, ctx),
        Command::Styles => styles::run(ctx),
    }
}
