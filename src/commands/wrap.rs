/// `wrap` command: word-wrap text to a width.
use helpmark::wrap;

use crate::cli::args::WrapArgs;
use crate::cli::input::{chomp, read_source};
use crate::cli::output::write_value;
use crate::cli::{CliError, OutputCtx};
use crate::types::TextOutput;

/// Run `helpmark wrap`.
///
/// # Errors
///
/// Returns `CliError` when the input can't be read or the output can't be written.
pub fn run(args: &WrapArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let source = read_source(args.file.as_deref())?;
    let _t = ctx.timer("wrap");
    let output = TextOutput {
        text: wrap(chomp(&source), args.width),
    };
    write_value(&output, &output.text, ctx)
}
