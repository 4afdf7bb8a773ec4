/// `indent` command: prefix every line with spaces.
use helpmark::indent;

use crate::cli::args::{IndentArgs, non_negative};
use crate::cli::input::{chomp, read_source};
use crate::cli::output::write_value;
use crate::cli::{CliError, OutputCtx};
use crate::types::TextOutput;

/// Run `helpmark indent`.
///
/// # Errors
///
/// Returns `CliError` when the input can't be read or the output can't be written.
pub fn run(args: &IndentArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let source = read_source(args.file.as_deref())?;
    let output = TextOutput {
        text: indent(chomp(&source), non_negative(args.spaces)),
    };
    write_value(&output, &output.text, ctx)
}
