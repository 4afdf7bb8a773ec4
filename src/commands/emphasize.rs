/// `emphasize` command: resolve inline emphasis in one piece of text.
use helpmark::emphasize;

use crate::cli::args::EmphasizeArgs;
use crate::cli::output::write_value;
use crate::cli::{CliError, OutputCtx};
use crate::types::TextOutput;

/// Run `helpmark emphasize`.
///
/// # Errors
///
/// Returns `CliError` when the output can't be written.
pub fn run(args: &EmphasizeArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let text = emphasize(&args.text.join(" "), &ctx.styles);
    let output = TextOutput { text };
    write_value(&output, &output.text, ctx)
}
