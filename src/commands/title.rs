/// `title` command: lay out a three-column title line.
use helpmark::top_title;

use crate::cli::args::TitleArgs;
use crate::cli::output::write_value;
use crate::cli::{CliError, OutputCtx};
use crate::types::TextOutput;

/// Run `helpmark title`.
///
/// # Errors
///
/// Returns `CliError` when the output can't be written.
pub fn run(args: &TitleArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let output = TextOutput {
        text: top_title(&args.left, &args.center, &args.right, args.cols),
    };
    write_value(&output, &output.text, ctx)
}
