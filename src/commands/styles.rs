/// `styles` command: show the active emphasis escape sequences.
use helpmark::Styles;
use helpmark::markup::styles::{STYLE_VARS, visible};

use crate::cli::output::write_styles;
use crate::cli::{CliError, OutputCtx};
use crate::types::StyleOutput;

/// Run `helpmark styles`.
///
/// # Errors
///
/// Returns `CliError` when the output can't be written.
pub fn run(ctx: &OutputCtx) -> Result<(), CliError> {
    write_styles(&style_rows(&ctx.styles), ctx)
}

fn style_rows(styles: &Styles) -> Vec<StyleOutput> {
    STYLE_VARS
        .iter()
        .map(|var| StyleOutput {
            name: var.name.to_owned(),
            variables: var.vars.iter().map(|v| (*v).to_owned()).collect(),
            value: visible(styles.get(var.name).unwrap_or_default()),
        })
        .collect()
}
