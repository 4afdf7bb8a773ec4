/// `page` command: a titled documentation page.
use helpmark::top_title;

use super::render::render;
use crate::cli::args::PageArgs;
use crate::cli::input::read_source;
use crate::cli::output::write_value;
use crate::cli::{CliError, OutputCtx};
use crate::types::PageOutput;

/// Run `helpmark page`.
///
/// # Errors
///
/// Returns `CliError` when the input can't be read or the output can't be written.
pub fn run(args: &PageArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let source = read_source(args.file.as_deref())?;
    let page = build_page(args, &source, ctx);
    write_value(&page, &page.to_text(), ctx)
}

fn build_page(args: &PageArgs, source: &str, ctx: &OutputCtx) -> PageOutput {
    // The header spans the full width; a disabled or collapsed wrap falls back to 80.
    let cols = usize::try_from(args.layout.width)
        .ok()
        .filter(|&c| c > 0)
        .unwrap_or(80);
    let header = top_title(&args.name, &args.section, &args.name, cols);
    let body = render(source, &args.layout, ctx).text;
    let footer = args
        .footer
        .as_deref()
        .map(|f| top_title("", f, "", cols).trim_end().to_owned());
    PageOutput {
        header,
        body,
        footer,
    }
}
