/// `render` command: format a markup document.
use helpmark::{emph, plain};

use crate::cli::args::{LayoutArgs, RenderArgs, non_negative};
use crate::cli::input::read_source;
use crate::cli::output::write_value;
use crate::cli::{CliError, OutputCtx};
use crate::types::{RenderMode, RenderOutput};

/// Run `helpmark render`.
///
/// # Errors
///
/// Returns `CliError` when the input can't be read or the output can't be written.
pub fn run(args: &RenderArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let source = read_source(args.file.as_deref())?;
    let output = render(&source, &args.layout, ctx);
    write_value(&output, &output.text, ctx)
}

/// Format `source` with the layout flags, emphasized unless `--plain` is set.
#[must_use]
pub fn render(source: &str, layout: &LayoutArgs, ctx: &OutputCtx) -> RenderOutput {
    let _t = ctx.timer("render");
    let indent = non_negative(layout.indent);
    let (mode, text) = if layout.plain {
        (RenderMode::Plain, plain(source, indent, layout.width))
    } else {
        (
            RenderMode::Emph,
            emph(source, indent, layout.width, &ctx.styles),
        )
    };
    RenderOutput {
        mode,
        indent,
        width: layout.width,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use helpmark::Styles;

    fn ctx() -> OutputCtx {
        OutputCtx::new(OutputFormat::Text, false, Styles::none())
    }

    fn layout(indent: isize, width: isize, plain: bool) -> LayoutArgs {
        LayoutArgs {
            indent,
            width,
            plain,
        }
    }

    #[test]
    fn test_render_emph_with_empty_styles() {
        let out = render("**Usage**: run <cmd>", &layout(2, 80, false), &ctx());
        assert_eq!(out.mode, RenderMode::Emph);
        assert_eq!(out.text, "  Usage: run CMD");
    }

    #[test]
    fn test_render_plain_clamps_negative_indent() {
        let out = render("**Usage**", &layout(-4, 80, true), &ctx());
        assert_eq!(out.mode, RenderMode::Plain);
        assert_eq!(out.indent, 0);
        assert_eq!(out.text, "**Usage**");
    }
}
