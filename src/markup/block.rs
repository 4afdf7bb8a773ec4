//! Line-oriented block parser: the top-level driver of the formatter.
//!
//! Each input line is classified as blank, raw (verbatim) or prose. Prose
//! lines accumulate into a block which is reflowed when the block closes;
//! raw lines are copied through unchanged. The indentation of the first
//! non-blank line is removed from every line of the document.

use super::emphasis::emphasize;
use super::indent::indent;
use super::styles::Styles;
use super::wrap::wrap;

/// Leading spaces that turn a line into a raw (verbatim) line.
const RAW_INDENT: &str = "    ";

/// Columns reserved for the visual margin of a prose block.
const BLOCK_MARGIN: usize = 4;

/// Whether prose blocks get their emphasis markup resolved.
#[derive(Debug, Clone, Copy)]
pub enum Flavor<'a> {
    /// Leave `*`, `<` and `>` as literal characters.
    Plain,
    /// Replace emphasis markup with the given escape sequences.
    Emph(&'a Styles),
}

/// Where the parser is relative to the blocks of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// Between blocks.
    Outside,
    /// Copying a raw block.
    Raw,
    /// Accumulating a prose block.
    Prose {
        buffer: String,
        /// The last accumulated line ended with two or more spaces.
        hard_break: bool,
    },
}

/// Streaming form of [`emph`] / [`plain`]: feed lines one at a time, then finish.
#[derive(Debug)]
pub struct BlockParser<'a> {
    flavor: Flavor<'a>,
    width: isize,
    /// Fixed by the first non-blank line; `None` before it.
    strip: Option<usize>,
    mode: Mode,
    out: String,
}

impl<'a> BlockParser<'a> {
    /// Create a parser wrapping prose to `width` columns (see [`wrap`] for `0` and negatives).
    #[must_use]
    pub fn new(flavor: Flavor<'a>, width: isize) -> Self {
        Self {
            flavor,
            width,
            strip: None,
            mode: Mode::Outside,
            out: String::new(),
        }
    }

    /// The strip width, once the first non-blank line has been seen.
    #[must_use]
    pub fn strip_width(&self) -> Option<usize> {
        self.strip
    }

    /// Feed one line, without its terminating `'\n'`.
    pub fn push_line(&mut self, line: &str) {
        let blank = line.trim().is_empty();

        let strip = match self.strip {
            Some(strip) => strip,
            None if blank => return,
            None => {
                let strip = leading_spaces(line);
                tracing::debug!(strip, "strip width fixed by first non-blank line");
                self.strip = Some(strip);
                strip
            }
        };
        let line = strip_spaces(line, strip);

        match std::mem::replace(&mut self.mode, Mode::Outside) {
            Mode::Outside => self.outside(line, blank),
            Mode::Raw => {
                if blank {
                    return;
                }
                if line.starts_with(RAW_INDENT) {
                    self.raw_line(line);
                    self.mode = Mode::Raw;
                } else {
                    self.outside(line, blank);
                }
            }
            Mode::Prose { buffer, hard_break } => {
                if blank {
                    self.flush(&buffer);
                } else {
                    self.mode = join_prose(buffer, hard_break, line);
                }
            }
        }
    }

    /// Flush any open block and return the trimmed, indented output.
    #[must_use]
    pub fn finish(mut self, spaces: usize) -> String {
        if let Mode::Prose { buffer, .. } = std::mem::replace(&mut self.mode, Mode::Outside) {
            self.flush(&buffer);
        }
        indent(self.out.trim_matches('\n'), spaces)
    }

    fn outside(&mut self, line: &str, blank: bool) {
        if blank {
            return;
        }
        if line.starts_with(RAW_INDENT) {
            tracing::trace!("raw block opened");
            self.out.push('\n');
            self.raw_line(line);
            self.mode = Mode::Raw;
        } else {
            self.mode = join_prose(String::new(), false, line);
        }
    }

    fn raw_line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn flush(&mut self, buffer: &str) {
        let strip = self.strip.unwrap_or(0);
        let width = block_width(self.width, strip);
        let wrapped = wrap(buffer, width);
        tracing::trace!(chars = buffer.len(), width, "prose block flushed");

        self.out.push('\n');
        match self.flavor {
            Flavor::Plain => self.out.push_str(&wrapped),
            Flavor::Emph(styles) => self.out.push_str(&emphasize(&wrapped, styles)),
        }
        self.out.push('\n');
    }
}

/// Append a prose line to the block, joined by a space or a hard break.
fn join_prose(mut buffer: String, hard_break: bool, line: &str) -> Mode {
    if !buffer.is_empty() {
        buffer.push(if hard_break { '\n' } else { ' ' });
    }
    buffer.push_str(line.trim());
    Mode::Prose {
        buffer,
        hard_break: line.ends_with("  "),
    }
}

/// Prose wrap width: the requested width less the strip width and block margin.
///
/// Zero and negative widths keep their meaning; a positive width never
/// drops below one column.
fn block_width(width: isize, strip: usize) -> isize {
    if width <= 0 {
        return width;
    }
    let reserved = isize::try_from(strip + BLOCK_MARGIN).unwrap_or(isize::MAX);
    width.saturating_sub(reserved).max(1)
}

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}

/// Remove at most `n` leading spaces, never anything else.
fn strip_spaces(line: &str, n: usize) -> &str {
    let count = leading_spaces(line).min(n);
    // Spaces are one byte each, so `count` is a char boundary.
    &line[count..]
}

/// Format `markup` with emphasis resolved through `styles`.
///
/// Prose is wrapped to `width` (less the document's strip width and a
/// four-column margin) and the whole result is indented by `spaces`.
#[must_use]
pub fn emph(markup: &str, spaces: usize, width: isize, styles: &Styles) -> String {
    parse(markup, spaces, width, Flavor::Emph(styles))
}

/// Format `markup` like [`emph`] but keep emphasis characters literally.
#[must_use]
pub fn plain(markup: &str, spaces: usize, width: isize) -> String {
    parse(markup, spaces, width, Flavor::Plain)
}

fn parse(markup: &str, spaces: usize, width: isize, flavor: Flavor<'_>) -> String {
    let mut parser = BlockParser::new(flavor, width);
    for line in markup.split('\n') {
        parser.push_line(line);
    }
    parser.finish(spaces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::styles::{BOLD, ITALIC, RESET, UNDER};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(plain("", 0, 80), "");
        assert_eq!(plain("\n   \n\n", 4, 80), "");
    }

    #[test]
    fn test_single_paragraph_reflows() {
        let input = "one\ntwo\nthree";
        assert_eq!(plain(input, 0, 80), "one two three");
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        let input = "first\nparagraph\n\n\nsecond";
        assert_eq!(plain(input, 0, 80), "first paragraph\n\nsecond");
    }

    #[test]
    fn test_strip_width_from_first_non_blank_line() {
        let input = "\n\n      Indented doc\n      continues here\n\n      Second para";
        let mut parser = BlockParser::new(Flavor::Plain, 80);
        for line in input.split('\n') {
            parser.push_line(line);
        }
        assert_eq!(parser.strip_width(), Some(6));
        assert_eq!(
            parser.finish(0),
            "Indented doc continues here\n\nSecond para"
        );
    }

    #[test]
    fn test_short_line_is_not_over_stripped() {
        let input = "    deep\n  shallow";
        assert_eq!(plain(input, 0, 80), "deep shallow");
    }

    #[test]
    fn test_wrap_width_reserves_strip_and_margin() {
        // 20 - 0 - 4 = 16 columns.
        let input = "aaaa bbbb cccc dddd eeee";
        assert_eq!(plain(input, 0, 20), "aaaa bbbb cccc\ndddd eeee");
        // 19 - 2 - 4 = 13 columns.
        let input = "  aaaa bbbb cccc dddd eeee";
        assert_eq!(plain(input, 0, 19), "aaaa bbbb\ncccc dddd\neeee");
    }

    #[test]
    fn test_raw_block_is_verbatim() {
        let input = "Some prose that will wrap at a narrow width.\n\n    let x = *y* <z>;\n      keep   spacing\n\nMore prose.";
        assert_eq!(
            emph(input, 0, 20, &Styles::default()),
            "Some prose that\nwill wrap at a\nnarrow width.\n\n    let x = *y* <z>;\n      keep   spacing\n\nMore prose."
        );
    }

    #[test]
    fn test_plain_keeps_raw_line_and_reflows_prose() {
        let input = "  Usage is simple and this sentence is long enough to wrap.\n\n      command --flag\n\n  After the example.";
        assert_eq!(
            plain(input, 0, 30),
            "Usage is simple and this\nsentence is long enough\nto wrap.\n\n    command --flag\n\nAfter the example."
        );
    }

    #[test]
    fn test_raw_block_ends_on_shallow_line() {
        let input = "intro\n\n    raw one\nback to prose\nstill prose";
        assert_eq!(
            plain(input, 0, 80),
            "intro\n\n    raw one\n\nback to prose still prose"
        );
    }

    #[test]
    fn test_indented_line_inside_prose_is_not_raw() {
        let input = "prose\n    indented continuation";
        assert_eq!(plain(input, 0, 80), "prose indented continuation");
    }

    #[test]
    fn test_unterminated_raw_block_runs_to_end() {
        let input = "intro\n\n    one\n    two";
        assert_eq!(plain(input, 0, 80), "intro\n\n    one\n    two");
    }

    #[test]
    fn test_hard_break() {
        let input = "line one  \nline two\nline three";
        assert_eq!(plain(input, 0, 80), "line one\nline two line three");
    }

    #[test]
    fn test_hard_break_lines_wrap_separately() {
        let input = "aaa bbb ccc  \nddd eee";
        assert_eq!(plain(input, 0, 11), "aaa bbb\nccc\nddd eee");
    }

    #[test]
    fn test_emph_resolves_markup_in_prose() {
        let input = "Use **bold** and *italic* with <name>.";
        assert_eq!(
            emph(input, 2, 80, &Styles::default()),
            format!("  Use {BOLD}bold{RESET} and {ITALIC}italic{RESET} with {UNDER}NAME{RESET}.")
        );
    }

    #[test]
    fn test_plain_keeps_markup() {
        let input = "Use **bold** and <name>.";
        assert_eq!(plain(input, 0, 80), "Use **bold** and <name>.");
    }

    #[test]
    fn test_indent_applies_to_every_line() {
        let input = "one\n\ntwo";
        assert_eq!(plain(input, 3, 80), "   one\n   \n   two");
    }

    #[test]
    fn test_zero_width_disables_wrapping() {
        let input = "a long line that would otherwise be wrapped";
        assert_eq!(plain(input, 0, 0), input);
    }

    #[test]
    fn test_negative_width_collapses_hard_breaks() {
        let input = "one  \ntwo";
        assert_eq!(plain(input, 0, -1), "one two");
    }

    #[test]
    fn test_tiny_width_clamps_to_one_column() {
        assert_eq!(plain("a b", 0, 2), "a\nb");
    }

    #[test]
    fn test_crlf_is_not_normalized() {
        // A trailing '\r' is content: raw lines keep it, prose trimming drops it.
        let input = "prose\r\n\r\n    raw\r\n";
        assert_eq!(plain(input, 0, 80), "prose\n\n    raw\r");
    }

    #[test]
    fn test_block_width_edges() {
        assert_eq!(block_width(0, 8), 0);
        assert_eq!(block_width(-1, 8), -1);
        assert_eq!(block_width(10, 2), 4);
        assert_eq!(block_width(3, 2), 1);
    }
}
