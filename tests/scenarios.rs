//! End-to-end formatting of realistic help documents through the public API.

use helpmark::markup::styles::{BOLD, ITALIC, RESET, UNDER};
use helpmark::{BlockParser, Flavor, Styles, emph, emphasize, plain, top_title, wrap};
use pretty_assertions::assert_eq;

const HELP: &str = r"
    The **greet** command prints a greeting to <name>, optionally
    shouting it.

    Examples:

        greet world
        greet --loud *everyone*

    Line one of an address
    line two of an address
";

#[test]
fn test_wrap_and_title_examples() {
    assert_eq!(
        wrap("Here's a string that's not long.", 10),
        "Here's a\nstring\nthat's not\nlong."
    );
    assert_eq!(
        top_title("left", "center", "right", 20),
        "left   center  right"
    );
    assert_eq!(top_title("left", "center", "right", 4), "cent");
}

#[test]
fn test_emphasize_examples() {
    let styles = Styles::default();
    assert_eq!(emphasize("*Italic*", &styles), format!("{ITALIC}Italic{RESET}"));
    assert_eq!(emphasize("**Bold**", &styles), format!("{BOLD}Bold{RESET}"));
}

#[test]
fn test_plain_help_document() {
    assert_eq!(
        plain(HELP, 2, 40),
        concat!(
            "  The **greet** command prints a\n",
            "  greeting to <name>, optionally\n",
            "  shouting it.\n",
            "  \n",
            "  Examples:\n",
            "  \n",
            "      greet world\n",
            "      greet --loud *everyone*\n",
            "  \n",
            "  Line one of an address line two\n",
            "  of an address",
        )
    );
}

#[test]
fn test_emph_help_document_keeps_raw_lines_literal() {
    let out = emph(HELP, 0, 200, &Styles::default());
    let first = format!("The {BOLD}greet{RESET} command prints a greeting to {UNDER}NAME{RESET},");
    assert!(out.starts_with(&first));
    assert!(out.contains("\n    greet --loud *everyone*\n"));
}

#[test]
fn test_streaming_matches_one_shot() {
    let mut parser = BlockParser::new(Flavor::Plain, 40);
    for line in HELP.lines() {
        parser.push_line(line);
    }
    assert_eq!(parser.strip_width(), Some(4));
    assert_eq!(parser.finish(2), plain(HELP, 2, 40));
}
