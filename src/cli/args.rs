/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Default terminal width when `$COLUMNS` is unset.
pub const DEFAULT_COLUMNS: isize = 80;

/// helpmark: format help markup for fixed-width terminals.
#[derive(Debug, Parser)]
#[command(
    name = "helpmark",
    about = "Format help markup for fixed-width terminals",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. `auto` picks text on a TTY and json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Log debug events and timings to stderr (overridden by `HELPMARK_LOG`).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: text when stdout is a TTY, json when piped.
    Auto,
    /// The formatted text itself.
    #[default]
    Text,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format a markup document (emphasized, or literal with --plain).
    Render(RenderArgs),
    /// Format a markup document as a page with a title header.
    Page(PageArgs),
    /// Resolve inline emphasis in a single piece of text.
    Emphasize(EmphasizeArgs),
    /// Word-wrap text to a width.
    Wrap(WrapArgs),
    /// Indent every line of text.
    Indent(IndentArgs),
    /// Lay out a three-column title line.
    Title(TitleArgs),
    /// Show the active emphasis escape sequences.
    Styles,
}

/// Layout options shared by `render` and `page`.
#[derive(Debug, Clone, clap::Args)]
pub struct LayoutArgs {
    /// Spaces to indent every output line by (negative values count as 0).
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub indent: isize,

    /// Wrap width in columns. 0 disables wrapping; negative joins each block onto one line.
    #[arg(
        long,
        value_name = "N",
        env = "COLUMNS",
        default_value_t = DEFAULT_COLUMNS,
        allow_negative_numbers = true
    )]
    pub width: isize,

    /// Keep emphasis markup literally instead of rendering escape sequences.
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for `helpmark render`.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Markup file to read; standard input when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Arguments for `helpmark page`.
#[derive(Debug, Parser)]
pub struct PageArgs {
    /// Markup file to read; standard input when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Page name, shown at both ends of the header.
    #[arg(long)]
    pub name: String,

    /// Section title, centered in the header.
    #[arg(long, default_value = "")]
    pub section: String,

    /// Text centered on a footer line.
    #[arg(long)]
    pub footer: Option<String>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Arguments for `helpmark emphasize`.
#[derive(Debug, Parser)]
pub struct EmphasizeArgs {
    /// Text to emphasize; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// Arguments for `helpmark wrap`.
#[derive(Debug, Parser)]
pub struct WrapArgs {
    /// File to read; standard input when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Wrap width in columns. 0 disables wrapping; negative joins all lines.
    #[arg(
        long,
        value_name = "N",
        env = "COLUMNS",
        default_value_t = DEFAULT_COLUMNS,
        allow_negative_numbers = true
    )]
    pub width: isize,
}

/// Arguments for `helpmark indent`.
#[derive(Debug, Parser)]
pub struct IndentArgs {
    /// File to read; standard input when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Spaces to prefix each line with (negative values count as 0).
    #[arg(long, value_name = "N", default_value_t = 4, allow_negative_numbers = true)]
    pub spaces: isize,
}

/// Arguments for `helpmark title`.
#[derive(Debug, Parser)]
pub struct TitleArgs {
    /// Text flush left.
    pub left: String,
    /// Text centered.
    pub center: String,
    /// Text flush right.
    pub right: String,

    /// Line width in columns.
    #[arg(long, value_name = "N", env = "COLUMNS", default_value_t = 80)]
    pub cols: usize,
}

/// Clamp a possibly negative count to zero.
#[must_use]
pub fn non_negative(n: isize) -> usize {
    usize::try_from(n).unwrap_or(0)
}
