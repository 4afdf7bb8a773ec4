/// Output formatting: text, JSON and table modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::OutputFormat;
use super::errors::CliError;
use crate::types::{ErrorOutput, StyleOutput};
use helpmark::Styles;

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Text
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all commands.
pub struct OutputCtx {
    pub format: OutputFormat,
    /// Escape sequences for emphasized output, read once at startup.
    pub styles: Styles,
}

impl OutputCtx {
    /// Construct from CLI args and the startup style configuration.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, styles: Styles) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            styles,
        }
    }

    /// Start a named timer that logs its elapsed time at debug level on drop.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label)
    }
}

// --- Formatted values ---

/// Write `value` as JSON, or `text` verbatim in text mode.
///
/// # Errors
///
/// Returns `CliError` when serialization or writing stdout fails.
pub fn write_value<T: Serialize + ?Sized>(
    value: &T,
    text: &str,
    ctx: &OutputCtx,
) -> Result<(), CliError> {
    let rendered = match ctx.format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Compact => serde_json::to_string(value)?,
        OutputFormat::Text | OutputFormat::Auto => text.to_owned(),
    };
    print_line(&rendered)
}

// --- Styles ---

/// Write the style listing as a table or JSON.
///
/// # Errors
///
/// Returns `CliError` when serialization or writing stdout fails.
pub fn write_styles(styles: &[StyleOutput], ctx: &OutputCtx) -> Result<(), CliError> {
    match ctx.format {
        OutputFormat::Json => print_line(&serde_json::to_string_pretty(styles)?),
        OutputFormat::Compact => print_line(&serde_json::to_string(styles)?),
        OutputFormat::Text | OutputFormat::Auto => print_line(&styles_table(styles).to_string()),
    }
}

fn styles_table(styles: &[StyleOutput]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["STYLE", "VARIABLES", "SEQUENCE"]);
    for style in styles {
        table.add_row([
            style.name.as_str(),
            &style.variables.join(", "),
            &style.value,
        ]);
    }
    table
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Text | OutputFormat::Auto => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Silent unless debug logging is enabled.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(label = self.label, elapsed_ms = ms, "timing");
    }
}

fn print_line(s: &str) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{s}").map_err(CliError::Write)
}
