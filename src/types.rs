/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout: either as JSON or, in text
/// mode, as the formatted text they carry.
use serde::{Deserialize, Serialize};

use crate::cli::CliError;

/// Which formatter produced a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Emphasis resolved into escape sequences.
    Emph,
    /// Emphasis markup kept literally.
    Plain,
}

/// A formatted markup document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Formatter used.
    pub mode: RenderMode,
    /// Spaces each line was indented by.
    pub indent: usize,
    /// Requested wrap width (0 = no wrap, negative = one line per block).
    pub width: isize,
    /// The formatted text.
    pub text: String,
}

/// A formatted documentation page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageOutput {
    /// Title line (name, section, name).
    pub header: String,
    /// Formatted body.
    pub body: String,
    /// Optional centered footer line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl PageOutput {
    /// The page as printed: header, blank line, body, then the footer if any.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n\n{}", self.header, self.body);
        if let Some(footer) = &self.footer {
            text.push_str("\n\n");
            text.push_str(footer);
        }
        text
    }
}

/// Result of a single-text utility (`emphasize`, `wrap`, `indent`, `title`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextOutput {
    /// The transformed text.
    pub text: String,
}

/// One configured emphasis style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleOutput {
    /// Style name (`italic`, `bold`, `bold_italic`, `under`, `reset`).
    pub name: String,
    /// Environment variables that override it, in precedence order.
    pub variables: Vec<String>,
    /// The sequence with control characters made visible (ESC as `\e`).
    pub value: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `CliError`.
    #[must_use]
    pub fn from_cli_error(err: &CliError) -> Self {
        let code = match err {
            CliError::Read { .. } => "read_failed",
            CliError::Stdin(_) => "stdin_failed",
            CliError::Write(_) => "write_failed",
            CliError::Json(_) => "json_failed",
            CliError::Logging(_) => "logging_failed",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}
