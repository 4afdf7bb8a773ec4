/// Terminal escape sequences used to render emphasis.
///
/// A `Styles` value is built once at startup (usually via [`Styles::from_env`])
/// and passed by reference to the emphasizing formatters. It is never mutated
/// afterwards, so sharing it between threads needs no locking.
use std::fmt::Write;

use serde::Serialize;

/// ANSI italic.
pub const ITALIC: &str = "\x1b[3m";
/// ANSI bold.
pub const BOLD: &str = "\x1b[1m";
/// ANSI bold followed by italic.
pub const BOLD_ITALIC: &str = "\x1b[1m\x1b[3m";
/// ANSI underline.
pub const UNDER: &str = "\x1b[4m";
/// ANSI reset of all attributes.
pub const RESET: &str = "\x1b[0m";

/// Escape sequences for each emphasis style plus the shared reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Styles {
    /// Begins `*italic*` spans.
    pub italic: String,
    /// Begins `**bold**` spans.
    pub bold: String,
    /// Begins `***bold italic***` spans.
    pub bold_italic: String,
    /// Begins `<identifier>` spans.
    pub under: String,
    /// Ends any span.
    pub reset: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            italic: ITALIC.to_owned(),
            bold: BOLD.to_owned(),
            bold_italic: BOLD_ITALIC.to_owned(),
            under: UNDER.to_owned(),
            reset: RESET.to_owned(),
        }
    }
}

/// One configurable style: its field name and the variables consulted, in order.
#[derive(Debug, Clone, Copy)]
pub struct StyleVar {
    /// Field name (`italic`, `bold`, ...).
    pub name: &'static str,
    /// Environment variables checked for an override, first match wins.
    pub vars: &'static [&'static str],
}

/// Lookup table for environment overrides.
///
/// `LESS_TERMCAP_*` are the conventional termcap overrides used by pagers;
/// the `HELPMARK_*` variables take precedence over them.
pub const STYLE_VARS: [StyleVar; 5] = [
    StyleVar {
        name: "italic",
        vars: &["HELPMARK_ITALIC"],
    },
    StyleVar {
        name: "bold",
        vars: &["HELPMARK_BOLD", "LESS_TERMCAP_md"],
    },
    StyleVar {
        name: "bold_italic",
        vars: &["HELPMARK_BOLD_ITALIC"],
    },
    StyleVar {
        name: "under",
        vars: &["HELPMARK_UNDER", "LESS_TERMCAP_us"],
    },
    StyleVar {
        name: "reset",
        vars: &["HELPMARK_RESET", "LESS_TERMCAP_me"],
    },
];

impl Styles {
    /// Styles with every sequence empty: emphasis markup is removed, nothing is added.
    #[must_use]
    pub fn none() -> Self {
        Self {
            italic: String::new(),
            bold: String::new(),
            bold_italic: String::new(),
            under: String::new(),
            reset: String::new(),
        }
    }

    /// Build styles from the process environment, falling back to ANSI defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build styles from an arbitrary key lookup, falling back to ANSI defaults.
    ///
    /// Empty values are ignored. Values may spell ESC as `\e`, `\033` or `\x1b`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut styles = Self::default();
        for var in &STYLE_VARS {
            let found = var
                .vars
                .iter()
                .copied()
                .filter_map(&lookup)
                .find(|v| !v.is_empty());
            if let Some(value) = found {
                tracing::debug!(style = var.name, "escape sequence overridden from environment");
                *styles.field_mut(var.name) = unescape(&value);
            }
        }
        styles
    }

    /// The sequence configured for a style name, if the name is known.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "italic" => Some(&self.italic),
            "bold" => Some(&self.bold),
            "bold_italic" => Some(&self.bold_italic),
            "under" => Some(&self.under),
            "reset" => Some(&self.reset),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> &mut String {
        match name {
            "italic" => &mut self.italic,
            "bold" => &mut self.bold,
            "bold_italic" => &mut self.bold_italic,
            "under" => &mut self.under,
            _ => &mut self.reset,
        }
    }
}

/// Replace the textual spellings of ESC with the real control character.
fn unescape(value: &str) -> String {
    value
        .replace("\\x1b", "\x1b")
        .replace("\\033", "\x1b")
        .replace("\\e", "\x1b")
}

/// Render control characters visibly, e.g. `\x1b[1m` as `\e[1m`.
#[must_use]
pub fn visible(seq: &str) -> String {
    let mut out = String::with_capacity(seq.len() + 4);
    for c in seq.chars() {
        match c {
            '\x1b' => out.push_str("\\e"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out
}
