#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! helpmark: format help markup for fixed-width terminals.
//!
//! The markup is a small Markdown-like dialect: paragraphs are reflowed,
//! lines indented four spaces past the document's base indentation are kept
//! verbatim, two trailing spaces force a line break, and `*italic*`,
//! `**bold**`, `***bold italic***` and `<identifier>` are rendered with
//! terminal escape sequences (or left as-is by [`plain`]).
//!
//! ```
//! use helpmark::{Styles, emph, plain};
//!
//! let doc = "
//!     The **list** command prints
//!     every <item>.
//! ";
//! assert_eq!(plain(doc, 2, 80), "  The **list** command prints every <item>.");
//! let styled = emph(doc, 0, 80, &Styles::none());
//! assert_eq!(styled, "The list command prints every ITEM.");
//! ```

pub mod markup;

pub use markup::{BlockParser, Flavor, Styles, emph, emphasize, indent, plain, top_title, wrap};
