//! Formatter for a small HTML dialect.
//!
//! This crate converts markup like `<b>Hello</b> world` into an ordered
//! sequence of abstract print directives (text, line breaks, paragraph
//! breaks, horizontal rules, quote marks) that an external renderer can
//! paint however it likes.
//!
//! # Overview
//!
//! The supported tag set is fixed:
//!
//! - `<html>`, `<body>` (and closers) - structural, never printed
//! - `<p>`, `</p>` - paragraph break
//! - `<hr>` - horizontal rule
//! - `<br>` - line break
//! - `<q>`, `</q>` - quote mark
//! - `<b>`, `<i>` - bold / italic text
//! - `<h1>`..`<h6>` - headings
//! - `<pre>` - preformatted text, exempt from line wrapping
//!
//! Tag matching is case-insensitive. Only one style is active at a time:
//! opening a style tag replaces the previous style and closing any style
//! tag resets to plain text.
//!
//! Content flows against a line-width budget so that every style wraps at
//! its own nominal width (plain text at 80 columns, `<h1>` at 40, and so
//! on), and a word followed by punctuation is printed without a trailing
//! space.
//!
//! # Usage
//!
//! ```
//! use htmlprint::{FormattedDocument, Modifier, PrintDirective};
//!
//! let doc = FormattedDocument::format("<b>Hello</b> world").unwrap();
//! assert_eq!(doc.directives().len(), 2);
//! assert_eq!(
//!     doc.directives()[0],
//!     PrintDirective::Text("Hello ".into(), Modifier::Bold),
//! );
//! ```

pub mod directive;
pub mod document;
pub mod error;
pub mod modifier;
pub mod parser;
pub mod testing;

// Re-export main types at crate root
pub use directive::{PrintDirective, Renderer, render_to};
pub use document::FormattedDocument;
pub use error::MarkupError;
pub use modifier::{LINE_BUDGET, Modifier};
pub use parser::{Formatter, Lexer, Token, tokenize};
