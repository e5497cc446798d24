//! Tokenizer and formatter for the markup dialect.
//!
//! This module contains the lexer, the tag classification table, and the
//! formatting state machine.

mod formatter;
mod lexer;
mod tag;

pub use formatter::{Formatter, FormatterState, punctuation_follows};
pub use lexer::{Lexer, Token, is_punctuation, tokenize};
pub use tag::TagKind;
