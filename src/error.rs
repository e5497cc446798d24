//! Error types for markup processing.

use thiserror::Error;

/// Errors that can occur when tokenizing markup.
///
/// Malformed tag delimiters are surfaced to the caller rather than being
/// silently absorbed into the token stream. Unknown tag *names* are not an
/// error; the formatter prints them literally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupError {
    /// Unterminated tag (missing `>`).
    #[error("unterminated tag starting at byte {0}")]
    UnterminatedTag(usize),

    /// Stray `>` outside of a tag.
    #[error("unexpected `>` at byte {0}")]
    UnexpectedCloseDelimiter(usize),

    /// Empty tag content (`<>` or `</>`).
    #[error("empty tag at byte {0}")]
    EmptyTag(usize),
}
