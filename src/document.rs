//! End-to-end document formatting.
//!
//! This is the result of running the lexer and formatter over a document.

use crate::directive::{PrintDirective, Renderer, render_to};
use crate::error::MarkupError;
use crate::parser::{Formatter, tokenize};

/// The formatted form of a markup document.
///
/// Holds the directive sequence in emission order. Formatting is one-shot:
/// a malformed document aborts with an error and produces no directives.
///
/// # Examples
///
/// ```
/// use htmlprint::{FormattedDocument, Modifier, PrintDirective};
///
/// let doc = FormattedDocument::format("<b>bold</b> plain").unwrap();
/// assert_eq!(
///     doc.directives(),
///     &[
///         PrintDirective::Text("bold ".into(), Modifier::Bold),
///         PrintDirective::Text("plain ".into(), Modifier::None),
///     ],
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedDocument {
    directives: Vec<PrintDirective>,
}

impl FormattedDocument {
    /// Create a document from an already-built directive sequence.
    pub fn new(directives: Vec<PrintDirective>) -> Self {
        Self { directives }
    }

    /// Tokenize and format a markup document.
    pub fn format(input: &str) -> Result<Self, MarkupError> {
        let tokens = tokenize(input)?;
        let directives = Formatter::new().format(&tokens);
        Ok(Self { directives })
    }

    /// The directive sequence, in emission order.
    pub fn directives(&self) -> &[PrintDirective] {
        &self.directives
    }

    /// Number of directives.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Returns true if formatting produced no directives.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Dispatch every directive to a renderer, in order.
    pub fn render_to<R: Renderer>(&self, renderer: &mut R) {
        render_to(&self.directives, renderer);
    }
}

impl IntoIterator for FormattedDocument {
    type Item = PrintDirective;
    type IntoIter = std::vec::IntoIter<PrintDirective>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.into_iter()
    }
}
