//! Print directives and the renderer seam.
//!
//! A `PrintDirective` is the formatter's output unit. Directives are emitted
//! in document order and consumed immediately by a [`Renderer`]; the
//! formatter never retains them beyond the vector it hands back.

use crate::modifier::Modifier;

/// An abstract instruction for the external renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintDirective {
    /// Print a run of text with the given style.
    ///
    /// The string already carries its trailing space where one is wanted;
    /// punctuation-adjacent and preformatted text carry none.
    Text(String, Modifier),
    /// Start a new line.
    LineBreak,
    /// End the current paragraph and leave a blank line.
    ParagraphBreak,
    /// Draw a horizontal rule on its own line.
    HorizontalRule,
    /// Print a literal `"` mark.
    Quote,
}

impl PrintDirective {
    /// Returns true for text-carrying directives.
    pub fn is_text(&self) -> bool {
        matches!(self, PrintDirective::Text(_, _))
    }
}

/// The rendering collaborator that actually paints output.
///
/// Implementations receive exactly one call per directive, in emission
/// order. The crate ships a string-accumulating implementation in
/// [`crate::testing::TextRenderer`] for tests.
pub trait Renderer {
    /// Print plain text without a line feed.
    fn print(&mut self, text: &str);
    /// Print styled text without a line feed.
    fn print_styled(&mut self, text: &str, modifier: Modifier);
    /// Print a line feed.
    fn newline(&mut self);
    /// End the paragraph and leave a blank line.
    fn paragraph_break(&mut self);
    /// Draw a horizontal rule across the output.
    fn horizontal_rule(&mut self);
}

/// Dispatch a directive sequence to a renderer, one call per directive.
///
/// # Examples
///
/// ```
/// use htmlprint::testing::TextRenderer;
/// use htmlprint::{FormattedDocument, render_to};
///
/// let doc = FormattedDocument::format("one, two").unwrap();
/// let mut renderer = TextRenderer::new();
/// render_to(doc.directives(), &mut renderer);
/// assert_eq!(renderer.output(), "one, two ");
/// ```
pub fn render_to<R: Renderer>(directives: &[PrintDirective], renderer: &mut R) {
    for directive in directives {
        match directive {
            PrintDirective::Text(text, Modifier::None) => renderer.print(text),
            PrintDirective::Text(text, modifier) => renderer.print_styled(text, *modifier),
            PrintDirective::LineBreak => renderer.newline(),
            PrintDirective::ParagraphBreak => renderer.paragraph_break(),
            PrintDirective::HorizontalRule => renderer.horizontal_rule(),
            PrintDirective::Quote => renderer.print("\""),
        }
    }
}
