//! Test utilities for exercising the directive stream.
//!
//! [`TextRenderer`] is a string-accumulating [`Renderer`] so tests can
//! assert on flowed text instead of raw directives.
//!
//! # Examples
//!
//! ```
//! use htmlprint::FormattedDocument;
//! use htmlprint::testing::TextRenderer;
//!
//! let doc = FormattedDocument::format("plain <b>bold</b>").unwrap();
//! let mut renderer = TextRenderer::new();
//! doc.render_to(&mut renderer);
//! assert_eq!(renderer.output(), "plain bold ");
//! ```

use crate::directive::Renderer;
use crate::modifier::Modifier;

/// A renderer that accumulates everything into a plain string.
///
/// Styled text is flowed into the output like plain text; the styled calls
/// are recorded separately so tests can assert on them.
#[derive(Debug, Default)]
pub struct TextRenderer {
    output: String,
    styled: Vec<(String, Modifier)>,
    calls: usize,
}

impl TextRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated output.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The accumulated output with trailing whitespace removed per line.
    pub fn to_text_trimmed(&self) -> String {
        self.output
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every `print_styled` call received, in order.
    pub fn styled_calls(&self) -> &[(String, Modifier)] {
        &self.styled
    }

    /// Total number of renderer calls received.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Renderer for TextRenderer {
    fn print(&mut self, text: &str) {
        self.calls += 1;
        self.output.push_str(text);
    }

    fn print_styled(&mut self, text: &str, modifier: Modifier) {
        self.calls += 1;
        self.output.push_str(text);
        self.styled.push((text.to_string(), modifier));
    }

    fn newline(&mut self) {
        self.calls += 1;
        self.output.push('\n');
    }

    fn paragraph_break(&mut self) {
        self.calls += 1;
        self.output.push_str("\n\n");
    }

    fn horizontal_rule(&mut self) {
        self.calls += 1;
        self.output.push('\n');
        self.output.push_str(&"-".repeat(40));
        self.output.push('\n');
    }
}
