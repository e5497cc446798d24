//! Formatting state machine.
//!
//! Walks the token sequence while tracking the active modifier and the
//! consumed line budget, emitting print directives in token order.

use crate::directive::PrintDirective;
use crate::modifier::{LINE_BUDGET, Modifier};

use super::lexer::{Token, is_punctuation};
use super::tag::TagKind;

/// State owned by a single formatting pass.
///
/// Initialized to plain text with an empty budget; discarded when the
/// document ends. Never reuse one across documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatterState {
    /// The active text style.
    pub modifier: Modifier,
    /// Weight units consumed since the last forced line break.
    pub line_budget: u32,
}

impl FormatterState {
    /// The initial state for a document.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The formatting state machine.
///
/// Consumes a token sequence and produces the directive sequence in the
/// same order.
///
/// # Examples
///
/// ```
/// use htmlprint::{Formatter, Modifier, PrintDirective, tokenize};
///
/// let tokens = tokenize("<h1>Title</h1>").unwrap();
/// let directives = Formatter::new().format(&tokens);
/// assert_eq!(
///     directives,
///     vec![PrintDirective::Text("Title ".into(), Modifier::H1)],
/// );
/// ```
#[derive(Debug, Default)]
pub struct Formatter {
    state: FormatterState,
    directives: Vec<PrintDirective>,
}

impl Formatter {
    /// Create a formatter in the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter resuming from the given state.
    pub fn with_state(state: FormatterState) -> Self {
        Self {
            state,
            directives: Vec::new(),
        }
    }

    /// Format a token sequence into print directives.
    pub fn format(mut self, tokens: &[Token<'_>]) -> Vec<PrintDirective> {
        for index in 0..tokens.len() {
            self.process(&tokens[index], &tokens[index + 1..]);
        }
        self.directives
    }

    /// Process one token. `rest` is the unconsumed remainder, used only for
    /// the punctuation lookahead.
    fn process(&mut self, token: &Token<'_>, rest: &[Token<'_>]) {
        match token {
            Token::Tag { name, closing } => match TagKind::classify(name, *closing) {
                Some(TagKind::Structural) => {}
                Some(TagKind::Paragraph) => self.emit_break(PrintDirective::ParagraphBreak),
                Some(TagKind::Rule) => self.emit_break(PrintDirective::HorizontalRule),
                Some(TagKind::Break) => self.emit_break(PrintDirective::LineBreak),
                Some(TagKind::Quote) => {
                    // The quote mark occupies one character on the line.
                    self.directives.push(PrintDirective::Quote);
                    self.state.line_budget += self.state.modifier.weight();
                }
                Some(TagKind::Style(modifier)) => self.set_modifier(modifier),
                Some(TagKind::StyleClose) => self.set_modifier(Modifier::None),
                None => {
                    // Unsupported tag: print it literally as content.
                    let literal = if *closing {
                        format!("</{name}>")
                    } else {
                        format!("<{name}>")
                    };
                    self.print(&literal, rest);
                }
            },
            Token::Text(word) => self.print(word, rest),
        }
    }

    fn set_modifier(&mut self, modifier: Modifier) {
        log::trace!("modifier {:?} -> {:?}", self.state.modifier, modifier);
        self.state.modifier = modifier;
    }

    /// Emit a break-class directive and reset the line budget.
    fn emit_break(&mut self, directive: PrintDirective) {
        self.directives.push(directive);
        self.state.line_budget = 0;
    }

    /// Print a content token, wrapping first if it would overrun the line.
    fn print(&mut self, word: &str, rest: &[Token<'_>]) {
        if self.state.modifier == Modifier::Preformatted {
            // Preformatted text is exempt from wrapping and gets a forced
            // line break instead of a trailing space.
            self.directives
                .push(PrintDirective::Text(word.to_string(), Modifier::Preformatted));
            self.emit_break(PrintDirective::LineBreak);
            return;
        }

        let added = self.state.modifier.weight() * word.chars().count() as u32;
        if self.state.line_budget + added > LINE_BUDGET {
            self.emit_break(PrintDirective::LineBreak);
        }

        let text = if punctuation_follows(rest) {
            word.to_string()
        } else {
            format!("{word} ")
        };
        self.directives
            .push(PrintDirective::Text(text, self.state.modifier));
        self.state.line_budget += added;
    }
}

/// Lookahead: does the next content token call for suppressing the space?
///
/// Skips over style tags and returns true when the first content token in
/// `rest` is a single punctuation character. Any other token ends the probe.
/// Pure with respect to formatter state.
pub fn punctuation_follows(rest: &[Token<'_>]) -> bool {
    for token in rest {
        match token {
            Token::Text(text) => return is_punctuation(text),
            Token::Tag { .. } => match TagKind::classify_token(token) {
                Some(kind) if kind.is_style() => continue,
                _ => return false,
            },
        }
    }
    false
}
