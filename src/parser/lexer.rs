//! Lexer for the markup dialect.
//!
//! Converts input text into a stream of tokens.

use crate::error::MarkupError;

/// Punctuation characters that split off into their own tokens.
///
/// The formatter prints these without a preceding space.
const PUNCTUATION: &[char] = &['.', ',', ';', ':', '(', ')', '?', '!', '=', '&', '~', '+'];

/// Returns true if `c` is one of the punctuation characters.
fn is_punctuation_char(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Returns true if `text` is exactly one punctuation character.
pub fn is_punctuation(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if is_punctuation_char(c)
    )
}

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// A markup tag. The name is stored in original case without the
    /// delimiters; `closing` records a leading `/`.
    Tag { name: &'a str, closing: bool },
    /// Content: a word or a single punctuation character.
    Text(&'a str),
}

/// Lexer for markup text.
///
/// Splits the input on whitespace runs, emits `<...>` delimiters as tag
/// tokens even when not surrounded by whitespace, and splits punctuation
/// characters off adjacent words into their own tokens.
///
/// # Examples
///
/// ```
/// use htmlprint::Lexer;
///
/// let tokens: Vec<_> = Lexer::new("<b>Hello</b>")
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(tokens.len(), 3);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance by one character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skip a run of whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Consume a word up to the next whitespace, delimiter, or punctuation.
    fn consume_word(&mut self) -> &'a str {
        let start = self.pos;

        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '<' || c == '>' || is_punctuation_char(c) {
                break;
            }
            self.advance();
        }

        &self.input[start..self.pos]
    }

    /// Consume a tag (including the delimiters).
    fn consume_tag(&mut self) -> Result<Token<'a>, MarkupError> {
        let tag_start = self.pos;
        self.advance(); // consume '<'

        let content_start = self.pos;
        loop {
            match self.peek() {
                Some('>') => break,
                Some('<') | None => return Err(MarkupError::UnterminatedTag(tag_start)),
                Some(_) => {
                    self.advance();
                }
            }
        }

        let content = self.input[content_start..self.pos].trim();
        self.advance(); // consume '>'

        let (name, closing) = match content.strip_prefix('/') {
            Some(rest) => (rest.trim_start(), true),
            None => (content, false),
        };

        if name.is_empty() {
            return Err(MarkupError::EmptyTag(tag_start));
        }

        Ok(Token::Tag { name, closing })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let c = self.peek()?;
        match c {
            '<' => Some(self.consume_tag()),
            '>' => {
                let pos = self.pos;
                self.advance();
                Some(Err(MarkupError::UnexpectedCloseDelimiter(pos)))
            }
            c if is_punctuation_char(c) => {
                let start = self.pos;
                self.advance();
                Some(Ok(Token::Text(&self.input[start..self.pos])))
            }
            _ => Some(Ok(Token::Text(self.consume_word()))),
        }
    }
}

/// Tokenize a whole document, stopping at the first malformed delimiter.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, MarkupError> {
    let tokens: Result<Vec<_>, _> = Lexer::new(input).collect();
    let tokens = tokens?;
    log::trace!("tokenized {} tokens", tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token<'_>> {
        tokenize(input).unwrap()
    }

    #[test]
    fn lex_plain_words() {
        let tokens = lex("Hello World");
        assert_eq!(tokens, vec![Token::Text("Hello"), Token::Text("World")]);
    }

    #[test]
    fn lex_collapses_whitespace_runs() {
        let tokens = lex("one \t two\n\nthree");
        assert_eq!(
            tokens,
            vec![Token::Text("one"), Token::Text("two"), Token::Text("three")]
        );
    }

    #[test]
    fn lex_open_tag() {
        let tokens = lex("<b>");
        assert_eq!(
            tokens,
            vec![Token::Tag {
                name: "b",
                closing: false
            }]
        );
    }

    #[test]
    fn lex_close_tag() {
        let tokens = lex("</h2>");
        assert_eq!(
            tokens,
            vec![Token::Tag {
                name: "h2",
                closing: true
            }]
        );
    }

    #[test]
    fn lex_tag_without_surrounding_whitespace() {
        let tokens = lex("word<b>loud</b>");
        assert_eq!(
            tokens,
            vec![
                Token::Text("word"),
                Token::Tag {
                    name: "b",
                    closing: false
                },
                Token::Text("loud"),
                Token::Tag {
                    name: "b",
                    closing: true
                },
            ]
        );
    }

    #[test]
    fn lex_preserves_tag_name_case() {
        let tokens = lex("<B>");
        assert_eq!(
            tokens,
            vec![Token::Tag {
                name: "B",
                closing: false
            }]
        );
    }

    #[test]
    fn lex_trims_tag_whitespace() {
        let tokens = lex("< b ></ b >");
        assert_eq!(
            tokens,
            vec![
                Token::Tag {
                    name: "b",
                    closing: false
                },
                Token::Tag {
                    name: "b",
                    closing: true
                },
            ]
        );
    }

    #[test]
    fn lex_trailing_punctuation() {
        let tokens = lex("word.");
        assert_eq!(tokens, vec![Token::Text("word"), Token::Text(".")]);
    }

    #[test]
    fn lex_leading_punctuation() {
        let tokens = lex("(word");
        assert_eq!(tokens, vec![Token::Text("("), Token::Text("word")]);
    }

    #[test]
    fn lex_interior_punctuation() {
        let tokens = lex("a,b");
        assert_eq!(
            tokens,
            vec![Token::Text("a"), Token::Text(","), Token::Text("b")]
        );
    }

    #[test]
    fn lex_standalone_punctuation() {
        let tokens = lex("~");
        assert_eq!(tokens, vec![Token::Text("~")]);
    }

    #[test]
    fn lex_empty_input() {
        assert!(lex("").is_empty());
        assert!(lex("   \n\t ").is_empty());
    }

    #[test]
    fn lex_unterminated_tag() {
        let result = tokenize("words <b");
        assert_eq!(result, Err(MarkupError::UnterminatedTag(6)));
    }

    #[test]
    fn lex_nested_open_delimiter() {
        let result = tokenize("<b<i>");
        assert_eq!(result, Err(MarkupError::UnterminatedTag(0)));
    }

    #[test]
    fn lex_stray_close_delimiter() {
        let result = tokenize("oops >");
        assert_eq!(result, Err(MarkupError::UnexpectedCloseDelimiter(5)));
    }

    #[test]
    fn lex_empty_tag() {
        assert_eq!(tokenize("<>"), Err(MarkupError::EmptyTag(0)));
        assert_eq!(tokenize("</>"), Err(MarkupError::EmptyTag(0)));
    }

    #[test]
    fn is_punctuation_single_chars_only() {
        assert!(is_punctuation("."));
        assert!(is_punctuation("+"));
        assert!(!is_punctuation(".."));
        assert!(!is_punctuation("a"));
        assert!(!is_punctuation(""));
    }
}
