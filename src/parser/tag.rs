//! Tag classification for the markup dialect.
//!
//! Maps tag names onto their effect in the formatter. The tables here are
//! pure; probing a token never touches formatter state.

use crate::modifier::Modifier;

use super::lexer::Token;

/// The effect of a recognized tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    /// `<html>`/`<body>` and closers. Skipped entirely.
    Structural,
    /// Opening style or heading tag. Sets the active modifier.
    Style(Modifier),
    /// Closing style or heading tag. Resets the modifier to plain.
    StyleClose,
    /// `<p>`/`</p>`. Emits a paragraph break.
    Paragraph,
    /// `<hr>`. Emits a horizontal rule.
    Rule,
    /// `<br>`. Emits a line break.
    Break,
    /// `<q>`/`</q>`. Emits a quote mark.
    Quote,
}

impl TagKind {
    /// Classify a tag by name, case-insensitively.
    ///
    /// Returns `None` for names outside the supported set (including
    /// closing forms of the self-contained `<hr>`/`<br>`); the formatter
    /// prints those literally as content.
    pub fn classify(name: &str, closing: bool) -> Option<TagKind> {
        let name = name.to_ascii_lowercase();
        match (name.as_str(), closing) {
            ("html" | "body", _) => Some(TagKind::Structural),
            ("p", _) => Some(TagKind::Paragraph),
            ("hr", false) => Some(TagKind::Rule),
            ("br", false) => Some(TagKind::Break),
            ("q", _) => Some(TagKind::Quote),
            (_, false) => Modifier::from_tag(&name).map(TagKind::Style),
            (_, true) => Modifier::from_tag(&name).map(|_| TagKind::StyleClose),
        }
    }

    /// Classify a token, returning `None` for content tokens.
    pub fn classify_token(token: &Token<'_>) -> Option<TagKind> {
        match token {
            Token::Tag { name, closing } => Self::classify(name, *closing),
            Token::Text(_) => None,
        }
    }

    /// Returns true for style transitions (open or close).
    pub fn is_style(&self) -> bool {
        matches!(self, TagKind::Style(_) | TagKind::StyleClose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_structural() {
        assert_eq!(TagKind::classify("html", false), Some(TagKind::Structural));
        assert_eq!(TagKind::classify("html", true), Some(TagKind::Structural));
        assert_eq!(TagKind::classify("body", false), Some(TagKind::Structural));
        assert_eq!(TagKind::classify("body", true), Some(TagKind::Structural));
    }

    #[test]
    fn classify_directive_tags() {
        assert_eq!(TagKind::classify("p", false), Some(TagKind::Paragraph));
        assert_eq!(TagKind::classify("p", true), Some(TagKind::Paragraph));
        assert_eq!(TagKind::classify("hr", false), Some(TagKind::Rule));
        assert_eq!(TagKind::classify("br", false), Some(TagKind::Break));
        assert_eq!(TagKind::classify("q", false), Some(TagKind::Quote));
        assert_eq!(TagKind::classify("q", true), Some(TagKind::Quote));
    }

    #[test]
    fn classify_styles() {
        assert_eq!(
            TagKind::classify("b", false),
            Some(TagKind::Style(Modifier::Bold))
        );
        assert_eq!(
            TagKind::classify("h3", false),
            Some(TagKind::Style(Modifier::H3))
        );
        assert_eq!(TagKind::classify("i", true), Some(TagKind::StyleClose));
        assert_eq!(TagKind::classify("h6", true), Some(TagKind::StyleClose));
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(TagKind::classify("HTML", false), Some(TagKind::Structural));
        assert_eq!(TagKind::classify("Br", false), Some(TagKind::Break));
        assert_eq!(
            TagKind::classify("PRE", false),
            Some(TagKind::Style(Modifier::Preformatted))
        );
    }

    #[test]
    fn classify_unknown() {
        assert_eq!(TagKind::classify("table", false), None);
        assert_eq!(TagKind::classify("h7", false), None);
        // hr and br are self-contained; closing forms are not in the table
        assert_eq!(TagKind::classify("hr", true), None);
        assert_eq!(TagKind::classify("br", true), None);
    }

    #[test]
    fn classify_token_content() {
        assert_eq!(TagKind::classify_token(&Token::Text("word")), None);
        assert_eq!(
            TagKind::classify_token(&Token::Tag {
                name: "q",
                closing: false
            }),
            Some(TagKind::Quote)
        );
    }
}
