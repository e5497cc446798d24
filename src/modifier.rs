//! Text style modifiers.
//!
//! A `Modifier` is the single active text style applied to printed content.
//! Exactly one modifier is active at a time; there is no nesting.

/// Shared line budget in weight units.
///
/// Every style wraps at its own nominal column width, but the formatter
/// tracks consumption in normalized units so a single integer ceiling works
/// for all of them: a character costs `LINE_BUDGET / nominal_width` units.
pub const LINE_BUDGET: u32 = 2400;

/// The active text style for printed content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modifier {
    /// Plain text.
    #[default]
    None,
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Preformatted text, exempt from line wrapping.
    Preformatted,
    /// Heading level 1 (largest).
    H1,
    /// Heading level 2.
    H2,
    /// Heading level 3.
    H3,
    /// Heading level 4.
    H4,
    /// Heading level 5.
    H5,
    /// Heading level 6 (smallest).
    H6,
}

impl Modifier {
    /// Look up the modifier for a style tag name.
    ///
    /// Tag names are matched case-insensitively. Returns `None` for names
    /// that are not style or heading tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use htmlprint::Modifier;
    ///
    /// assert_eq!(Modifier::from_tag("b"), Some(Modifier::Bold));
    /// assert_eq!(Modifier::from_tag("H3"), Some(Modifier::H3));
    /// assert_eq!(Modifier::from_tag("table"), None);
    /// ```
    pub fn from_tag(name: &str) -> Option<Modifier> {
        let name = name.to_ascii_lowercase();
        let modifier = match name.as_str() {
            "b" => Modifier::Bold,
            "i" => Modifier::Italic,
            "pre" => Modifier::Preformatted,
            "h1" => Modifier::H1,
            "h2" => Modifier::H2,
            "h3" => Modifier::H3,
            "h4" => Modifier::H4,
            "h5" => Modifier::H5,
            "h6" => Modifier::H6,
            _ => return None,
        };
        Some(modifier)
    }

    /// Nominal maximum line width in characters, or `None` for styles that
    /// are exempt from wrapping.
    pub fn nominal_width(&self) -> Option<u32> {
        match self {
            Modifier::Preformatted => None,
            Modifier::H1 => Some(40),
            Modifier::H2 => Some(50),
            Modifier::H3 => Some(60),
            Modifier::H5 => Some(100),
            Modifier::H6 => Some(120),
            Modifier::None | Modifier::Bold | Modifier::Italic | Modifier::H4 => Some(80),
        }
    }

    /// Per-character cost against [`LINE_BUDGET`].
    ///
    /// Zero for styles exempt from wrapping.
    pub fn weight(&self) -> u32 {
        match self.nominal_width() {
            Some(width) => LINE_BUDGET / width,
            None => 0,
        }
    }

    /// Returns true for the `H1`..`H6` heading levels.
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            Modifier::H1
                | Modifier::H2
                | Modifier::H3
                | Modifier::H4
                | Modifier::H5
                | Modifier::H6
        )
    }
}
