//! The `Style` enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UnknownStyleError;

/// A text style realized through Unicode glyph variants.
///
/// Most styles shift ASCII letters into a dedicated Unicode block
/// (mathematical bold, circled letters, fullwidth forms, ...). The
/// underline and strikethrough styles instead append a combining mark
/// after each character, and the `*Underline` compounds do both.
///
/// The canonical string form of each style is its SCREAMING_SNAKE name
/// (`"BOLD"`, `"SANS_BOLD_ITALIC"`, ...), used by [`std::fmt::Display`],
/// [`FromStr`], and serde alike.
///
/// # Example
///
/// ```rust
/// use unistyle::Style;
///
/// let style: Style = "DOUBLE_STRUCK".parse().unwrap();
/// assert_eq!(style, Style::DoubleStruck);
/// assert_eq!(style.to_string(), "DOUBLE_STRUCK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Style {
    /// Mathematical bold letters (U+1D400..).
    Bold,
    /// Mathematical italic letters (U+1D434..).
    Italic,
    /// Mathematical bold italic letters (U+1D468..).
    BoldItalic,
    /// Combining low line (U+0332) after each character.
    Underline,
    /// Combining long stroke overlay (U+0336) after each character.
    Strikethrough,
    /// Circled letters (U+24B6..).
    Circled,
    /// Fullwidth forms (U+FF21..).
    Fullwidth,
    /// Mathematical fraktur letters (U+1D56C..).
    Fraktur,
    /// Mathematical script letters (U+1D49C..).
    Script,
    /// Mathematical double-struck letters (U+1D538..).
    DoubleStruck,
    /// Mathematical monospace letters (U+1D670..).
    Monospace,
    /// Mathematical sans-serif letters (U+1D5A0..).
    Sans,
    /// Mathematical sans-serif bold letters (U+1D5D4..).
    SansBold,
    /// Mathematical sans-serif italic letters (U+1D608..).
    SansItalic,
    /// Mathematical sans-serif bold italic letters (U+1D63C..).
    SansBoldItalic,
    /// Parenthesized letters; lowercase at U+249C.., uppercase at U+1F110..
    Parenthesized,
    /// Squared Latin capitals (U+1F130..); lowercase input is upper-cased.
    Squared,
    /// Negative squared Latin capitals (U+1F170..); lowercase input is
    /// upper-cased.
    SquaredNeg,
    /// Bold shift plus the underline mark.
    BoldUnderline,
    /// Italic shift plus the underline mark.
    ItalicUnderline,
    /// Bold italic shift plus the underline mark.
    BoldItalicUnderline,
}

impl Style {
    /// Every style, in declaration order.
    ///
    /// Declaration order is load-bearing: the process-wide spec table is
    /// indexed by it.
    pub const ALL: &'static [Style] = &[
        Style::Bold,
        Style::Italic,
        Style::BoldItalic,
        Style::Underline,
        Style::Strikethrough,
        Style::Circled,
        Style::Fullwidth,
        Style::Fraktur,
        Style::Script,
        Style::DoubleStruck,
        Style::Monospace,
        Style::Sans,
        Style::SansBold,
        Style::SansItalic,
        Style::SansBoldItalic,
        Style::Parenthesized,
        Style::Squared,
        Style::SquaredNeg,
        Style::BoldUnderline,
        Style::ItalicUnderline,
        Style::BoldItalicUnderline,
    ];

    /// Returns the canonical SCREAMING_SNAKE name of this style.
    pub fn name(self) -> &'static str {
        match self {
            Style::Bold => "BOLD",
            Style::Italic => "ITALIC",
            Style::BoldItalic => "BOLD_ITALIC",
            Style::Underline => "UNDERLINE",
            Style::Strikethrough => "STRIKETHROUGH",
            Style::Circled => "CIRCLED",
            Style::Fullwidth => "FULLWIDTH",
            Style::Fraktur => "FRAKTUR",
            Style::Script => "SCRIPT",
            Style::DoubleStruck => "DOUBLE_STRUCK",
            Style::Monospace => "MONOSPACE",
            Style::Sans => "SANS",
            Style::SansBold => "SANS_BOLD",
            Style::SansItalic => "SANS_ITALIC",
            Style::SansBoldItalic => "SANS_BOLD_ITALIC",
            Style::Parenthesized => "PARENTHESIZED",
            Style::Squared => "SQUARED",
            Style::SquaredNeg => "SQUARED_NEG",
            Style::BoldUnderline => "BOLD_UNDERLINE",
            Style::ItalicUnderline => "ITALIC_UNDERLINE",
            Style::BoldItalicUnderline => "BOLD_ITALIC_UNDERLINE",
        }
    }

    /// Whether this style appends a combining mark after each character.
    pub fn is_combining(self) -> bool {
        crate::table::spec_of(self).mark.is_some()
    }

    /// Whether this style shifts letter code points into a styled block.
    ///
    /// False only for the pure combining-mark styles (underline and
    /// strikethrough), which apply to any character.
    pub fn has_shift(self) -> bool {
        crate::table::spec_of(self).shift.is_some()
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = UnknownStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s)
            .ok_or_else(|| UnknownStyleError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parse_round_trip() {
        for &style in Style::ALL {
            let parsed: Style = style.name().parse().expect("canonical name parses");
            assert_eq!(parsed, style);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "bold".parse::<Style>().unwrap_err();
        assert_eq!(err.name, "bold");
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Style::SansBoldItalic.to_string(), "SANS_BOLD_ITALIC");
        assert_eq!(Style::SquaredNeg.to_string(), "SQUARED_NEG");
    }

    #[test]
    fn test_all_is_exhaustive() {
        // 18 base styles plus the three underline compounds.
        assert_eq!(Style::ALL.len(), 21);
    }

    #[test]
    fn test_combining_predicates() {
        assert!(Style::Underline.is_combining());
        assert!(Style::BoldUnderline.is_combining());
        assert!(!Style::Bold.is_combining());
        assert!(Style::Bold.has_shift());
        assert!(!Style::Strikethrough.has_shift());
    }
}
