//! Styled Unicode back to plain text.

use crate::style::Style;
use crate::table::{spec_of, STRIKETHROUGH_MARK, UNDERLINE_MARK};

/// Reversal order for style-less decoding.
///
/// First match wins, so this order is part of the contract; it only stays
/// harmless while the classifier ranges remain pairwise disjoint (asserted
/// in the table tests). Combining marks are orthogonal to shifts, so a
/// multiply-styled character is fully restored across consecutive scalars.
const CASCADE: &[Style] = &[
    Style::Bold,
    Style::Italic,
    Style::Underline,
    Style::BoldItalic,
    Style::Strikethrough,
    Style::Circled,
    Style::Fullwidth,
    Style::Fraktur,
    Style::Script,
    Style::DoubleStruck,
    Style::Monospace,
    Style::Sans,
    Style::SansBold,
    Style::SansBoldItalic,
    Style::SansItalic,
    Style::Parenthesized,
    Style::Squared,
    Style::SquaredNeg,
];

/// Converts styled Unicode text back into plain text.
///
/// With a style, exactly that style is reversed: scalars inside its
/// shifted blocks are un-shifted, its combining mark is dropped, and
/// everything else passes through. This makes decoding selective —
/// stripping [`Style::Underline`] from bold-underlined text leaves the
/// bold shift intact.
///
/// With `None`, every known style is reversed in a fixed priority order,
/// restoring plain ASCII from arbitrarily styled input.
///
/// # Example
///
/// ```rust
/// use unistyle::{decode, encode, Style};
///
/// let styled = encode("Hello", Style::Script);
/// assert_eq!(decode(&styled, Style::Script), "Hello");
/// assert_eq!(decode(&styled, None), "Hello");
///
/// // Selective: only the underline mark is removed.
/// let both = encode("Hi", Style::BoldUnderline);
/// assert_eq!(decode(&both, Style::Underline), encode("Hi", Style::Bold));
/// ```
pub fn decode(text: &str, style: impl Into<Option<Style>>) -> String {
    let mut out = String::with_capacity(text.len());
    match style.into() {
        Some(style) => {
            let spec = spec_of(style);
            for c in text.chars() {
                if spec.mark == Some(c) {
                    continue;
                }
                match spec.shift.and_then(|shift| shift.unapply(c)) {
                    Some(plain) => out.push(plain),
                    None => out.push(c),
                }
            }
        }
        None => {
            for c in text.chars() {
                if c == UNDERLINE_MARK || c == STRIKETHROUGH_MARK {
                    continue;
                }
                out.push(unshift_any(c));
            }
        }
    }
    out
}

/// Reverses the first cascade entry whose shifted block contains `c`.
fn unshift_any(c: char) -> char {
    for &style in CASCADE {
        if let Some(shift) = spec_of(style).shift {
            if let Some(plain) = shift.unapply(c) {
                return plain;
            }
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;

    #[test]
    fn test_decode_with_style_round_trip() {
        let styled = encode("Rust", Style::Monospace);
        assert_eq!(decode(&styled, Style::Monospace), "Rust");
    }

    #[test]
    fn test_decode_cascade_round_trip() {
        for &style in Style::ALL {
            if style == Style::Squared || style == Style::SquaredNeg {
                continue;
            }
            let styled = encode("Hello there 42", style);
            assert_eq!(decode(&styled, None), "Hello there 42", "style {}", style);
        }
    }

    #[test]
    fn test_decode_cascade_squared_restores_capitals() {
        assert_eq!(decode(&encode("hi", Style::Squared), None), "HI");
        assert_eq!(decode(&encode("HI", Style::SquaredNeg), None), "HI");
    }

    #[test]
    fn test_decode_selective_leaves_other_styles() {
        let styled = encode("A", Style::BoldUnderline);
        assert_eq!(decode(&styled, Style::Underline), encode("A", Style::Bold));
        assert_eq!(
            decode(&styled, Style::Bold),
            format!("A{}", UNDERLINE_MARK)
        );
    }

    #[test]
    fn test_decode_wrong_style_passes_through() {
        let styled = encode("abc", Style::Fraktur);
        assert_eq!(decode(&styled, Style::Circled), styled);
    }

    #[test]
    fn test_decode_plain_text_unchanged() {
        assert_eq!(decode("plain text!", None), "plain text!");
        assert_eq!(decode("plain text!", Style::Bold), "plain text!");
    }

    #[test]
    fn test_decode_mixed_styles_without_argument() {
        let mixed = format!(
            "{} {}",
            encode("big", Style::Bold),
            encode("deal", Style::ItalicUnderline)
        );
        assert_eq!(decode(&mixed, None), "big deal");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("", None), "");
        assert_eq!(decode("", Style::Bold), "");
    }

    #[test]
    fn test_decode_unknown_scalars_pass_through() {
        assert_eq!(decode("héllo → 世界", None), "héllo → 世界");
    }
}
