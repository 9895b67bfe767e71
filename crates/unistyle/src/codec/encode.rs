//! Plain text to styled Unicode.

use crate::style::Style;
use crate::table::spec_of;

/// Converts plain text into styled Unicode text.
///
/// ASCII letters are shifted into the style's Unicode block; for the
/// squared styles, lowercase input is upper-cased first since those
/// blocks only define capital glyphs. Combining-mark styles append their
/// mark after every character, letters or not, so compound styles grow
/// the string by one scalar per character. Everything else passes through
/// unchanged; this never fails.
///
/// # Example
///
/// ```rust
/// use unistyle::{encode, Style};
///
/// assert_eq!(encode("Hello", Style::Bold), "𝐇𝐞𝐥𝐥𝐨");
/// assert_eq!(encode("hi", Style::Circled), "ⓗⓘ");
/// assert_eq!(encode("123", Style::Bold), "123");
/// ```
pub fn encode(text: &str, style: Style) -> String {
    let spec = spec_of(style);
    let mut out = String::with_capacity(text.len() * 4);
    for c in text.chars() {
        let source = if spec.fold_case {
            c.to_ascii_uppercase()
        } else {
            c
        };
        match spec.shift.and_then(|shift| shift.apply(source)) {
            Some(styled) => out.push(styled),
            None => out.push(c),
        }
        if let Some(mark) = spec.mark {
            out.push(mark);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::UNDERLINE_MARK;

    #[test]
    fn test_encode_bold() {
        assert_eq!(
            encode("Hello", Style::Bold),
            "\u{1D407}\u{1D41E}\u{1D425}\u{1D425}\u{1D428}"
        );
    }

    #[test]
    fn test_encode_non_letters_pass_through() {
        assert_eq!(encode("123", Style::Bold), "123");
        assert_eq!(encode("a-b c!", Style::Fraktur), "\u{1D586}-\u{1D587} \u{1D588}!");
    }

    #[test]
    fn test_encode_underline_marks_every_char() {
        assert_eq!(
            encode("a1", Style::Underline),
            format!("a{}1{}", UNDERLINE_MARK, UNDERLINE_MARK)
        );
    }

    #[test]
    fn test_encode_compound_shifts_and_marks() {
        assert_eq!(
            encode("Hi", Style::BoldUnderline),
            format!("\u{1D407}{}\u{1D422}{}", UNDERLINE_MARK, UNDERLINE_MARK)
        );
    }

    #[test]
    fn test_encode_squared_folds_case() {
        assert_eq!(encode("a", Style::Squared), encode("A", Style::Squared));
        assert_eq!(encode("A", Style::Squared), "\u{1F130}");
        assert_eq!(encode("z", Style::SquaredNeg), "\u{1F189}");
    }

    #[test]
    fn test_encode_parenthesized_uses_both_blocks() {
        assert_eq!(encode("Aa", Style::Parenthesized), "\u{1F110}\u{249C}");
    }

    #[test]
    fn test_encode_fullwidth() {
        assert_eq!(encode("Az", Style::Fullwidth), "\u{FF21}\u{FF5A}");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode("", Style::Bold), "");
    }
}
