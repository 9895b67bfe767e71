//! Per-style shift and mark descriptors.
//!
//! Each style is described by a [`StyleSpec`]: an optional code-point
//! shift (block base code points for uppercase and lowercase letters), an
//! optional trailing combining mark, and a case-fold flag for the squared
//! blocks, which only define uppercase-derived glyphs. The codec walks
//! these descriptors instead of branching per style, so adding a style is
//! a data change.

use once_cell::sync::Lazy;

use super::ranges::{STRIKETHROUGH_MARK, UNDERLINE_MARK};
use crate::style::Style;

/// A code-point shift into a styled block.
///
/// Offsets are derived from the block bases: an uppercase letter moves by
/// `upper - 'A'`, a lowercase one by `lower - 'a'`. Blocks without
/// lowercase glyphs leave `lower` unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shift {
    /// Base scalar value of the uppercase block ('A' maps here).
    pub upper: u32,
    /// Base scalar value of the lowercase block ('a' maps here), if any.
    pub lower: Option<u32>,
}

impl Shift {
    /// Shifts an ASCII letter into the styled block.
    ///
    /// Returns `None` for anything the shift does not cover (non-letters,
    /// or lowercase when the block has no lowercase glyphs).
    pub fn apply(&self, c: char) -> Option<char> {
        if c.is_ascii_uppercase() {
            char::from_u32(self.upper + (c as u32 - 'A' as u32))
        } else if c.is_ascii_lowercase() {
            self.lower
                .and_then(|base| char::from_u32(base + (c as u32 - 'a' as u32)))
        } else {
            None
        }
    }

    /// Reverses the shift for a scalar inside the letter-derived part of
    /// the block; `None` if the scalar lies outside it.
    pub fn unapply(&self, c: char) -> Option<char> {
        let code = c as u32;
        if (self.upper..=self.upper + 25).contains(&code) {
            char::from_u32('A' as u32 + (code - self.upper))
        } else if let Some(base) = self.lower {
            if (base..=base + 25).contains(&code) {
                char::from_u32('a' as u32 + (code - base))
            } else {
                None
            }
        } else {
            None
        }
    }
}

/// Full descriptor for one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StyleSpec {
    /// The style this spec describes.
    pub style: Style,
    /// Code-point shift, if the style has one.
    pub shift: Option<Shift>,
    /// Combining mark appended after each character, if any.
    pub mark: Option<char>,
    /// Upper-case lowercase input before shifting (squared blocks).
    pub fold_case: bool,
}

impl StyleSpec {
    fn new(style: Style) -> Self {
        let mut spec = StyleSpec {
            style,
            shift: None,
            mark: None,
            fold_case: false,
        };
        match style {
            Style::Bold | Style::BoldUnderline => {
                spec.shift = shift(0x1D400, Some(0x1D41A));
            }
            Style::Italic | Style::ItalicUnderline => {
                spec.shift = shift(0x1D434, Some(0x1D44E));
            }
            Style::BoldItalic | Style::BoldItalicUnderline => {
                spec.shift = shift(0x1D468, Some(0x1D482));
            }
            Style::Circled => spec.shift = shift(0x24B6, Some(0x24D0)),
            Style::Fullwidth => spec.shift = shift(0xFF21, Some(0xFF41)),
            Style::Fraktur => spec.shift = shift(0x1D56C, Some(0x1D586)),
            Style::Script => spec.shift = shift(0x1D49C, Some(0x1D4B6)),
            Style::DoubleStruck => spec.shift = shift(0x1D538, Some(0x1D552)),
            Style::Monospace => spec.shift = shift(0x1D670, Some(0x1D68A)),
            Style::Sans => spec.shift = shift(0x1D5A0, Some(0x1D5BA)),
            Style::SansBold => spec.shift = shift(0x1D5D4, Some(0x1D5EE)),
            Style::SansItalic => spec.shift = shift(0x1D608, Some(0x1D622)),
            Style::SansBoldItalic => spec.shift = shift(0x1D63C, Some(0x1D656)),
            Style::Parenthesized => spec.shift = shift(0x1F110, Some(0x249C)),
            Style::Squared => {
                spec.shift = shift(0x1F130, None);
                spec.fold_case = true;
            }
            Style::SquaredNeg => {
                spec.shift = shift(0x1F170, None);
                spec.fold_case = true;
            }
            Style::Underline | Style::Strikethrough => {}
        }
        match style {
            Style::Underline
            | Style::BoldUnderline
            | Style::ItalicUnderline
            | Style::BoldItalicUnderline => spec.mark = Some(UNDERLINE_MARK),
            Style::Strikethrough => spec.mark = Some(STRIKETHROUGH_MARK),
            _ => {}
        }
        spec
    }
}

fn shift(upper: u32, lower: Option<u32>) -> Option<Shift> {
    Some(Shift { upper, lower })
}

/// The process-wide spec table, one entry per style in [`Style::ALL`]
/// order. Built once, never mutated.
static SPECS: Lazy<Vec<StyleSpec>> = Lazy::new(|| {
    Style::ALL
        .iter()
        .map(|&style| StyleSpec::new(style))
        .collect()
});

/// Looks up the descriptor for a style.
pub(crate) fn spec_of(style: Style) -> &'static StyleSpec {
    let spec = &SPECS[style as usize];
    debug_assert_eq!(spec.style, style, "spec table out of declaration order");
    spec
}
