//! Classifier range data.

use crate::style::Style;

/// Combining low line, appended by the underline styles.
pub const UNDERLINE_MARK: char = '\u{0332}';

/// Combining long stroke overlay, appended by strikethrough.
pub const STRIKETHROUGH_MARK: char = '\u{0336}';

/// A closed interval of Unicode scalar values attributed to one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRange {
    /// First scalar value of the block.
    pub lo: u32,
    /// Last scalar value of the block, inclusive.
    pub hi: u32,
    /// The style the block renders.
    pub style: Style,
}

impl StyleRange {
    /// Whether `code` falls inside this range.
    pub const fn contains(&self, code: u32) -> bool {
        self.lo <= code && code <= self.hi
    }
}

const fn range(lo: u32, hi: u32, style: Style) -> StyleRange {
    StyleRange { lo, hi, style }
}

/// Every styled block known to the classifier.
///
/// Ranges are pairwise disjoint; PARENTHESIZED intentionally appears twice
/// because its lowercase and uppercase glyphs live in separate blocks.
pub const STYLE_RANGES: &[StyleRange] = &[
    range(0x1D400, 0x1D433, Style::Bold),
    range(0x1D434, 0x1D467, Style::Italic),
    range(0x24B6, 0x24E9, Style::Circled),
    range(0xFF21, 0xFF5A, Style::Fullwidth),
    range(0x1D56C, 0x1D59F, Style::Fraktur),
    range(0x1D49C, 0x1D4CF, Style::Script),
    range(0x1D538, 0x1D56B, Style::DoubleStruck),
    range(0x1D670, 0x1D6A3, Style::Monospace),
    range(0x1D5A0, 0x1D5D3, Style::Sans),
    range(0x1D5D4, 0x1D607, Style::SansBold),
    range(0x1D63C, 0x1D66F, Style::SansBoldItalic),
    range(0x1D608, 0x1D63B, Style::SansItalic),
    range(0x249C, 0x24B5, Style::Parenthesized),
    range(0x1F110, 0x1F129, Style::Parenthesized),
    range(0x1F130, 0x1F169, Style::Squared),
    range(0x1F170, 0x1F189, Style::SquaredNeg),
    range(0x1D468, 0x1D49B, Style::BoldItalic),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_well_formed() {
        for range in STYLE_RANGES {
            assert!(
                range.lo <= range.hi,
                "range for {} is inverted",
                range.style
            );
            assert!(
                char::from_u32(range.hi).is_some(),
                "range for {} ends past valid scalar values",
                range.style
            );
        }
    }

    #[test]
    fn test_ranges_are_pairwise_disjoint() {
        // First-match-wins classification is only sound if no scalar value
        // belongs to two ranges.
        for (i, a) in STYLE_RANGES.iter().enumerate() {
            for b in &STYLE_RANGES[i + 1..] {
                assert!(
                    a.hi < b.lo || b.hi < a.lo,
                    "ranges for {} and {} overlap",
                    a.style,
                    b.style
                );
            }
        }
    }

    #[test]
    fn test_every_shifted_block_has_a_range() {
        use crate::table::spec_of;

        for &style in Style::ALL {
            let Some(shift) = spec_of(style).shift else {
                continue;
            };
            let classified = STYLE_RANGES
                .iter()
                .find(|r| r.contains(shift.upper))
                .map(|r| r.style);
            assert!(
                classified.is_some(),
                "upper block of {} is not classifiable",
                style
            );
        }
    }
}
