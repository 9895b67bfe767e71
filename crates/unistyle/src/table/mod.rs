//! Static range and offset tables for styled Unicode blocks.
//!
//! This module is the source of truth relating Unicode scalar values to
//! style labels:
//!
//! - [`STYLE_RANGES`]: closed intervals of scalar values, each attributed
//!   to one style
//! - [`style_of`]: classifies a single scalar value
//! - `StyleSpec` (crate-internal): per-style shift/mark descriptors the
//!   codec operations run on
//!
//! All tables are immutable and process-wide; the spec table is built once
//! on first use.

mod ranges;
mod spec;

pub use ranges::{StyleRange, STRIKETHROUGH_MARK, STYLE_RANGES, UNDERLINE_MARK};
pub(crate) use spec::spec_of;

use crate::style::Style;

/// Classifies a single Unicode scalar value by style.
///
/// Combining marks take precedence: U+0332 classifies as underline and
/// U+0336 as strikethrough regardless of any range. Otherwise the first
/// matching entry of [`STYLE_RANGES`] wins, and `None` means the scalar
/// belongs to no styled block ("unknown style").
///
/// Iteration throughout this crate is by scalar value, so a styled letter
/// carrying a combining mark is two scalars classified independently;
/// recognizing the compound is the caller's concern.
///
/// # Example
///
/// ```rust
/// use unistyle::{style_of, Style};
///
/// assert_eq!(style_of('\u{1D400}'), Some(Style::Bold)); // 𝐀
/// assert_eq!(style_of('\u{0332}'), Some(Style::Underline));
/// assert_eq!(style_of('A'), None);
/// ```
pub fn style_of(c: char) -> Option<Style> {
    if c == UNDERLINE_MARK {
        return Some(Style::Underline);
    }
    if c == STRIKETHROUGH_MARK {
        return Some(Style::Strikethrough);
    }
    let code = c as u32;
    STYLE_RANGES
        .iter()
        .find(|range| range.contains(code))
        .map(|range| range.style)
}
