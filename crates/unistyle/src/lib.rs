//! Convert plain text to pseudo-styled Unicode text and back.
//!
//! Unicode carries whole alphabets whose only purpose is to look like a
//! styled variant of the Latin letters: mathematical bold, italic, script,
//! fraktur, double-struck and monospace letters, circled, squared,
//! parenthesized and fullwidth forms. `unistyle` maps ASCII letters into
//! those blocks and back, and detects which styles a string uses. Two
//! styles — underline and strikethrough — are realized by appending a
//! combining mark instead of shifting code points, and compose with the
//! shift styles into compounds.
//!
//! Three entry points:
//!
//! - [`encode`]: apply a [`Style`] to plain text
//! - [`decode`]: strip one style (selectively) or all of them
//! - [`identify`]: report the styles present in a string as [`Label`]s
//!
//! All three are total functions: characters no rule covers pass through
//! unchanged, and nothing here fails or allocates shared state. The
//! underlying range and offset tables are immutable process-wide statics,
//! so every operation is safe to call from any thread.
//!
//! # Example
//!
//! ```rust
//! use unistyle::{decode, encode, identify, Label, Style};
//!
//! let styled = encode("Hello", Style::Bold);
//! assert_eq!(styled, "𝐇𝐞𝐥𝐥𝐨");
//! assert_eq!(decode(&styled, None), "Hello");
//! assert_eq!(identify(&styled), vec![Label::Style(Style::Bold)]);
//!
//! // Compound styles pair a code-point shift with a combining mark.
//! let fancy = encode("Hello", Style::BoldUnderline);
//! assert_eq!(decode(&fancy, Style::Underline), styled);
//! assert_eq!(decode(&fancy, None), "Hello");
//! ```
//!
//! Everything iterates by Unicode scalar value, never by UTF-16 code
//! unit: most styled glyphs live outside the Basic Multilingual Plane,
//! where code-unit iteration would tear them apart.

pub mod codec;
pub mod style;
pub mod table;

pub use codec::{decode, encode, identify, Label};
pub use style::{Style, UnknownStyleError};
pub use table::{style_of, StyleRange, STRIKETHROUGH_MARK, STYLE_RANGES, UNDERLINE_MARK};
