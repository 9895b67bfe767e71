//! Style names and their canonical string forms.
//!
//! This module provides:
//!
//! - [`Style`]: the closed enumeration of supported styles
//! - [`UnknownStyleError`]: error from parsing a style name
//!
//! Styles divide into code-point-shift styles (bold, circled, fullwidth,
//! ...), combining-mark styles (underline, strikethrough), and compounds
//! that pair a shift with a trailing mark (bold underline, ...).

mod error;
mod name;

pub use error::UnknownStyleError;
pub use name::Style;
