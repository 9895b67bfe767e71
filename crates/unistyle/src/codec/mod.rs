//! The three codec operations.
//!
//! - [`encode`]: plain text to styled Unicode
//! - [`decode`]: styled Unicode back to plain text, selectively or fully
//! - [`identify`]: which styles a string uses
//!
//! All three are total: anything no rule covers passes through unchanged.

mod decode;
mod encode;
mod identify;

pub use decode::decode;
pub use encode::encode;
pub use identify::{identify, Label};
