//! Style detection.

use crate::style::Style;
use crate::table::style_of;

/// A detection result label.
///
/// Besides proper styles, two sentinels round out the label set: [`Label::Unknown`]
/// for scalars outside every styled block (plain ASCII included), and
/// [`Label::None`] for the empty string. `Display` renders styles by their
/// canonical names and the sentinels as `"Unknown style"` and `"None"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// A recognized style.
    Style(Style),
    /// At least one scalar belongs to no styled block.
    Unknown,
    /// The input was empty.
    None,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Style(style) => f.write_str(style.name()),
            Label::Unknown => f.write_str("Unknown style"),
            Label::None => f.write_str("None"),
        }
    }
}

/// Identifies the distinct styles present in a string.
///
/// Each scalar is classified with [`style_of`] and the results are
/// collected in order of first appearance, without duplicates. A scalar in
/// the bold-italic block contributes both [`Style::Bold`] and
/// [`Style::Italic`], since that block is equally a rendering of
/// doubly-styled text; this is the one case where a single scalar yields
/// two labels. Unstyled scalars contribute [`Label::Unknown`], so mixed
/// plain/styled text reports the sentinel alongside the detected styles.
///
/// # Example
///
/// ```rust
/// use unistyle::{encode, identify, Label, Style};
///
/// let styled = encode("hey", Style::Fraktur);
/// assert_eq!(identify(&styled), vec![Label::Style(Style::Fraktur)]);
/// assert_eq!(identify("hey"), vec![Label::Unknown]);
/// assert_eq!(identify(""), vec![Label::None]);
/// ```
pub fn identify(text: &str) -> Vec<Label> {
    if text.is_empty() {
        return vec![Label::None];
    }
    let mut labels = Vec::new();
    for c in text.chars() {
        match style_of(c) {
            Some(Style::BoldItalic) => {
                push_unique(&mut labels, Label::Style(Style::Bold));
                push_unique(&mut labels, Label::Style(Style::Italic));
            }
            Some(style) => push_unique(&mut labels, Label::Style(style)),
            None => push_unique(&mut labels, Label::Unknown),
        }
    }
    labels
}

fn push_unique(labels: &mut Vec<Label>, label: Label) {
    if !labels.contains(&label) {
        labels.push(label);
    }
}
