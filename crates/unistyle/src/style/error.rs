//! Style name parsing errors.

/// Error returned when a string is not a recognized style name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyleError {
    /// The name that failed to parse.
    pub name: String,
}

impl std::fmt::Display for UnknownStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown style name '{}'", self.name)
    }
}

impl std::error::Error for UnknownStyleError {}
