use std::fmt;

/// Error produced when Euclidean notation like `(3,8)` cannot be parsed.
///
/// `position` is the byte offset in the input where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotationError {
    pub message: String,
    pub position: usize,
}

impl NotationError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error at {}: {}", self.position, self.message)
    }
}

impl std::error::Error for NotationError {}
