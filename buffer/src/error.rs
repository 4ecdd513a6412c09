//! Error types for queue operations.

use thiserror::Error;

/// Result type alias for queue operations.
pub type Result<T> = core::result::Result<T, QueueError>;

/// Error type for queue operations.
///
/// Every fallible operation returns one of these by value. The queue never
/// panics on a precondition violation; an operation either fully succeeds or
/// returns an error without mutating any state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Read attempted with no live elements.
    #[error("queue: empty")]
    Empty,

    /// Bounded write attempted with no capacity left.
    #[error("queue: full")]
    Full,

    /// A requested bulk size of zero.
    #[error("queue: invalid length")]
    InvalidLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", QueueError::Empty), "queue: empty");
        assert_eq!(format!("{}", QueueError::Full), "queue: full");
        assert_eq!(
            format!("{}", QueueError::InvalidLength),
            "queue: invalid length"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(QueueError::Empty, QueueError::Empty);
        assert_ne!(QueueError::Empty, QueueError::Full);
    }
}
