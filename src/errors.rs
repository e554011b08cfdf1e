//! Error types for the todos crate.

use thiserror::Error;

/// Errors surfaced while turning user input into task operations.
///
/// The entities themselves are infallible; everything here belongs to
/// the input contract the front-end applies before calling them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodosError {
    #[error("Deadline is required for Deadline Task.")]
    DeadlineRequired,

    #[error("Timeline is required for Timed Task.")]
    TimelineRequired,

    #[error("Invalid task index: '{input}'")]
    InvalidIndex { input: String },
}

/// Result type alias for todos operations
pub type TodosResult<T> = Result<T, TodosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TodosError::DeadlineRequired.to_string(),
            "Deadline is required for Deadline Task."
        );
        assert_eq!(
            TodosError::TimelineRequired.to_string(),
            "Timeline is required for Timed Task."
        );
    }

    #[test]
    fn test_invalid_index_names_input() {
        let err = TodosError::InvalidIndex {
            input: "abc".to_string(),
        };
        assert!(err.to_string().contains("'abc'"));
    }
}
