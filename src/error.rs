// Error taxonomy for store operations

use thiserror::Error;

/// Conditions a store operation can report. All are local and
/// recoverable; none are fatal to the process.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Add attempted with blank text. Nothing is created; the caller is
    /// expected to surface a user-facing warning. Blank edits do not
    /// raise this, they silently no-op.
    #[error("task text cannot be empty")]
    EmptyInput,

    /// An operation referenced an id that is not in the store.
    #[error("no task with id {id}")]
    NotFound {
        /// The id that failed to resolve.
        id: String,
    },

    /// An unrecognized filter name at the string boundary. The store's
    /// previous filter is retained.
    #[error("unknown filter: {name} (expected all, active, completed, high, overdue or today)")]
    InvalidFilter {
        /// The rejected name.
        name: String,
    },

    /// clear_completed ran with zero completed tasks. Informational,
    /// state unchanged.
    #[error("no completed tasks to clear")]
    NothingToClear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::EmptyInput.to_string(), "task text cannot be empty");
        assert_eq!(
            StoreError::NotFound { id: "t-9".to_string() }.to_string(),
            "no task with id t-9"
        );
        assert!(
            StoreError::InvalidFilter { name: "urgent".to_string() }
                .to_string()
                .starts_with("unknown filter: urgent")
        );
        assert_eq!(
            StoreError::NothingToClear.to_string(),
            "no completed tasks to clear"
        );
    }
}
