//! Error taxonomy for story declaration and lookup.
//!
//! Every failure here is local and synchronous: story declarations are
//! author-controlled static configuration, so nothing is retried or
//! silently recovered. A bad declaration fails fast at construction or
//! registration time and must not corrupt unrelated entries.

use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced while building, registering, or rendering stories.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoryError {
    /// The story title was empty or whitespace-only.
    #[error("story title is empty or whitespace-only")]
    InvalidTitle,

    /// Two variants derived the same identifier, either within one entry
    /// or across entries in a shared registry.
    #[error("duplicate story identifier '{0}'")]
    DuplicateIdentifier(String),

    /// Variants were declared before a base render template existed.
    #[error("no base render template set before binding variants")]
    UnboundTemplate,

    /// The renderer requested an identifier that is not in the catalog.
    #[error("unknown story variant '{0}'")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, StoryError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when a host wants to skip a bad declaration and keep loading others.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_id() {
        let err = StoryError::DuplicateIdentifier("examples-button--default".into());
        assert!(err.to_string().contains("examples-button--default"));

        let err = StoryError::UnknownVariant("missing--id".into());
        assert!(err.to_string().contains("missing--id"));
    }

    #[test]
    fn test_log_err_maps_result_to_option() {
        let ok: std::result::Result<u32, StoryError> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));

        let bad: std::result::Result<u32, StoryError> = Err(StoryError::InvalidTitle);
        assert_eq!(bad.clone().log_err(), None);
        assert_eq!(bad.warn_on_err(), None);
    }
}
