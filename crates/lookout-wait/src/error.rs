use lookout_interfaces::ApiError;
use std::time::Duration;
use thiserror::Error;

/// Failure of a wait operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaitError {
    /// The condition never held within its budget.
    #[error("Timed out after {timeout:?} waiting for {description}")]
    Timeout {
        description: String,
        timeout: Duration,
    },

    /// The session failed while the condition was being checked.
    #[error(transparent)]
    Session(#[from] ApiError),
}

impl WaitError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, WaitError::Timeout { .. })
    }
}
