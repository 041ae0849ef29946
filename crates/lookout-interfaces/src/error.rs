use thiserror::Error;

/// Errors reported by a remote browser session.
/// These errors are intended to be protocol-agnostic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Failed to establish or maintain a connection to the remote session.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A single remote call did not complete in time. This is the backend's own
    /// command timeout, not a wait condition expiring.
    #[error("Remote call timed out")]
    Timeout,

    /// The remote end rejected or could not understand a command.
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    /// No element matched a lookup that required one.
    #[error("No such element: {0}")]
    NoSuchElement(String),

    /// A previously returned element handle no longer refers to a live node.
    #[error("Stale element reference: {0}")]
    StaleElementReference(String),

    /// A script shipped into the page threw or returned something unusable.
    #[error("Script execution failed: {0}")]
    ScriptError(String),

    /// Navigation could not be started or was aborted.
    #[error("Navigation failed: {0}")]
    NavigationError(String),

    /// Invalid parameters were provided to a session method.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The backend does not implement this operation.
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// An internal error occurred within the session backend.
    #[error("Internal session error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Whether the error only says the element is not there (yet or anymore).
    ///
    /// Polling treats these as "condition not met" instead of aborting.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::NoSuchElement(_) | ApiError::StaleElementReference(_)
        )
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::ConnectionFailed(err.to_string())
    }
}
