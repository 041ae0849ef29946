use thiserror::Error;

/// Errors originating from the core crate: configuration and logging setup.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration loading failed: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Logging setup failed: {0}")]
    LoggingSetup(String),

    /// `wait.origin` is required and has no default.
    #[error("No origin configured (set `wait.origin` or LOOKOUT_WAIT__ORIGIN)")]
    MissingOrigin,
}
