//! Errors specific to building the decorator from configuration.

use lookout_core::CoreError;
use lookout_interfaces::ApiError;
use lookout_wait::WaitError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(#[from] CoreError),

    // Lets callers mix setup and wait steps behind one `?`.
    #[error(transparent)]
    Wait(#[from] WaitError),
}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        ClientError::Wait(WaitError::Session(err))
    }
}
