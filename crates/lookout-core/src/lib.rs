//! # Lookout Core
//!
//! Ambient plumbing shared by the lookout crates: layered configuration,
//! logging setup and the errors they produce.

pub mod config;
pub mod error;
pub mod logging;

pub use self::config::{
    load_config, load_config_from, Config, GlobalConfig, WaitConfig, DEFAULT_LOADER_SELECTOR,
    DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT,
};
pub use error::CoreError;
pub use logging::setup_logging;
