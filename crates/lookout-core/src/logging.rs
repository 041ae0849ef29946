//! Optional helper for setting up logging using `env_logger`.

use crate::error::CoreError;

#[cfg(feature = "env_logger")]
pub fn setup_logging(log_level_str: &str) -> Result<(), CoreError> {
    use env_logger::{Builder, Env};
    use log::LevelFilter;
    use std::str::FromStr;

    let level = LevelFilter::from_str(log_level_str).unwrap_or(LevelFilter::Info);

    Builder::from_env(Env::default().default_filter_or(level.to_string()))
        .filter_module("config", LevelFilter::Warn) // Source discovery is noisy at debug
        .try_init()
        .map_err(|e| CoreError::LoggingSetup(e.to_string()))
}

#[cfg(not(feature = "env_logger"))]
pub fn setup_logging(_log_level_str: &str) -> Result<(), CoreError> {
    log::debug!("env_logger feature not enabled, logging setup skipped via lookout-core helper.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "env_logger"))]
    #[test]
    fn setup_is_a_no_op_without_env_logger() {
        assert!(setup_logging("debug").is_ok());
        assert!(setup_logging("not-a-level").is_ok());
    }

    #[cfg(feature = "env_logger")]
    #[test]
    fn second_setup_reports_an_error() {
        let _ = setup_logging("debug");
        assert!(matches!(
            setup_logging("debug"),
            Err(CoreError::LoggingSetup(_))
        ));
    }
}
