use crate::error::CoreError;
use config::{Config as ConfigLoader, Environment, File, Map};
use serde::Deserialize;
use std::{path::Path, time::Duration};

/// Loader overlay convention: a `data-test="loader"` element that is not hidden.
pub const DEFAULT_LOADER_SELECTOR: &str = r#"[data-test="loader"]:not(.hidden)"#;

/// Budget for a single wait when the caller does not pass one.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Pause between two attempts of the same condition.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

const ENV_PREFIX: &str = "LOOKOUT";
const CONFIG_FILE_STEM: &str = "lookout";

// Helper for deserializing Duration from milliseconds
mod duration_ms_serde {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

// Main configuration structure
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)] // Ensure fields default if missing in config source
pub struct Config {
    pub global: GlobalConfig,
    pub wait: WaitConfig,
}

// Global settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GlobalConfig {
    pub log_level: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Settings for the wait helpers.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WaitConfig {
    /// Base URL prepended to every relative page load. Required.
    pub origin: Option<String>,
    pub loader_selector: String,
    #[serde(rename = "default_timeout_ms", deserialize_with = "duration_ms_serde::deserialize")]
    pub default_timeout: Duration,
    #[serde(rename = "poll_interval_ms", deserialize_with = "duration_ms_serde::deserialize")]
    pub poll_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            origin: None,
            loader_selector: DEFAULT_LOADER_SELECTOR.to_string(),
            default_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitConfig {
    /// The configured origin, rejecting a missing or blank value.
    pub fn origin(&self) -> Result<&str, CoreError> {
        match self.origin.as_deref() {
            Some(origin) if !origin.trim().is_empty() => Ok(origin),
            _ => Err(CoreError::MissingOrigin),
        }
    }
}

/// Loads configuration from default locations and environment variables.
///
/// Looks for `lookout.toml` (or `.json`, `.yaml`, etc.) in the current directory.
/// Overrides with environment variables prefixed with `LOOKOUT_`
/// (e.g., `LOOKOUT_WAIT__ORIGIN=http://localhost:9000`,
/// `LOOKOUT_WAIT__DEFAULT_TIMEOUT_MS=5000`).
/// Note the double underscore `__` for nested fields.
pub fn load_config() -> Result<Config, CoreError> {
    build(File::with_name(CONFIG_FILE_STEM).required(false), None)
}

/// Same layering as [`load_config`], with an explicit file and an explicit
/// environment map instead of the process environment.
pub fn load_config_from(path: &Path, env: Option<Map<String, String>>) -> Result<Config, CoreError> {
    build(File::from(path).required(false), env)
}

fn build<F>(file: F, env: Option<Map<String, String>>) -> Result<Config, CoreError>
where
    F: config::Source + Send + Sync + 'static,
{
    let loaded = ConfigLoader::builder()
        .set_default("global.log_level", "info")?
        .set_default("wait.loader_selector", DEFAULT_LOADER_SELECTOR)?
        .set_default("wait.default_timeout_ms", DEFAULT_WAIT_TIMEOUT.as_millis() as u64)?
        .set_default("wait.poll_interval_ms", DEFAULT_POLL_INTERVAL.as_millis() as u64)?
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    let config: Config = loaded.try_deserialize()?;
    log::debug!(
        "Loaded configuration: origin={:?}, loader_selector={}, default_timeout={:?}",
        config.wait.origin,
        config.wait.loader_selector,
        config.wait.default_timeout
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_apply_without_sources() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml"), Some(Map::new())).unwrap();

        assert_eq!(config.global.log_level, "info");
        assert_eq!(config.wait.loader_selector, DEFAULT_LOADER_SELECTOR);
        assert_eq!(config.wait.default_timeout, Duration::from_millis(10_000));
        assert_eq!(config.wait.poll_interval, Duration::from_millis(50));
        assert!(matches!(config.wait.origin(), Err(CoreError::MissingOrigin)));
    }

    #[test]
    fn file_values_are_read() {
        let file = write_toml(
            r#"
            [wait]
            origin = "http://localhost:9000"
            loader_selector = ".spinner"
            default_timeout_ms = 2500
            "#,
        );
        let config = load_config_from(file.path(), Some(Map::new())).unwrap();

        assert_eq!(config.wait.origin().unwrap(), "http://localhost:9000");
        assert_eq!(config.wait.loader_selector, ".spinner");
        assert_eq!(config.wait.default_timeout, Duration::from_millis(2500));
        assert_eq!(config.wait.poll_interval, DEFAULT_POLL_INTERVAL);
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_toml(
            r#"
            [wait]
            origin = "http://from-file"
            "#,
        );
        let mut env = Map::new();
        env.insert(
            "LOOKOUT_WAIT__ORIGIN".to_string(),
            "http://from-env:8080".to_string(),
        );
        env.insert("LOOKOUT_WAIT__POLL_INTERVAL_MS".to_string(), "20".to_string());

        let config = load_config_from(file.path(), Some(env)).unwrap();

        assert_eq!(config.wait.origin().unwrap(), "http://from-env:8080");
        assert_eq!(config.wait.poll_interval, Duration::from_millis(20));
    }

    #[test]
    fn blank_origin_is_rejected() {
        let wait = WaitConfig {
            origin: Some("   ".to_string()),
            ..WaitConfig::default()
        };
        assert!(matches!(wait.origin(), Err(CoreError::MissingOrigin)));
    }
}
