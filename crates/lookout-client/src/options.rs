use lookout_core::{
    CoreError, WaitConfig, DEFAULT_LOADER_SELECTOR, DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT,
};
use std::time::Duration;

/// Settings fixed when a session is decorated. Read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    origin: String,
    loader_selector: String,
    default_timeout: Duration,
    poll_interval: Duration,
}

impl Options {
    /// `origin` is prepended verbatim to every path given to `load`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            loader_selector: DEFAULT_LOADER_SELECTOR.to_string(),
            default_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    #[must_use]
    pub fn with_loader_selector(mut self, selector: impl Into<String>) -> Self {
        self.loader_selector = selector.into();
        self
    }

    #[must_use]
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn loader_selector(&self) -> &str {
        &self.loader_selector
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl TryFrom<&WaitConfig> for Options {
    type Error = CoreError;

    fn try_from(config: &WaitConfig) -> Result<Self, Self::Error> {
        Ok(Options::new(config.origin()?)
            .with_loader_selector(config.loader_selector.clone())
            .with_default_timeout(config.default_timeout)
            .with_poll_interval(config.poll_interval))
    }
}
