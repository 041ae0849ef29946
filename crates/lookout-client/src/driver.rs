//! The decorator adding wait helpers to a [`Session`].

use crate::error::ClientError;
use crate::options::Options;
use log::debug;
use lookout_core::Config;
use lookout_interfaces::{ApiError, ElementHandle, Session};
use lookout_wait::{
    ClassMembership, Condition, ElementLocated, ElementVisibility, ElementsAbsent, Pattern, Poller,
    TextMatches, UrlMatches, WaitError,
};
use std::ops::Deref;
use std::time::Duration;

/// Decorates `session` with the wait helpers configured by `options`.
pub fn extend<S: Session>(session: S, options: Options) -> WaitDriver<S> {
    WaitDriver::new(session, options)
}

/// A session plus wait helpers.
///
/// Every `timeout` argument is the budget of one wait; `None` falls back to
/// [`Options::default_timeout`]. Helpers that first wait for loaders spend up
/// to that budget on the loader gate and then up to the same budget again on
/// their own condition.
///
/// Calls the helpers do not cover reach the session through `Deref`.
#[derive(Debug)]
pub struct WaitDriver<S> {
    session: S,
    options: Options,
}

impl<S: Session> WaitDriver<S> {
    pub fn new(session: S, options: Options) -> Self {
        debug!(
            "Decorating session with origin={} loader_selector={}",
            options.origin(),
            options.loader_selector()
        );
        Self { session, options }
    }

    /// Builds the options from the `wait` section of a loaded [`Config`].
    pub fn from_config(session: S, config: &Config) -> Result<Self, ClientError> {
        let options = Options::try_from(&config.wait)?;
        Ok(Self::new(session, options))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn into_inner(self) -> S {
        self.session
    }

    /// Resolves once no element matches `selector`.
    pub async fn wait_for_element_absence(
        &self,
        selector: &str,
        timeout: Option<Duration>,
    ) -> Result<(), WaitError> {
        self.wait(ElementsAbsent::new(selector), timeout).await
    }

    /// Resolves once no loader overlay is present.
    pub async fn wait_for_loaders(&self, timeout: Option<Duration>) -> Result<(), WaitError> {
        self.wait_for_element_absence(self.options.loader_selector(), timeout)
            .await
    }

    /// Waits for loaders, then for an element matching `selector`.
    pub async fn wait_for_element(
        &self,
        selector: &str,
        timeout: Option<Duration>,
    ) -> Result<ElementHandle, WaitError> {
        self.wait_for_loaders(timeout).await?;
        self.wait(ElementLocated::new(selector), timeout).await
    }

    pub async fn wait_for_element_to_be_visible(
        &self,
        selector: &str,
        timeout: Option<Duration>,
    ) -> Result<ElementHandle, WaitError> {
        self.wait_for_visibility(selector, true, timeout).await
    }

    pub async fn wait_for_element_not_to_be_visible(
        &self,
        selector: &str,
        timeout: Option<Duration>,
    ) -> Result<ElementHandle, WaitError> {
        self.wait_for_visibility(selector, false, timeout).await
    }

    /// Waits for loaders, then for the current URL to match `pattern`.
    /// Returns the matching URL.
    pub async fn wait_for_url(
        &self,
        pattern: impl Into<Pattern>,
        timeout: Option<Duration>,
    ) -> Result<String, WaitError> {
        let condition = UrlMatches::new(pattern);
        self.wait_for_loaders(timeout).await?;
        self.wait(condition, timeout).await
    }

    pub async fn wait_for_element_to_have_class(
        &self,
        selector: &str,
        class_name: &str,
        timeout: Option<Duration>,
    ) -> Result<ElementHandle, WaitError> {
        self.wait_for_loaders(timeout).await?;
        self.wait(ClassMembership::new(selector, class_name, true), timeout)
            .await
    }

    pub async fn wait_for_element_not_to_have_class(
        &self,
        selector: &str,
        class_name: &str,
        timeout: Option<Duration>,
    ) -> Result<ElementHandle, WaitError> {
        self.wait_for_loaders(timeout).await?;
        self.wait(ClassMembership::new(selector, class_name, false), timeout)
            .await
    }

    pub async fn wait_for_element_to_have_text(
        &self,
        selector: &str,
        pattern: impl Into<Pattern>,
        timeout: Option<Duration>,
    ) -> Result<ElementHandle, WaitError> {
        let condition = TextMatches::new(selector, pattern, true);
        self.wait_for_loaders(timeout).await?;
        self.wait(condition, timeout).await
    }

    pub async fn wait_for_element_not_to_have_text(
        &self,
        selector: &str,
        pattern: impl Into<Pattern>,
        timeout: Option<Duration>,
    ) -> Result<ElementHandle, WaitError> {
        let condition = TextMatches::new(selector, pattern, false);
        self.wait_for_loaders(timeout).await?;
        self.wait(condition, timeout).await
    }

    /// Moves the pointer over `element`. Nothing checks that the page reacted.
    pub async fn hover_over(&self, element: &ElementHandle) -> Result<(), ApiError> {
        debug!("Hovering over {}", element);
        self.session.hover(element).await
    }

    /// Sleeps for `duration` regardless of page state.
    pub async fn pause(&self, duration: Duration) {
        debug!("Pausing for {:?}", duration);
        tokio::time::sleep(duration).await;
    }

    /// Navigates to `origin` followed by `path`.
    ///
    /// `path` is appended as-is, so it should start with `/`.
    pub async fn load(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.options.origin(), path);
        debug!("Loading {}", url);
        self.session.navigate(&url).await
    }

    async fn wait_for_visibility(
        &self,
        selector: &str,
        visible: bool,
        timeout: Option<Duration>,
    ) -> Result<ElementHandle, WaitError> {
        let element = self.wait_for_element(selector, timeout).await?;
        self.wait(ElementVisibility::new(element, visible), timeout)
            .await
    }

    async fn wait<C: Condition>(
        &self,
        condition: C,
        timeout: Option<Duration>,
    ) -> Result<C::Output, WaitError> {
        self.poller(timeout).until(&self.session, &condition).await
    }

    fn poller(&self, timeout: Option<Duration>) -> Poller {
        Poller::new(
            timeout.unwrap_or(self.options.default_timeout()),
            self.options.poll_interval(),
        )
    }
}

impl<S> Deref for WaitDriver<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.session
    }
}
