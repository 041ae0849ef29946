//! Named predicates over remote browser state.
//!
//! A condition is built fresh for every wait, checked by the [`Poller`]
//! until it yields a value, then dropped.
//!
//! [`Poller`]: crate::Poller

use crate::pattern::Pattern;
use crate::script;
use async_trait::async_trait;
use lookout_interfaces::{ApiError, ElementHandle, Session};

/// A pollable predicate with a human-readable description.
#[async_trait]
pub trait Condition: Send + Sync {
    /// What the caller gets back once the condition holds.
    type Output: Send;

    /// Used in timeout errors: "waiting for {description}".
    fn description(&self) -> String;

    /// One round trip to the session.
    ///
    /// # Returns
    /// - `Ok(Some(output))` when the condition holds.
    /// - `Ok(None)` when it does not hold yet.
    /// - `Err(ApiError)` when the session failed.
    async fn check(&self, session: &dyn Session) -> Result<Option<Self::Output>, ApiError>;
}

/// No element matches `selector`.
#[derive(Debug, Clone)]
pub struct ElementsAbsent {
    pub selector: String,
}

impl ElementsAbsent {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

#[async_trait]
impl Condition for ElementsAbsent {
    type Output = ();

    fn description(&self) -> String {
        format!("no element to match `{}`", self.selector)
    }

    async fn check(&self, session: &dyn Session) -> Result<Option<()>, ApiError> {
        let found = session.find_elements(&self.selector).await?;
        Ok(found.is_empty().then_some(()))
    }
}

/// At least one element matches `selector`; yields the first one.
#[derive(Debug, Clone)]
pub struct ElementLocated {
    pub selector: String,
}

impl ElementLocated {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

#[async_trait]
impl Condition for ElementLocated {
    type Output = ElementHandle;

    fn description(&self) -> String {
        format!("an element to match `{}`", self.selector)
    }

    async fn check(&self, session: &dyn Session) -> Result<Option<ElementHandle>, ApiError> {
        let found = session.find_elements(&self.selector).await?;
        Ok(found.into_iter().next())
    }
}

/// An already located element is (or is not) displayed.
#[derive(Debug, Clone)]
pub struct ElementVisibility {
    pub element: ElementHandle,
    pub visible: bool,
}

impl ElementVisibility {
    pub fn new(element: ElementHandle, visible: bool) -> Self {
        Self { element, visible }
    }
}

#[async_trait]
impl Condition for ElementVisibility {
    type Output = ElementHandle;

    fn description(&self) -> String {
        let state = if self.visible { "visible" } else { "hidden" };
        format!("element {} to be {}", self.element, state)
    }

    async fn check(&self, session: &dyn Session) -> Result<Option<ElementHandle>, ApiError> {
        let displayed = session.is_displayed(&self.element).await?;
        Ok((displayed == self.visible).then(|| self.element.clone()))
    }
}

/// The current URL matches `pattern`; yields the URL.
#[derive(Debug, Clone)]
pub struct UrlMatches {
    pub pattern: Pattern,
}

impl UrlMatches {
    pub fn new(pattern: impl Into<Pattern>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

#[async_trait]
impl Condition for UrlMatches {
    type Output = String;

    fn description(&self) -> String {
        format!("the URL to match {}", self.pattern)
    }

    async fn check(&self, session: &dyn Session) -> Result<Option<String>, ApiError> {
        let url = session.current_url().await?;
        Ok(self.pattern.is_match(&url).then_some(url))
    }
}

/// The element selected by `selector` has (or lacks) `class_name`.
#[derive(Debug, Clone)]
pub struct ClassMembership {
    pub selector: String,
    pub class_name: String,
    pub present: bool,
}

impl ClassMembership {
    pub fn new(selector: impl Into<String>, class_name: impl Into<String>, present: bool) -> Self {
        Self {
            selector: selector.into(),
            class_name: class_name.into(),
            present,
        }
    }
}

#[async_trait]
impl Condition for ClassMembership {
    type Output = ElementHandle;

    fn description(&self) -> String {
        let verb = if self.present { "have" } else { "not have" };
        format!(
            "element `{}` to {} class `{}`",
            self.selector, verb, self.class_name
        )
    }

    async fn check(&self, session: &dyn Session) -> Result<Option<ElementHandle>, ApiError> {
        let call = script::class_membership(&self.selector, &self.class_name, self.present);
        let found = session.find_elements_by_script(&call).await?;
        Ok(found.into_iter().next())
    }
}

/// The text content of the element selected by `selector` contains (or does
/// not contain) `pattern`.
#[derive(Debug, Clone)]
pub struct TextMatches {
    pub selector: String,
    pub pattern: Pattern,
    pub present: bool,
}

impl TextMatches {
    pub fn new(selector: impl Into<String>, pattern: impl Into<Pattern>, present: bool) -> Self {
        Self {
            selector: selector.into(),
            pattern: pattern.into(),
            present,
        }
    }
}

#[async_trait]
impl Condition for TextMatches {
    type Output = ElementHandle;

    fn description(&self) -> String {
        let verb = if self.present { "have" } else { "not have" };
        format!(
            "element `{}` to {} text {}",
            self.selector, verb, self.pattern
        )
    }

    async fn check(&self, session: &dyn Session) -> Result<Option<ElementHandle>, ApiError> {
        let call = script::text_match(&self.selector, &self.pattern, self.present);
        let found = session.find_elements_by_script(&call).await?;
        Ok(found.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn descriptions_name_selector_and_target() {
        assert_eq!(
            ElementsAbsent::new(".loader").description(),
            "no element to match `.loader`"
        );
        assert_eq!(
            ClassMembership::new("#tab", "active", false).description(),
            "element `#tab` to not have class `active`"
        );
        assert_eq!(
            TextMatches::new("h1", "Welcome", true).description(),
            "element `h1` to have text \"Welcome\""
        );
        assert_eq!(
            UrlMatches::new(Regex::new("/done$").unwrap()).description(),
            "the URL to match //done$/"
        );
        assert_eq!(
            ElementVisibility::new(ElementHandle::new("e-1", "#menu"), true).description(),
            "element #menu (e-1) to be visible"
        );
    }
}
