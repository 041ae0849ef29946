use crate::common::*;
use crate::error::ApiError;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Represents a single remote browser session (one tab or browsing context).
///
/// This trait is the protocol-agnostic surface the wait helpers are built on.
/// Every method is one round trip to the remote end; implementations must not
/// retry on their own.
#[async_trait]
pub trait Session: Send + Sync + Debug {
    /// Navigates the session to the specified absolute URL.
    ///
    /// # Returns
    /// - `Ok(())` once navigation has been committed by the backend.
    /// - `Err(ApiError)` if navigation fails (e.g., invalid URL, network error).
    async fn navigate(&self, url: &str) -> Result<(), ApiError>;

    /// Gets the current URL of the session.
    async fn current_url(&self) -> Result<String, ApiError>;

    /// Finds every element matching the given CSS selector.
    ///
    /// # Returns
    /// - `Ok(vec![])` when nothing matches. An empty result is not an error.
    /// - `Err(ApiError)` if the lookup itself fails.
    async fn find_elements(&self, selector: &str) -> Result<Vec<ElementHandle>, ApiError>;

    /// Runs `script` in the page and returns the elements it produced.
    ///
    /// The script must return an array of DOM elements (possibly empty).
    ///
    /// # Returns
    /// - `Ok(Vec<ElementHandle>)` with one handle per returned element.
    /// - `Err(ApiError::ScriptError)` if the script throws.
    async fn find_elements_by_script(
        &self,
        script: &ScriptCall,
    ) -> Result<Vec<ElementHandle>, ApiError>;

    /// Reports whether the element is rendered visibly (has a layout box and
    /// is not hidden). The exact rules belong to the backend.
    ///
    /// # Returns
    /// - `Err(ApiError::StaleElementReference)` if the element left the DOM.
    async fn is_displayed(&self, element: &ElementHandle) -> Result<bool, ApiError>;

    /// Moves the pointer over the element and commits the action.
    async fn hover(&self, element: &ElementHandle) -> Result<(), ApiError>;
}

// Lets the caller keep its own handle to a session it hands to the helpers.
#[async_trait]
impl<T> Session for Arc<T>
where
    T: Session + ?Sized,
{
    async fn navigate(&self, url: &str) -> Result<(), ApiError> {
        (**self).navigate(url).await
    }

    async fn current_url(&self) -> Result<String, ApiError> {
        (**self).current_url().await
    }

    async fn find_elements(&self, selector: &str) -> Result<Vec<ElementHandle>, ApiError> {
        (**self).find_elements(selector).await
    }

    async fn find_elements_by_script(
        &self,
        script: &ScriptCall,
    ) -> Result<Vec<ElementHandle>, ApiError> {
        (**self).find_elements_by_script(script).await
    }

    async fn is_displayed(&self, element: &ElementHandle) -> Result<bool, ApiError> {
        (**self).is_displayed(element).await
    }

    async fn hover(&self, element: &ElementHandle) -> Result<(), ApiError> {
        (**self).hover(element).await
    }
}
