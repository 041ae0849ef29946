use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Represents a handle to an element in the remote DOM.
///
/// The `id` is whatever the backend uses to address the element on later
/// calls (a WebDriver element reference, a CDP remote object id, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    pub id: String,
    /// Locator that produced this handle. Diagnostics only.
    pub selector: String,
}

impl ElementHandle {
    pub fn new(id: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            selector: selector.into(),
        }
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.selector, self.id)
    }
}

/// A function shipped into the page and run against the live document.
///
/// The body is a plain function body reading its inputs from `arguments[N]`,
/// so it never depends on state outside the page. The session marshals any
/// elements it returns back as [`ElementHandle`]s.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptCall {
    pub function_body: String,
    pub args: Vec<Value>,
}

impl ScriptCall {
    pub fn new(function_body: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            function_body: function_body.into(),
            args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn element_handle_display_includes_selector_and_id() {
        let handle = ElementHandle::new("e-42", "#submit");
        assert_eq!(handle.to_string(), "#submit (e-42)");
    }

    #[test]
    fn script_call_serializes_as_body_and_positional_args() {
        let call = ScriptCall::new("return [];", vec![json!("#menu"), json!(true)]);
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(
            value,
            json!({ "function_body": "return [];", "args": ["#menu", true] })
        );
    }
}
