//! Predicates evaluated inside the page.
//!
//! Each script selects exactly one element with `querySelector` and returns
//! either `[element]` when the check holds or `[]` otherwise. A missing
//! element also yields `[]`, so "not found" and "not yet" look the same to
//! the poller.

use crate::pattern::Pattern;
use lookout_interfaces::ScriptCall;
use serde_json::json;

/// `arguments`: selector, class name, whether the class must be present.
pub const CLASS_MEMBERSHIP_SCRIPT: &str = r#"
var element = document.querySelector(arguments[0]);
if (!element) {
    return [];
}
return element.classList.contains(arguments[1]) === arguments[2] ? [element] : [];
"#;

/// `arguments`: selector, regex source, whether the text must match, regex flags.
pub const TEXT_MATCH_SCRIPT: &str = r#"
var element = document.querySelector(arguments[0]);
if (!element) {
    return [];
}
var matches = new RegExp(arguments[1], arguments[3]).test(element.textContent);
return matches === arguments[2] ? [element] : [];
"#;

pub fn class_membership(selector: &str, class_name: &str, present: bool) -> ScriptCall {
    ScriptCall::new(
        CLASS_MEMBERSHIP_SCRIPT,
        vec![json!(selector), json!(class_name), json!(present)],
    )
}

pub fn text_match(selector: &str, pattern: &Pattern, present: bool) -> ScriptCall {
    ScriptCall::new(
        TEXT_MATCH_SCRIPT,
        vec![
            json!(selector),
            json!(pattern.source()),
            json!(present),
            json!(pattern.flags()),
        ],
    )
}
