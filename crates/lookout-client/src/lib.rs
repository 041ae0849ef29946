//! # Lookout Client Library
//!
//! Decorates a remote browser [`Session`] with helpers that wait for DOM
//! conditions (elements appearing, disappearing, becoming visible, gaining a
//! class or some text, the URL changing) plus a few interaction shortcuts.
//!
//! ```ignore
//! let driver = lookout_client::extend(session, Options::new("http://localhost:9000"));
//! driver.load("/widgets").await?;
//! let row = driver.wait_for_element_to_have_text("#widgets tr", "Sprocket", None).await?;
//! ```
//!
//! Every wait first lets any loader overlay disappear (see
//! [`Options::with_loader_selector`]) so it never matches content that is
//! about to be replaced.

// Re-export the session contract for implementors and callers
pub use lookout_interfaces::{ApiError, ElementHandle, ScriptCall, Session, Value};

// Conditions and their building blocks, for custom waits
pub use lookout_wait::{
    ClassMembership, Condition, ElementLocated, ElementVisibility, ElementsAbsent, Pattern, Poller,
    TextMatches, UrlMatches, WaitError,
};

pub use lookout_core::{load_config, setup_logging, Config, CoreError};

pub use regex::Regex;

mod driver;
mod error;
mod options;

pub use driver::{extend, WaitDriver};
pub use error::ClientError;
pub use options::Options;
