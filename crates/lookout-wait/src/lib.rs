//! # Lookout Wait
//!
//! Builds named conditions over a remote browser session and polls them until
//! they hold or their time budget runs out.
//!
//! Each wait is one [`Condition`] handed to a [`Poller`]. Failing to satisfy
//! the condition in time is reported as [`WaitError::Timeout`] carrying the
//! condition's description; session failures pass through untouched.

pub mod condition;
pub mod error;
pub mod pattern;
pub mod poll;
pub mod script;

pub use condition::{
    ClassMembership, Condition, ElementLocated, ElementVisibility, ElementsAbsent, TextMatches,
    UrlMatches,
};
pub use error::WaitError;
pub use pattern::Pattern;
pub use poll::Poller;
