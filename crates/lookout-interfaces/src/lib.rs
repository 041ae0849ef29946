//! # Lookout Interfaces (Remote Session Contract)
//!
//! This crate defines what the lookout wait helpers need from a remote
//! browser session: the protocol-agnostic `Session` trait, the error type
//! (`ApiError`) it reports, and the small data structures passed across it.
//!
//! Concrete backends (CDP, WebDriver, ...) implement `Session`; the wait
//! helpers only ever talk to this trait.

mod common;
mod error;
mod session;

pub use common::*;
pub use error::*;
pub use session::*;

// Script arguments travel as JSON values.
pub use serde_json::Value;
