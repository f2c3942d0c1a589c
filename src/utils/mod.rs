//! Browser utility modules.
//!
//! Provides:
//! - [`dom`] - Window, document and element lookup
//! - [`log`] - Console logging with an application prefix

pub mod dom;
pub mod log;
