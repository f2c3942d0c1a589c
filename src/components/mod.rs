//! UI components built with Leptos.
//!
//! - [`dropzone`] - File selection drop-zone with preview list
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod dropzone;
pub mod icons;

pub use dropzone::{DropZone, PreviewList};
