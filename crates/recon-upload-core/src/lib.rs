//! Platform-independent core of the upload drop-zone.
//!
//! Provides:
//! - [`FileDescriptor`], [`FileSelection`], [`FileSlot`] - Selected file data
//! - [`format_kib`] - Byte to kibibyte display formatting
//! - [`PreviewRow`], [`build_rows`] - Preview list rows
//! - [`SelectionPreviewController`] - Click, drag and drop wiring over the
//!   [`FilePicker`] and [`PreviewSurface`] seams
//!
//! Nothing in this crate touches the DOM; the web crate supplies the
//! browser-backed picker and surface.

pub mod controller;
pub mod format;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod models;
pub mod preview;

pub use controller::{
    Affordance, DropOutcome, FilePicker, FileSet, PreviewSurface, SelectionPreviewController,
};
pub use format::{extension, format_kib};
pub use models::{FileDescriptor, FileSelection, FileSlot};
pub use preview::{PreviewRow, build_rows};
