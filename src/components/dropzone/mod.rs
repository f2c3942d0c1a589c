//! File selection drop-zone.
//!
//! Components:
//! - [`DropZone`] - Click/drop target with hidden picker and preview
//! - [`PreviewList`] - Rebuilt list of selected file names and sizes
//!
//! [`InputPicker`] and [`SignalSurface`] connect the platform-independent
//! controller to the DOM.

#[allow(clippy::module_inception)]
mod dropzone;
mod picker;
mod preview_list;

pub use dropzone::{DropZone, affordance_colors};
pub use picker::{InputPicker, NativeFiles, SignalSurface, describe_file_list};
pub use preview_list::PreviewList;
