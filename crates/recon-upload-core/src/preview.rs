//! Preview list rows.

use serde::Serialize;

use crate::format::format_kib;
use crate::models::{FileDescriptor, FileSelection, FileSlot};

/// Separator between name and size in a row's display text.
pub const ROW_SEPARATOR: &str = " — ";

/// One rendered line of the preview list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    /// File name, verbatim.
    pub name: String,
    /// Size in kibibytes, e.g. "2.0 KB".
    pub size: String,
    pub slot: FileSlot,
    pub extension: String,
}

impl PreviewRow {
    fn from_descriptor(index: usize, file: &FileDescriptor) -> Self {
        Self {
            name: file.name.clone(),
            size: format_kib(file.size),
            slot: FileSlot::for_index(index),
            extension: file.extension(),
        }
    }

    /// Row text as shown to the user: `"{name} — {size}"`.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.name, ROW_SEPARATOR, self.size)
    }
}

/// Build one row per file, in selection order.
pub fn build_rows(selection: &FileSelection) -> Vec<PreviewRow> {
    selection
        .iter()
        .enumerate()
        .map(|(i, file)| PreviewRow::from_descriptor(i, file))
        .collect()
}
