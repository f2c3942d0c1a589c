//! Browser-backed picker and preview surface.
//!
//! [`InputPicker`] wraps the hidden `<input type="file">`, which holds the
//! authoritative selection. [`SignalSurface`] keeps the rendered rows and the
//! drop-zone affordance in Leptos signals.

use leptos::html;
use leptos::prelude::*;
use recon_upload_core::{
    Affordance, FileDescriptor, FilePicker, FileSelection, FileSet, PreviewRow, PreviewSurface,
};
use web_sys::FileList;

use crate::error::PickerError;
use crate::utils::log;

/// Native browser file list, as carried by the picker or a drop payload.
#[derive(Clone, Debug)]
pub struct NativeFiles(pub FileList);

impl FileSet for NativeFiles {
    fn describe(&self) -> FileSelection {
        describe_file_list(&self.0)
    }
}

/// Read name and size of every file in `list`, in list order.
pub fn describe_file_list(list: &FileList) -> FileSelection {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| FileDescriptor::new(file.name(), file.size() as u64))
        .collect()
}

/// The hidden file input.
#[derive(Clone, Copy)]
pub struct InputPicker {
    input: NodeRef<html::Input>,
}

impl InputPicker {
    pub fn new(input: NodeRef<html::Input>) -> Self {
        Self { input }
    }

    /// Replace the input's file list.
    pub fn write(&self, files: &FileList) -> Result<(), PickerError> {
        let input = self.input.get_untracked().ok_or(PickerError::NotMounted)?;
        input.set_files(Some(files));
        Ok(())
    }
}

impl FilePicker for InputPicker {
    type Files = NativeFiles;

    fn open_dialog(&self) {
        if let Some(input) = self.input.get_untracked() {
            input.click();
        }
    }

    fn held(&self) -> FileSelection {
        self.input
            .get_untracked()
            .and_then(|input| input.files())
            .map(|list| describe_file_list(&list))
            .unwrap_or_default()
    }

    fn hold(&self, files: &NativeFiles) {
        if let Err(e) = self.write(&files.0) {
            log::warn(&e.to_string());
        }
    }
}

/// Rows and affordance held in signals, rendered by the drop-zone view.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    pub rows: RwSignal<Vec<PreviewRow>>,
    pub affordance: RwSignal<Affordance>,
}

impl SignalSurface {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            affordance: RwSignal::new(Affordance::Resting),
        }
    }
}

impl Default for SignalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewSurface for SignalSurface {
    fn replace_rows(&self, rows: Vec<PreviewRow>) {
        self.rows.set(rows);
    }

    fn set_affordance(&self, affordance: Affordance) {
        self.affordance.set(affordance);
    }
}
