//! Selection preview controller.
//!
//! Wires the drop-zone interactions to a [`FilePicker`], which holds the
//! authoritative selection, and a [`PreviewSurface`], which shows the rows
//! and the drop-zone affordance. Every handler runs synchronously: the
//! preview is fully rebuilt before the handler returns.

use crate::models::FileSelection;
use crate::preview::{PreviewRow, build_rows};

/// Visual state of the drop-zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Affordance {
    /// No drag over the zone.
    #[default]
    Resting,
    /// A drag is hovering the zone.
    Active,
}

/// Result of handling a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dropped files replaced the picker selection.
    Accepted(usize),
    /// The payload carried no files; nothing changed.
    Ignored,
}

/// A platform file set that can be described as a [`FileSelection`].
pub trait FileSet {
    fn describe(&self) -> FileSelection;
}

impl FileSet for FileSelection {
    fn describe(&self) -> FileSelection {
        self.clone()
    }
}

/// The native file-picker control.
pub trait FilePicker {
    /// Platform file set the picker can hold.
    type Files: FileSet;

    /// Open the OS file chooser.
    fn open_dialog(&self);

    /// Currently held selection.
    fn held(&self) -> FileSelection;

    /// Replace the held selection.
    fn hold(&self, files: &Self::Files);
}

/// Where rows and the drop-zone affordance are displayed.
pub trait PreviewSurface {
    /// Discard all current rows and show `rows` instead.
    fn replace_rows(&self, rows: Vec<PreviewRow>);

    fn set_affordance(&self, affordance: Affordance);
}

/// Click, drag and drop wiring for one drop-zone.
///
/// Holds no state of its own: the selection lives in the picker and the
/// rows in the surface.
#[derive(Clone, Copy, Debug)]
pub struct SelectionPreviewController<P, S> {
    picker: P,
    surface: S,
}

impl<P: FilePicker, S: PreviewSurface> SelectionPreviewController<P, S> {
    pub fn new(picker: P, surface: S) -> Self {
        Self { picker, surface }
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Drop-zone clicked: open the picker dialog.
    pub fn activate_click_relay(&self) {
        self.picker.open_dialog();
    }

    /// Picker selection changed through its dialog.
    pub fn on_picker_change(&self, selection: &FileSelection) {
        self.render_list(selection);
    }

    /// Drag hovering the zone. Callers must also suppress the platform default.
    pub fn on_drag_over(&self) {
        self.surface.set_affordance(Affordance::Active);
    }

    pub fn on_drag_leave(&self) {
        self.surface.set_affordance(Affordance::Resting);
    }

    /// Drag released over the zone. Callers must also suppress the platform
    /// default.
    ///
    /// A non-empty file set becomes the picker selection and is rendered;
    /// anything else leaves picker and preview untouched.
    pub fn on_drop(&self, files: Option<&P::Files>) -> DropOutcome {
        self.surface.set_affordance(Affordance::Resting);

        let Some(files) = files else {
            return DropOutcome::Ignored;
        };
        let selection = files.describe();
        if selection.is_empty() {
            return DropOutcome::Ignored;
        }

        self.picker.hold(files);
        self.render_list(&selection);
        DropOutcome::Accepted(selection.len())
    }

    /// Rebuild the preview from `selection`, one row per file in order.
    pub fn render_list(&self, selection: &FileSelection) {
        self.surface.replace_rows(build_rows(selection));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockPicker, RecordingSurface};
    use crate::models::FileDescriptor;

    fn controller() -> SelectionPreviewController<MockPicker, RecordingSurface> {
        SelectionPreviewController::new(MockPicker::default(), RecordingSurface::default())
    }

    #[test]
    fn test_click_opens_dialog() {
        let c = controller();
        c.activate_click_relay();
        assert_eq!(c.picker().dialog_opens(), 1);
    }

    #[test]
    fn test_drag_over_then_leave() {
        let c = controller();
        c.on_drag_over();
        c.on_drag_over();
        assert_eq!(c.surface().affordance(), Affordance::Active);
        c.on_drag_leave();
        assert_eq!(c.surface().affordance(), Affordance::Resting);
    }

    #[test]
    fn test_drop_without_payload_is_ignored() {
        let c = controller();
        c.on_drag_over();
        assert_eq!(c.on_drop(None), DropOutcome::Ignored);
        assert_eq!(c.surface().affordance(), Affordance::Resting);
        assert_eq!(c.surface().renders(), 0);
    }

    #[test]
    fn test_drop_writes_picker() {
        let c = controller();
        let files: FileSelection = vec![FileDescriptor::new("a.txt", 2048)].into();
        assert_eq!(c.on_drop(Some(&files)), DropOutcome::Accepted(1));
        assert_eq!(c.picker().held(), files);
        assert_eq!(c.surface().texts(), ["a.txt — 2.0 KB"]);
    }
}
