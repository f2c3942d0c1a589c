//! In-memory picker and surface for tests.

use std::cell::{Cell, RefCell};

use crate::controller::{Affordance, FilePicker, PreviewSurface};
use crate::models::FileSelection;
use crate::preview::PreviewRow;

/// File picker that keeps its selection in memory and counts dialog opens.
#[derive(Debug, Default)]
pub struct MockPicker {
    held: RefCell<FileSelection>,
    opens: Cell<usize>,
}

impl MockPicker {
    /// Number of times the dialog was opened.
    pub fn dialog_opens(&self) -> usize {
        self.opens.get()
    }

    /// Simulate the user completing the dialog with `selection`.
    pub fn choose(&self, selection: FileSelection) {
        *self.held.borrow_mut() = selection;
    }
}

impl FilePicker for MockPicker {
    type Files = FileSelection;

    fn open_dialog(&self) {
        self.opens.set(self.opens.get() + 1);
    }

    fn held(&self) -> FileSelection {
        self.held.borrow().clone()
    }

    fn hold(&self, files: &FileSelection) {
        *self.held.borrow_mut() = files.clone();
    }
}

/// Surface that records the last rows and affordance it was given.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    rows: RefCell<Vec<PreviewRow>>,
    affordance: Cell<Affordance>,
    renders: Cell<usize>,
}

impl RecordingSurface {
    pub fn rows(&self) -> Vec<PreviewRow> {
        self.rows.borrow().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.rows.borrow().iter().map(PreviewRow::text).collect()
    }

    pub fn affordance(&self) -> Affordance {
        self.affordance.get()
    }

    /// Number of full rebuilds performed.
    pub fn renders(&self) -> usize {
        self.renders.get()
    }
}

impl PreviewSurface for RecordingSurface {
    fn replace_rows(&self, rows: Vec<PreviewRow>) {
        *self.rows.borrow_mut() = rows;
        self.renders.set(self.renders.get() + 1);
    }

    fn set_affordance(&self, affordance: Affordance) {
        self.affordance.set(affordance);
    }
}
