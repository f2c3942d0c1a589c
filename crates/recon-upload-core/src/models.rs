//! Selected file data types.

use serde::{Deserialize, Serialize};

use crate::format;

/// Name and byte size of one selected file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Lower-cased extension after the last dot, or `""` when there is none.
    pub fn extension(&self) -> String {
        format::extension(&self.name)
    }
}

/// Ordered set of selected files, as held by the file picker.
///
/// Always replaced as a whole; there is no API for editing it in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSelection(Vec<FileDescriptor>);

impl FileSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileDescriptor> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[FileDescriptor] {
        &self.0
    }
}

impl From<Vec<FileDescriptor>> for FileSelection {
    fn from(files: Vec<FileDescriptor>) -> Self {
        Self(files)
    }
}

impl FromIterator<FileDescriptor> for FileSelection {
    fn from_iter<I: IntoIterator<Item = FileDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FileSelection {
    type Item = &'a FileDescriptor;
    type IntoIter = std::slice::Iter<'a, FileDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Reconciliation side a file is submitted as.
///
/// The first file in a selection is side A, every later one side B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileSlot {
    A,
    B,
}

impl FileSlot {
    pub fn for_index(index: usize) -> Self {
        if index == 0 { Self::A } else { Self::B }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::A => "File A",
            Self::B => "File B",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_preserves_order() {
        let selection: FileSelection = vec![
            FileDescriptor::new("b.csv", 1),
            FileDescriptor::new("a.csv", 2),
        ]
        .into();
        let names: Vec<_> = selection.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b.csv", "a.csv"]);
    }

    #[test]
    fn test_empty_selection() {
        let selection = FileSelection::empty();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn test_slot_for_index() {
        assert_eq!(FileSlot::for_index(0), FileSlot::A);
        assert_eq!(FileSlot::for_index(1), FileSlot::B);
        assert_eq!(FileSlot::for_index(7), FileSlot::B);
        assert_eq!(FileSlot::A.label(), "File A");
    }

    #[test]
    fn test_selection_is_transparent_json() {
        let selection: FileSelection = vec![FileDescriptor::new("a.txt", 2048)].into();
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"[{"name":"a.txt","size":2048}]"#);
    }
}
