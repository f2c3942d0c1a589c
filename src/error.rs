//! Error types for the browser-facing layer.
//!
//! - [`MountError`] - Locating the element the app mounts into
//! - [`PickerError`] - Writing a file set into the picker input

use thiserror::Error;

/// Errors raised while mounting the application.
#[derive(Debug, Clone, Error)]
pub enum MountError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Window has no document
    #[error("Document not available")]
    NoDocument,
    /// Mount element missing from the page
    #[error("Mount element #{0} not found")]
    ElementNotFound(String),
}

/// Errors raised by the file-picker input.
#[derive(Debug, Clone, Error)]
pub enum PickerError {
    /// The input element has not been mounted yet
    #[error("File picker is not mounted")]
    NotMounted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MountError::ElementNotFound("app".into()).to_string(),
            "Mount element #app not found"
        );
        assert_eq!(PickerError::NotMounted.to_string(), "File picker is not mounted");
    }
}
