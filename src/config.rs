//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, shown in the page header and prefixed to console logs.
pub const APP_NAME: &str = "recon-upload";

/// Page heading above the upload form.
pub const PAGE_TITLE: &str = "Upload reconciliation files";

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Upload Form
// =============================================================================

/// Upload form settings.
///
/// The picker is a plain form field; submitting the form is handled by the
/// browser and the server, not by this application.
pub mod form {
    /// Field name the server reads the file list from.
    pub const FIELD_NAME: &str = "files";
    /// Form action. Empty posts back to the current page.
    pub const ACTION: &str = "";
    pub const METHOD: &str = "post";
    pub const ENCTYPE: &str = "multipart/form-data";
    /// Submit button label.
    pub const SUBMIT_LABEL: &str = "Upload";
}

// =============================================================================
// Drop Zone
// =============================================================================

/// Drop-zone text and affordance colours.
pub mod dropzone {
    /// Prompt shown inside the drop-zone.
    pub const PROMPT: &str = "Drag & drop files here, or click to browse";

    /// Border colour while no drag hovers the zone.
    pub const RESTING_BORDER: &str = "#cbd5e1";
    /// Background colour while no drag hovers the zone.
    pub const RESTING_BACKGROUND: &str = "#ffffff";

    /// Border colour while a drag hovers the zone.
    pub const ACTIVE_BORDER: &str = "#2563eb";
    /// Background colour while a drag hovers the zone.
    pub const ACTIVE_BACKGROUND: &str = "#eff6ff";

    /// Extensions shown with the spreadsheet icon in the preview list.
    pub const SPREADSHEET_EXTENSIONS: &[&str] = &["csv", "xls", "xlsx", "xlsb"];
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
