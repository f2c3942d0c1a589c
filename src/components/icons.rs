//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{LuFile as File, LuFileSpreadsheet as FileSpreadsheet, LuUpload as Upload};
}

mod bootstrap {
    pub use icondata::{
        BsCloudArrowUp as Upload, BsFileEarmark as File,
        BsFileEarmarkSpreadsheet as FileSpreadsheet,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(UPLOAD, Upload);
themed_icon!(FILE, File);
themed_icon!(FILE_SPREADSHEET, FileSpreadsheet);
