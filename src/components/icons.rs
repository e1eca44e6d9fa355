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
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuChevronsLeft as FirstPage, LuLock as Lock, LuLockOpen as Unlock, LuTag as Tag,
        LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronDoubleLeft as FirstPage, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsCloudArrowUp as Upload, BsLockFill as Lock,
        BsTagFill as Tag, BsUnlockFill as Unlock, BsXLg as Close,
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

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FIRST_PAGE, FirstPage);
themed_icon!(LOCK, Lock);
themed_icon!(UNLOCK, Unlock);
themed_icon!(UPLOAD, Upload);
themed_icon!(TAG, Tag);
themed_icon!(CLOSE, Close);
