//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

// =============================================================================
// Browser Location
// =============================================================================

/// Current query string, including the leading '?'.
pub fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Hostname the page was served from; empty for `file://` pages.
pub fn location_hostname() -> String {
    window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

/// Reload the page at its own path, dropping the query string.
pub fn reload_without_query() {
    if let Some(window) = window() {
        let location = window.location();
        if let Ok(path) = location.pathname() {
            let _ = location.set_href(&path);
        }
    }
}
