//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the toolbar.
pub const APP_TITLE: &str = "Gallery";

/// License notice rendered below the image grid.
pub const LICENSE_TEXT: &str = "Unless otherwise stated, all public contents of this gallery are original works, licensed for re-use under the terms of CC BY 4.0.";

// =============================================================================
// Network Configuration
// =============================================================================

/// Gallery API server used when the page is served over HTTP(S).
///
/// The server's CORS policy must allow the origin of this frontend.
pub const API_BASE: &str = "https://gallery.example.org";

/// Gallery API server used when the page is opened from a local file.
pub const LOCAL_API_BASE: &str = "http://127.0.0.1:18080";

/// Select the API base for the hostname the page was served from.
///
/// Pages opened from disk (`file://`) have an empty hostname.
pub fn api_base_for_host(hostname: &str) -> &'static str {
    if hostname.trim().is_empty() {
        LOCAL_API_BASE
    } else {
        API_BASE
    }
}

// =============================================================================
// Session Configuration
// =============================================================================

/// sessionStorage key for the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "gallery_bearer_token";

/// Page query string parameter carrying the comma-separated tag filter.
pub const TAGS_QUERY_PARAM: &str = "tags";

// =============================================================================
// Upload Configuration
// =============================================================================

/// Upload naming constants.
pub mod storage_name {
    /// Length of the random part of a derived storage name.
    pub const RANDOM_LEN: usize = 32;
    /// Alphabet the random part is drawn from.
    pub const ALPHABET: &[u8] = b"abcdef0123456789";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Number of thumbnails per grid row.
pub const GRID_COLUMNS: usize = 3;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_for_host() {
        assert_eq!(api_base_for_host(""), LOCAL_API_BASE);
        assert_eq!(api_base_for_host("  "), LOCAL_API_BASE);
        assert_eq!(api_base_for_host("gallery.example.org"), API_BASE);
        assert_eq!(api_base_for_host("localhost"), API_BASE);
    }

    #[test]
    fn test_storage_name_alphabet_is_lower_hex() {
        assert_eq!(storage_name::ALPHABET.len(), 16);
        assert!(
            storage_name::ALPHABET
                .iter()
                .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(c))
        );
    }
}
