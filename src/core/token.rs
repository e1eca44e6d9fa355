//! Bearer token storage scoped to the browser tab.
//!
//! The token lives in sessionStorage, so it survives reloads but is
//! neither persisted past the tab's lifetime nor shared with other tabs.

use crate::config::TOKEN_STORAGE_KEY;
use crate::core::error::TokenStoreError;
use crate::utils::dom;

/// Storage for the session's bearer token.
///
/// `get` never fails: a missing token is an empty string.
pub trait TokenStore {
    fn set(&self, token: &str) -> Result<(), TokenStoreError>;
    fn get(&self) -> String;
    fn clear(&self) -> Result<(), TokenStoreError>;

    /// Whether a non-empty token is present.
    fn is_authenticated(&self) -> bool {
        !self.get().is_empty()
    }
}

/// sessionStorage-backed token store.
#[derive(Clone, Debug)]
pub struct SessionTokenStore {
    key: &'static str,
}

impl SessionTokenStore {
    pub fn new() -> Self {
        Self {
            key: TOKEN_STORAGE_KEY,
        }
    }
}

impl Default for SessionTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for SessionTokenStore {
    fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        let storage = dom::session_storage().ok_or(TokenStoreError::StorageUnavailable)?;
        storage
            .set_item(self.key, token)
            .map_err(|_| TokenStoreError::WriteFailed)
    }

    fn get(&self) -> String {
        dom::session_storage()
            .and_then(|s| s.get_item(self.key).ok().flatten())
            .unwrap_or_default()
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let storage = dom::session_storage().ok_or(TokenStoreError::StorageUnavailable)?;
        storage
            .remove_item(self.key)
            .map_err(|_| TokenStoreError::RemoveFailed)
    }
}
