//! Upload jobs and their per-file outcomes.

use super::AccessTier;
use crate::core::error::GalleryError;

/// A single file prepared for submission.
///
/// Lives only until its upload request resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadJob {
    pub raw_bytes: Vec<u8>,
    /// Base64 of `raw_bytes`.
    pub payload: String,
    /// Hex SHA-256 computed over `payload`, not over `raw_bytes`.
    pub checksum: String,
    pub target_access_tier: AccessTier,
    pub tags: Vec<String>,
    pub derived_file_name: String,
}

/// Result of uploading one file of a batch.
#[derive(Debug)]
pub struct UploadOutcome {
    /// 1-based position of the file in the user's selection.
    pub sequence: usize,
    pub total: usize,
    pub original_name: String,
    /// Derived storage name on success.
    pub result: Result<String, GalleryError>,
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn success_message(&self) -> String {
        format!(
            "Image {} out of {} uploaded successfully.",
            self.sequence, self.total
        )
    }
}
