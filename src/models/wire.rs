//! JSON bodies exchanged with the gallery server.
//!
//! Field names follow the server's REST contract exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AccessTier;

/// `POST /list` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListRequest {
    pub access_type: AccessTier,
    pub page: u32,
    /// Bearer token, empty when unauthenticated.
    pub token: String,
    pub tags: Vec<String>,
}

/// `POST /list` response body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub images: Option<Vec<ListedImage>>,
    #[serde(default)]
    pub next_page: bool,
}

/// One raw entry of a list response. Any field may be missing or null.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListedImage {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub access_path: Option<String>,
    #[serde(default)]
    pub image_token: Option<String>,
}

/// `POST /authenticate` request body.
#[derive(Clone, Debug, Serialize)]
pub struct AuthenticateRequest {
    pub secret: String,
}

/// `POST /authenticate` response body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthenticateResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// `PUT /upload` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UploadRequest {
    pub token: String,
    pub access_type: AccessTier,
    /// Base64 of the file contents.
    pub payload: String,
    /// Lowercase hex SHA-256 of `payload`.
    pub checksum: String,
    pub metadata: UploadMetadata,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UploadMetadata {
    pub file_name: String,
    pub tags: Vec<String>,
}

/// Structured error body returned by the server on failure.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

/// Error codes arrive either as numbers (`401`) or slugs (`"bad_file_name"`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Number(i64),
    Text(String),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(code) => write!(f, "{}", code),
            Self::Text(code) => write!(f, "{}", code),
        }
    }
}
