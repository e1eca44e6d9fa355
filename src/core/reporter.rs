//! Uniform user-facing error messages.
//!
//! Every failure shown to the user goes through [`render`], which never
//! fails and always yields a displayable line:
//!
//! - `Error: <message> (<code>)` when the server sent a structured body
//! - `Error: unknown (<status text>)` when it did not
//! - the validation message itself for local failures
//! - `Error: unknown (<storage failure>)` when the token could not be kept

use crate::core::error::GalleryError;
use crate::models::wire::ApiErrorBody;

/// Map any failure to the text shown in the error slot.
pub fn render(err: &GalleryError) -> String {
    match err {
        GalleryError::Transport { status_text } => unknown(status_text),
        GalleryError::Api {
            status,
            status_text,
            body,
        } => match parse_error_body(body) {
            Some(api) => format!("Error: {} ({})", api.message, api.code),
            None => unknown(&status_label(*status, status_text)),
        },
        GalleryError::Encode(_) => unknown("malformed request"),
        GalleryError::Decode(_) => unknown("malformed response"),
        GalleryError::Validation(validation) => validation.to_string(),
        GalleryError::TokenStore(storage) => unknown(&storage.to_string()),
    }
}

/// Parse a structured `{code, message}` error body, if there is one.
pub fn parse_error_body(body: &str) -> Option<ApiErrorBody> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str(body).ok()
}

fn unknown(status_text: &str) -> String {
    format!("Error: unknown ({})", status_text)
}

/// Browsers report an empty status text over HTTP/2.
fn status_label(status: u16, status_text: &str) -> String {
    if status_text.trim().is_empty() {
        status.to_string()
    } else {
        status_text.to_string()
    }
}
