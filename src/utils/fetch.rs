//! Network transport over the browser Fetch API.
//!
//! Sends JSON bodies to the gallery server through `gloo-net`. In-flight
//! requests are never cancelled or timed out here; the browser's own network
//! timeout is the only one that applies.

use gloo_net::http::Request;
use leptos::logging::warn;

use crate::core::api::{Method, Transport};
use crate::core::error::GalleryError;

/// Status text reported when the browser rejects a request without a
/// response (connection refused, CORS, network timeout).
const NETWORK_FAILURE: &str = "error";

/// Browser Fetch API transport.
#[derive(Clone, Debug, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for FetchTransport {
    async fn send(&self, method: Method, url: &str, body: String) -> Result<String, GalleryError> {
        // No Content-Type header: a plain text body keeps POSTs CORS-simple.
        let builder = match method {
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
        };
        let request = builder
            .body(body)
            .map_err(|e| GalleryError::Encode(e.to_string()))?;

        let response = request.send().await.map_err(|err| {
            warn!("{} {} failed: {}", method, url, err);
            GalleryError::Transport {
                status_text: NETWORK_FAILURE.to_string(),
            }
        })?;

        let status = response.status();
        let status_text = response.status_text();
        let text = response.text().await.unwrap_or_default();

        if !response.ok() {
            return Err(GalleryError::Api {
                status,
                status_text,
                body: text,
            });
        }

        Ok(text)
    }
}
