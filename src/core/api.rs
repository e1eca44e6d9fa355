//! Typed client for the gallery server's REST contract.
//!
//! [`Transport`] is the seam between the session core and the network;
//! the browser uses [`crate::utils::FetchTransport`], tests script their own.

use std::fmt;
use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::error::GalleryError;
use crate::models::wire::{
    AuthenticateRequest, AuthenticateResponse, ListRequest, ListResponse, UploadRequest,
};

/// HTTP methods used by the gallery API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
        }
    }
}

/// Sends a request body and yields the success response body.
///
/// Non-success responses must map to [`GalleryError::Api`] with the raw
/// body; failures without a response map to [`GalleryError::Transport`].
pub trait Transport {
    fn send(
        &self,
        method: Method,
        url: &str,
        body: String,
    ) -> impl Future<Output = Result<String, GalleryError>>;
}

/// Gallery API endpoints bound to a server base URL.
pub struct GalleryApi<T> {
    transport: T,
    base: String,
}

impl<T: Transport> GalleryApi<T> {
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Server base URL without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `POST /list`
    pub async fn list(&self, request: &ListRequest) -> Result<ListResponse, GalleryError> {
        self.call(Method::Post, "/list", request).await
    }

    /// `POST /authenticate`
    pub async fn authenticate(&self, secret: &str) -> Result<AuthenticateResponse, GalleryError> {
        let request = AuthenticateRequest {
            secret: secret.to_string(),
        };
        self.call(Method::Post, "/authenticate", &request).await
    }

    /// `PUT /upload`; the success body is opaque.
    pub async fn upload(&self, request: &UploadRequest) -> Result<(), GalleryError> {
        let body = encode(request)?;
        self.transport
            .send(Method::Put, &self.url("/upload"), body)
            .await
            .map(|_| ())
    }

    async fn call<Req, Rsp>(&self, method: Method, path: &str, request: &Req) -> Result<Rsp, GalleryError>
    where
        Req: Serialize,
        Rsp: DeserializeOwned,
    {
        let body = encode(request)?;
        let text = self.transport.send(method, &self.url(path), body).await?;
        serde_json::from_str(&text).map_err(|e| GalleryError::Decode(e.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn encode<Req: Serialize>(request: &Req) -> Result<String, GalleryError> {
    serde_json::to_string(request).map_err(|e| GalleryError::Encode(e.to_string()))
}
