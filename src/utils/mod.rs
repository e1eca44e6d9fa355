//! Utility modules for web, DOM, and URL operations.
//!
//! Provides:
//! - [`FetchTransport`] - JSON requests over the Fetch API
//! - [`BrowserFile`] - Reading files picked by the user
//! - [`insert_param`], [`encode_component`], [`query_param`] - URL helpers

pub mod dom;
mod fetch;
mod files;
mod url;

pub use fetch::FetchTransport;
pub use files::BrowserFile;
pub use url::{encode_component, insert_param, query_param};
