//! Client-side session and synchronization core.
//!
//! This module provides:
//! - [`GallerySession`] driving pagination, authentication and uploads
//! - [`token`] bearer token persistence for the tab's lifetime
//! - [`list`] list requests, normalization and image links
//! - [`upload`] the checksummed per-file upload pipeline
//! - [`reporter`] the single mapping from failures to user-facing text
//!
//! Nothing here touches the DOM; the network and the UI are reached through
//! the [`api::Transport`] and [`GalleryView`] traits.

pub mod api;
pub mod error;
pub mod list;
pub mod query;
pub mod reporter;
mod session;
pub mod token;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::GalleryApi;
pub use session::{GallerySession, GalleryView};
pub use token::SessionTokenStore;
