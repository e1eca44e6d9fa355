//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AccessTier`] - Public/unlisted/private visibility classes
//! - [`GalleryState`], [`Navigation`], [`Affordances`] - Pagination and filter state
//! - [`ImageRecord`], [`ListResult`], [`GalleryPage`] - Listing results
//! - [`UploadJob`], [`UploadOutcome`] - Upload pipeline records
//! - [`wire`] - JSON bodies of the server's REST contract

mod access;
mod gallery;
mod image;
mod upload;
pub mod wire;

pub use access::AccessTier;
pub use gallery::{Affordances, GalleryState, Navigation};
pub use image::{GalleryPage, ImageLinks, ImageRecord, ListResult};
pub use upload::{UploadJob, UploadOutcome};
