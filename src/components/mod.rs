//! UI components built with Leptos.
//!
//! - [`Toolbar`] - Title bar with authenticate/upload actions
//! - [`Pager`] - First/previous/next controls
//! - [`ImageGrid`] - Thumbnail grid of the current page
//! - [`TagsBanner`], [`Messages`], [`LicenseFooter`] - Page furniture
//! - [`dialogs`] - Authentication and upload modals
//! - [`icons`] - Centralized icon definitions (change theme here)

mod banner;
pub mod dialogs;
mod grid;
pub mod icons;
mod pager;
mod toolbar;

pub use banner::{LicenseFooter, Messages, TagsBanner};
pub use dialogs::{AuthDialog, UploadDialog};
pub use grid::ImageGrid;
pub use pager::Pager;
pub use toolbar::Toolbar;
