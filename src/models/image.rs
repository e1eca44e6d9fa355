//! Image listing results.

use super::Affordances;

/// A listed image, already validated to have a file name and access path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRecord {
    pub file_name: String,
    pub access_path: String,
    /// Pre-signed read token issued by the server for private images.
    pub image_token: Option<String>,
}

/// Normalized response of a list request, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListResult {
    pub images: Vec<ImageRecord>,
    pub has_next_page: bool,
}

/// Links for one grid tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLinks {
    /// Original rendition.
    pub full: String,
    /// Reduced-size rendition.
    pub thumbnail: String,
}

/// Everything the view needs to render one page of the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryPage {
    pub page: u32,
    pub result: ListResult,
    /// One entry per image in `result.images`, same order.
    pub links: Vec<ImageLinks>,
    pub affordances: Affordances,
}

impl GalleryPage {
    pub fn is_empty(&self) -> bool {
        self.result.images.is_empty()
    }
}
