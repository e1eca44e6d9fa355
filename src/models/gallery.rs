//! Pagination and filter state of the gallery view.
//!
//! Every transition is a pure function returning the next state. Issuing
//! the list request that reflects the new state is the caller's job.

use super::AccessTier;

/// Pagination direction requested by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    First,
    Prev,
    Next,
}

/// Current access tier, page number and tag filter.
///
/// `page` is 1-based and never drops below 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    access_tier: AccessTier,
    page: u32,
    tags: Vec<String>,
}

impl GalleryState {
    /// Initial state: public tier, first page, with the page-load tag filter.
    ///
    /// Tags are fixed for the lifetime of the page view; changing them
    /// requires a reload.
    pub fn new(tags: Vec<String>) -> Self {
        Self {
            access_tier: AccessTier::Public,
            page: 1,
            tags,
        }
    }

    pub fn access_tier(&self) -> AccessTier {
        self.access_tier
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// State after a successful authentication: private tier, first page.
    pub fn authenticated(&self) -> Self {
        Self {
            access_tier: AccessTier::Private,
            page: 1,
            tags: self.tags.clone(),
        }
    }

    /// State after a pagination action.
    ///
    /// `Next` is unconditional; the server answers out-of-range pages with
    /// an empty listing.
    pub fn navigated(&self, navigation: Navigation) -> Self {
        let page = match navigation {
            Navigation::First => 1,
            Navigation::Prev => self.page.saturating_sub(1).max(1),
            Navigation::Next => self.page.saturating_add(1),
        };
        Self {
            page,
            ..self.clone()
        }
    }

    /// State after an upload batch was dispatched: back to the first page.
    pub fn upload_completed(&self) -> Self {
        Self {
            page: 1,
            ..self.clone()
        }
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Which pagination controls are enabled for a rendered page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Affordances {
    pub can_go_first: bool,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

impl Affordances {
    pub fn for_page(page: u32, has_next_page: bool) -> Self {
        Self {
            can_go_first: page > 1,
            can_go_prev: page > 1,
            can_go_next: has_next_page,
        }
    }
}
