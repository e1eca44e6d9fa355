//! Gallery query helpers: tag filter parsing, paged result interpretation
//! and stale-response tracking.

use std::cell::Cell;

use crate::config::TAGS_QUERY_PARAM;
use crate::core::list;
use crate::models::{Affordances, GalleryPage, ListResult};
use crate::utils::query_param;

/// Split a comma-separated tag list.
///
/// Entries are trimmed; empty entries and repeats are dropped, first
/// occurrence wins.
pub fn split_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Tag filter carried by the page's own query string (`?tags=a,b`).
pub fn tags_from_query(search: &str) -> Vec<String> {
    query_param(search, TAGS_QUERY_PARAM)
        .map(|tags| split_tags(&tags))
        .unwrap_or_default()
}

/// Banner text describing an active tag filter.
pub fn tags_banner(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(format!("Showing only images tagged with: {}.", tags.join(", ")))
}

/// Attach links and pagination affordances to a list result.
pub fn interpret(base: &str, page: u32, result: ListResult) -> GalleryPage {
    let links = result
        .images
        .iter()
        .map(|record| list::image_links(base, record))
        .collect();
    let affordances = Affordances::for_page(page, result.has_next_page);
    GalleryPage {
        page,
        result,
        links,
        affordances,
    }
}

/// Generation number of an issued list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic counter used to discard responses of superseded requests.
///
/// Only the most recently issued generation may render; an older response
/// is dropped even if it completes last.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next generation.
    pub fn begin(&self) -> Generation {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Generation(next)
    }

    pub fn is_latest(&self, generation: Generation) -> bool {
        self.latest.get() == generation.0
    }
}
