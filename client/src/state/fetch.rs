//! Resilient fetch: load remote content once, fall back to fixed data.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery and testimonial sections both follow the same contract:
//! start in `loading`, run their request(s) once, and settle with either the
//! response or the fixtures from `content::fallback`. Failures are logged and
//! otherwise invisible; the only observable difference is which data set
//! ends up on screen.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use content::{GalleryItem, Testimonial, fallback};

use crate::net::api::{ApiError, SiteApi};

/// Skeleton blocks shown while a section is loading.
pub const PLACEHOLDER_COUNT: usize = 4;

/// Items plus a loading flag. Starts loading and settles exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchState<T> {
    pub items: Vec<T>,
    pub loading: bool,
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), loading: true }
    }

    /// Populate the items and stop loading. Returns `false` (and leaves the
    /// state untouched) if the state already settled.
    pub fn settle(&mut self, items: Vec<T>) -> bool {
        if !self.loading {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    /// Number of skeleton blocks to render right now.
    #[must_use]
    pub fn placeholder_slots(&self) -> usize {
        if self.loading { PLACEHOLDER_COUNT } else { 0 }
    }

    /// Items paired with a list key of `(position, id)`. Unique even when
    /// the backend repeats an id.
    pub fn rows(&self, id: impl Fn(&T) -> &str) -> Vec<(RowKey, T)>
    where
        T: Clone,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ((index, id(item).to_owned()), item.clone()))
            .collect()
    }
}

/// Render key for one row of a settled list.
pub type RowKey = (usize, String);

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// How the gallery section refreshes its data on mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryRefresh {
    /// Single `GET /api/gallery`.
    #[default]
    FetchOnly,
    /// `DELETE /api/gallery`, `POST /api/seed`, then `GET /api/gallery`.
    /// Wipes shared backend state on every page view; only for demo builds.
    ReseedThenFetch,
}

/// Use the response on success, the fixtures on any failure.
fn or_fallback<T>(what: &str, result: Result<Vec<T>, ApiError>, fallback: fn() -> Vec<T>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            leptos::logging::warn!("error fetching {what}: {e}; showing fallback");
            fallback()
        }
    }
}

/// Testimonials from the backend, or the four fallback reviews.
pub async fn load_testimonials<A: SiteApi>(api: &A) -> Vec<Testimonial> {
    or_fallback("testimonials", api.list_testimonials().await, fallback::testimonials)
}

/// Gallery projects from the backend, or the nine fallback projects.
pub async fn load_gallery<A: SiteApi>(api: &A, refresh: GalleryRefresh) -> Vec<GalleryItem> {
    or_fallback("gallery", fetch_gallery(api, refresh).await, fallback::gallery)
}

/// The gallery request chain. Steps run strictly in order; the first failure
/// aborts the rest.
async fn fetch_gallery<A: SiteApi>(api: &A, refresh: GalleryRefresh) -> Result<Vec<GalleryItem>, ApiError> {
    if refresh == GalleryRefresh::ReseedThenFetch {
        api.clear_gallery().await?;
        api.seed().await?;
    }
    api.list_gallery().await
}
