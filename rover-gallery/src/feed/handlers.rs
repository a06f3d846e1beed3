///! User-level actions layered on the orchestrator
///!
///! These carry the guards the UI applies before dispatching: the search
///! gate, the load-more visibility rules, and the first automatic fetch.

use thiserror::Error;

use super::orchestrator::PhotoFeed;
use crate::api::PhotoSource;
use crate::filter::{FilterUpdate, SelectorError, TemporalSelector, validate_selector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchBlocked {
    #[error(transparent)]
    Selector(#[from] SelectorError),
    #[error("a search is already running")]
    Busy,
}

impl<S: PhotoSource> PhotoFeed<S> {
    /// Whether the search action is currently enabled
    pub fn search_gate(&self) -> Result<TemporalSelector, SearchBlocked> {
        if self.loading() {
            return Err(SearchBlocked::Busy);
        }
        Ok(validate_selector(self.filters())?)
    }

    /// Fresh search from page 1. A blocked gate leaves state untouched.
    pub async fn search(&mut self) -> Result<(), SearchBlocked> {
        let selector = self.search_gate()?;
        tracing::info!(
            "Searching {} {:?} camera {}",
            self.filters().rover,
            selector,
            self.filters().camera
        );

        self.reset_photos();
        self.update_filters(FilterUpdate::page(1));
        self.fetch_photos(false).await;
        Ok(())
    }

    /// Whether a "load more" action is on offer
    pub fn can_load_more(&self) -> bool {
        self.has_more() && !self.loading() && !self.photos().is_empty()
    }

    /// Next page; returns false when the action is not on offer
    pub async fn load_more(&mut self) -> bool {
        if !self.can_load_more() {
            return false;
        }
        self.fetch_photos(true).await;
        true
    }

    /// Leave the welcome screen; the gallery fetches once if it has nothing to show
    pub async fn start_exploring(&mut self) {
        self.set_first_access(false);

        if self.photos().is_empty() && !self.loading() && !self.no_results() {
            self.fetch_photos(false).await;
        }
    }

    /// Re-run the cycle that failed, in the same mode
    pub async fn retry(&mut self) {
        let load_more = self.last_load_more();
        self.fetch_photos(load_more).await;
    }
}
