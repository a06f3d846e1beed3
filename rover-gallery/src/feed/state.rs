///! Feed state and its reducer

use rover_common::Photo;

use crate::filter::{Filter, FilterUpdate};

/// What the presentation layer renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    pub photos: Vec<Photo>,
    pub loading: bool,
    pub error: Option<String>,
    pub has_more: bool,
    /// Only set by a fresh fetch that came back empty
    pub no_results: bool,
    /// Welcome screen still showing
    pub first_access: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            loading: false,
            error: None,
            has_more: true,
            no_results: false,
            first_access: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Loading,
    Success,
    Empty,
    Error,
}

impl FeedState {
    pub fn phase(&self) -> FeedPhase {
        if self.error.is_some() {
            FeedPhase::Error
        } else if self.loading {
            FeedPhase::Loading
        } else if self.no_results {
            FeedPhase::Empty
        } else if !self.photos.is_empty() {
            FeedPhase::Success
        } else {
            FeedPhase::Idle
        }
    }
}

/// Feed state plus the filter it was produced from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub feed: FeedState,
    pub filters: Filter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    SetLoading(bool),
    SetError(String),
    SetPhotos(Vec<Photo>),
    AddPhotos(Vec<Photo>),
    SetFilters(FilterUpdate),
    SetHasMore(bool),
    ResetPhotos,
    SetFirstAccess(bool),
    SetNoResults(bool),
}

pub fn reduce(mut state: GalleryState, action: FeedAction) -> GalleryState {
    let feed = &mut state.feed;
    match action {
        FeedAction::SetLoading(loading) => {
            feed.loading = loading;
            feed.no_results = false;
            if loading {
                feed.error = None;
            }
        }
        FeedAction::SetError(message) => {
            feed.error = Some(message);
            feed.loading = false;
            feed.no_results = false;
        }
        FeedAction::SetPhotos(photos) => {
            feed.no_results = photos.is_empty();
            feed.photos = photos;
            feed.loading = false;
            feed.error = None;
        }
        FeedAction::AddPhotos(photos) => {
            feed.photos.extend(photos);
            feed.loading = false;
            feed.error = None;
            feed.no_results = false;
        }
        FeedAction::SetFilters(update) => state.filters.apply(update),
        FeedAction::SetHasMore(has_more) => {
            feed.has_more = has_more;
            feed.loading = false;
        }
        FeedAction::ResetPhotos => {
            feed.photos.clear();
            feed.has_more = true;
            feed.no_results = false;
        }
        FeedAction::SetFirstAccess(first_access) => feed.first_access = first_access,
        FeedAction::SetNoResults(no_results) => feed.no_results = no_results,
    }
    state
}
