///! Photo feed orchestrator
///!
///! Owns the session's filter and feed state. A fetch cycle is split into
///! begin (mark loading, snapshot the filter), run (network only) and
///! complete (reduce the outcome). Only the most recently issued cycle may
///! complete; older ones are discarded.

use rover_common::{Photo, Rover};

use super::state::{FeedAction, FeedState, GalleryState, reduce};
use crate::api::{FetchError, PhotoQuery, PhotoSource};
use crate::filter::{Filter, FilterUpdate};

/// Sol bound used when the manifest is unavailable
pub const DEFAULT_MAX_SOL: u32 = 4000;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch photos. Please try again.";

/// One issued fetch cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    load_more: bool,
    filter: Filter,
}

/// Result of the network half of a cycle
#[derive(Debug)]
pub enum FetchOutcome {
    SolOutOfRange { rover: Rover, sol: u32, max_sol: u32 },
    Photos(Vec<Photo>),
    Failed(FetchError),
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_load_more(&self) -> bool {
        self.load_more
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Network work for this cycle. Does not touch feed state.
    pub async fn run<S: PhotoSource + ?Sized>(&self, source: &S) -> FetchOutcome {
        let filter = &self.filter;

        // Sol bound only guards fresh sol searches
        if !self.load_more && filter.earth_date.is_none() {
            let max_sol = source
                .fetch_manifest(filter.rover)
                .await
                .map(|manifest| manifest.max_sol)
                .filter(|max_sol| *max_sol > 0)
                .unwrap_or(DEFAULT_MAX_SOL);

            if filter.sol > max_sol {
                return FetchOutcome::SolOutOfRange {
                    rover: filter.rover,
                    sol: filter.sol,
                    max_sol,
                };
            }
        }

        match source.fetch_photos(&PhotoQuery::from_filter(filter)).await {
            Ok(page) => FetchOutcome::Photos(page.photos),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

impl std::fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchOutcome::SolOutOfRange { rover, sol, max_sol } => write!(
                f,
                "Sol {} is not available. Maximum sol for {}: {}",
                sol, rover, max_sol
            ),
            FetchOutcome::Photos(photos) => write!(f, "{} photos", photos.len()),
            FetchOutcome::Failed(_) => write!(f, "{}", FETCH_ERROR_MESSAGE),
        }
    }
}

/// Session state owner. Construct once and hand out by reference.
pub struct PhotoFeed<S> {
    source: S,
    state: GalleryState,
    generation: u64,
    last_load_more: bool,
}

impl<S: PhotoSource> PhotoFeed<S> {
    pub fn new(source: S) -> Self {
        Self::with_filters(source, Filter::default())
    }

    pub fn with_filters(source: S, filters: Filter) -> Self {
        Self {
            source,
            state: GalleryState {
                filters,
                ..Default::default()
            },
            generation: 0,
            last_load_more: false,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn feed(&self) -> &FeedState {
        &self.state.feed
    }

    pub fn photos(&self) -> &[Photo] {
        &self.state.feed.photos
    }

    pub fn loading(&self) -> bool {
        self.state.feed.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.feed.error.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.state.feed.has_more
    }

    pub fn no_results(&self) -> bool {
        self.state.feed.no_results
    }

    pub fn first_access(&self) -> bool {
        self.state.feed.first_access
    }

    pub fn filters(&self) -> &Filter {
        &self.state.filters
    }

    /// Mode of the most recently issued cycle
    pub fn last_load_more(&self) -> bool {
        self.last_load_more
    }

    fn dispatch(&mut self, action: FeedAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.dispatch(FeedAction::SetFilters(update));
    }

    pub fn reset_photos(&mut self) {
        self.dispatch(FeedAction::ResetPhotos);
    }

    pub fn set_first_access(&mut self, value: bool) {
        self.dispatch(FeedAction::SetFirstAccess(value));
    }

    pub fn set_no_results(&mut self, value: bool) {
        self.dispatch(FeedAction::SetNoResults(value));
    }

    /// Start a cycle. Any cycle issued earlier becomes stale.
    pub fn begin_fetch(&mut self, load_more: bool) -> FetchTicket {
        self.generation += 1;
        self.last_load_more = load_more;
        self.dispatch(FeedAction::SetLoading(true));

        FetchTicket {
            generation: self.generation,
            load_more,
            filter: self.state.filters.clone(),
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Reduce a cycle's outcome into the feed. Returns false if the ticket was stale.
    pub fn complete(&mut self, ticket: &FetchTicket, outcome: FetchOutcome) -> bool {
        if !self.is_current(ticket) {
            tracing::info!(
                "Discarding stale fetch #{} (current #{})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        let page = ticket.filter.page;
        match outcome {
            FetchOutcome::SolOutOfRange { .. } => {
                tracing::info!("{}", outcome);
                self.dispatch(FeedAction::SetError(outcome.to_string()));
            }
            FetchOutcome::Failed(e) => {
                tracing::error!("Photo fetch #{} failed: {}", ticket.generation, e);
                self.dispatch(FeedAction::SetError(FETCH_ERROR_MESSAGE.to_string()));
            }
            FetchOutcome::Photos(photos) if photos.is_empty() => {
                if ticket.load_more {
                    tracing::info!("No more photos after page {}", page.saturating_sub(1));
                    self.dispatch(FeedAction::SetHasMore(false));
                } else {
                    tracing::info!("No photos for {:?}", ticket.filter);
                    self.dispatch(FeedAction::SetPhotos(Vec::new()));
                }
            }
            FetchOutcome::Photos(photos) => {
                tracing::info!("Fetched {} photos (page {})", photos.len(), page);
                if ticket.load_more {
                    self.dispatch(FeedAction::AddPhotos(photos));
                    self.dispatch(FeedAction::SetFilters(FilterUpdate::page(page + 1)));
                } else {
                    self.dispatch(FeedAction::SetPhotos(photos));
                    self.dispatch(FeedAction::SetFilters(FilterUpdate::page(2)));
                    self.dispatch(FeedAction::SetHasMore(true));
                }
            }
        }
        true
    }

    /// One full cycle against the owned source
    pub async fn fetch_photos(&mut self, load_more: bool) {
        let ticket = self.begin_fetch(load_more);
        let outcome = ticket.run(&self.source).await;
        self.complete(&ticket, outcome);
    }
}
