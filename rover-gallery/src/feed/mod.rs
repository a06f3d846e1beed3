///! Photo feed: state, reducer, fetch lifecycle and user actions

pub mod handlers;
pub mod orchestrator;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use handlers::SearchBlocked;
pub use orchestrator::{DEFAULT_MAX_SOL, FETCH_ERROR_MESSAGE, FetchOutcome, FetchTicket, PhotoFeed};
pub use state::{FeedAction, FeedPhase, FeedState, GalleryState, reduce};
