use async_trait::async_trait;
use rover_common::{Manifest, PhotoPage, Rover};

use super::error::FetchError;
use super::query::PhotoQuery;

/// Anything the feed can pull photos from
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Best effort. `None` means "no known sol bound".
    async fn fetch_manifest(&self, rover: Rover) -> Option<Manifest>;

    async fn fetch_photos(&self, query: &PhotoQuery) -> Result<PhotoPage, FetchError>;
}
