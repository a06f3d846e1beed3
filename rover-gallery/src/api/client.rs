///! NASA Mars rover photos API client

use async_trait::async_trait;
use reqwest::{Client, Url};
use rover_common::{Manifest, ManifestEnvelope, PhotoPage, Rover};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::FetchError;
use super::query::PhotoQuery;
use super::source::PhotoSource;
use crate::config::GalleryConfig;

pub const DEFAULT_API_BASE_URL: &str = "https://api.nasa.gov/mars-photos/api/v1";

/// HTTP client for the rover-photos and manifest endpoints
pub struct NasaClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl NasaClient {
    /// `timeout` of `None` keeps reqwest's defaults
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut builder = Client::builder().user_agent(concat!("rover-gallery/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &GalleryConfig) -> Result<Self, FetchError> {
        Self::new(
            &config.api_base_url,
            config.api_key.clone().unwrap_or_default(),
            config.request_timeout(),
        )
    }

    /// `{base}/rovers/{rover}/photos?api_key&page&sol|earth_date[&camera]`
    pub fn photos_url(&self, query: &PhotoQuery) -> Result<Url, FetchError> {
        let mut url = self.endpoint(&["rovers", query.rover.as_str(), "photos"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            for (key, value) in query.params() {
                pairs.append_pair(key, &value);
            }
        }
        Ok(url)
    }

    /// `{base}/manifests/{rover}?api_key`
    pub fn manifest_url(&self, rover: Rover) -> Result<Url, FetchError> {
        let mut url = self.endpoint(&["manifests", rover.as_str()])?;
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    pub async fn fetch_manifest(&self, rover: Rover) -> Option<Manifest> {
        let result = match self.manifest_url(rover) {
            Ok(url) => self.get_json::<ManifestEnvelope>(url).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(envelope) => {
                tracing::debug!(
                    "Manifest for {}: max_sol {}, {} photos",
                    rover,
                    envelope.photo_manifest.max_sol,
                    envelope.photo_manifest.total_photos
                );
                Some(envelope.photo_manifest)
            }
            Err(e) => {
                tracing::warn!("Manifest for {} unavailable, sol is unbounded: {}", rover, e);
                None
            }
        }
    }

    pub async fn fetch_photos(&self, query: &PhotoQuery) -> Result<PhotoPage, FetchError> {
        let url = self.photos_url(query)?;
        let page: PhotoPage = self.get_json(url).await?;
        tracing::debug!(
            "Fetched {} photos for {} page {}",
            page.photos.len(),
            query.rover,
            query.page
        );
        Ok(page)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        tracing::debug!("GET {}", redact_api_key(&url));

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl PhotoSource for NasaClient {
    async fn fetch_manifest(&self, rover: Rover) -> Option<Manifest> {
        NasaClient::fetch_manifest(self, rover).await
    }

    async fn fetch_photos(&self, query: &PhotoQuery) -> Result<PhotoPage, FetchError> {
        NasaClient::fetch_photos(self, query).await
    }
}

/// URL with the `api_key` value masked, for logs
pub fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "api_key" { "***".to_string() } else { value.into_owned() };
            (key.into_owned(), value)
        })
        .collect();

    if pairs.is_empty() {
        return redacted.to_string();
    }
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
