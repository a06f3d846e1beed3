use rover_gallery::api::NasaClient;
use rover_gallery::config::GalleryConfig;
use rover_gallery::feed::PhotoFeed;
use rover_gallery::logging;
use rover_gallery::repl::Repl;

use anyhow::{Context, Result};
use tokio::io::{BufReader, stdin, stdout};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let config_path = GalleryConfig::default_path();
    let config = GalleryConfig::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path))?;

    // Initialize logging
    let _logging_guard = logging::init_logging(&config.log_dir, "rover-gallery", &config.log_level)?;

    tracing::info!("Rover Gallery starting...");
    tracing::info!("Photo API at {}", config.api_base_url);
    if config.api_key.is_none() {
        tracing::debug!("No API key configured, requests go out with an empty key");
    }

    let client = NasaClient::from_config(&config).context("Failed to build photo API client")?;
    let feed = PhotoFeed::with_filters(client, config.filters.clone());
    let mut repl = Repl::new(feed, config.page_preview);

    tokio::select! {
        result = repl.run(BufReader::new(stdin()), stdout()) => {
            result.context("Terminal I/O failed")?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received.");
        }
    }

    tracing::info!("Rover Gallery stopped.");
    Ok(())
}
