///! Remote photo API: query building, HTTP client, and the source seam

pub mod client;
pub mod error;
pub mod query;
pub mod source;

pub use client::{DEFAULT_API_BASE_URL, NasaClient};
pub use error::FetchError;
pub use query::PhotoQuery;
pub use source::PhotoSource;
