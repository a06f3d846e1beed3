///! Wire types for the Mars rover photos API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Camera descriptor embedded in each photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoCamera {
    #[serde(default)]
    pub id: Option<u64>,
    /// Short code, e.g. "FHAZ"
    #[serde(default)]
    pub name: String,
    /// e.g. "Front Hazard Avoidance Camera"
    pub full_name: String,
}

/// Rover descriptor embedded in each photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRover {
    #[serde(default)]
    pub id: Option<u64>,
    /// Display name, e.g. "Curiosity"
    pub name: String,
    #[serde(default)]
    pub landing_date: Option<NaiveDate>,
    #[serde(default)]
    pub launch_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A single rover photograph. Never mutated after it is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub sol: u32,
    pub earth_date: NaiveDate,
    pub img_src: String,
    pub camera: PhotoCamera,
    pub rover: PhotoRover,
}

/// Body of `GET /rovers/{rover}/photos`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoPage {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Mission manifest for one rover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub landing_date: Option<NaiveDate>,
    #[serde(default)]
    pub launch_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub max_sol: u32,
    #[serde(default)]
    pub max_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_photos: u64,
}

/// Body of `GET /manifests/{rover}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEnvelope {
    pub photo_manifest: Manifest,
}
