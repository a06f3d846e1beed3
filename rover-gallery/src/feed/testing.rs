//! Scripted in-memory photo source for feed tests

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use rover_common::{Manifest, Photo, PhotoCamera, PhotoPage, PhotoRover, Rover};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::api::{FetchError, PhotoQuery, PhotoSource};

pub fn photo(id: u64) -> Photo {
    Photo {
        id,
        sol: 1000,
        earth_date: NaiveDate::from_ymd_opt(2015, 5, 30).unwrap(),
        img_src: format!("http://mars.jpl.nasa.gov/msl-raw-images/{}.JPG", id),
        camera: PhotoCamera {
            id: Some(20),
            name: "FHAZ".to_string(),
            full_name: "Front Hazard Avoidance Camera".to_string(),
        },
        rover: PhotoRover {
            id: Some(5),
            name: "Curiosity".to_string(),
            landing_date: None,
            launch_date: None,
            status: Some("active".to_string()),
        },
    }
}

pub fn manifest(max_sol: u32) -> Manifest {
    Manifest {
        name: "Curiosity".to_string(),
        landing_date: None,
        launch_date: None,
        status: Some("active".to_string()),
        max_sol,
        max_date: None,
        total_photos: 0,
    }
}

/// Replies to photo requests in script order; an exhausted script yields empty pages
#[derive(Default)]
pub struct ScriptedSource {
    manifest: Option<Manifest>,
    pages: Mutex<VecDeque<Result<Vec<Photo>, StatusCode>>>,
    queries: Mutex<Vec<PhotoQuery>>,
    manifest_requests: Mutex<Vec<Rover>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn with_page(self, photos: Vec<Photo>) -> Self {
        self.pages.lock().unwrap().push_back(Ok(photos));
        self
    }

    pub fn with_failure(self) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push_back(Err(StatusCode::INTERNAL_SERVER_ERROR));
        self
    }

    pub fn photo_calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn manifest_calls(&self) -> usize {
        self.manifest_requests.lock().unwrap().len()
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.queries.lock().unwrap().iter().map(|q| q.page).collect()
    }

    pub fn last_query(&self) -> Option<PhotoQuery> {
        self.queries.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl PhotoSource for ScriptedSource {
    async fn fetch_manifest(&self, rover: Rover) -> Option<Manifest> {
        self.manifest_requests.lock().unwrap().push(rover);
        self.manifest.clone()
    }

    async fn fetch_photos(&self, query: &PhotoQuery) -> Result<PhotoPage, FetchError> {
        self.queries.lock().unwrap().push(query.clone());
        match self.pages.lock().unwrap().pop_front() {
            Some(Ok(photos)) => Ok(PhotoPage { photos }),
            Some(Err(status)) => Err(FetchError::Status(status)),
            None => Ok(PhotoPage::default()),
        }
    }
}
