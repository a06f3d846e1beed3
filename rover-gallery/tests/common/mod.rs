//! Fake photo API served by axum on an ephemeral port

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// One request as the upstream saw it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub params: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct Upstream {
    requests: Arc<Mutex<Vec<Recorded>>>,
    pages: Arc<Mutex<VecDeque<(StatusCode, Value)>>>,
    /// `None` makes the manifest endpoint answer 500
    max_sol: Arc<Mutex<Option<u32>>>,
}

impl Upstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_sol(self, max_sol: u32) -> Self {
        *self.max_sol.lock().unwrap() = Some(max_sol);
        self
    }

    pub fn with_page(self, ids: &[u64]) -> Self {
        let photos: Vec<Value> = ids.iter().map(|id| photo_json(*id)).collect();
        self.pages
            .lock()
            .unwrap()
            .push_back((StatusCode::OK, json!({ "photos": photos })));
        self
    }

    pub fn with_status(self, status: StatusCode) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push_back((status, json!({ "error": { "code": "API_KEY_INVALID" } })));
        self
    }

    pub fn with_body(self, body: Value) -> Self {
        self.pages.lock().unwrap().push_back((StatusCode::OK, body));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn photo_requests(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.ends_with("/photos"))
            .collect()
    }

    /// Serve on 127.0.0.1 and return the base URL
    pub async fn spawn(self) -> String {
        let app = Router::new()
            .route("/api/v1/rovers/{rover}/photos", get(photos))
            .route("/api/v1/manifests/{rover}", get(manifest))
            .with_state(self);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/api/v1", addr)
    }

    fn record(&self, path: String, params: HashMap<String, String>) {
        self.requests.lock().unwrap().push(Recorded { path, params });
    }
}

pub fn photo_json(id: u64) -> Value {
    json!({
        "id": id,
        "sol": 1000,
        "camera": { "id": 20, "name": "FHAZ", "rover_id": 5, "full_name": "Front Hazard Avoidance Camera" },
        "img_src": format!("http://mars.jpl.nasa.gov/msl-raw-images/{}.JPG", id),
        "earth_date": "2015-05-30",
        "rover": { "id": 5, "name": "Curiosity", "landing_date": "2012-08-06", "launch_date": "2011-11-26", "status": "active" }
    })
}

async fn photos(
    State(upstream): State<Upstream>,
    Path(rover): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    upstream.record(format!("/rovers/{}/photos", rover), params);

    let next = upstream.pages.lock().unwrap().pop_front();
    match next {
        Some((status, body)) => (status, Json(body)).into_response(),
        None => Json(json!({ "photos": [] })).into_response(),
    }
}

async fn manifest(
    State(upstream): State<Upstream>,
    Path(rover): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    upstream.record(format!("/manifests/{}", rover), params);

    let max_sol = *upstream.max_sol.lock().unwrap();
    match max_sol {
        Some(max_sol) => Json(json!({
            "photo_manifest": {
                "name": "Curiosity",
                "landing_date": "2012-08-06",
                "launch_date": "2011-11-26",
                "status": "active",
                "max_sol": max_sol,
                "max_date": "2024-02-19",
                "total_photos": 695670,
                "photos": []
            }
        }))
        .into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
