#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use portfolio_rust::prompt::{Confirm, Notifier};

#[derive(Default)]
struct BackendState {
    collections: HashMap<String, Vec<Value>>,
    next_id: u64,
    failing: bool,
    hits: HashMap<&'static str, usize>,
}

type Shared = Arc<Mutex<BackendState>>;

/// In-process stand-in for the portfolio REST API, served by axum on a
/// free port. Records get a Mongo-style `_id`.
pub struct MockBackend {
    pub port: u16,
    pub base_url: String,
    state: Shared,
}

impl MockBackend {
    pub async fn start() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}/api", port);
        let state: Shared = Arc::new(Mutex::new(BackendState {
            next_id: 1,
            ..BackendState::default()
        }));

        let app = Router::new()
            .route("/api/:resource", get(list).post(create))
            .route("/api/:resource/:id", put(update).delete(remove))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind mock backend on {}", port))?;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("mock backend stopped: {}", e);
            }
        });

        Ok(Self { port, base_url, state })
    }

    /// Put records straight into a collection, assigning ids to rows that
    /// carry no `_id` of their own
    pub fn seed(&self, resource: &str, rows: Vec<Value>) {
        let mut state = self.state.lock().unwrap();
        for mut row in rows {
            let id = state.next_id;
            state.next_id += 1;
            if row.get("_id").is_none() {
                row["_id"] = json!(format!("{:04}", id));
            }
            state.collections.entry(resource.to_string()).or_default().push(row);
        }
    }

    /// Answer every request with 500 from now on (or stop doing so)
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    pub fn rows(&self, resource: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(resource)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of requests seen for a verb ("GET", "POST", "PUT", "DELETE")
    pub fn hits(&self, verb: &str) -> usize {
        self.state.lock().unwrap().hits.get(verb).copied().unwrap_or(0)
    }
}

/// A base URL nobody is listening on
pub fn dead_backend_url() -> String {
    let port = portpicker::pick_unused_port().expect("failed to pick free port");
    format!("http://127.0.0.1:{}/api", port)
}

fn record_hit(state: &mut BackendState, verb: &'static str) -> bool {
    *state.hits.entry(verb).or_default() += 1;
    state.failing
}

fn failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "backend down" }))).into_response()
}

async fn list(State(state): State<Shared>, Path(resource): Path<String>) -> Response {
    let mut state = state.lock().unwrap();
    if record_hit(&mut state, "GET") {
        return failure();
    }
    let rows = state.collections.get(&resource).cloned().unwrap_or_default();
    Json(Value::Array(rows)).into_response()
}

async fn create(State(state): State<Shared>, Path(resource): Path<String>, Json(mut body): Json<Value>) -> Response {
    let mut state = state.lock().unwrap();
    if record_hit(&mut state, "POST") {
        return failure();
    }
    let id = state.next_id;
    state.next_id += 1;
    body["_id"] = json!(format!("{:04}", id));
    state.collections.entry(resource).or_default().push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update(
    State(state): State<Shared>,
    Path((resource, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    if record_hit(&mut state, "PUT") {
        return failure();
    }
    let rows = state.collections.entry(resource).or_default();
    match rows.iter_mut().find(|row| row["_id"] == json!(id)) {
        Some(row) => {
            let mut replaced = body;
            replaced["_id"] = json!(id);
            *row = replaced.clone();
            Json(replaced).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response(),
    }
}

async fn remove(State(state): State<Shared>, Path((resource, id)): Path<(String, String)>) -> Response {
    let mut state = state.lock().unwrap();
    if record_hit(&mut state, "DELETE") {
        return failure();
    }
    let rows = state.collections.entry(resource).or_default();
    let before = rows.len();
    rows.retain(|row| row["_id"] != json!(id));
    if rows.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

#[derive(Default)]
pub struct Notifications(Mutex<Vec<String>>);

impl Notifications {
    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for Notifications {
    fn notify(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&self, _question: &str) -> bool {
        self.0
    }
}
