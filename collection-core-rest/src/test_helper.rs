use std::sync::Arc;

use async_trait::async_trait;
use collection_core_api::ApiResult;
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::rest_repositories::RestRepositories;
use crate::transport::{BackendRequest, BackendResponse, Method, Transport};

/// Call made against the in-memory backend, kept for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
}

#[derive(Default)]
struct BackendState {
    collections: std::collections::HashMap<String, Vec<Value>>,
    next_id: i64,
    calls: Vec<RecordedCall>,
}

/// In-memory stand-in for the REST backend.
///
/// Routes the contract the client relies on: collection list/one, the
/// per-artefact and active-movement lookups (404 when no active record),
/// single and batch create with id assignment, and full-record PUT.
/// Requests without a bearer token get a 401 like the real backend.
pub struct InMemoryBackend {
    state: Mutex<BackendState>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BackendState {
                next_id: 1,
                ..Default::default()
            }),
        }
    }

    /// Pre-loads rows; ids already present are respected and the id
    /// sequence continues above them.
    pub fn seed(&self, collection: &str, rows: Vec<Value>) {
        let mut state = self.state.lock();
        for row in &rows {
            if let Some(id) = row.get("id").and_then(Value::as_i64) {
                state.next_id = state.next_id.max(id + 1);
            }
        }
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .extend(rows);
    }

    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.state
            .lock()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().calls.clone()
    }

    pub fn count_calls(&self, method: Method, path: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .count()
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn response(status: u16, body: Value) -> BackendResponse {
    BackendResponse { status, body }
}

fn not_found(what: &str) -> BackendResponse {
    response(404, json!({ "error": format!("{what} not found") }))
}

#[async_trait]
impl Transport for InMemoryBackend {
    async fn execute(&self, request: BackendRequest) -> ApiResult<BackendResponse> {
        if request.bearer_token.is_none() {
            return Ok(response(401, json!({ "error": "missing token" })));
        }
        let mut state = self.state.lock();
        state.calls.push(RecordedCall {
            method: request.method,
            path: request.path.clone(),
        });

        let segments: Vec<&str> = request.path.split('/').collect();
        let reply = match (request.method, segments.as_slice()) {
            (Method::Get, [collection]) => {
                let rows = state.collections.get(*collection).cloned().unwrap_or_default();
                response(200, Value::Array(rows))
            }
            (Method::Get, [collection, "artefact", artefact_id, "active"]) => {
                let artefact_id: i64 = artefact_id.parse().unwrap_or(0);
                let active = state
                    .collections
                    .get(*collection)
                    .and_then(|rows| {
                        rows.iter().find(|row| {
                            row.get("artefactId").and_then(Value::as_i64) == Some(artefact_id)
                                && row
                                    .get("returnTime")
                                    .map(Value::is_null)
                                    .unwrap_or(true)
                        })
                    })
                    .cloned();
                match active {
                    Some(row) => response(200, row),
                    None => not_found("active record"),
                }
            }
            (Method::Get, [collection, "artefact", artefact_id]) => {
                let artefact_id: i64 = artefact_id.parse().unwrap_or(0);
                let rows: Vec<Value> = state
                    .collections
                    .get(*collection)
                    .map(|rows| {
                        rows.iter()
                            .filter(|row| {
                                row.get("artefactId").and_then(Value::as_i64)
                                    == Some(artefact_id)
                            })
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default();
                response(200, Value::Array(rows))
            }
            (Method::Get, [collection, id]) => {
                let id: i64 = id.parse().unwrap_or(0);
                match find_row(&state, collection, id) {
                    Some(row) => response(200, row),
                    None => not_found("record"),
                }
            }
            (Method::Post, [collection, "batch"]) => {
                let drafts = match request.body.as_ref().and_then(Value::as_array) {
                    Some(drafts) => drafts.clone(),
                    None => return Ok(response(400, json!({ "error": "expected an array" }))),
                };
                let mut created = Vec::with_capacity(drafts.len());
                for draft in drafts {
                    created.push(insert_row(&mut state, collection, draft));
                }
                response(200, Value::Array(created))
            }
            (Method::Post, [collection]) => {
                let draft = match request.body.clone() {
                    Some(draft) => draft,
                    None => return Ok(response(400, json!({ "error": "missing body" }))),
                };
                let created = insert_row(&mut state, collection, draft);
                response(200, created)
            }
            (Method::Put, [collection, id]) => {
                let id: i64 = id.parse().unwrap_or(0);
                let replacement = match request.body.clone() {
                    Some(replacement) => replacement,
                    None => return Ok(response(400, json!({ "error": "missing body" }))),
                };
                match replace_row(&mut state, collection, id, replacement) {
                    Some(row) => response(200, row),
                    None => not_found("record"),
                }
            }
            (Method::Delete, [collection, id]) => {
                let id: i64 = id.parse().unwrap_or(0);
                if let Some(rows) = state.collections.get_mut(*collection) {
                    rows.retain(|row| row.get("id").and_then(Value::as_i64) != Some(id));
                }
                response(200, Value::Null)
            }
            _ => not_found("route"),
        };
        Ok(reply)
    }
}

fn find_row(state: &BackendState, collection: &str, id: i64) -> Option<Value> {
    state.collections.get(collection).and_then(|rows| {
        rows.iter()
            .find(|row| row.get("id").and_then(Value::as_i64) == Some(id))
            .cloned()
    })
}

fn insert_row(state: &mut BackendState, collection: &str, mut draft: Value) -> Value {
    let id = state.next_id;
    state.next_id += 1;
    if let Some(object) = draft.as_object_mut() {
        object.insert("id".to_string(), json!(id));
    }
    state
        .collections
        .entry(collection.to_string())
        .or_default()
        .push(draft.clone());
    draft
}

fn replace_row(
    state: &mut BackendState,
    collection: &str,
    id: i64,
    replacement: Value,
) -> Option<Value> {
    let rows = state.collections.get_mut(collection)?;
    let slot = rows
        .iter_mut()
        .find(|row| row.get("id").and_then(Value::as_i64) == Some(id))?;
    *slot = replacement.clone();
    Some(replacement)
}

/// Backend plus fully wired repositories with a stored test token.
pub fn setup_repositories() -> (Arc<InMemoryBackend>, RestRepositories) {
    let backend = Arc::new(InMemoryBackend::new());
    let repositories = RestRepositories::new(backend.clone());
    repositories.session.set_token("test-token");
    (backend, repositories)
}
