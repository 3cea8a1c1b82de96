use async_trait::async_trait;
use collection_core_api::ApiResult;
use serde_json::Value;

/// HTTP verb subset the backend contract uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One request against the backend, path relative to the API root
/// (e.g. "internal-movements/batch").
#[derive(Debug, Clone)]
pub struct BackendRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub bearer_token: Option<String>,
}

/// Raw backend reply. Status mapping (401/404/etc.) happens in
/// [`crate::client::RestClient`], not here.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: u16,
    pub body: Value,
}

/// The request/response client this core is bound to.
///
/// The concrete HTTP stack lives outside this crate; implementations only
/// need to carry the bearer token, serialize the body and hand back status
/// plus decoded JSON. `Err` is reserved for transport-level failures
/// (connection refused, broken pipe); non-2xx statuses come back as
/// `Ok` responses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: BackendRequest) -> ApiResult<BackendResponse>;
}
