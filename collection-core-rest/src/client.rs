use std::sync::Arc;
use std::time::Duration;

use collection_core_api::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::time::timeout;
use tracing::warn;

use crate::cache::{CollectionTag, QueryCache};
use crate::session::AuthSession;
use crate::transport::{BackendRequest, BackendResponse, Method, Transport};

/// Bound applied to every backend call; a timeout surfaces as a failed
/// operation, never a silent retry.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed wrapper over the raw [`Transport`].
///
/// Attaches the bearer token, bounds the call, and maps the backend's
/// status taxonomy: 401 clears the session globally and invalidates the
/// auth cache key, 404 becomes `NotFound`, any other non-2xx becomes a
/// `Backend` error with the message taken from the response body when
/// present.
pub struct RestClient {
    transport: Arc<dyn Transport>,
    session: Arc<AuthSession>,
    cache: Arc<QueryCache>,
}

impl RestClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: Arc<AuthSession>,
        cache: Arc<QueryCache>,
    ) -> Self {
        Self {
            transport,
            session,
            cache,
        }
    }

    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.execute(Method::Get, path, None).await
    }

    pub async fn get_as<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.get(path).await?;
        decode(path, body)
    }

    pub async fn post_as<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> ApiResult<T> {
        let body = encode(path, payload)?;
        let response = self.execute(Method::Post, path, Some(body)).await?;
        decode(path, response)
    }

    pub async fn put_as<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> ApiResult<T> {
        let body = encode(path, payload)?;
        let response = self.execute(Method::Put, path, Some(body)).await?;
        decode(path, response)
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(Method::Delete, path, None).await?;
        Ok(())
    }

    async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value> {
        let request = BackendRequest {
            method,
            path: path.to_string(),
            body,
            bearer_token: self.session.token(),
        };
        let response: BackendResponse = timeout(REQUEST_TIMEOUT, self.transport.execute(request))
            .await
            .map_err(|_| ApiError::Timeout(path.to_string()))??;

        match response.status {
            200..=299 => Ok(response.body),
            401 => {
                warn!(path, "backend rejected the token, clearing session");
                self.session.clear();
                self.cache.invalidate_tag(CollectionTag::Auth);
                Err(ApiError::Unauthorized)
            }
            404 => Err(ApiError::NotFound(path.to_string())),
            status => Err(ApiError::Backend {
                status,
                message: error_message(&response.body),
            }),
        }
    }
}

fn encode<B: Serialize>(path: &str, payload: &B) -> ApiResult<Value> {
    serde_json::to_value(payload)
        .map_err(|e| ApiError::Decode(format!("failed to encode payload for {path}: {e}")))
}

fn decode<T: DeserializeOwned>(path: &str, body: Value) -> ApiResult<T> {
    serde_json::from_value(body)
        .map_err(|e| ApiError::Decode(format!("failed to decode response from {path}: {e}")))
}

/// Message shown to the user for a failed backend call: the body's
/// `error` or `message` field when present, else a fixed fallback.
fn error_message(body: &Value) -> String {
    body.get("error")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("request failed")
        .to_string()
}
