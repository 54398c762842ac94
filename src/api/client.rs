use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;

use super::ResourceApi;
use crate::error::{RequestCause, RequestError};
use crate::models::RecordId;

/// reqwest-backed adapter over the portfolio REST API.
///
/// No retries, no timeout override and no auth header: the backend this
/// client talks to does not require one.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{endpoint}/{id}` with the id percent-encoded as one path segment
    fn record_url(&self, endpoint: &str, id: &RecordId) -> Result<String, RequestError> {
        let invalid = |reason: String| RequestError::new(endpoint, RequestCause::InvalidUrl(reason));

        let mut url = url::Url::parse(&self.url(endpoint)).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid(format!("{} cannot take a path", self.base_url)))?
            .push(id.as_str());
        Ok(url.into())
    }

    async fn send(
        &self,
        endpoint: &str,
        path: String,
        request: RequestBuilder,
        verb: &str,
    ) -> Result<Value, RequestError> {
        tracing::debug!("{} {}", verb, path);

        let result = execute(endpoint, request).await;
        if let Err(e) = &result {
            tracing::error!("Error {} {}: {}", verb, endpoint, e.cause);
        }
        result
    }
}

async fn execute(endpoint: &str, request: RequestBuilder) -> Result<Value, RequestError> {
    let response = request
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| RequestError::new(endpoint, e))?;

    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| RequestError::new(endpoint, e))?;

    if !status.is_success() {
        let body = String::from_utf8_lossy(&bytes).into_owned();
        return Err(RequestError::status(endpoint, status.as_u16(), body));
    }

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(&bytes).map_err(|e| RequestError::new(endpoint, RequestCause::Decode(e)))
}

#[async_trait]
impl ResourceApi for ApiClient {
    async fn list(&self, endpoint: &str) -> Result<Value, RequestError> {
        let path = self.url(endpoint);
        let request = self.http.request(Method::GET, &path);
        self.send(endpoint, path, request, "fetching").await
    }

    async fn create(&self, endpoint: &str, body: Value) -> Result<Value, RequestError> {
        let path = self.url(endpoint);
        let request = self.http.request(Method::POST, &path).json(&body);
        self.send(endpoint, path, request, "creating").await
    }

    async fn update(&self, endpoint: &str, id: &RecordId, body: Value) -> Result<Value, RequestError> {
        let path = self.record_url(endpoint, id)?;
        let request = self.http.request(Method::PUT, &path).json(&body);
        self.send(endpoint, path, request, "updating").await
    }

    async fn delete(&self, endpoint: &str, id: &RecordId) -> Result<Value, RequestError> {
        let path = self.record_url(endpoint, id)?;
        let request = self.http.request(Method::DELETE, &path);
        self.send(endpoint, path, request, "deleting").await
    }
}
