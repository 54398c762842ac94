pub mod client;
pub mod policy;

use async_trait::async_trait;
use serde_json::Value;

pub use client::ApiClient;
pub use policy::{fetch_with_policy, DataSource, FetchPolicy, Fetched, OnError};

use crate::error::{RequestCause, RequestError};
use crate::models::{Record, RecordId, Resource};

/// The four verbs every resource endpoint supports.
///
/// Bodies travel as raw JSON so the trait stays object-safe; the typed
/// helpers below decode into resource records.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// `GET {endpoint}`
    async fn list(&self, endpoint: &str) -> Result<Value, RequestError>;

    /// `POST {endpoint}`
    async fn create(&self, endpoint: &str, body: Value) -> Result<Value, RequestError>;

    /// `PUT {endpoint}/{id}`
    async fn update(&self, endpoint: &str, id: &RecordId, body: Value) -> Result<Value, RequestError>;

    /// `DELETE {endpoint}/{id}`
    async fn delete(&self, endpoint: &str, id: &RecordId) -> Result<Value, RequestError>;
}

fn encode<R: Resource>(fields: &R) -> Result<Value, RequestError> {
    serde_json::to_value(fields).map_err(|e| RequestError::new(R::KIND.endpoint(), RequestCause::Decode(e)))
}

fn decode<T: serde::de::DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, RequestError> {
    serde_json::from_value(value).map_err(|e| RequestError::new(endpoint, RequestCause::Decode(e)))
}

/// Fetch the full collection, server order preserved. A body that is not an
/// array fails; a single unreadable row is logged and skipped.
pub async fn list_records<R: Resource>(api: &dyn ResourceApi) -> Result<Vec<Record<R>>, RequestError> {
    let endpoint = R::KIND.endpoint();
    let rows: Vec<Value> = decode(endpoint, api.list(endpoint).await?)?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        match serde_json::from_value::<Record<R>>(row) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping unreadable {} record: {}", R::KIND, e),
        }
    }
    Ok(records)
}

/// Create a record and return it with its server-assigned identity.
/// `None` when the server acknowledged (2xx) without echoing a decodable
/// record; the create itself still succeeded.
pub async fn create_record<R: Resource>(
    api: &dyn ResourceApi,
    fields: &R,
) -> Result<Option<Record<R>>, RequestError> {
    let endpoint = R::KIND.endpoint();
    match api.create(endpoint, encode(fields)?).await? {
        Value::Null => Ok(None),
        body => match decode(endpoint, body) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!("Created {} but could not read it back: {}", R::KIND, e.cause);
                Ok(None)
            }
        },
    }
}

/// Update a record. Some backends answer `204 No Content`; the response body
/// is not needed since the caller refetches anyway.
pub async fn update_record<R: Resource>(
    api: &dyn ResourceApi,
    id: &RecordId,
    fields: &R,
) -> Result<(), RequestError> {
    api.update(R::KIND.endpoint(), id, encode(fields)?).await?;
    Ok(())
}

pub async fn delete_record<R: Resource>(api: &dyn ResourceApi, id: &RecordId) -> Result<(), RequestError> {
    api.delete(R::KIND.endpoint(), id).await?;
    Ok(())
}
