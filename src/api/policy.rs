use serde::Serialize;

use super::{list_records, ResourceApi};
use crate::error::RequestError;
use crate::models::{Record, Resource};

/// What a read path does when its list fetch fails
#[derive(Debug, Clone, PartialEq)]
pub enum OnError<R> {
    Propagate,
    UseFixedFallback(Vec<Record<R>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchPolicy<R> {
    pub on_error: OnError<R>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<R> {
    pub records: Vec<Record<R>>,
    pub source: DataSource,
}

impl<R: Resource> FetchPolicy<R> {
    pub fn use_fixed_fallback(records: Vec<Record<R>>) -> Self {
        Self {
            on_error: OnError::UseFixedFallback(records),
        }
    }

    /// Fall back to the resource's built-in placeholder dataset
    pub fn placeholder() -> Self {
        Self::use_fixed_fallback(R::placeholder())
    }

    pub fn propagate() -> Self {
        Self {
            on_error: OnError::Propagate,
        }
    }

    pub fn apply(&self, result: Result<Vec<Record<R>>, RequestError>) -> Result<Fetched<R>, RequestError> {
        match (result, &self.on_error) {
            (Ok(records), _) => Ok(Fetched {
                records,
                source: DataSource::Remote,
            }),
            (Err(e), OnError::UseFixedFallback(records)) => {
                tracing::warn!("API not connected for {}, using fallback data: {}", R::KIND, e);
                Ok(Fetched {
                    records: records.clone(),
                    source: DataSource::Fallback,
                })
            }
            (Err(e), OnError::Propagate) => Err(e),
        }
    }
}

/// One list fetch resolved through a policy
pub async fn fetch_with_policy<R: Resource>(
    api: &dyn ResourceApi,
    policy: &FetchPolicy<R>,
) -> Result<Fetched<R>, RequestError> {
    policy.apply(list_records::<R>(api).await)
}
