use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use shared_http::{ApiClient, ApiError};
use shared_models::page::{Page, PageRequest};

/// One REST collection on the backend. Cells implement this for their wire
/// type; everything else about the CRUD surface is uniform.
pub trait Entity: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Collection path under the API base, e.g. `/patients`.
    const RESOURCE: &'static str;
    /// Singular noun used in toast messages, e.g. `patient`.
    const NOUN: &'static str;
    /// Plural noun for fetch-failure toasts, e.g. `patients`.
    const NOUN_PLURAL: &'static str;

    fn id(&self) -> &str;
}

/// Uniform entity service: a pure pass-through from domain operations to HTTP
/// calls. No validation happens here; that is the form screen's job.
pub struct EntityClient<E: Entity> {
    api: ApiClient,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for EntityClient<E> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E: Entity> EntityClient<E> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _marker: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub async fn get_all(&self, page: &PageRequest) -> Result<Page<E>, ApiError> {
        self.api.get(E::RESOURCE, &page.to_query_pairs()).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<E, ApiError> {
        self.api.get(&format!("{}/{}", E::RESOURCE, id), &[]).await
    }

    pub async fn create<B: Serialize>(&self, body: &B) -> Result<E, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.api.post(E::RESOURCE, body).await
    }

    pub async fn update<B: Serialize>(&self, id: &str, body: &B) -> Result<E, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.api.put(&format!("{}/{}", E::RESOURCE, id), body).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}", E::RESOURCE, id)).await
    }

    /// Unpaginated full-text search.
    pub async fn search(&self, query: &str) -> Result<Vec<E>, ApiError> {
        let path = format!("{}/search?query={}", E::RESOURCE, urlencoding::encode(query));
        self.api.get(&path, &[]).await
    }

    /// Entity-specific binary endpoints (Excel exports, PDFs) hang off the
    /// same collection; cells supply the exact path.
    pub async fn download(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<u8>, ApiError> {
        self.api.download(path, query).await
    }

    /// Plain GET for convenience endpoints like `/treatments/active`.
    pub async fn get_list(&self, path: &str) -> Result<Vec<E>, ApiError> {
        self.api.get(path, &[]).await
    }
}
