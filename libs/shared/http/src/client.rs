use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};
use uuid::Uuid;

use shared_config::ApiConfig;
use shared_models::session::SessionStore;

use crate::error::ApiError;

/// Fired when the backend answers 401. The session is already cleared by the
/// time this runs; implementations navigate to the login screen.
pub trait UnauthorizedHook: Send + Sync {
    fn on_unauthorized(&self);
}

/// No-op hook for contexts (tests, scripts) with no login screen to go to.
pub struct NoRedirect;

impl UnauthorizedHook for NoRedirect {
    fn on_unauthorized(&self) {}
}

/// The one configured HTTP client the whole console goes through. Attaches
/// the bearer token from the injected session store to every request and
/// handles 401 globally: clear the session, fire the hook, then let the
/// caller see the error as well.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    on_unauthorized: Arc<dyn UnauthorizedHook>,
}

impl ApiClient {
    pub fn new(
        config: &ApiConfig,
        session: Arc<dyn SessionStore>,
        on_unauthorized: Arc<dyn UnauthorizedHook>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
            on_unauthorized,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.token() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        headers
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();
        debug!(%request_id, %method, %url, "sending request");

        let mut req = self.client.request(method, &url).headers(self.headers());
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Global session-expiry handling, ahead of any call-site logic.
            self.session.clear();
            self.on_unauthorized.on_unauthorized();
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(%request_id, status = status.as_u16(), %message, "API error");
            return Err(ApiError::from_status(status.as_u16(), message));
        }

        debug!(%request_id, status = status.as_u16(), "request ok");
        Ok(response)
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, query, body.as_ref()).await?;
        let data = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(data)
    }

    /// For endpoints whose response body carries nothing we need (deletes,
    /// password changes).
    pub async fn request_empty(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        self.send(method, path, query, body.as_ref()).await?;
        Ok(())
    }

    /// Binary endpoints: Excel exports and generated PDFs.
    pub async fn download(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>, ApiError> {
        let response = self.send(Method::GET, path, query, None).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiError> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiError> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request_empty(Method::DELETE, path, &[], None).await
    }
}
