use tracing::{debug, info};

use shared_http::reqwest::Method;
use shared_http::{ApiClient, ApiError};
use shared_models::auth::{AuthResponse, LoginRequest, SignupRequest};
use shared_models::session::Session;

/// Sign-in/sign-up against `/auth/*`. A successful sign-in writes the
/// session into the client's injected store, which is what unlocks every
/// other screen.
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn signin(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        debug!(username = %request.username, "signing in");

        let body = serde_json::to_value(&request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response: AuthResponse = self.api.post("/auth/signin", body).await?;

        self.api.session().store(Session::from(response.clone()));
        info!(username = %response.username, role = %response.role, "signed in");
        Ok(response)
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(&request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.api.post("/auth/signup", body).await
    }

    /// Token refresh keyed by username, passed as a query parameter as the
    /// backend expects.
    pub async fn refresh(&self, username: &str) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .api
            .request(
                Method::POST,
                "/auth/refresh",
                &[("username", username.to_string())],
                None,
            )
            .await?;

        self.api.session().store(Session::from(response.clone()));
        Ok(response)
    }

    pub fn logout(&self) {
        self.api.session().clear();
        info!("signed out");
    }
}
