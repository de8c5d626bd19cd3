use shared_http::reqwest::Method;
use shared_http::{ApiClient, ApiError};
use shared_models::page::{PageRequest, SortDir};
use shared_screens::{EntityClient, ListScreen, ScreenContext};

use crate::form::PasswordChangePayload;
use crate::models::UserAccount;

pub struct UserService {
    client: EntityClient<UserAccount>,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: EntityClient::new(api),
        }
    }

    pub fn client(&self) -> &EntityClient<UserAccount> {
        &self.client
    }

    pub fn default_page() -> PageRequest {
        PageRequest::new("createdAt", SortDir::Desc)
    }

    pub fn screen(&self, ctx: ScreenContext) -> ListScreen<UserAccount> {
        ListScreen::new(self.client.clone(), ctx, Self::default_page())
    }

    pub async fn change_password(
        &self,
        id: &str,
        payload: &PasswordChangePayload,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.client
            .api()
            .request_empty(
                Method::PUT,
                &format!("/users/{}/change-password", id),
                &[],
                Some(body),
            )
            .await
    }

    pub async fn toggle_active(&self, id: &str) -> Result<UserAccount, ApiError> {
        self.client
            .api()
            .request(
                Method::PUT,
                &format!("/users/{}/toggle-active", id),
                &[],
                None,
            )
            .await
    }
}
