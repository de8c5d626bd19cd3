use shared_http::{ApiClient, ApiError};
use shared_models::page::{PageRequest, SortDir};
use shared_screens::{EntityClient, ListScreen, ScreenContext};

use crate::models::InsuranceRecord;

pub struct InsuranceService {
    client: EntityClient<InsuranceRecord>,
}

impl InsuranceService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: EntityClient::new(api),
        }
    }

    pub fn client(&self) -> &EntityClient<InsuranceRecord> {
        &self.client
    }

    pub fn default_page() -> PageRequest {
        PageRequest::new("createdAt", SortDir::Desc)
    }

    pub fn screen(&self, ctx: ScreenContext) -> ListScreen<InsuranceRecord> {
        ListScreen::new(self.client.clone(), ctx, Self::default_page())
    }

    /// Claims export is scoped to one patient's policies.
    pub async fn export_excel(&self, patient_id: &str) -> Result<Vec<u8>, ApiError> {
        self.client
            .download(
                &format!("/insurance/patient/{}/export/excel", patient_id),
                &[],
            )
            .await
    }
}
