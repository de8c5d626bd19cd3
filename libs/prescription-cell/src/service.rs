use shared_http::{ApiClient, ApiError};
use shared_models::page::{PageRequest, SortDir};
use shared_screens::{EntityClient, ListScreen, ScreenContext};

use crate::models::Prescription;

pub struct PrescriptionService {
    client: EntityClient<Prescription>,
}

impl PrescriptionService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: EntityClient::new(api),
        }
    }

    pub fn client(&self) -> &EntityClient<Prescription> {
        &self.client
    }

    pub fn default_page() -> PageRequest {
        PageRequest::new("prescriptionDate", SortDir::Desc)
    }

    pub fn screen(&self, ctx: ScreenContext) -> ListScreen<Prescription> {
        ListScreen::new(self.client.clone(), ctx, Self::default_page())
    }

    pub async fn generate_pdf(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.client
            .download(&format!("/prescriptions/{}/pdf", id), &[])
            .await
    }

    pub async fn export_excel(&self, start: &str, end: &str) -> Result<Vec<u8>, ApiError> {
        self.client
            .download(
                "/prescriptions/export/excel",
                &[("start", start.to_string()), ("end", end.to_string())],
            )
            .await
    }
}
