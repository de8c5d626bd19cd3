use shared_http::{ApiClient, ApiError};
use shared_models::page::{PageRequest, SortDir};
use shared_screens::{EntityClient, ListScreen, PagedOptions, ScreenContext};

use crate::models::Patient;

/// Patient resource plus its binary endpoints. The uniform CRUD surface is
/// the embedded `EntityClient`.
pub struct PatientService {
    client: EntityClient<Patient>,
}

impl PatientService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: EntityClient::new(api),
        }
    }

    pub fn client(&self) -> &EntityClient<Patient> {
        &self.client
    }

    pub fn default_page() -> PageRequest {
        PageRequest::new("createdAt", SortDir::Desc)
    }

    pub fn screen(&self, ctx: ScreenContext) -> ListScreen<Patient> {
        ListScreen::new(self.client.clone(), ctx, Self::default_page())
    }

    /// Options for patient reference pickers in other cells' forms; the
    /// label becomes the denormalized display name stored on the referrer.
    pub fn reference_options(&self) -> PagedOptions<Patient> {
        PagedOptions::new(self.client.clone(), |p: &Patient| p.full_name())
    }

    pub async fn export_excel(&self) -> Result<Vec<u8>, ApiError> {
        self.client.download("/patients/export/excel", &[]).await
    }

    pub async fn generate_pdf(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.client
            .download(&format!("/patients/{}/pdf", id), &[])
            .await
    }
}
