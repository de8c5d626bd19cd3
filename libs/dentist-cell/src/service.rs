use shared_http::{ApiClient, ApiError};
use shared_models::page::{PageRequest, SortDir};
use shared_screens::{EntityClient, ListScreen, PagedOptions, ScreenContext};

use crate::models::Dentist;

pub struct DentistService {
    client: EntityClient<Dentist>,
}

impl DentistService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: EntityClient::new(api),
        }
    }

    pub fn client(&self) -> &EntityClient<Dentist> {
        &self.client
    }

    pub fn default_page() -> PageRequest {
        PageRequest::new("createdAt", SortDir::Desc)
    }

    pub fn screen(&self, ctx: ScreenContext) -> ListScreen<Dentist> {
        ListScreen::new(self.client.clone(), ctx, Self::default_page())
    }

    pub fn reference_options(&self) -> PagedOptions<Dentist> {
        PagedOptions::new(self.client.clone(), |d: &Dentist| d.full_name())
    }

    /// Only dentists currently taking appointments.
    pub async fn get_active(&self) -> Result<Vec<Dentist>, ApiError> {
        self.client.get_list("/dentists/active").await
    }

    pub async fn export_excel(&self) -> Result<Vec<u8>, ApiError> {
        self.client.download("/dentists/export/excel", &[]).await
    }

    pub async fn generate_pdf(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.client
            .download(&format!("/dentists/{}/pdf", id), &[])
            .await
    }
}
