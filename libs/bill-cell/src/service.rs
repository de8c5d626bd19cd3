use shared_http::{ApiClient, ApiError};
use shared_models::page::{PageRequest, SortDir};
use shared_screens::{EntityClient, ListScreen, ScreenContext};

use crate::models::Bill;

pub struct BillService {
    client: EntityClient<Bill>,
}

impl BillService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: EntityClient::new(api),
        }
    }

    pub fn client(&self) -> &EntityClient<Bill> {
        &self.client
    }

    pub fn default_page() -> PageRequest {
        PageRequest::new("billDate", SortDir::Desc)
    }

    pub fn screen(&self, ctx: ScreenContext) -> ListScreen<Bill> {
        ListScreen::new(self.client.clone(), ctx, Self::default_page())
    }

    pub async fn generate_pdf(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.client.download(&format!("/bills/{}/pdf", id), &[]).await
    }

    /// Billing export is scoped to one patient's history.
    pub async fn export_excel(&self, patient_id: &str) -> Result<Vec<u8>, ApiError> {
        self.client
            .download(&format!("/bills/patient/{}/export/excel", patient_id), &[])
            .await
    }
}
