use shared_http::{ApiClient, ApiError};
use shared_models::page::{PageRequest, SortDir};
use shared_screens::{EntityClient, ListScreen, ScreenContext};

use crate::models::Treatment;

pub struct TreatmentService {
    client: EntityClient<Treatment>,
}

impl TreatmentService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: EntityClient::new(api),
        }
    }

    pub fn client(&self) -> &EntityClient<Treatment> {
        &self.client
    }

    pub fn default_page() -> PageRequest {
        PageRequest::new("treatmentName", SortDir::Asc)
    }

    pub fn screen(&self, ctx: ScreenContext) -> ListScreen<Treatment> {
        ListScreen::new(self.client.clone(), ctx, Self::default_page())
    }

    /// Treatments currently open for booking, for scheduling surfaces.
    pub async fn get_active(&self) -> Result<Vec<Treatment>, ApiError> {
        self.client.get_list("/treatments/active").await
    }
}
