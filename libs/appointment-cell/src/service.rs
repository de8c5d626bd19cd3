use shared_http::{ApiClient, ApiError};
use shared_models::page::{PageRequest, SortDir};
use shared_screens::{EntityClient, ListScreen, ScreenContext};

use crate::models::Appointment;

pub struct AppointmentService {
    client: EntityClient<Appointment>,
}

impl AppointmentService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: EntityClient::new(api),
        }
    }

    pub fn client(&self) -> &EntityClient<Appointment> {
        &self.client
    }

    pub fn default_page() -> PageRequest {
        PageRequest::new("appointmentDate", SortDir::Desc)
    }

    pub fn screen(&self, ctx: ScreenContext) -> ListScreen<Appointment> {
        ListScreen::new(self.client.clone(), ctx, Self::default_page())
    }

    pub async fn get_today(&self) -> Result<Vec<Appointment>, ApiError> {
        self.client.get_list("/appointments/today").await
    }

    pub async fn get_by_date(&self, date: &str) -> Result<Vec<Appointment>, ApiError> {
        self.client
            .get_list(&format!("/appointments/date/{}", date))
            .await
    }

    pub async fn export_excel(&self, start: &str, end: &str) -> Result<Vec<u8>, ApiError> {
        self.client
            .download(
                "/appointments/export/excel",
                &[
                    ("startDate", start.to_string()),
                    ("endDate", end.to_string()),
                ],
            )
            .await
    }
}
