use shared_http::{ApiClient, ApiError};
use shared_models::page::{PageRequest, SortDir};
use shared_screens::{EntityClient, ListScreen, ScreenContext};

use crate::models::FinanceRecord;

pub struct FinanceService {
    client: EntityClient<FinanceRecord>,
}

impl FinanceService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: EntityClient::new(api),
        }
    }

    pub fn client(&self) -> &EntityClient<FinanceRecord> {
        &self.client
    }

    pub fn default_page() -> PageRequest {
        PageRequest::new("transactionDate", SortDir::Desc)
    }

    pub fn screen(&self, ctx: ScreenContext) -> ListScreen<FinanceRecord> {
        ListScreen::new(self.client.clone(), ctx, Self::default_page())
    }

    /// Ledger export over a date range.
    pub async fn export_excel(&self, start: &str, end: &str) -> Result<Vec<u8>, ApiError> {
        self.client
            .download(
                "/finance/export/excel",
                &[("start", start.to_string()), ("end", end.to_string())],
            )
            .await
    }
}
