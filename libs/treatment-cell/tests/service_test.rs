use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_config::ApiConfig;
use shared_http::{ApiClient, NoRedirect};
use shared_models::session::MemorySessionStore;
use treatment_cell::TreatmentService;

#[tokio::test]
async fn active_treatments_are_the_bookable_subset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/treatments/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "t-1",
                "treatmentName": "Scaling",
                "category": "General Dentistry",
                "description": "Full-mouth scaling and polishing",
                "availableForBooking": true
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let config = ApiConfig {
        api_base_url: server.uri(),
        download_dir: ".".to_string(),
        request_timeout_secs: 5,
    };
    let api = ApiClient::new(
        &config,
        Arc::new(MemorySessionStore::new()),
        Arc::new(NoRedirect),
    )
    .unwrap();

    let active = TreatmentService::new(api).get_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert!(active[0].available_for_booking);
    assert_eq!(active[0].treatment_name, "Scaling");
}
