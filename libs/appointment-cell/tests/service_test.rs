use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::{AppointmentService, AppointmentStatus};
use shared_config::ApiConfig;
use shared_http::{ApiClient, NoRedirect};
use shared_models::session::MemorySessionStore;

fn service_for(server: &MockServer) -> AppointmentService {
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
    AppointmentService::new(api)
}

fn appointment_json(id: &str, time: &str) -> serde_json::Value {
    json!({
        "id": id,
        "patientId": "p-1",
        "patientName": "Asha Rao",
        "dentistId": "d-1",
        "dentistName": "Meera Shah",
        "appointmentDate": "2026-08-06",
        "appointmentTime": time,
        "status": "SCHEDULED",
        "notes": null
    })
}

#[tokio::test]
async fn todays_schedule_is_a_plain_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments/today"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            appointment_json("a-1", "09:00"),
            appointment_json("a-2", "14:30"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let today = service_for(&server).get_today().await.unwrap();

    assert_eq!(today.len(), 2);
    assert_eq!(today[0].appointment_time, "09:00");
    assert_eq!(today[0].status, AppointmentStatus::Scheduled);
    assert_eq!(today[1].patient_name, "Asha Rao");
}

#[tokio::test]
async fn day_view_addresses_the_date_in_the_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments/date/2026-08-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([appointment_json("a-3", "10:00")])))
        .expect(1)
        .mount(&server)
        .await;

    let day = service_for(&server).get_by_date("2026-08-10").await.unwrap();
    assert_eq!(day.len(), 1);
}

#[tokio::test]
async fn excel_export_carries_the_date_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments/export/excel"))
        .and(query_param("startDate", "2026-08-01"))
        .and(query_param("endDate", "2026-08-31"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7, 7]))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = service_for(&server)
        .export_excel("2026-08-01", "2026-08-31")
        .await
        .unwrap();
    assert_eq!(bytes, vec![7, 7]);
}
