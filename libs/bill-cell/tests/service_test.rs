use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bill_cell::BillService;
use shared_config::ApiConfig;
use shared_http::{ApiClient, NoRedirect};
use shared_models::session::MemorySessionStore;

fn service_for(server: &MockServer) -> BillService {
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
    BillService::new(api)
}

#[tokio::test]
async fn bill_pdf_comes_from_the_bill_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bills/b-1/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x25, 0x50, 0x44, 0x46]))
        .expect(1)
        .mount(&server)
        .await;

    let pdf = service_for(&server).generate_pdf("b-1").await.unwrap();
    assert_eq!(&pdf[..4], b"%PDF");
}

#[tokio::test]
async fn billing_export_is_scoped_to_one_patient() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bills/patient/p-1/export/excel"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1]))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = service_for(&server).export_excel("p-1").await.unwrap();
    assert_eq!(bytes, vec![1]);
}

#[tokio::test]
async fn amounts_round_trip_as_numbers_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bills/b-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b-1",
            "billId": "BILL-1700000000000",
            "patientId": "p-1",
            "patientName": "Asha Rao",
            "dentistId": "d-1",
            "dentistName": "Meera Shah",
            "billDate": "2026-08-01",
            "amountDue": 150.5,
            "amountPaid": 50,
            "dueDate": null,
            "paymentStatus": "PENDING"
        })))
        .mount(&server)
        .await;

    let bill = service_for(&server).client().get_by_id("b-1").await.unwrap();
    assert_eq!(bill.amount_due, 150.5);
    assert_eq!(bill.amount_paid, 50.0);
    assert_eq!(bill.outstanding(), 100.5);
}
