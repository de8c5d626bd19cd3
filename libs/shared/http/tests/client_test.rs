use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_config::ApiConfig;
use shared_http::{ApiClient, ApiError, UnauthorizedHook};
use shared_models::auth::Role;
use shared_models::session::{MemorySessionStore, Session, SessionStore};

struct CountingHook {
    fired: AtomicUsize,
}

impl CountingHook {
    fn new() -> Self {
        Self {
            fired: AtomicUsize::new(0),
        }
    }

    fn count(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

impl UnauthorizedHook for CountingHook {
    fn on_unauthorized(&self) {
        self.fired.fetch_add(1, Ordering::SeqCst);
    }
}

fn test_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        api_base_url: base_url.to_string(),
        download_dir: ".".to_string(),
        request_timeout_secs: 5,
    }
}

fn signed_in_store() -> Arc<MemorySessionStore> {
    let store = Arc::new(MemorySessionStore::new());
    store.store(Session {
        token: "test-token".to_string(),
        user_id: "u-1".to_string(),
        username: "admin".to_string(),
        role: Role::Administrator,
    });
    store
}

#[tokio::test]
async fn attaches_bearer_token_from_session_store() {
    let server = MockServer::start().await;
    let store = signed_in_store();
    let hook = Arc::new(CountingHook::new());
    let client = ApiClient::new(&test_config(&server.uri()), store, hook).unwrap();

    Mock::given(method("GET"))
        .and(path("/patients"))
        .and(header("Authorization", "Bearer test-token"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let body: serde_json::Value = client
        .get("/patients", &[("page", "0".to_string())])
        .await
        .unwrap();
    assert_eq!(body["content"], json!([]));
}

#[tokio::test]
async fn omits_authorization_header_without_session() {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::new());
    let hook = Arc::new(CountingHook::new());
    let client = ApiClient::new(&test_config(&server.uri()), store, hook).unwrap();

    // wiremock has no "header absent" matcher; assert on the recorded
    // request instead.
    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t",
            "userId": "u",
            "username": "n",
            "email": "e@x.com",
            "role": "ADMINISTRATOR"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let _: serde_json::Value = client
        .post("/auth/signin", json!({ "username": "n", "password": "p" }))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("Authorization").is_none());
}

#[tokio::test]
async fn clears_session_and_fires_hook_on_401() {
    let server = MockServer::start().await;
    let store = signed_in_store();
    let hook = Arc::new(CountingHook::new());
    let client = ApiClient::new(&test_config(&server.uri()), store.clone(), hook.clone()).unwrap();

    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
        .mount(&server)
        .await;

    let result: Result<serde_json::Value, ApiError> = client.get("/patients", &[]).await;

    // Caller still sees the rejection for its own handling.
    assert_matches!(result, Err(ApiError::Unauthorized(_)));
    // Global side effects: session gone, redirect hook fired once.
    assert!(store.load().is_none());
    assert_eq!(hook.count(), 1);
}

#[tokio::test]
async fn maps_404_and_500_to_distinct_errors() {
    let server = MockServer::start().await;
    let store = signed_in_store();
    let hook = Arc::new(CountingHook::new());
    let client = ApiClient::new(&test_config(&server.uri()), store.clone(), hook.clone()).unwrap();

    Mock::given(method("GET"))
        .and(path("/patients/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such patient"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/patients/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let missing: Result<serde_json::Value, ApiError> = client.get("/patients/missing", &[]).await;
    assert_matches!(missing, Err(ApiError::NotFound(_)));

    let broken: Result<serde_json::Value, ApiError> = client.get("/patients/broken", &[]).await;
    assert_matches!(broken, Err(ApiError::Status { status: 500, .. }));

    // Non-401 failures leave the session alone.
    assert!(store.load().is_some());
    assert_eq!(hook.count(), 0);
}

#[tokio::test]
async fn download_returns_raw_bytes() {
    let server = MockServer::start().await;
    let store = signed_in_store();
    let hook = Arc::new(CountingHook::new());
    let client = ApiClient::new(&test_config(&server.uri()), store, hook).unwrap();

    let payload = vec![0x25, 0x50, 0x44, 0x46]; // "%PDF"
    Mock::given(method("GET"))
        .and(path("/patients/p-1/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&server)
        .await;

    let bytes = client.download("/patients/p-1/pdf", &[]).await.unwrap();
    assert_eq!(bytes, payload);
}
