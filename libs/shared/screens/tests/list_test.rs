use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_config::ApiConfig;
use shared_http::{ApiClient, NoRedirect};
use shared_models::page::{PageRequest, SortDir};
use shared_models::session::MemorySessionStore;
use shared_screens::testing::{test_context, TestContext};
use shared_screens::{Entity, EntityClient, ListMode, ListScreen, LoadState};

/// Minimal fixture resource: clinic supplies. Real cells bring their own
/// wire types; the engine only needs an id and a collection path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Supply {
    id: String,
    name: String,
}

impl Entity for Supply {
    const RESOURCE: &'static str = "/supplies";
    const NOUN: &'static str = "supply";
    const NOUN_PLURAL: &'static str = "supplies";

    fn id(&self) -> &str {
        &self.id
    }
}

fn supply(id: &str, name: &str) -> serde_json::Value {
    json!({ "id": id, "name": name })
}

async fn screen_against(server: &MockServer) -> (ListScreen<Supply>, TestContext) {
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
    let tc = test_context();
    let screen = ListScreen::new(
        EntityClient::new(api),
        tc.ctx.clone(),
        PageRequest::new("name", SortDir::Asc),
    );
    (screen, tc)
}

async fn mount_default_page(server: &MockServer, rows: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/supplies"))
        .and(query_param("sortBy", "name"))
        .and(query_param("sortDir", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": rows,
            "totalElements": 2,
            "totalPages": 1
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn mount_fetch_populates_rows_and_totals() {
    let server = MockServer::start().await;
    mount_default_page(&server, vec![supply("s-1", "Gauze"), supply("s-2", "Gloves")]).await;
    let (mut screen, tc) = screen_against(&server).await;

    assert_eq!(screen.state(), LoadState::Idle);
    screen.refresh().await;

    assert_eq!(screen.state(), LoadState::Loaded);
    assert_eq!(screen.rows().len(), 2);
    assert_eq!(screen.total_elements(), 2);
    assert_eq!(screen.total_pages(), 1);
    assert_eq!(*screen.mode(), ListMode::Paged);
    assert!(tc.toasts.errors().is_empty());
}

#[tokio::test]
async fn failed_fetch_keeps_previous_rows_and_toasts() {
    let server = MockServer::start().await;
    mount_default_page(&server, vec![supply("s-1", "Gauze")]).await;
    let (mut screen, tc) = screen_against(&server).await;
    screen.refresh().await;
    assert_eq!(screen.rows().len(), 1);

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/supplies"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    screen.refresh().await;

    // Error is transient: the old table is still on screen.
    assert_eq!(screen.rows().len(), 1);
    assert_eq!(screen.rows()[0].id, "s-1");
    assert_eq!(screen.state(), LoadState::Loaded);
    assert_eq!(tc.toasts.errors(), vec!["Failed to fetch supplies"]);
}

#[tokio::test]
async fn search_replaces_rows_and_blank_query_restores_paging() {
    let server = MockServer::start().await;
    mount_default_page(&server, vec![supply("s-1", "Gauze"), supply("s-2", "Gloves")]).await;
    Mock::given(method("GET"))
        .and(path("/supplies/search"))
        .and(query_param("query", "glo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([supply("s-2", "Gloves")])))
        .mount(&server)
        .await;

    let (mut screen, _tc) = screen_against(&server).await;
    screen.refresh().await;

    screen.submit_search("glo").await;
    assert_eq!(screen.rows().len(), 1);
    assert_eq!(
        *screen.mode(),
        ListMode::Search {
            query: "glo".to_string()
        }
    );

    // Paging is inert over search results.
    screen.set_page(3).await;
    assert_eq!(screen.page().page, 0);

    screen.submit_search("   ").await;
    assert_eq!(*screen.mode(), ListMode::Paged);
    assert_eq!(screen.rows().len(), 2);
}

#[tokio::test]
async fn save_creates_without_selection_and_updates_with_one() {
    let server = MockServer::start().await;
    mount_default_page(&server, vec![supply("s-1", "Gauze")]).await;
    Mock::given(method("POST"))
        .and(path("/supplies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(supply("s-9", "Masks")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/supplies/s-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(supply("s-1", "Gauze XL")))
        .expect(1)
        .mount(&server)
        .await;

    let (mut screen, tc) = screen_against(&server).await;
    screen.refresh().await;

    screen.begin_create();
    assert!(screen.dialog_open());
    let saved = screen.save(&json!({ "name": "Masks" })).await;
    assert!(saved);
    assert!(!screen.dialog_open());

    assert!(screen.begin_edit("s-1").is_some());
    let saved = screen.save(&json!({ "name": "Gauze XL" })).await;
    assert!(saved);

    assert_eq!(
        tc.toasts.successes(),
        vec![
            "Supply created successfully",
            "Supply updated successfully"
        ]
    );
}

#[tokio::test]
async fn failed_save_leaves_dialog_open_and_rows_untouched() {
    let server = MockServer::start().await;
    mount_default_page(&server, vec![supply("s-1", "Gauze")]).await;
    Mock::given(method("POST"))
        .and(path("/supplies"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (mut screen, tc) = screen_against(&server).await;
    screen.refresh().await;
    let before: Vec<Supply> = screen.rows().to_vec();

    screen.begin_create();
    let saved = screen.save(&json!({ "name": "Masks" })).await;

    assert!(!saved);
    assert!(screen.dialog_open(), "dialog must stay open for retry");
    assert_eq!(screen.rows(), &before[..]);
    assert_eq!(tc.toasts.errors(), vec!["Failed to save supply"]);
}

#[tokio::test]
async fn declined_confirmation_issues_no_delete() {
    let server = MockServer::start().await;
    mount_default_page(&server, vec![supply("s-1", "Gauze")]).await;
    Mock::given(method("DELETE"))
        .and(path("/supplies/s-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (mut screen, tc) = screen_against(&server).await;
    screen.refresh().await;

    tc.confirm.set_answer(false);
    screen.delete("s-1").await;

    assert_eq!(
        tc.confirm.prompts(),
        vec!["Are you sure you want to delete this supply?"]
    );
    assert!(tc.toasts.successes().is_empty());
    assert!(tc.toasts.errors().is_empty());
}

#[tokio::test]
async fn failed_delete_refetches_and_content_is_unchanged() {
    let server = MockServer::start().await;
    mount_default_page(&server, vec![supply("s-1", "Gauze")]).await;
    Mock::given(method("DELETE"))
        .and(path("/supplies/s-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let (mut screen, tc) = screen_against(&server).await;
    screen.refresh().await;
    let before: Vec<Supply> = screen.rows().to_vec();

    screen.delete("s-1").await;

    // No partial mutation visible after the failed action.
    assert_eq!(screen.rows(), &before[..]);
    assert_eq!(tc.toasts.errors(), vec!["Failed to delete supply"]);
}

#[tokio::test]
async fn cancelled_lifetime_discards_stale_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/supplies"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "content": [supply("s-1", "Gauze")],
                    "totalElements": 1,
                    "totalPages": 1
                }))
                .set_delay(std::time::Duration::from_millis(50)),
        )
        .mount(&server)
        .await;

    let (mut screen, _tc) = screen_against(&server).await;
    let lifetime = screen.lifetime();

    // Cancel while the request is in flight; the response must be dropped.
    futures::join!(screen.refresh(), async {
        lifetime.cancel();
    });

    assert!(screen.rows().is_empty());
}

#[tokio::test]
async fn export_and_pdf_deliver_blobs_to_the_file_sink() {
    let server = MockServer::start().await;
    mount_default_page(&server, vec![supply("s-1", "Gauze")]).await;
    Mock::given(method("GET"))
        .and(path("/supplies/export/excel"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/supplies/s-1/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x25, 0x50]))
        .mount(&server)
        .await;

    let (mut screen, tc) = screen_against(&server).await;
    screen.refresh().await;

    screen
        .export_excel("/supplies/export/excel", &[], "supplies.xlsx")
        .await;
    screen.open_pdf("s-1").await;

    assert_eq!(tc.files.saved(), vec![("supplies.xlsx".to_string(), vec![1, 2, 3])]);
    assert_eq!(tc.files.opened(), vec![("supply-s-1.pdf".to_string(), vec![0x25, 0x50])]);
    assert_eq!(
        tc.toasts.successes(),
        vec!["Export successful", "PDF generated successfully"]
    );
}
