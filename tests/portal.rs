//! Router-level tests: the full HTTP surface against the in-memory store.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use boxoffice_server::routes::create_routes;
use boxoffice_server::store::memory::MemoryStore;
use boxoffice_server::store::AppState;

fn server() -> (Arc<MemoryStore>, TestServer) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        events: store.clone(),
        venues: store.clone(),
    };
    let server = TestServer::new(create_routes(state)).expect("test server");
    (store, server)
}

async fn add_hall_a(server: &TestServer) {
    server
        .post("/venues/create")
        .form(&[("name", "Hall A"), ("address", "1 Main St"), ("seats", "50")])
        .await
        .assert_status(StatusCode::SEE_OTHER);
}

async fn add_event(server: &TestServer, name: &str, venue_id: i32) {
    let venue_id = venue_id.to_string();
    let response = server
        .post("/events/create")
        .form(&[
            ("name", name),
            ("starts_at", "2026-09-01T19:00:00Z"),
            ("venue_id", venue_id.as_str()),
        ])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn index_is_reachable_under_all_aliases() {
    let (_, server) = server();

    for path in ["/", "/events", "/events/index"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::OK);

        let view: Value = response.json();
        assert_eq!(view["view"], "events/index");
        assert_eq!(view["model"]["events"], Value::Array(vec![]));
    }
}

#[tokio::test]
async fn create_list_delete_roundtrip() {
    let (_, server) = server();
    add_hall_a(&server).await;
    add_event(&server, "Opening Night", 1).await;

    let view: Value = server.get("/events/index").await.json();
    let events = view["model"]["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["name"], "Opening Night");
    assert_eq!(events[0]["venue_name"], "Hall A");
    assert_eq!(events[0]["ticket_count"], 0);

    let response = server.get("/events/delete/1").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/events/index");

    let view: Value = server.get("/events/index").await.json();
    assert!(view["model"]["events"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn submitted_sales_started_flag_is_ignored() {
    let (_, server) = server();
    add_hall_a(&server).await;

    server
        .post("/events/create")
        .form(&[
            ("name", "Opening Night"),
            ("starts_at", "2026-09-01T19:00:00Z"),
            ("venue_id", "1"),
            ("sales_started", "true"),
        ])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let view: Value = server.get("/events/index").await.json();
    assert_eq!(view["model"]["events"][0]["sales_started"], false);
}

#[tokio::test]
async fn invalid_create_keeps_submission_and_persists_nothing() {
    let (_, server) = server();
    add_hall_a(&server).await;

    let response = server
        .post("/events/create")
        .form(&[("name", "Opening Night")])
        .await;
    response.assert_status(StatusCode::OK);

    let view: Value = response.json();
    assert_eq!(view["view"], "events/create");
    assert_eq!(view["model"]["event"]["name"], "Opening Night");
    assert_eq!(view["model"]["venues"].as_array().unwrap().len(), 1);

    let messages: Vec<&str> = view["model"]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect();
    assert!(messages.contains(&"Venue must be provided!"));
    assert!(messages.contains(&"Event date must be provided!"));

    let view: Value = server.get("/events/index").await.json();
    assert!(view["model"]["events"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn ticketed_event_cannot_change_venue() {
    let (store, server) = server();
    add_hall_a(&server).await;
    server
        .post("/venues/create")
        .form(&[("name", "Hall B"), ("address", "2 Side St"), ("seats", "80")])
        .await
        .assert_status(StatusCode::SEE_OTHER);
    add_event(&server, "Opening Night", 1).await;
    store.add_ticket(1);

    let response = server
        .post("/events/update/1")
        .form(&[
            ("name", "Opening Night"),
            ("starts_at", "2026-09-01T19:00:00Z"),
            ("venue_id", "2"),
        ])
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let view: Value = response.json();
    assert_eq!(view["view"], "error");
    assert_eq!(view["model"]["code"], "CONFLICT");
    assert_eq!(
        view["model"]["message"],
        "Event already has ticket sold, change of venue is not allowed"
    );
    assert_eq!(view["model"]["redirect"], "/events/update/1");

    let view: Value = server.get("/events/index").await.json();
    assert_eq!(view["model"]["events"][0]["venue_name"], "Hall A");
}

#[tokio::test]
async fn ticketed_event_cannot_be_deleted() {
    let (store, server) = server();
    add_hall_a(&server).await;
    add_event(&server, "Opening Night", 1).await;
    store.add_ticket(1);

    let response = server.get("/events/delete/1").await;
    response.assert_status(StatusCode::CONFLICT);

    let view: Value = response.json();
    assert_eq!(
        view["model"]["message"],
        "Event already has ticket sold, delete is not allowed! Please delete corresponding ticket(s) first"
    );
    assert_eq!(view["model"]["redirect"], "/events/index");

    let view: Value = server.get("/events/index").await.json();
    assert_eq!(view["model"]["events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_event_renders_error_view() {
    let (_, server) = server();

    let response = server.get("/events/update/99").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let view: Value = response.json();
    assert_eq!(view["view"], "error");
    assert_eq!(view["model"]["code"], "NOT_FOUND");
    assert_eq!(view["model"]["message"], "Event with id {99} not found!");
    assert_eq!(view["model"]["redirect"], "/events/index");
}

#[tokio::test]
async fn venue_management_roundtrip() {
    let (_, server) = server();
    add_hall_a(&server).await;
    add_event(&server, "Opening Night", 1).await;

    // Duplicate address re-renders the venue form
    let response = server
        .post("/venues/create")
        .form(&[("name", "Hall B"), ("address", "1 Main St"), ("seats", "80")])
        .await;
    response.assert_status(StatusCode::OK);

    let view: Value = response.json();
    assert_eq!(view["view"], "venues/create");
    assert_eq!(view["model"]["errors"][0]["message"], "Address already in use!");

    // Deleting the venue cascades to its events
    server
        .get("/venues/delete/1")
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let view: Value = server.get("/venues/index").await.json();
    assert!(view["model"]["venues"].as_array().unwrap().is_empty());

    let view: Value = server.get("/events/index").await.json();
    assert!(view["model"]["events"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn health_and_security_headers() {
    let (_, server) = server();

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
}
