//! Web API round-trip tests.
//!
//! Each test boots the Axum app on an ephemeral port against the in-memory
//! store and a scripted summarization client, then drives it over real HTTP.

mod common;

use std::sync::Arc;

use common::MockSummaryClient;
use serde_json::{json, Value};
use tasksum_core::lifecycle::TaskLifecycleEngine;
use tasksum_core::store::InMemoryTaskStore;
use tasksum_core::web::{app_router, AppState};

async fn spawn_app(client: MockSummaryClient) -> (String, Arc<MockSummaryClient>) {
    let store = Arc::new(InMemoryTaskStore::new());
    let client = Arc::new(client);
    let engine = Arc::new(TaskLifecycleEngine::new(store, client.clone()));
    let app = app_router(AppState::new(engine));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), client)
}

#[tokio::test]
async fn test_task_crud_round_trip() {
    let (base, summarizer) = spawn_app(MockSummaryClient::returning("Deploy v2")).await;
    let http = reqwest::Client::new();

    // Create an important task; the summary arrives with the response
    let created: Value = http
        .post(format!("{base}/tasks"))
        .json(&json!({
            "title": "Ship release",
            "description": "v2 rollout",
            "is_important": true
        }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();

    let task_id = created["task_id"].as_i64().unwrap();
    assert_eq!(created["title"], "Ship release");
    assert_eq!(created["summary"], "Deploy v2");
    assert!(created.get("summary_warning").is_none());
    assert_eq!(summarizer.call_count(), 1);

    // Read it back
    let fetched: Value = http
        .get(format!("{base}/tasks/{task_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["summary"], "Deploy v2");

    // Partial update leaves the summary alone
    let updated: Value = http
        .put(format!("{base}/tasks/{task_id}"))
        .json(&json!({"description": "v2.1 rollout"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["description"], "v2.1 rollout");
    assert_eq!(updated["summary"], "Deploy v2");
    assert_eq!(summarizer.call_count(), 1);

    // Delete, then the id is gone
    let deleted: Value = http
        .delete(format!("{base}/tasks/{task_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(deleted["success"], true);

    let missing = http
        .get(format!("{base}/tasks/{task_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    // Second delete reports NotFound, not success
    let second_delete = http
        .delete(format!("{base}/tasks/{task_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(second_delete.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    let (base, summarizer) = spawn_app(MockSummaryClient::returning("unused")).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/tasks"))
        .json(&json!({"title": "   "}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(summarizer.call_count(), 0);
}

#[tokio::test]
async fn test_create_carries_soft_summarization_warning() {
    let (base, _) = spawn_app(MockSummaryClient::failing("service down")).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/tasks"))
        .json(&json!({
            "title": "Ship release",
            "description": "v2 rollout",
            "is_important": true
        }))
        .send()
        .await
        .unwrap();

    // Creation committed despite the summarizer outage
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["summary"], Value::Null);
    assert!(body["summary_warning"].as_str().is_some());
}

#[tokio::test]
async fn test_list_pagination_over_http() {
    let (base, _) = spawn_app(MockSummaryClient::returning("unused")).await;
    let http = reqwest::Client::new();

    for title in ["A", "B", "C", "D", "E"] {
        http.post(format!("{base}/tasks"))
            .json(&json!({"title": title}))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
    }

    let page: Value = http
        .get(format!("{base}/tasks?offset=2&limit=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let titles: Vec<&str> = page
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["C", "D"]);
}

#[tokio::test]
async fn test_root_and_health_endpoints() {
    let (base, _) = spawn_app(MockSummaryClient::returning("unused")).await;
    let http = reqwest::Client::new();

    let root: Value = http
        .get(format!("{base}/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(root["message"], "Welcome to the AI-Powered Task Summarizer API");

    let health: Value = http
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
}
