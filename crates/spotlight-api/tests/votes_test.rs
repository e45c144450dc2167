//! Voting endpoint integration tests.
//!
//! Run with: `cargo test -p spotlight-api --test votes_test`
//! Requires Docker for testcontainers (Postgres).

mod helpers;

use helpers::{api_path, create_streamer, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_votes_accumulate() {
    let app = setup_test_app().await;
    let client = app.client();

    let streamer = create_streamer(client, "Ninja").await;
    let id = streamer["id"].as_str().expect("streamer id");
    let path = api_path(&format!("/streamer/{}", id));

    for _ in 0..3 {
        let response = client.put(&path).json(&json!({ "voteType": "up" })).await;
        assert_eq!(response.status_code(), 200);
    }
    let response = client.put(&path).json(&json!({ "voteType": "down" })).await;
    assert_eq!(response.status_code(), 200);

    let counts: serde_json::Value = response.json();
    assert_eq!(counts, json!({ "up": 3, "down": 1 }));
}

#[tokio::test]
async fn test_concurrent_votes_are_all_counted() {
    let app = setup_test_app().await;
    let client = app.client();

    let streamer = create_streamer(client, "Ninja").await;
    let id = streamer["id"].as_str().expect("streamer id");
    let path = api_path(&format!("/streamer/{}", id));

    let requests: Vec<_> = (0..15)
        .map(|i| {
            let kind = if i < 10 { "up" } else { "down" };
            let path = path.clone();
            async move { client.put(&path).json(&json!({ "voteType": kind })).await }
        })
        .collect();

    for response in futures::future::join_all(requests).await {
        assert_eq!(response.status_code(), 200);
    }

    let response = client
        .get(&api_path("/streamer"))
        .add_query_param("name", "Ninja")
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["votes"],
        json!({ "up": 10, "down": 5 }),
        "every concurrent vote must land exactly once"
    );
}

#[tokio::test]
async fn test_vote_rejects_unknown_kind() {
    let app = setup_test_app().await;
    let client = app.client();

    let streamer = create_streamer(client, "Ninja").await;
    let id = streamer["id"].as_str().expect("streamer id");
    let path = api_path(&format!("/streamer/{}", id));

    let response = client
        .put(&path)
        .json(&json!({ "voteType": "sideways" }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid request");
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let response = client
        .get(&api_path("/streamer"))
        .add_query_param("name", "Ninja")
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["votes"], json!({ "up": 0, "down": 0 }));
}

#[tokio::test]
async fn test_vote_requires_json_body() {
    let app = setup_test_app().await;
    let client = app.client();

    let streamer = create_streamer(client, "Ninja").await;
    let id = streamer["id"].as_str().expect("streamer id");

    let response = client.put(&api_path(&format!("/streamer/{}", id))).await;
    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid request");
}

#[tokio::test]
async fn test_vote_unknown_streamer_is_404() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .put(&api_path(&format!("/streamer/{}", uuid::Uuid::new_v4())))
        .json(&json!({ "voteType": "up" }))
        .await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Streamer not found");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_vote_malformed_id_is_400() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .put(&api_path("/streamer/not-a-uuid"))
        .json(&json!({ "voteType": "up" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid streamer id");
}
