//! Gateway integration tests
//!
//! Drives the full WebSocket protocol against a gateway running over
//! the in-memory store: snapshot delivery, mutation broadcasts,
//! duplicate-reaction suppression, and the error paths.
//!
//! Run with: cargo test -p integration-tests --test gateway_tests

use integration_tests::{comment_request, publish_request, reaction_request, TestServer};
use serde_json::json;

// ============================================================================
// Health and snapshot
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = server.health().await.expect("Health request failed");
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_snapshot_contains_seeded_categories() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.expect("Failed to connect");

    let snapshot = client.expect_event("INITIAL_DATA").await.unwrap();
    assert_eq!(snapshot["articles"], json!([]));

    let names: Vec<&str> = snapshot["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Entertainment", "General", "Science", "Sports", "Technology"]
    );
}

#[tokio::test]
async fn test_snapshot_failure_keeps_connection_usable() {
    let server = TestServer::start().await.expect("Failed to start server");

    server.store.set_offline(true);
    let mut client = server.connect().await.expect("Failed to connect");
    let error = client.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Internal server error");

    // The session stays active; once the store recovers, requests work
    server.store.set_offline(false);
    client
        .send_json(&json!({"type": "GET_ALL_ARTICLES"}))
        .await
        .unwrap();
    let reply = client.expect_event("ALL_ARTICLES").await.unwrap();
    assert_eq!(reply["articles"], json!([]));
}

// ============================================================================
// Publishing
// ============================================================================

#[tokio::test]
async fn test_publish_broadcasts_to_all_including_sender() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut c1 = server.connect().await.unwrap();
    let mut c2 = server.connect().await.unwrap();
    c1.expect_event("INITIAL_DATA").await.unwrap();
    c2.expect_event("INITIAL_DATA").await.unwrap();

    c1.send_json(&publish_request("T", "B")).await.unwrap();

    for client in [&mut c1, &mut c2] {
        let event = client.expect_event("NEW_ARTICLE").await.unwrap();
        let article = &event["article"];
        assert_eq!(article["id"], 1);
        assert_eq!(article["title"], "T");
        assert_eq!(article["content"], "B");
        assert!(article["timestamp"].as_i64().unwrap() > 0);
        assert_eq!(article["category"], json!(null));
        assert_eq!(article["comments"], json!([]));
        assert_eq!(article["reactions"], json!([]));
    }
}

#[tokio::test]
async fn test_publish_with_category_resolves_it() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.unwrap();
    let snapshot = client.expect_event("INITIAL_DATA").await.unwrap();
    let category = &snapshot["categories"][0];

    client
        .send_json(&json!({
            "type": "PUBLISH_ARTICLE",
            "article": {"title": "T", "content": "B", "categoryId": category["id"]}
        }))
        .await
        .unwrap();

    let event = client.expect_event("NEW_ARTICLE").await.unwrap();
    assert_eq!(event["article"]["categoryId"], category["id"]);
    assert_eq!(event["article"]["category"]["name"], category["name"]);
}

#[tokio::test]
async fn test_publish_unknown_category_fails() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut c1 = server.connect().await.unwrap();
    let mut c2 = server.connect().await.unwrap();
    c1.expect_event("INITIAL_DATA").await.unwrap();
    c2.expect_event("INITIAL_DATA").await.unwrap();

    c1.send_json(&json!({
        "type": "PUBLISH_ARTICLE",
        "article": {"title": "T", "content": "B", "categoryId": 999}
    }))
    .await
    .unwrap();

    let error = c1.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Category not found");
    c2.expect_silence().await.unwrap();
}

#[tokio::test]
async fn test_publish_rejects_empty_fields() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut c1 = server.connect().await.unwrap();
    let mut c2 = server.connect().await.unwrap();
    c1.expect_event("INITIAL_DATA").await.unwrap();
    c2.expect_event("INITIAL_DATA").await.unwrap();

    c1.send_json(&publish_request("", "B")).await.unwrap();
    let error = c1.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Article title is required");

    // Missing content entirely is rejected the same way
    c1.send_json(&json!({
        "type": "PUBLISH_ARTICLE",
        "article": {"title": "T"}
    }))
    .await
    .unwrap();
    let error = c1.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Article content is required");

    c2.expect_silence().await.unwrap();
}

#[tokio::test]
async fn test_publish_ids_unique_timestamps_non_decreasing() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.unwrap();
    client.expect_event("INITIAL_DATA").await.unwrap();

    let mut ids = Vec::new();
    let mut timestamps = Vec::new();
    for i in 0..3 {
        client
            .send_json(&publish_request(&format!("T{i}"), "B"))
            .await
            .unwrap();
        let event = client.expect_event("NEW_ARTICLE").await.unwrap();
        ids.push(event["article"]["id"].as_i64().unwrap());
        timestamps.push(event["article"]["timestamp"].as_i64().unwrap());
    }

    assert_eq!(ids, vec![1, 2, 3]);
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_late_joiner_sees_article_in_snapshot_not_broadcast() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut c1 = server.connect().await.unwrap();
    c1.expect_event("INITIAL_DATA").await.unwrap();

    c1.send_json(&publish_request("T", "B")).await.unwrap();
    c1.expect_event("NEW_ARTICLE").await.unwrap();

    // A session connecting after the broadcast gets the article in its
    // snapshot and nothing retroactively
    let mut c2 = server.connect().await.unwrap();
    let snapshot = c2.expect_event("INITIAL_DATA").await.unwrap();
    assert_eq!(snapshot["articles"][0]["title"], "T");
    c2.expect_silence().await.unwrap();
}

// ============================================================================
// Feed requests
// ============================================================================

#[tokio::test]
async fn test_get_all_articles_round_trip() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.unwrap();
    client.expect_event("INITIAL_DATA").await.unwrap();

    client.send_json(&publish_request("T", "B")).await.unwrap();
    client.expect_event("NEW_ARTICLE").await.unwrap();

    client
        .send_json(&json!({"type": "GET_ALL_ARTICLES"}))
        .await
        .unwrap();
    let reply = client.expect_event("ALL_ARTICLES").await.unwrap();

    let articles = reply["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["title"], "T");
    assert_eq!(articles[0]["comments"], json!([]));
    assert_eq!(articles[0]["reactions"], json!([]));
}

#[tokio::test]
async fn test_feed_is_newest_first() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.unwrap();
    client.expect_event("INITIAL_DATA").await.unwrap();

    for title in ["first", "second"] {
        client.send_json(&publish_request(title, "B")).await.unwrap();
        client.expect_event("NEW_ARTICLE").await.unwrap();
    }

    client
        .send_json(&json!({"type": "GET_ALL_ARTICLES"}))
        .await
        .unwrap();
    let reply = client.expect_event("ALL_ARTICLES").await.unwrap();
    assert_eq!(reply["articles"][0]["title"], "second");
    assert_eq!(reply["articles"][1]["title"], "first");
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_comment_broadcasts_to_all() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut c1 = server.connect().await.unwrap();
    let mut c2 = server.connect().await.unwrap();
    c1.expect_event("INITIAL_DATA").await.unwrap();
    c2.expect_event("INITIAL_DATA").await.unwrap();

    c1.send_json(&publish_request("T", "B")).await.unwrap();
    c1.expect_event("NEW_ARTICLE").await.unwrap();
    c2.expect_event("NEW_ARTICLE").await.unwrap();

    c1.send_json(&comment_request(1, Some("alice"), "hi"))
        .await
        .unwrap();

    for client in [&mut c1, &mut c2] {
        let event = client.expect_event("NEW_COMMENT").await.unwrap();
        assert_eq!(event["articleId"], 1);
        assert_eq!(event["comment"]["userName"], "alice");
        assert_eq!(event["comment"]["commentText"], "hi");
        assert!(event["comment"]["timestamp"].as_i64().unwrap() > 0);
    }
}

#[tokio::test]
async fn test_comment_defaults_to_anonymous() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.unwrap();
    client.expect_event("INITIAL_DATA").await.unwrap();

    client.send_json(&publish_request("T", "B")).await.unwrap();
    client.expect_event("NEW_ARTICLE").await.unwrap();

    client
        .send_json(&comment_request(1, None, "first!"))
        .await
        .unwrap();
    let event = client.expect_event("NEW_COMMENT").await.unwrap();
    assert_eq!(event["comment"]["userName"], "Anonymous");
}

#[tokio::test]
async fn test_comment_on_missing_article_is_not_broadcast() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut c1 = server.connect().await.unwrap();
    let mut c2 = server.connect().await.unwrap();
    c1.expect_event("INITIAL_DATA").await.unwrap();
    c2.expect_event("INITIAL_DATA").await.unwrap();

    c1.send_json(&comment_request(42, Some("alice"), "hi"))
        .await
        .unwrap();

    let error = c1.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Article not found");
    c2.expect_silence().await.unwrap();
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_duplicate_reaction_is_suppressed() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut c1 = server.connect().await.unwrap();
    let mut c2 = server.connect().await.unwrap();
    c1.expect_event("INITIAL_DATA").await.unwrap();
    c2.expect_event("INITIAL_DATA").await.unwrap();

    c1.send_json(&publish_request("T", "B")).await.unwrap();
    c1.expect_event("NEW_ARTICLE").await.unwrap();
    c2.expect_event("NEW_ARTICLE").await.unwrap();

    // First reaction broadcasts to everyone
    c1.send_json(&reaction_request(1, "x", "love")).await.unwrap();
    for client in [&mut c1, &mut c2] {
        let event = client.expect_event("NEW_REACTION").await.unwrap();
        assert_eq!(event["articleId"], 1);
        assert_eq!(event["reaction"]["clientId"], "x");
        assert_eq!(event["reaction"]["type"], "love");
    }

    // Same (article, client, type) again: sender-only error, no new row
    c1.send_json(&reaction_request(1, "x", "love")).await.unwrap();
    let error = c1.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "You have already reacted with this type.");
    c2.expect_silence().await.unwrap();
    assert_eq!(server.store.reaction_count(), 1);
}

#[tokio::test]
async fn test_same_client_different_type_is_allowed() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.unwrap();
    client.expect_event("INITIAL_DATA").await.unwrap();

    client.send_json(&publish_request("T", "B")).await.unwrap();
    client.expect_event("NEW_ARTICLE").await.unwrap();

    client.send_json(&reaction_request(1, "x", "love")).await.unwrap();
    client.expect_event("NEW_REACTION").await.unwrap();

    client
        .send_json(&reaction_request(1, "x", "thumbs_up"))
        .await
        .unwrap();
    let event = client.expect_event("NEW_REACTION").await.unwrap();
    assert_eq!(event["reaction"]["type"], "thumbs_up");
    assert_eq!(server.store.reaction_count(), 2);
}

#[tokio::test]
async fn test_reaction_on_missing_article_fails() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.unwrap();
    client.expect_event("INITIAL_DATA").await.unwrap();

    client.send_json(&reaction_request(42, "x", "love")).await.unwrap();
    let error = client.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Article not found");
}

// ============================================================================
// Malformed input and error paths
// ============================================================================

#[tokio::test]
async fn test_unknown_type_replies_error() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.unwrap();
    client.expect_event("INITIAL_DATA").await.unwrap();

    client
        .send_json(&json!({"type": "DELETE_ARTICLE", "articleId": 1}))
        .await
        .unwrap();
    let error = client.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Unknown message type");
}

#[tokio::test]
async fn test_malformed_frame_keeps_session_alive() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.unwrap();
    client.expect_event("INITIAL_DATA").await.unwrap();

    client.send_raw("not json at all").await.unwrap();
    let error = client.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Invalid message format");

    client.send_raw(r#"{"noType": true}"#).await.unwrap();
    let error = client.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Invalid message format");

    // Session is still active after garbage input
    client
        .send_json(&json!({"type": "GET_ALL_ARTICLES"}))
        .await
        .unwrap();
    client.expect_event("ALL_ARTICLES").await.unwrap();
}

#[tokio::test]
async fn test_bad_payload_for_known_type() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = server.connect().await.unwrap();
    client.expect_event("INITIAL_DATA").await.unwrap();

    client
        .send_json(&json!({"type": "POST_COMMENT", "articleId": "seven"}))
        .await
        .unwrap();
    let error = client.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Invalid POST_COMMENT payload");
}

#[tokio::test]
async fn test_store_failure_replies_generic_error() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut c1 = server.connect().await.unwrap();
    let mut c2 = server.connect().await.unwrap();
    c1.expect_event("INITIAL_DATA").await.unwrap();
    c2.expect_event("INITIAL_DATA").await.unwrap();

    server.store.set_offline(true);
    c1.send_json(&publish_request("T", "B")).await.unwrap();
    let error = c1.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "Internal server error");
    c2.expect_silence().await.unwrap();
}

// ============================================================================
// Disconnect handling
// ============================================================================

#[tokio::test]
async fn test_disconnected_session_is_skipped_by_broadcast() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut c1 = server.connect().await.unwrap();
    let c2 = server.connect().await.unwrap();
    c1.expect_event("INITIAL_DATA").await.unwrap();

    c2.close().await.unwrap();

    // The departed session must not block delivery to the rest
    c1.send_json(&publish_request("T", "B")).await.unwrap();
    let event = c1.expect_event("NEW_ARTICLE").await.unwrap();
    assert_eq!(event["article"]["title"], "T");
}

// ============================================================================
// Full two-client scenario
// ============================================================================

#[tokio::test]
async fn test_two_client_scenario() {
    let server = TestServer::start().await.expect("Failed to start server");

    // C1 connects and publishes
    let mut c1 = server.connect().await.unwrap();
    c1.expect_event("INITIAL_DATA").await.unwrap();
    c1.send_json(&publish_request("T", "B")).await.unwrap();

    let event = c1.expect_event("NEW_ARTICLE").await.unwrap();
    assert_eq!(event["article"]["id"], 1);
    assert!(event["article"]["timestamp"].as_i64().unwrap() > 0);
    assert_eq!(event["article"]["comments"], json!([]));
    assert_eq!(event["article"]["reactions"], json!([]));

    // C2 connects later and sees the article in its snapshot
    let mut c2 = server.connect().await.unwrap();
    let snapshot = c2.expect_event("INITIAL_DATA").await.unwrap();
    assert_eq!(snapshot["articles"][0]["id"], 1);

    // C1 comments; both receive the broadcast
    c1.send_json(&comment_request(1, Some("alice"), "hi"))
        .await
        .unwrap();
    for client in [&mut c1, &mut c2] {
        let event = client.expect_event("NEW_COMMENT").await.unwrap();
        assert_eq!(event["articleId"], 1);
        assert_eq!(event["comment"]["userName"], "alice");
        assert_eq!(event["comment"]["commentText"], "hi");
        assert!(event["comment"]["timestamp"].as_i64().unwrap() > 0);
    }

    // C1 reacts; both receive the broadcast
    c1.send_json(&reaction_request(1, "x", "love")).await.unwrap();
    c1.expect_event("NEW_REACTION").await.unwrap();
    c2.expect_event("NEW_REACTION").await.unwrap();

    // C1 repeats the reaction: only C1 hears about it, as an error
    c1.send_json(&reaction_request(1, "x", "love")).await.unwrap();
    let error = c1.expect_event("ERROR").await.unwrap();
    assert_eq!(error["message"], "You have already reacted with this type.");
    c2.expect_silence().await.unwrap();
}
