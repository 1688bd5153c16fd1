//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_seeded_tool_is_listed_and_fetched() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let name = unique_tool_name("listed");
    let category = unique_tool_name("category");
    seed_tool(&server.pool, &name, &category).await.unwrap();

    let response = server
        .get(&format!("/api/tools?category={}", category))
        .await
        .expect("Request failed");
    let tools: Vec<ToolBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, name);
    assert_eq!(tools[0].importance, "Recommended");
    assert_eq!(tools[0].upvotes, 0);
    assert!(tools[0].readme.is_none());

    let response = server
        .get(&format!("/api/tools/{}", name))
        .await
        .expect("Request failed");
    let tool: ToolBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tool.category, category);
    assert!(tool.is_open_source);
    assert_eq!(tool.tags, vec!["integration".to_string()]);
    assert!(tool.url.starts_with("https://"));
    assert!(!tool.description.is_empty());
}

#[tokio::test]
async fn test_unknown_tool_returns_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let name = unique_tool_name("missing");

    let response = server
        .get(&format!("/api/tools/{}", name))
        .await
        .expect("Request failed");
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_categories_include_seeded_category() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = unique_tool_name("stats");
    seed_tool(&server.pool, &unique_tool_name("stat-a"), &category).await.unwrap();
    seed_tool(&server.pool, &unique_tool_name("stat-b"), &category).await.unwrap();

    let response = server.get("/api/categories").await.expect("Request failed");
    let body: DataBody<Vec<CategoryBody>> = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = body
        .data
        .iter()
        .find(|c| c.category == category)
        .expect("seeded category missing");
    assert_eq!(entry.count, 2);
}

// ============================================================================
// Upvote Tests
// ============================================================================

#[tokio::test]
async fn test_upvote_toggle_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let name = unique_tool_name("voted");
    seed_tool(&server.pool, &name, "ci-cd").await.unwrap();
    let path = format!("/api/tools/{}/upvote", name);
    let first = unique_ip();
    let second = unique_ip();

    let response = server.head_as(&path, &first).await.expect("Request failed");
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.post_as(&path, &first).await.expect("Request failed");
    let vote: VoteBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.action, "added");
    assert!(vote.voted);
    assert_eq!(vote.upvotes, 1);
    assert_eq!(vote.message, "Upvote added");

    let response = server.head_as(&path, &first).await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post_as(&path, &second).await.expect("Request failed");
    let vote: VoteBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.upvotes, 2);

    let response = server.post_as(&path, &first).await.expect("Request failed");
    let vote: VoteBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.action, "removed");
    assert!(!vote.voted);
    assert_eq!(vote.upvotes, 1);

    let response = server
        .get(&format!("/api/tools/{}?readme=false", name))
        .await
        .expect("Request failed");
    let tool: ToolBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tool.upvotes, 1);
}

#[tokio::test]
async fn test_forwarded_for_uses_first_address() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let name = unique_tool_name("proxied");
    seed_tool(&server.pool, &name, "networking").await.unwrap();
    let path = format!("/api/tools/{}/upvote", name);
    let client_ip = unique_ip();

    let chain = format!("{}, 192.0.2.1", client_ip);
    let response = server.post_as(&path, &chain).await.expect("Request failed");
    let vote: VoteBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.action, "added");

    let response = server.head_as(&path, &client_ip).await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_peer_address_identifies_caller_without_headers() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let name = unique_tool_name("direct");
    seed_tool(&server.pool, &name, "monitoring").await.unwrap();
    let path = format!("/api/tools/{}/upvote", name);

    let response = server.post(&path).await.expect("Request failed");
    let vote: VoteBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.upvotes, 1);

    let response = server.head_as(&path, "127.0.0.1").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_upvote_unknown_tool_returns_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/api/tools/{}/upvote", unique_tool_name("ghost"));

    let response = server.post_as(&path, &unique_ip()).await.expect("Request failed");
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_TOOL");
    assert!(!body.error.message.is_empty());
}

#[tokio::test]
async fn test_concurrent_toggles_from_one_caller_stay_consistent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let name = unique_tool_name("raced");
    seed_tool(&server.pool, &name, "ci-cd").await.unwrap();
    let path = format!("/api/tools/{}/upvote", name);
    let ip = unique_ip();

    let url = format!("{}{}", server.base_url(), path);
    let handles: Vec<_> = (0..6)
        .map(|_| {
            let client = server.client.clone();
            let url = url.clone();
            let ip = ip.clone();
            tokio::spawn(async move { client.post(&url).header("x-forwarded-for", ip).send().await })
        })
        .collect();
    for handle in handles {
        let response = handle.await.expect("Task panicked").expect("Request failed");
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get(&format!("/api/tools/{}?readme=false", name))
        .await
        .expect("Request failed");
    let tool: ToolBody = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.head_as(&path, &ip).await.expect("Request failed");
    let voted = response.status() == StatusCode::OK;
    assert_eq!(tool.upvotes, if voted { 1 } else { 0 });
}
