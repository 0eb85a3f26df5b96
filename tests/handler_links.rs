mod common;

use axum::{
    Router, middleware,
    routing::{get, put},
};
use axum_test::TestServer;
use serde_json::{Value, json};

use linkcut::api::handlers::{
    create_link_handler, delete_link_handler, list_links_handler, update_link_handler,
};
use linkcut::api::middleware::auth;
use linkcut::state::AppState;

/// Build a test server with the full management surface behind the auth
/// middleware, exactly as `app_router` nests it under `/api`.
fn make_server() -> (TestServer, AppState) {
    let state = common::create_test_state();
    let app = Router::new()
        .route(
            "/api/links",
            get(list_links_handler).post(create_link_handler),
        )
        .route(
            "/api/links/{id}",
            put(update_link_handler).delete(delete_link_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state.clone());

    (TestServer::new(app).unwrap(), state)
}

// ─── Authentication ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_credential_is_unauthorized() {
    let (server, _state) = make_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_forged_credential_is_unauthorized() {
    let (server, _state) = make_server();

    let response = server
        .get("/api/links")
        .add_header("Authorization", "Bearer user_2abc.deadbeef")
        .await;

    response.assert_status_unauthorized();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "unauthorized");
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_generates_six_char_code() {
    let (server, state) = make_server();

    let response = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com/a" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<Value>();
    let code = body["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["original_url"], "https://example.com/a");
    assert_eq!(
        body["short_url"],
        format!("{}/l/{}", common::BASE_URL, code)
    );
}

#[tokio::test]
async fn test_create_link_with_custom_code() {
    let (server, state) = make_server();

    let response = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com", "short_code": "my-link_1" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["short_code"], "my-link_1");
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let (server, state) = make_server();

    let response = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Please enter a valid URL");
}

#[tokio::test]
async fn test_create_link_code_too_short() {
    let (server, state) = make_server();

    let response = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com", "short_code": "ab" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(
        body["error"]["message"],
        "Short code must be at least 3 characters"
    );
}

#[tokio::test]
async fn test_create_link_duplicate_code_across_owners() {
    let (server, state) = make_server();

    server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com/a", "short_code": "abc123" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    // Uniqueness is global; a different owner gets the conflict too.
    let response = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_b"))
        .json(&json!({ "original_url": "https://example.com/b", "short_code": "abc123" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(
        body["error"]["message"],
        "This short code is already taken. Please choose another one."
    );
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_owner_scoped_and_recent_first() {
    let (server, state) = make_server();

    for (owner, code) in [("user_a", "first1"), ("user_b", "other1"), ("user_a", "second")] {
        server
            .post("/api/links")
            .add_header("Authorization", common::bearer(&state, owner))
            .json(&json!({
                "original_url": format!("https://example.com/{code}"),
                "short_code": code,
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server
        .get("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    let links = body["links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["short_code"], "second");
    assert_eq!(links[1]["short_code"], "first1");
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_link_replaces_both_fields() {
    let (server, state) = make_server();

    let created = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://old.example.com", "short_code": "old123" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/links/{id}"))
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://new.example.com", "short_code": "new123" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["original_url"], "https://new.example.com");
    assert_eq!(body["short_code"], "new123");
    assert_eq!(body["id"], id);
}

#[tokio::test]
async fn test_update_other_owners_link_is_not_found() {
    let (server, state) = make_server();

    let created = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com/a", "short_code": "mine01" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/links/{id}"))
        .add_header("Authorization", common::bearer(&state, "user_b"))
        .json(&json!({ "original_url": "https://evil.example.com", "short_code": "mine01" }))
        .await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["message"], "Link not found or unauthorized");

    // The link is unchanged for its real owner.
    let list = server
        .get("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .await
        .json::<Value>();
    assert_eq!(list["links"][0]["original_url"], "https://example.com/a");
}

#[tokio::test]
async fn test_update_link_to_taken_code_conflicts() {
    let (server, state) = make_server();

    server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com/a", "short_code": "taken1" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let created = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com/b", "short_code": "free01" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/links/{id}"))
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com/b", "short_code": "taken1" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_link_invalid_code() {
    let (server, state) = make_server();

    let created = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com", "short_code": "fine01" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/links/{id}"))
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com", "short_code": "bad code" }))
        .await;

    response.assert_status_bad_request();
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_success() {
    let (server, state) = make_server();

    let created = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com", "short_code": "del001" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    server
        .delete(&format!("/api/links/{id}"))
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let list = server
        .get("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .await
        .json::<Value>();
    assert!(list["links"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_nonexistent_link_is_not_found() {
    let (server, state) = make_server();

    let response = server
        .delete("/api/links/9999")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["message"], "Link not found or unauthorized");
}

#[tokio::test]
async fn test_delete_other_owners_link_is_not_found() {
    let (server, state) = make_server();

    let created = server
        .post("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .json(&json!({ "original_url": "https://example.com", "short_code": "keep01" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    server
        .delete(&format!("/api/links/{id}"))
        .add_header("Authorization", common::bearer(&state, "user_b"))
        .await
        .assert_status_not_found();

    // Still listed for the real owner.
    let list = server
        .get("/api/links")
        .add_header("Authorization", common::bearer(&state, "user_a"))
        .await
        .json::<Value>();
    assert_eq!(list["links"].as_array().unwrap().len(), 1);
}

// ─── End-to-end scenario ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_link_lifecycle_end_to_end() {
    let (server, state) = make_server();
    let auth = common::bearer(&state, "user_a");

    // Create without a code: a 6-character code is generated.
    let created = server
        .post("/api/links")
        .add_header("Authorization", auth.clone())
        .json(&json!({ "original_url": "https://example.com/a" }))
        .await;
    created.assert_status(axum::http::StatusCode::CREATED);
    let created = created.json::<Value>();
    assert_eq!(created["short_code"].as_str().unwrap().len(), 6);
    let id = created["id"].as_i64().unwrap();

    // Create the same explicit code twice: the second call conflicts.
    server
        .post("/api/links")
        .add_header("Authorization", auth.clone())
        .json(&json!({ "original_url": "https://example.com/b", "short_code": "abc123" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    server
        .post("/api/links")
        .add_header("Authorization", auth.clone())
        .json(&json!({ "original_url": "https://example.com/c", "short_code": "abc123" }))
        .await
        .assert_status(axum::http::StatusCode::CONFLICT);

    // Update to a 2-character code: rejected before persistence.
    server
        .put(&format!("/api/links/{id}"))
        .add_header("Authorization", auth.clone())
        .json(&json!({ "original_url": "https://example.com/a", "short_code": "xy" }))
        .await
        .assert_status_bad_request();

    // Delete a nonexistent id: merged not-found outcome.
    server
        .delete("/api/links/9999")
        .add_header("Authorization", auth)
        .await
        .assert_status_not_found();
}
