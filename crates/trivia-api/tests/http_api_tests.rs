// Integration tests for the HTTP surface over a seeded in-memory
// database, mirroring the deployed API's acceptance suite.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use trivia_api::{build_router, AppState};

fn test_app() -> Router {
    let mut conn = trivia_store::db::open_in_memory().unwrap();
    trivia_store::migrations::apply_migrations(&mut conn).unwrap();
    trivia_store::seed::load_seed_data(&conn).unwrap();
    build_router(AppState::new(conn))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(app, request).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_all_categories() {
    let app = test_app();

    let (status, body) = get(&app, "/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"].as_array().unwrap().len(), 6);
    assert_eq!(body["total"], 6);
}

#[tokio::test]
async fn test_paging_questions() {
    let app = test_app();

    let (status, body) = get(&app, "/questions?page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["categories"].as_array().unwrap().len(), 6);
    assert_eq!(body["total_questions"], 19);
}

#[tokio::test]
async fn test_second_page_is_partial() {
    let app = test_app();

    let (status, body) = get(&app, "/questions?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_default_page_is_one() {
    let app = test_app();

    let (_, paged) = get(&app, "/questions?page=1").await;
    let (status, body) = get(&app, "/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], paged["questions"]);
}

#[tokio::test]
async fn test_error_paging_questions() {
    let app = test_app();

    let (status, body) = get(&app, "/questions?page=10000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert_eq!(body["message"], "Resource not found");
}

#[tokio::test]
async fn test_non_integer_page_is_bad_request() {
    let app = test_app();

    let (status, body) = get(&app, "/questions?page=two").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Bad request error");
}

#[tokio::test]
async fn test_zero_page_is_bad_request() {
    let app = test_app();

    let (status, _) = get(&app, "/questions?page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_questions() {
    let app = test_app();

    let (status, body) =
        post_json(&app, "/questions/search", json!({"searchTerm": "Caged Bird Sings"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["questions"].as_array().unwrap().len(), 1);
    assert_eq!(body["total_questions"], 1);
}

#[tokio::test]
async fn test_search_without_match_is_empty_success() {
    let app = test_app();

    let (status, body) =
        post_json(&app, "/questions/search", json!({"searchTerm": "zzzzzz"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 0);
    assert!(body["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_empty_term_matches_all() {
    let app = test_app();

    let (status, body) = post_json(&app, "/questions/search", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 19);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_delete_question() {
    let app = test_app();

    let (status, _) = post_json(
        &app,
        "/questions",
        json!({"question": "dummy", "answer": "dummy", "difficulty": 1, "category": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The new question is searchable, so grab its assigned id
    let (_, found) = post_json(&app, "/questions/search", json!({"searchTerm": "dummy"})).await;
    let id = found["questions"][0]["id"].as_i64().unwrap();

    let (status, body) = delete(&app, &format!("/questions/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    // Deleting again proves the row is gone
    let (status, _) = delete(&app, &format!("/questions/{}", id)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_non_existing_question() {
    let app = test_app();

    let (status, body) = delete(&app, "/questions/1211256").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Unprocessable entity");
}

#[tokio::test]
async fn test_add_questions() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/questions",
        json!({"question": "dummy", "answer": "dummy", "difficulty": 1, "category": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, listing) = get(&app, "/questions?page=1").await;
    assert_eq!(listing["total_questions"], 20);
}

#[tokio::test]
async fn test_error_add_questions() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/questions",
        json!({"question": "dummy", "answer": "", "category": 1, "difficulty": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Bad request error");
}

#[tokio::test]
async fn test_add_question_without_difficulty_is_bad_request() {
    let app = test_app();

    let (status, _) = post_json(
        &app,
        "/questions",
        json!({"question": "dummy", "answer": "dummy", "category": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_question_without_category_is_accepted() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/questions",
        json!({"question": "uncategorized", "answer": "dummy", "difficulty": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_get_by_category() {
    let app = test_app();

    let (status, body) = get(&app, "/categories/2/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 4);
    assert_eq!(body["questions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_get_by_unknown_category_is_empty_success() {
    let app = test_app();

    let (status, body) = get(&app, "/categories/999/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 0);
}

#[tokio::test]
async fn test_quizzes() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({
            "previous_questions": [17],
            "quiz_category": {"type": "Art", "id": 2},
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["end"], false);
    assert_eq!(body["question"]["category"], 2);
    assert_ne!(body["question"]["id"], 17);
}

#[tokio::test]
async fn test_quiz_over_all_categories() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({
            "previous_questions": [],
            "quiz_category": {"type": "click", "id": 0},
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["end"], false);
    assert!(body["question"]["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_quiz_exhaustion_reserves_first_candidate() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({
            "previous_questions": [16, 17, 18, 19],
            "quiz_category": {"type": "Art", "id": 2},
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["end"], true);
    assert_eq!(body["question"]["id"], 16);
}

#[tokio::test]
async fn test_quiz_empty_pool_is_bad_request() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({
            "previous_questions": [],
            "quiz_category": {"type": "ghost", "id": 999},
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Bad request error");
}

#[tokio::test]
async fn test_quiz_malformed_body_is_bad_request() {
    let app = test_app();

    let (status, body) = post_json(&app, "/quizzes", json!({"quiz_category": {"id": 2}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Bad request error");
}

#[tokio::test]
async fn test_quiz_broken_json_gets_fixed_error_body() {
    let app = test_app();

    let (status, body) = post_raw(&app, "/quizzes", Some("application/json"), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 400);
    assert_eq!(body["message"], "Bad request error");
}

#[tokio::test]
async fn test_quiz_missing_content_type_gets_fixed_error_body() {
    let app = test_app();

    let (status, body) = post_raw(&app, "/quizzes", None, "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 400);
    assert_eq!(body["message"], "Bad request error");
}

#[tokio::test]
async fn test_create_broken_json_gets_fixed_error_body() {
    let app = test_app();

    let (status, body) = post_raw(&app, "/questions", Some("application/json"), "not-json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Bad request error");
}

#[tokio::test]
async fn test_cors_headers_present() {
    let app = test_app();

    let request = Request::builder()
        .uri("/categories")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, DELETE, PATCH, OPTIONS"
    );
}
