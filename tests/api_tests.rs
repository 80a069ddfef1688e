//! HTTP API Tests
//!
//! Drives the router through tower::ServiceExt without opening a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use libris::network::{router, AppState};
use libris::{AuditLog, Book, Store};

// =============================================================================
// Helper Functions
// =============================================================================

struct TestApp {
    _temp: TempDir,
    router: Router,
    store: Arc<Store>,
    audit: Arc<AuditLog>,
}

fn test_app() -> TestApp {
    let temp = TempDir::new().unwrap();
    let audit = Arc::new(AuditLog::start(temp.path().join("log.txt"), 100).unwrap());
    let store = Arc::new(Store::new());
    let router = router(AppState::new(Arc::clone(&store), Arc::clone(&audit)));
    TestApp {
        _temp: temp,
        router,
        store,
        audit,
    }
}

async fn send(app: &TestApp, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    send_request(app, request).await
}

async fn send_request(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn book_json(isbn: &str, title: &str) -> Value {
    json!({
        "title": title,
        "author": "Author",
        "isbn": isbn,
        "release_date": "2024-01-01"
    })
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_book() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/books", Some(book_json("1", "Dune"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Book successfully created");
    assert_eq!(body["book"]["isbn"], "1");
    assert_eq!(body["book"]["title"], "Dune");
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_create_duplicate_is_bad_request() {
    let app = test_app();
    send(&app, Method::POST, "/books", Some(book_json("1", "Dune"))).await;

    let (status, body) = send(&app, Method::POST, "/books", Some(book_json("1", "Other"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Book with ISBN 1 already exists");
    assert_eq!(body["code"], 400);
    assert_eq!(app.store.get("1").unwrap().title, "Dune");
}

#[tokio::test]
async fn test_create_malformed_body() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/books")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let (status, body) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_create_without_content_type() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/books")
        .body(Body::from(book_json("7", "Plain").to_string()))
        .unwrap();
    let (status, _) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(app.store.get("7").is_some());
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn test_get_book() {
    let app = test_app();
    app.store.create(Book::new("Dune", "Herbert", "42", "1965")).unwrap();

    let (status, body) = send(&app, Method::GET, "/books/42", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"title": "Dune", "author": "Herbert", "isbn": "42", "release_date": "1965"})
    );
}

#[tokio::test]
async fn test_get_missing_book() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/books/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book with ISBN 404 is not found");
}

#[tokio::test]
async fn test_list_books_paginated() {
    let app = test_app();
    for i in 0..5 {
        app.store
            .create(Book::new(format!("T{}", i), "a", format!("{}", i), ""))
            .unwrap();
    }

    let (status, body) = send(&app, Method::GET, "/books?page=2&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let isbns: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["isbn"].as_str().unwrap())
        .collect();
    assert_eq!(isbns, vec!["2", "3"]);

    let (_, body) = send(&app, Method::GET, "/books?page=9&limit=2", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_books_ignores_garbage_params() {
    let app = test_app();
    for i in 0..12 {
        app.store
            .create(Book::new("t", "a", format!("{:02}", i), ""))
            .unwrap();
    }

    let (status, body) = send(&app, Method::GET, "/books?page=abc&limit=-3", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_list_empty_catalog() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/books", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_book() {
    let app = test_app();
    app.store.create(Book::new("Old", "a", "1", "")).unwrap();

    let (status, body) = send(&app, Method::PUT, "/books/1", Some(book_json("1", "New"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book successfully updated");
    assert_eq!(body["book"]["title"], "New");
    assert_eq!(app.store.get("1").unwrap().title, "New");
}

#[tokio::test]
async fn test_update_without_isbn_in_body() {
    let app = test_app();
    app.store.create(Book::new("Old", "a", "1", "")).unwrap();

    let (status, body) = send(&app, Method::PUT, "/books/1", Some(json!({"title": "New"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["book"]["isbn"], "1");
}

#[tokio::test]
async fn test_update_missing_book() {
    let app = test_app();

    let (status, _) = send(&app, Method::PUT, "/books/9", Some(book_json("9", "Ghost"))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_update_key_mismatch() {
    let app = test_app();
    app.store.create(Book::new("Old", "a", "1", "")).unwrap();

    let (status, body) = send(&app, Method::PUT, "/books/1", Some(book_json("2", "Moved"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ISBN in body (2) does not match ISBN in path (1)");
    assert_eq!(app.store.get("1").unwrap().title, "Old");
}

#[tokio::test]
async fn test_update_malformed_body() {
    let app = test_app();
    app.store.create(Book::new("Old", "a", "1", "")).unwrap();

    let (status, _) = send(&app, Method::PUT, "/books/1", Some(json!("just a string"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_book() {
    let app = test_app();
    app.store.create(Book::new("Gone", "a", "5", "")).unwrap();

    let (status, body) = send(&app, Method::DELETE, "/books/5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Book with ISBN 5 successfully deleted"}));
    assert!(app.store.get("5").is_none());
}

#[tokio::test]
async fn test_delete_missing_book() {
    let app = test_app();

    let (status, body) = send(&app, Method::DELETE, "/books/5", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

// =============================================================================
// Criteria Search
// =============================================================================

#[tokio::test]
async fn test_get_by_criteria() {
    let app = test_app();
    app.store.create(Book::new("Go", "A", "1", "")).unwrap();
    app.store.create(Book::new("go programming", "B", "2", "")).unwrap();
    app.store.create(Book::new("Rust", "C", "3", "")).unwrap();

    let criteria = json!({"title": "go", "sort_by": "title", "order": "desc"});
    let (status, body) = send(&app, Method::POST, "/books/get-by-criteria", Some(criteria)).await;

    assert_eq!(status, StatusCode::OK);
    let isbns: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["isbn"].as_str().unwrap())
        .collect();
    assert_eq!(isbns, vec!["2", "1"]);
}

#[tokio::test]
async fn test_get_by_criteria_empty_result() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/books/get-by-criteria",
        Some(json!({"page": 3})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_by_criteria_malformed() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/books/get-by-criteria",
        Some(json!({"limit": "ten"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Method Handling
// =============================================================================

#[tokio::test]
async fn test_unsupported_methods() {
    let app = test_app();

    let cases = [
        (Method::PATCH, "/books"),
        (Method::DELETE, "/books"),
        (Method::POST, "/books/1"),
        (Method::GET, "/books/get-by-criteria"),
        (Method::PUT, "/books/get-by-criteria"),
    ];

    for (method, uri) in cases {
        let (status, _) = send(&app, method.clone(), uri, None).await;
        assert_eq!(
            status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{} {} should be rejected",
            method,
            uri
        );
    }
}

// =============================================================================
// Audit Trail
// =============================================================================

#[tokio::test]
async fn test_mutations_are_audited() {
    let app = test_app();

    send(&app, Method::POST, "/books", Some(book_json("1", "Dune"))).await;
    send(&app, Method::PUT, "/books/1", Some(book_json("1", "Dune II"))).await;
    send(&app, Method::DELETE, "/books/1", None).await;
    // Failed mutations are not audited
    send(&app, Method::DELETE, "/books/1", None).await;

    app.audit.stop();

    let contents = std::fs::read_to_string(app.audit.path()).unwrap();
    assert_eq!(
        contents,
        "Book created: 1\nBook updated: 1\nBook deleted: 1\n"
    );
}
