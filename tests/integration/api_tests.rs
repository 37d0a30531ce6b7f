//! API integration tests
//!
//! Each test binds its own server on an ephemeral port with a fresh
//! collection and drives it over HTTP.

use book_registry::{server, AppConfig, AppState, ServerHandle};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

async fn start_server() -> ServerHandle {
    server::spawn("127.0.0.1:0", AppState::new(AppConfig::default()))
        .await
        .expect("Failed to bind test server")
}

async fn book_count(client: &Client, base: &str) -> usize {
    let body: Value = client
        .get(format!("{}/api/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    body.as_array().expect("Expected an array").len()
}

#[tokio::test]
async fn test_health_check() {
    let server = start_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", server.url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 3);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_books() {
    let server = start_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/books", server.url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected an array");
    assert_eq!(books.len(), 3);
    assert_eq!(books[0]["title"], "The Great Gatsby");
    assert_eq!(books[2]["copiesAvailable"], 7);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_get_book() {
    let server = start_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/books/1", server.url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], 1);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_book_is_not_found() {
    let server = start_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/books/999", server.url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), r#"{"error":"Book not found"}"#);

    let response = client
        .put(format!("{}/api/books/999", server.url()))
        .json(&json!({ "title": "Nonexistent" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/api/books/999", server.url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_missing_fields() {
    let server = start_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/books", server.url()))
        .json(&json!({ "title": "Untitled Draft" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"error":"Missing required fields"}"#
    );
    assert_eq!(book_count(&client, &server.url()).await, 3);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_book_lifecycle() {
    let server = start_server().await;
    let client = Client::new();
    let base = server.url();

    // Create
    let response = client
        .post(format!("{}/api/books", base))
        .json(&json!({
            "title": "Brave New World",
            "author": "Aldous Huxley",
            "genre": "Dystopian Fiction",
            "copiesAvailable": 4
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], 4);
    assert_eq!(body["title"], "Brave New World");
    assert_eq!(book_count(&client, &base).await, 4);

    // Partial update
    let response = client
        .put(format!("{}/api/books/1", base))
        .json(&json!({ "title": "The Great Gatsby (Updated)" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "The Great Gatsby (Updated)");
    assert_eq!(body["author"], "F. Scott Fitzgerald");
    assert_eq!(body["copiesAvailable"], 5);

    // Delete
    let response = client
        .delete(format!("{}/api/books/2", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.text().await.unwrap().is_empty());

    let response = client
        .get(format!("{}/api/books/2", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(book_count(&client, &base).await, 3);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_servers_do_not_share_state() {
    let first = start_server().await;
    let second = start_server().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/api/books/3", first.url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(book_count(&client, &first.url()).await, 2);
    assert_eq!(book_count(&client, &second.url()).await, 3);

    first.shutdown().await.unwrap();
    second.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_openapi_document() {
    let server = start_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api-docs/openapi.json", server.url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["paths"]["/api/books/{id}"]["delete"].is_object());

    server.shutdown().await.unwrap();
}
