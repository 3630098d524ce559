use std::time::Duration;

use postscan::{HttpClient, HttpMethod, HttpRequest, Transport, TransportError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_returns_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = HttpClient::new(5).unwrap();
    let url = format!("{}/api/students", server.uri());
    let response = client.send(HttpRequest::new(HttpMethod::Get, url)).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "[]");
    assert!(response.is_success());
}

#[tokio::test]
async fn test_post_sends_json_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/lessons"))
        .and(header("Content-Type", "application/json"))
        .and(header("X-Trace", "abc"))
        .and(body_json(json!({"title": "Algebra"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(5).unwrap();
    let mut request = HttpRequest::new(HttpMethod::Post, format!("{}/api/lessons", server.uri()))
        .json(json!({"title": "Algebra"}));
    request.headers.insert("X-Trace".to_string(), "abc".to_string());

    let response = client.send(request).await.unwrap();
    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_error_status_is_not_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HttpClient::new(5).unwrap();
    let url = format!("{}/api/students/1", server.uri());
    let response = client.send(HttpRequest::new(HttpMethod::Delete, url)).await.unwrap();

    assert_eq!(response.status, 500);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let client = HttpClient::new(1).unwrap();
    let url = format!("{}/slow", server.uri());
    let result = client.send(HttpRequest::new(HttpMethod::Get, url)).await;

    assert!(matches!(result, Err(TransportError::Timeout { .. })));
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    let client = HttpClient::new(5).unwrap();
    let result = client
        .send(HttpRequest::new(HttpMethod::Get, "http://127.0.0.1:1/"))
        .await;

    assert!(matches!(result, Err(TransportError::Request { .. })));
}
