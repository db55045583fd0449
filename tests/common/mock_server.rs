use std::time::Duration;

use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

use reqwest::header::{CONTENT_TYPE, HeaderValue};

pub async fn setup_json_mock(http_method: &str, route: &str, status: u16, body: Value) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method(http_method))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_models_mock(body: Value) -> MockServer {
    setup_json_mock("GET", "/models", 200, body).await
}

pub async fn setup_chat_completion_mock(status: u16, body: Value) -> MockServer {
    setup_json_mock("POST", "/chat/completions", status, body).await
}

pub fn event_stream_template(sse: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_bytes(sse.into_bytes())
        .insert_header(CONTENT_TYPE, HeaderValue::from_static("text/event-stream"))
}

pub async fn setup_streaming_mock(route: &str, sse: String) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(event_stream_template(sse))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Answers `/chat/completions` per model: listed models get `status` with `body`.
pub async fn mount_model_specific_completion(
    mock_server: &MockServer,
    model: &str,
    status: u16,
    body: Value,
) {
    mount_delayed_model_completion(mock_server, model, status, body, Duration::ZERO).await;
}

pub async fn mount_delayed_model_completion(
    mock_server: &MockServer,
    model: &str,
    status: u16,
    body: Value,
    delay: Duration,
) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({ "model": model })))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(body)
                .set_delay(delay),
        )
        .mount(mock_server)
        .await;
}

pub async fn received_json_bodies(mock_server: &MockServer) -> Vec<Value> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
