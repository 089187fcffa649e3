use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voicechef::application::ports::{CompletionClient, CompletionError};
use voicechef::infrastructure::llm::EuriaiClient;

async fn start_mock_completion_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (
                status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                response_body,
            )
                .into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_well_formed_response_when_completing_then_returns_trimmed_first_choice() {
    let body = r#"{"choices": [{"message": {"content": "  ## Pasta\n1. Boil water  "}}]}"#;
    let (base_url, shutdown_tx) = start_mock_completion_server(200, body).await;

    let client = EuriaiClient::with_base_url("test-key".to_string(), base_url);
    let result = client.complete("format this", "gpt-4.1-mini").await;

    assert_eq!(result.unwrap(), "## Pasta\n1. Boil water");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_choices_when_completing_then_returns_invalid_response() {
    let body = r#"{"id": "cmpl-123"}"#;
    let (base_url, shutdown_tx) = start_mock_completion_server(200, body).await;

    let client = EuriaiClient::with_base_url("test-key".to_string(), base_url);
    let result = client.complete("format this", "gpt-4.1-mini").await;

    assert!(matches!(result, Err(CompletionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_list_when_completing_then_returns_invalid_response() {
    let body = r#"{"choices": []}"#;
    let (base_url, shutdown_tx) = start_mock_completion_server(200, body).await;

    let client = EuriaiClient::with_base_url("test-key".to_string(), base_url);
    let result = client.complete("format this", "gpt-4.1-mini").await;

    assert!(matches!(result, Err(CompletionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_choice_without_content_when_completing_then_returns_invalid_response() {
    let body = r#"{"choices": [{"message": {}}]}"#;
    let (base_url, shutdown_tx) = start_mock_completion_server(200, body).await;

    let client = EuriaiClient::with_base_url("test-key".to_string(), base_url);
    let result = client.complete("format this", "gpt-4.1-mini").await;

    assert!(matches!(result, Err(CompletionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_completing_then_returns_api_request_failed() {
    let body = r#"{"error": "internal"}"#;
    let (base_url, shutdown_tx) = start_mock_completion_server(500, body).await;

    let client = EuriaiClient::with_base_url("test-key".to_string(), base_url);
    let result = client.complete("format this", "gpt-4.1-mini").await;

    assert!(matches!(result, Err(CompletionError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_completing_then_returns_rate_limited() {
    let (base_url, shutdown_tx) = start_mock_completion_server(429, "{}").await;

    let client = EuriaiClient::with_base_url("test-key".to_string(), base_url);
    let result = client.complete("format this", "gpt-4.1-mini").await;

    assert!(matches!(result, Err(CompletionError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_api_key_when_completing_then_fails_without_calling_the_network() {
    let client = EuriaiClient::with_base_url(
        String::new(),
        "http://127.0.0.1:1/unreachable".to_string(),
    );
    let result = client.complete("format this", "gpt-4.1-mini").await;

    assert!(matches!(result, Err(CompletionError::MissingApiKey)));
}
