use std::time::Duration;

use pretty_assertions::assert_eq;
use scrapbot_gateway::{Backend, GatewayError, GatewaySettings, HttpBackend};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> HttpBackend {
    HttpBackend::new(GatewaySettings::with_base_url(server.uri()))
}

#[tokio::test]
async fn ingest_sends_one_encoded_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest-url/"))
        .and(query_param("url", "https://quotes.toscrape.com/tag/life/"))
        .and(query_param("max_depth", "2"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "URL processed successfully!",
            "result": "Data stored in pgvector > scraptable > embedding",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = backend_for(&server)
        .ingest("https://quotes.toscrape.com/tag/life/", 2)
        .await
        .expect("ingest ok");

    assert_eq!(receipt.message.as_deref(), Some("URL processed successfully!"));
}

#[tokio::test]
async fn ingest_failure_extracts_detail_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest-url/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "detail": "scrape blew up" })),
        )
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .ingest("https://example.com/", 1)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        GatewayError::Backend {
            status: 500,
            detail: "scrape blew up".to_string(),
        }
    );
}

#[tokio::test]
async fn ask_sends_one_encoded_request() {
    let server = MockServer::start().await;
    let question = "\u{201c}Imperfection is beauty...\u{201d} who said it?";
    Mock::given(method("POST"))
        .and(path("/ask-question/"))
        .and(query_param("question", question))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "question": question,
            "answer": "Marilyn Monroe",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = backend_for(&server).ask(question).await.expect("ask ok");

    assert_eq!(reply.answer.as_deref(), Some("Marilyn Monroe"));
}

#[tokio::test]
async fn ask_tolerates_empty_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask-question/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let reply = backend_for(&server).ask("anything?").await.expect("ask ok");

    assert_eq!(reply.answer, None);
}

#[tokio::test]
async fn ask_failure_reports_backend_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask-question/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "detail": "db down" })),
        )
        .mount(&server)
        .await;

    let err = backend_for(&server).ask("anything?").await.unwrap_err();

    assert_eq!(
        err,
        GatewayError::Backend {
            status: 500,
            detail: "db down".to_string(),
        }
    );
}

#[tokio::test]
async fn non_json_failure_body_synthesizes_status_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask-question/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>unavailable</html>"))
        .mount(&server)
        .await;

    let err = backend_for(&server).ask("anything?").await.unwrap_err();

    assert_eq!(
        err,
        GatewayError::Backend {
            status: 503,
            detail: "HTTP error (status 503)".to_string(),
        }
    );
}

#[tokio::test]
async fn reset_sends_delete_and_ignores_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/reset-embeddings/"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "All embeddings have been cleared.",
        })))
        .expect(1)
        .mount(&server)
        .await;

    backend_for(&server).reset().await.expect("reset ok");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Nothing listens on port 9 (discard).
    let backend = HttpBackend::new(GatewaySettings::with_base_url("http://127.0.0.1:9"));

    let err = backend.reset().await.unwrap_err();

    assert!(matches!(err, GatewayError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_backend_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask-question/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "answer": "slow" })),
        )
        .mount(&server)
        .await;

    let settings = GatewaySettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..GatewaySettings::with_base_url(server.uri())
    };
    let err = HttpBackend::new(settings).ask("anything?").await.unwrap_err();

    assert_eq!(err, GatewayError::Timeout);
}
