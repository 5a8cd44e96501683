//! # Upload Endpoint Tests
//!
//! These tests spawn the server against a stubbed chat-completions endpoint
//! and drive the `/process_pdf` route over HTTP, multipart upload included.

use labnote::providers::factory::ProviderConfig;
use labnote::ProcessingResult;
use labnote_server::{config::Config, run};
use labnote_test_utils::helpers::generate_test_pdf;
use serde_json::json;
use tokio::time::{sleep, Duration};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const STUB_NOTE: &str = "ОАК от 17.07.2025: лейкоциты 5.5 /л (4-9)";

/// Spawns the server on a random port, pointed at the given AI endpoint.
async fn spawn_app(ai_api_url: String) -> String {
    let config = Config {
        port: 0,
        provider: ProviderConfig {
            provider: "openai".to_string(),
            api_url: Some(ai_api_url),
            api_key: Some("test-key".to_string()),
            model_name: "gpt-4o".to_string(),
        },
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{port}");

    tokio::spawn(async move {
        if let Err(e) = run(listener, config).await {
            eprintln!("Server error: {e}");
        }
    });

    // Give the server a moment to start
    sleep(Duration::from_millis(100)).await;

    address
}

fn pdf_form(pdf_data: Vec<u8>) -> reqwest::multipart::Form {
    reqwest::multipart::Form::new().part(
        "file",
        reqwest::multipart::Part::bytes(pdf_data)
            .file_name("report.pdf")
            .mime_str("application/pdf")
            .unwrap(),
    )
}

#[tokio::test]
async fn test_health_check_works() {
    let ai = MockServer::start().await;
    let address = spawn_app(ai.uri()).await;

    let response = reqwest::get(format!("{address}/health")).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "OK");
}

/// Uploading a PDF returns the full result record: the extracted text, the
/// model's note, and a timestamp.
#[tokio::test]
async fn test_process_pdf_returns_the_result_record() {
    let ai = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": STUB_NOTE}}]
        })))
        .expect(1)
        .mount(&ai)
        .await;

    let address = spawn_app(ai.uri()).await;

    let pdf_data = generate_test_pdf("CBC: WBC 5.5 (4-9)").expect("pdf generation failed");
    let expected_raw = labnote::extract::extract_text(&pdf_data).expect("extraction failed");

    let response = reqwest::Client::new()
        .post(format!("{address}/process_pdf"))
        .multipart(pdf_form(pdf_data))
        .send()
        .await
        .expect("request failed");

    assert!(
        response.status().is_success(),
        "Request failed with status: {}",
        response.status()
    );

    let result: ProcessingResult = response.json().await.expect("invalid response body");
    assert_eq!(result.raw_text, expected_raw);
    assert_eq!(result.formatted_results, STUB_NOTE);
    assert!(!result.processed_at.is_empty());
}

/// A failing model service maps to 502, with the cause in the error body.
#[tokio::test]
async fn test_provider_failure_maps_to_bad_gateway() {
    let ai = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
        .mount(&ai)
        .await;

    let address = spawn_app(ai.uri()).await;
    let pdf_data = generate_test_pdf("CBC: WBC 5.5 (4-9)").expect("pdf generation failed");

    let response = reqwest::Client::new()
        .post(format!("{address}/process_pdf"))
        .multipart(pdf_form(pdf_data))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("quota exceeded"));
}

/// An upload that is not a PDF maps to 400 and never reaches the model.
#[tokio::test]
async fn test_unreadable_upload_maps_to_bad_request() {
    let ai = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": STUB_NOTE}}]
        })))
        .expect(0)
        .mount(&ai)
        .await;

    let address = spawn_app(ai.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{address}/process_pdf"))
        .multipart(pdf_form(b"this is not a pdf".to_vec()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 400);
}

/// A request without a `file` part is rejected.
#[tokio::test]
async fn test_missing_file_part_is_rejected() {
    let ai = MockServer::start().await;
    let address = spawn_app(ai.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{address}/process_pdf"))
        .multipart(reqwest::multipart::Form::new().text("note", "no file here"))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 500);
}
