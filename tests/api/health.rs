use super::support::{api_path, client};
use arapost::ApiClient;
use arapost::domain::ExportFormat;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn ai_health_reports_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/health/ai")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "connected", "provider": "gemini", "is_real_ai": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let health = client(&server).ai_health().await;
    assert!(health.is_connected());
    assert_eq!(health.provider, "gemini");
    server.verify().await;
}

#[tokio::test]
async fn ai_health_server_error_reads_as_disconnected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/health/ai")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let health = client(&server).ai_health().await;
    assert!(!health.is_connected());
    assert_eq!(health.status, "disconnected");
    assert_eq!(health.provider, "none");
}

#[tokio::test]
async fn ai_health_unreachable_reads_as_disconnected() {
    let server = MockServer::start().await;
    let base = format!("{}/api/v1", server.uri());
    drop(server);

    let health = ApiClient::new(&base).unwrap().ai_health().await;
    assert_eq!(health, arapost::domain::AiHealth::disconnected());
}

#[tokio::test]
async fn accounts_and_login_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/auth/accounts")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "provider": "linkedin", "provider_name": "Ana", "active": true}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/auth/linkedin/login")))
        .and(query_param("project_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://www.linkedin.com/oauth/v2/authorization?state=abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let accounts = api.connected_accounts().await.unwrap();
    assert_eq!(accounts[0].provider, "linkedin");
    let url = api.linkedin_login_url(1).await.unwrap();
    assert!(url.starts_with("https://www.linkedin.com/"));
    server.verify().await;
}

#[tokio::test]
async fn tracking_export_returns_raw_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/internal/tracking")))
        .and(query_param("format", "csv"))
        .and(query_param("project_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("id,platform\n9,linkedin\n"))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client(&server)
        .export_tracking(ExportFormat::Csv, Some(1))
        .await
        .unwrap();
    assert_eq!(bytes, b"id,platform\n9,linkedin\n");
    server.verify().await;
}

#[tokio::test]
async fn extract_text_uploads_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/utils/extract-text")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "Brief de campaña", "filename": "brief.pdf", "type": "pdf"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let extracted = client(&server)
        .extract_text("brief.pdf", "application/pdf", b"%PDF-1.4".to_vec())
        .await
        .unwrap();
    assert_eq!(extracted.text, "Brief de campaña");
    assert_eq!(extracted.kind.as_deref(), Some("pdf"));
    server.verify().await;
}
