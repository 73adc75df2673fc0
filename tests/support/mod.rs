#![allow(dead_code)]

use arapost::ApiClient;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const API_PREFIX: &str = "/api/v1";

/// Client pointed at the mock server's `/api/v1` root.
pub fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&format!("{}{API_PREFIX}", server.uri())).expect("mock server uri is valid")
}

pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

pub fn post_json(id: i64, status: &str, scheduled_for: Option<&str>) -> Value {
    json!({
        "id": id,
        "campaign_id": 3,
        "title": format!("Post {id}"),
        "content_text": "Cinco ideas para vender más en B2B",
        "scheduled_for": scheduled_for,
        "status": status,
        "platform": "linkedin",
    })
}

pub fn campaign_json(id: i64, posts: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": "Campaña linkedin - ventas",
        "project_id": 1,
        "objective": "Generar leads [Temas: ventas,b2b]",
        "tone": "professional",
        "topics": "ventas,b2b",
        "posts_per_day": 1,
        "schedule_strategy": "interval",
        "status": "DRAFT",
        "start_date": "2025-03-01",
        "posts": posts,
    })
}
