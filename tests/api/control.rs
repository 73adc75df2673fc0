use super::support::{api_path, client};
use arapost::domain::{
    AutomationSetup, AutonomyStatus, OverrideAction, RecommendationAction,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn emergency_stop_posts_to_kill_switch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/internal/control/emergency-stop")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok", "paused": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client(&server).emergency_stop().await.unwrap();
    assert_eq!(body["paused"], 4);
    server.verify().await;
}

#[tokio::test]
async fn stats_and_pending_recommendations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/internal/control/dashboard/stats")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "global_autonomy_enabled": false,
            "campaigns": {"total": 2, "active_status": 0, "paused_status": 2},
            "autonomy_states": {"active": 0, "paused": 2, "manually_overridden": 1},
            "last_human_action": {"decision": "EMERGENCY_STOP", "reason": "manual"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/internal/control/recommendations")))
        .and(query_param("status", "PENDING"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 5, "automation_id": 2, "type": "frequency",
            "suggested_value": {"posts_per_day": 2}, "status": "PENDING"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let stats = api.dashboard_stats().await.unwrap();
    assert!(!stats.global_autonomy_enabled);
    assert_eq!(stats.autonomy_states.errors, 0);
    assert_eq!(
        stats.last_human_action.unwrap().decision,
        "EMERGENCY_STOP"
    );

    let recs = api.recommendations("PENDING").await.unwrap();
    assert_eq!(recs[0].kind, "frequency");
    server.verify().await;
}

#[tokio::test]
async fn action_and_override_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/internal/control/recommendation/5/APPROVE")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("/internal/control/campaign/2/override/force_pause")))
        .and(body_json(json!({"reason": "revisión de marca"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    api.act_on_recommendation(5, RecommendationAction::Approve)
        .await
        .unwrap();
    api.manual_override(2, OverrideAction::ForcePause, "revisión de marca")
        .await
        .unwrap();
    server.verify().await;
}

#[tokio::test]
async fn setup_status_and_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/internal/control/setup")))
        .and(body_json(json!({
            "project_id": 1,
            "name": "Q3",
            "status": "active",
            "autonomy_status": "autonomous_paused",
            "style_locked": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 8})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/internal/control/campaign/8/status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 8, "status": "active", "autonomy_status": "autonomous_paused",
            "style_locked": true, "last_decision": {"decision": "WAIT"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/internal/control/history")))
        .and(query_param("automation_id", "8"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "items": [{"id": 1, "automation_id": 8, "decision": "WAIT"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let setup = AutomationSetup {
        project_id: 1,
        name: "Q3".into(),
        status: "active".into(),
        autonomy_status: AutonomyStatus::AutonomousPaused,
        style_locked: true,
    };
    let created = api.setup_automation(&setup).await.unwrap();
    assert_eq!(created["id"], 8);

    let status = api.automation_status(8).await.unwrap();
    assert_eq!(status.autonomy_status, AutonomyStatus::AutonomousPaused);
    assert!(status.name.is_none());
    assert!(!status.is_manually_overridden);

    let history = api.decision_history(Some(8), 20, 0).await.unwrap();
    assert_eq!(history.total, 1);
    assert_eq!(history.items[0].decision, "WAIT");
    server.verify().await;
}
