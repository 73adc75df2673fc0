use super::support::{api_path, campaign_json, client, post_json};
use arapost::domain::{CampaignStatus, CampaignUpdate, CreateCampaignRequest, PostStatus};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn list_is_scoped_to_project() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/campaigns/")))
        .and(query_param("project_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            campaign_json(3, vec![post_json(10, "generated", None)]),
            campaign_json(4, vec![]),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let campaigns = client(&server).list_campaigns(1).await.unwrap();
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[0].status, CampaignStatus::Draft);
    assert_eq!(campaigns[0].topic_list(), vec!["ventas", "b2b"]);
    assert_eq!(campaigns[0].posts[0].status, PostStatus::Generated);
    server.verify().await;
}

#[tokio::test]
async fn create_sends_draft_without_unset_fields() {
    let server = MockServer::start().await;
    let request = CreateCampaignRequest {
        project_id: 1,
        name: "Campaña linkedin - ventas".into(),
        objective: "Generar leads [Temas: ventas]".into(),
        tone: "professional".into(),
        topics: Some("ventas".into()),
        start_date: "2025-03-01".into(),
        status: Some(CampaignStatus::Draft),
        ..CreateCampaignRequest::default()
    };

    Mock::given(method("POST"))
        .and(path(api_path("/campaigns/")))
        .and(body_json(json!({
            "project_id": 1,
            "name": "Campaña linkedin - ventas",
            "objective": "Generar leads [Temas: ventas]",
            "tone": "professional",
            "topics": "ventas",
            "start_date": "2025-03-01",
            "status": "draft",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(campaign_json(7, vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let campaign = client(&server).create_campaign(&request).await.unwrap();
    assert_eq!(campaign.id, 7);
    server.verify().await;
}

#[tokio::test]
async fn partial_update_only_carries_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/campaigns/3")))
        .and(body_json(json!({"status": "active"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "name": "Q3", "project_id": 1, "status": "ACTIVE"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = CampaignUpdate {
        status: Some(CampaignStatus::Active),
        ..CampaignUpdate::default()
    };
    let campaign = client(&server).update_campaign(3, &update).await.unwrap();
    assert_eq!(campaign.status, CampaignStatus::Active);
    assert!(campaign.posts.is_empty());
    server.verify().await;
}

#[tokio::test]
async fn generate_defaults_to_three_linkedin_posts() {
    use arapost::api::campaigns::{DEFAULT_GENERATE_COUNT, DEFAULT_PLATFORM};

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/campaigns/3/generate")))
        .and(body_json(json!({"count": 3, "platform": "linkedin"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success", "generated_count": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .generate_posts(3, DEFAULT_GENERATE_COUNT, DEFAULT_PLATFORM)
        .await
        .unwrap();
    assert_eq!(result.generated_count, 3);
    server.verify().await;
}

#[tokio::test]
async fn missing_campaign_surfaces_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/campaigns/99")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Campaign not found"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).get_campaign(99).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some("Campaign not found"));
}
