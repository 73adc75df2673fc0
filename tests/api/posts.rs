use super::support::{api_path, campaign_json, client, post_json};
use arapost::domain::{PostStatus, PostUpdate};
use arapost::error::{ApiError, PreconditionError};
use arapost::lifecycle::{PostAction, check_post_action};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn update_unwraps_data_envelope_and_folds_legacy_date() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/posts/10")))
        .and(body_json(json!({"scheduled_for": "2025-03-04"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": post_json(10, "generated", Some("2025-03-04T09:00:00")),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = PostUpdate {
        scheduled_date: Some("2025-03-04".into()),
        ..PostUpdate::default()
    };
    let post = client(&server).update_post(10, update).await.unwrap();
    assert_eq!(post.schedule_day(), Some("2025-03-04"));
    server.verify().await;
}

#[tokio::test]
async fn bare_body_where_envelope_expected_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/posts/10/publish")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(post_json(10, "published", None)),
        )
        .mount(&server)
        .await;

    let err = client(&server).publish_post(10).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn approve_without_schedule_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/campaigns/3")))
        .respond_with(ResponseTemplate::new(200).set_body_json(campaign_json(
            3,
            vec![post_json(10, "generated", None)],
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("/posts/10")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server);
    let campaign = api.get_campaign(3).await.unwrap();
    let post = campaign.post(10).unwrap();

    let err = check_post_action(post, PostAction::Approve, None).unwrap_err();
    assert_eq!(err, PreconditionError::MissingSchedule { post_id: 10 });

    let typed_only = PostUpdate {
        scheduled_for: Some("2025-03-04".into()),
        ..PostUpdate::default()
    };
    let err = check_post_action(post, PostAction::Approve, Some(&typed_only)).unwrap_err();
    assert_eq!(err, PreconditionError::UnsavedSchedule { post_id: 10 });
    server.verify().await;
}

#[tokio::test]
async fn saving_the_date_then_approving() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/posts/10")))
        .and(body_json(json!({"scheduled_for": "2025-03-04"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": post_json(10, "generated", Some("2025-03-04")),
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("/posts/10")))
        .and(body_json(json!({"status": "approved"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": post_json(10, "approved", Some("2025-03-04")),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let saved = api
        .update_post(
            10,
            PostUpdate {
                scheduled_for: Some("2025-03-04".into()),
                ..PostUpdate::default()
            },
        )
        .await
        .unwrap();
    check_post_action(&saved, PostAction::Approve, None).unwrap();

    let approved = api.update_post(10, PostUpdate::approve()).await.unwrap();
    assert_eq!(approved.status, PostStatus::Approved);
    assert!(check_post_action(&approved, PostAction::Edit, None).is_err());
    server.verify().await;
}

#[tokio::test]
async fn publish_refusal_keeps_server_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/posts/10/publish")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "No hay cuenta de LinkedIn conectada"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).publish_post(10).await.unwrap_err();
    assert_eq!(err.detail(), Some("No hay cuenta de LinkedIn conectada"));
    server.verify().await;
}

#[tokio::test]
async fn mark_published_hits_manual_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/posts/11/mark-published")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": post_json(11, "published", Some("2025-03-04")),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let post = client(&server).mark_post_published(11).await.unwrap();
    assert!(post.status.is_published());
    server.verify().await;
}
