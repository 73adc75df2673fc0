use super::support::{api_path, client};
use arapost::domain::identity::find_by_id;
use arapost::domain::{CreateIdentityRequest, IdentityFilter, IdentityStatus};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn identity_json(id: &str, status: &str, platforms: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "project_id": 1,
        "name": format!("Identidad {id}"),
        "purpose": "Vender servicios B2B",
        "tone": "cercano",
        "preferred_platforms": platforms,
        "status": status,
    })
}

#[tokio::test]
async fn platforms_are_normalized_whatever_the_stored_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/identities/")))
        .and(query_param("project_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            identity_json("a", "active", json!(["linkedin", "x"])),
            identity_json("b", "active", json!("[\"linkedin\",\"instagram\"]")),
            identity_json("c", "draft", json!("linkedin, facebook")),
            identity_json("d", "archived", json!(null)),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let identities = client(&server).list_identities(1).await.unwrap();
    assert_eq!(identities[0].preferred_platforms, vec!["linkedin", "x"]);
    assert_eq!(identities[1].preferred_platforms, vec!["linkedin", "instagram"]);
    assert_eq!(identities[2].preferred_platforms, vec!["linkedin", "facebook"]);
    assert!(identities[3].preferred_platforms.is_empty());
    server.verify().await;
}

#[tokio::test]
async fn archive_is_a_status_update_and_stays_reachable_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/identities/b")))
        .and(body_json(json!({"status": "archived"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(identity_json("b", "archived", json!([]))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/identities/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            identity_json("a", "active", json!([])),
            identity_json("b", "archived", json!([])),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let archived = api.archive_identity("b").await.unwrap();
    assert_eq!(archived.status, IdentityStatus::Archived);

    let all = api.list_identities(1).await.unwrap();
    let active = IdentityFilter::Active.apply(&all);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "a");
    assert_eq!(IdentityFilter::Archived.apply(&all)[0].id, "b");
    assert_eq!(IdentityFilter::All.apply(&all).len(), 2);

    let found = find_by_id(&all, "b").unwrap();
    assert_eq!(found.status, IdentityStatus::Archived);
    server.verify().await;
}

#[tokio::test]
async fn create_omits_empty_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/identities/")))
        .and(body_json(json!({
            "name": "Marca personal",
            "tone": "inspirador",
            "preferred_platforms": ["linkedin"],
            "status": "draft",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity_json(
            "new-1",
            "draft",
            json!(["linkedin"]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateIdentityRequest {
        name: "Marca personal".into(),
        tone: Some("inspirador".into()),
        preferred_platforms: vec!["linkedin".into()],
        status: Some(IdentityStatus::Draft),
        ..CreateIdentityRequest::default()
    };
    let created = client(&server).create_identity(&request).await.unwrap();
    assert_eq!(created.id, "new-1");
    assert_eq!(created.status, IdentityStatus::Draft);
    server.verify().await;
}
