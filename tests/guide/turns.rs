use super::support::{api_path, campaign_json, client};
use arapost::ApiClient;
use arapost::guide::{GuideController, GuideMode, GuideSettings, Role, TurnOutcome, ViewMode};
use arapost::session::{MemorySessionStore, SessionStore};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Controller = GuideController<ApiClient, Arc<MemorySessionStore>>;

fn settings(mode: GuideMode) -> GuideSettings {
    GuideSettings {
        turn_delay: Duration::ZERO,
        default_mode: mode,
        ..GuideSettings::default()
    }
}

fn controller(server: &MockServer, mode: GuideMode) -> (Controller, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let ctl = GuideController::open(
        Arc::new(client(server)),
        Arc::clone(&store),
        settings(mode),
    );
    (ctl, store)
}

#[tokio::test]
async fn expert_turn_applies_patch_and_offers_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/guide/next")))
        .and(body_partial_json(json!({
            "current_step": 1,
            "mode": "expert",
            "user_input": "Grow B2B leads",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assistant_message": "¿Audiencia?",
            "options": [{"label": "CTOs", "value": "ctos"}],
            "next_step": 2,
            "state_patch": {"objective": "Grow B2B leads"},
            "status": "success",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut ctl, _store) = controller(&server, GuideMode::Expert);
    let outcome = ctl.send("Grow B2B leads", None).await.unwrap();

    assert_eq!(outcome, TurnOutcome::Replied);
    assert_eq!(ctl.state().step, 2);
    assert_eq!(ctl.state().objective.as_deref(), Some("Grow B2B leads"));
    assert_eq!(ctl.messages().len(), 3);
    assert_eq!(ctl.messages()[1].role, Role::User);
    assert_eq!(ctl.current_options().len(), 1);
    assert_eq!(ctl.current_options()[0].value, "ctos");
    assert!(!ctl.is_processing());
    server.verify().await;
}

#[tokio::test]
async fn log_grows_by_two_per_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/guide/next")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assistant_message": "Entendido",
            "next_step": 2,
        })))
        .expect(3)
        .mount(&server)
        .await;

    let (mut ctl, _store) = controller(&server, GuideMode::Guided);
    for (n, input) in ["vender más", "pymes", "linkedin"].into_iter().enumerate() {
        ctl.send(input, None).await.unwrap();
        assert_eq!(ctl.messages().len(), 1 + 2 * (n + 1));
    }
    server.verify().await;
}

#[tokio::test]
async fn server_failure_offers_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/guide/next")))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let (mut ctl, _store) = controller(&server, GuideMode::Collaborator);
    let outcome = ctl.send("hola", None).await.unwrap();

    assert_eq!(outcome, TurnOutcome::Failed);
    assert_eq!(ctl.state().step, 1);
    assert_eq!(ctl.current_options()[0].value, "retry");
    assert!(!ctl.is_processing());
    server.verify().await;
}

#[tokio::test]
async fn blocked_turn_accepts_only_option_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/guide/next")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assistant_message": "No puedo ayudar con eso.",
            "options": [{"label": "Reiniciar", "value": "restart"}],
            "next_step": 1,
            "status": "blocked",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut ctl, _store) = controller(&server, GuideMode::Collaborator);
    assert_eq!(ctl.send("algo raro", None).await.unwrap(), TurnOutcome::Blocked);
    assert!(ctl.is_blocked());
    assert!(ctl.send("otra cosa", None).await.is_err());

    let outcome = ctl.send("Reiniciar", Some("restart")).await.unwrap();
    assert_eq!(outcome, TurnOutcome::Restarted);
    assert!(!ctl.is_blocked());
    assert_eq!(ctl.messages().len(), 1);
    server.verify().await;
}

#[tokio::test]
async fn confirming_creates_campaign_without_a_guide_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/guide/next")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("/campaigns/")))
        .and(body_partial_json(json!({
            "project_id": 1,
            "name": "Campaña linkedin - General",
            "tone": "professional",
            "status": "draft",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(campaign_json(12, vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let (mut ctl, store) = controller(&server, GuideMode::Collaborator);
    let TurnOutcome::CreateCampaign(request) = ctl.send("Crear", Some("create")).await.unwrap()
    else {
        panic!("expected a campaign draft");
    };
    assert!(ctl.is_processing());

    let result = api.create_campaign(&request).await;
    ctl.campaign_created(&result);

    assert!(ctl.is_finished());
    assert!(!ctl.is_processing());
    assert!(store.load().unwrap().is_none());
    server.verify().await;
}

#[tokio::test]
async fn failed_creation_keeps_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/campaigns/")))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "invalid start_date"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let (mut ctl, store) = controller(&server, GuideMode::Collaborator);
    let TurnOutcome::CreateCampaign(request) = ctl.send("", Some("create")).await.unwrap() else {
        panic!("expected a campaign draft");
    };
    let result = api.create_campaign(&request).await;
    ctl.campaign_created(&result);

    assert!(!ctl.is_finished());
    assert!(ctl.messages().last().unwrap().content.contains("error"));
    assert!(store.load().unwrap().is_some());
    server.verify().await;
}

#[tokio::test]
async fn late_answer_after_mode_switch_is_dropped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/guide/next")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"assistant_message": "tarde", "next_step": 2}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (ctl, _store) = controller(&server, GuideMode::Collaborator);
    let shared = Arc::new(tokio::sync::Mutex::new(ctl));

    let turn = tokio::spawn({
        let shared = Arc::clone(&shared);
        async move { Controller::dispatch_turn(&shared, "hola", None).await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    shared
        .lock()
        .await
        .switch_mode(ViewMode::Conversation(GuideMode::Expert));

    assert_eq!(turn.await.unwrap().unwrap(), TurnOutcome::Discarded);
    let ctl = shared.lock().await;
    assert_eq!(ctl.mode(), ViewMode::Conversation(GuideMode::Expert));
    assert_eq!(ctl.messages().len(), 1);
    assert_eq!(ctl.state().step, 1);
    server.verify().await;
}
