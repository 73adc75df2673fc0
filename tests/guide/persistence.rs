use super::support::{api_path, client};
use arapost::guide::{GuideController, GuideMode, GuideSettings, GuideState, Message, ViewMode};
use arapost::session::{self, FileSessionStore, SessionRecord, SessionStore};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings() -> GuideSettings {
    GuideSettings {
        turn_delay: Duration::ZERO,
        ..GuideSettings::default()
    }
}

fn stored_record(age: Duration) -> SessionRecord {
    let age_ms = i64::try_from(age.as_millis()).unwrap();
    let mut state = GuideState::initial();
    state.step = 3;
    state.objective = Some("Vender más".into());
    SessionRecord {
        session_id: "old-session".into(),
        messages: vec![
            Message::ai("¿Objetivo?", Vec::new()),
            Message::user("Vender más"),
            Message::ai("¿Audiencia?", Vec::new()),
        ],
        guide_state: state,
        mode: ViewMode::Conversation(GuideMode::Expert),
        saved_at_ms: Utc::now().timestamp_millis() - age_ms,
    }
}

#[tokio::test]
async fn conversation_survives_reopen() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/guide/next")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assistant_message": "¿A quién le hablamos?",
            "next_step": 2,
            "state_patch": {"objective": "Vender más"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = tempfile::TempDir::new().unwrap();
    let file = tmp.path().join("guide_session.json");
    let api = Arc::new(client(&server));

    let mut first = GuideController::open(
        Arc::clone(&api),
        FileSessionStore::new(&file),
        settings(),
    );
    first.send("Vender más", None).await.unwrap();
    let session_id = first.session_id().to_string();
    drop(first);

    let resumed = GuideController::open(api, FileSessionStore::new(&file), settings());
    assert!(resumed.was_restored());
    assert_eq!(resumed.session_id(), session_id);
    assert_eq!(resumed.messages().len(), 3);
    assert_eq!(resumed.state().step, 2);
    assert_eq!(resumed.state().objective.as_deref(), Some("Vender más"));
    server.verify().await;
}

#[tokio::test]
async fn fresh_record_within_ttl_is_restored_as_is() {
    let server = MockServer::start().await;
    let tmp = tempfile::TempDir::new().unwrap();
    let store = FileSessionStore::new(tmp.path().join("guide_session.json"));
    let record = stored_record(Duration::from_secs(3 * 60 * 60));
    store.save(&session::encode(&record).unwrap()).unwrap();

    let ctl = GuideController::open(Arc::new(client(&server)), store, settings());
    assert!(ctl.was_restored());
    assert_eq!(ctl.session_id(), "old-session");
    assert_eq!(ctl.mode(), ViewMode::Conversation(GuideMode::Expert));
    assert_eq!(ctl.state().step, 3);
    assert_eq!(ctl.messages(), record.messages.as_slice());
}

#[tokio::test]
async fn expired_record_is_replaced() {
    let server = MockServer::start().await;
    let tmp = tempfile::TempDir::new().unwrap();
    let file = tmp.path().join("guide_session.json");
    let store = FileSessionStore::new(&file);
    store
        .save(&session::encode(&stored_record(Duration::from_secs(5 * 60 * 60))).unwrap())
        .unwrap();

    let ctl = GuideController::open(Arc::new(client(&server)), store, settings());
    assert!(!ctl.was_restored());
    assert_ne!(ctl.session_id(), "old-session");
    assert_eq!(ctl.state().step, 1);
    assert_eq!(ctl.messages().len(), 1);

    let saved = session::decode(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(saved.session_id, ctl.session_id());
}

#[tokio::test]
async fn unreadable_file_starts_fresh() {
    let server = MockServer::start().await;
    let tmp = tempfile::TempDir::new().unwrap();
    let file = tmp.path().join("guide_session.json");
    std::fs::write(&file, "{not json").unwrap();

    let ctl = GuideController::open(
        Arc::new(client(&server)),
        FileSessionStore::new(&file),
        settings(),
    );
    assert!(!ctl.was_restored());
    assert_eq!(ctl.mode(), ViewMode::Conversation(GuideMode::Collaborator));
    assert!(session::decode(&std::fs::read_to_string(&file).unwrap()).is_ok());
}

#[tokio::test]
async fn fresh_discards_a_valid_session() {
    let server = MockServer::start().await;
    let tmp = tempfile::TempDir::new().unwrap();
    let store = FileSessionStore::new(tmp.path().join("guide_session.json"));
    store
        .save(&session::encode(&stored_record(Duration::from_secs(60))).unwrap())
        .unwrap();

    let ctl = GuideController::fresh(Arc::new(client(&server)), store, settings());
    assert!(!ctl.was_restored());
    assert_ne!(ctl.session_id(), "old-session");
}
