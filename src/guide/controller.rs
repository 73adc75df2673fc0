use super::draft::{ManualForm, campaign_request};
use super::orchestrator::Orchestrator;
use super::prompts::{
    CAMPAIGN_CREATED, CAMPAIGN_FAILED, CONFIRM_STEP, CONNECTION_FALLBACK, SAFE_REPLY,
    VALUE_CLOSE_WIZARD, VALUE_CREATE, VALUE_RESTART, VALUE_SWITCH_EXPERT, VALUE_SWITCH_GUIDE,
    initial_prompt, retry_option,
};
use super::state::GuideState;
use super::types::{GuideMode, GuideNextRequest, GuideNextResponse, Message, ViewMode};
use crate::config::Config;
use crate::domain::{Campaign, CreateCampaignRequest};
use crate::error::{ApiError, PreconditionError, TurnError};
use crate::session::{self, SessionRecord, SessionStore};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Knobs the controller takes from [`Config`].
#[derive(Debug, Clone)]
pub struct GuideSettings {
    pub turn_delay: Duration,
    pub session_ttl: Duration,
    pub default_mode: GuideMode,
    pub project_id: i64,
}

impl GuideSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            turn_delay: Duration::from_millis(config.guide.turn_delay_ms),
            session_ttl: Duration::from_secs(config.guide.session_ttl_secs),
            default_mode: config.guide.default_mode,
            project_id: config.project_id,
        }
    }
}

impl Default for GuideSettings {
    fn default() -> Self {
        Self {
            turn_delay: Duration::from_millis(600),
            session_ttl: Duration::from_secs(4 * 60 * 60),
            default_mode: GuideMode::default(),
            project_id: 1,
        }
    }
}

/// A turn that has been accepted and is waiting for the orchestrator.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    generation: u64,
    pub mode: GuideMode,
    pub request: GuideNextRequest,
}

impl PendingTurn {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What a turn ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The assistant answered and the log grew by one message.
    Replied,
    /// The assistant answered and free text is now refused.
    Blocked,
    /// The orchestrator call failed; a retry option was offered.
    Failed,
    /// Identity creation wrapped up.
    Completed,
    /// The answer belonged to a superseded conversation and was ignored.
    Discarded,
    /// The user confirmed; the caller should create this campaign and report
    /// back through [`GuideController::campaign_created`].
    CreateCampaign(CreateCampaignRequest),
    Restarted,
    ModeSwitched(GuideMode),
}

#[derive(Debug, Clone)]
pub enum TurnStart {
    Pending(PendingTurn),
    /// Handled locally, no orchestrator call needed.
    Local(TurnOutcome),
}

/// Drives one guide conversation: input gating, orchestrator turns, mode
/// switches and persistence.
pub struct GuideController<O, S> {
    orchestrator: Arc<O>,
    store: S,
    settings: GuideSettings,
    session_id: String,
    mode: ViewMode,
    state: GuideState,
    messages: Vec<Message>,
    processing: bool,
    blocked: bool,
    generation: u64,
    restored: bool,
    finished: bool,
}

impl<O: Orchestrator, S: SessionStore> GuideController<O, S> {
    /// Resume the stored session if it is still fresh, otherwise start over.
    pub fn open(orchestrator: Arc<O>, store: S, settings: GuideSettings) -> Self {
        let raw = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not read guide session");
            None
        });
        let record = raw.and_then(|raw| {
            let restored = session::restore(&raw, now_ms(), ttl_ms(&settings));
            if restored.is_none()
                && let Err(e) = store.clear()
            {
                warn!(error = %e, "could not clear stale guide session");
            }
            restored
        });

        let mut controller = Self::blank(orchestrator, store, settings);
        match record {
            Some(record) => {
                info!(session_id = %record.session_id, mode = %record.mode, "resuming guide session");
                controller.session_id = record.session_id;
                controller.mode = record.mode;
                controller.state = record.guide_state;
                controller.messages = record.messages;
                controller.restored = true;
                if controller.messages.is_empty() {
                    controller.messages = vec![Message::ai(
                        initial_prompt(controller.mode),
                        Vec::new(),
                    )];
                }
            }
            None => {
                info!(session_id = %controller.session_id, "starting guide session");
            }
        }
        controller.persist();
        controller
    }

    /// Drop whatever is stored and start a new session.
    pub fn fresh(orchestrator: Arc<O>, store: S, settings: GuideSettings) -> Self {
        if let Err(e) = store.clear() {
            warn!(error = %e, "could not clear guide session");
        }
        Self::open(orchestrator, store, settings)
    }

    fn blank(orchestrator: Arc<O>, store: S, settings: GuideSettings) -> Self {
        let mode = ViewMode::Conversation(settings.default_mode);
        Self {
            orchestrator,
            store,
            session_id: uuid::Uuid::new_v4().to_string(),
            mode,
            state: GuideState::initial(),
            messages: vec![Message::ai(initial_prompt(mode), Vec::new())],
            processing: false,
            blocked: false,
            generation: 0,
            restored: false,
            finished: false,
            settings,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn state(&self) -> &GuideState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn was_restored(&self) -> bool {
        self.restored
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn settings(&self) -> &GuideSettings {
        &self.settings
    }

    /// Options of the newest assistant message, if any.
    pub fn current_options(&self) -> &[super::types::GuideOption] {
        self.messages.last().map(Message::options).unwrap_or_default()
    }

    /// Gate and record user input. Reserved option values are resolved here;
    /// anything else becomes a [`PendingTurn`] for the orchestrator.
    pub fn begin_turn(&mut self, text: &str, value: Option<&str>) -> Result<TurnStart, TurnError> {
        let Some(mode) = self.mode.guide_mode() else {
            return Err(TurnError::NotConversational);
        };
        if self.processing {
            return Err(TurnError::Busy);
        }
        let value = value.map(str::trim).filter(|v| !v.is_empty());
        let text = text.trim();
        if text.is_empty() && value.is_none() {
            return Err(TurnError::Empty);
        }
        if self.blocked && value.is_none() {
            return Err(TurnError::Blocked);
        }

        self.messages
            .push(Message::user(if text.is_empty() { value.unwrap_or_default() } else { text }));
        self.processing = true;

        let collaborator = mode == GuideMode::Collaborator;
        let terminal = collaborator || self.state.step == CONFIRM_STEP;
        match value {
            Some(VALUE_CREATE) if terminal => {
                let draft = campaign_request(&self.state, self.settings.project_id, today());
                info!(session_id = %self.session_id, name = %draft.name, "campaign confirmed");
                self.persist();
                return Ok(TurnStart::Local(TurnOutcome::CreateCampaign(draft)));
            }
            Some(VALUE_RESTART) if terminal => {
                self.reset();
                return Ok(TurnStart::Local(TurnOutcome::Restarted));
            }
            Some(VALUE_SWITCH_GUIDE) if collaborator => {
                self.switch_mode(GuideMode::Guided.into());
                return Ok(TurnStart::Local(TurnOutcome::ModeSwitched(GuideMode::Guided)));
            }
            Some(VALUE_SWITCH_EXPERT) if collaborator => {
                self.switch_mode(GuideMode::Expert.into());
                return Ok(TurnStart::Local(TurnOutcome::ModeSwitched(GuideMode::Expert)));
            }
            _ => {}
        }

        let request = GuideNextRequest {
            current_step: self.state.step,
            mode,
            state: self.state.clone(),
            user_input: (!text.is_empty()).then(|| text.to_string()),
            user_value: value.map(str::to_string),
            guide_session_id: self.session_id.clone(),
        };
        debug!(
            session_id = %self.session_id,
            mode = %mode,
            step = request.current_step,
            generation = self.generation,
            "turn started"
        );
        self.persist();
        Ok(TurnStart::Pending(PendingTurn {
            generation: self.generation,
            mode,
            request,
        }))
    }

    /// Apply the orchestrator's answer to a turn started by [`Self::begin_turn`].
    pub fn complete_turn(
        &mut self,
        pending: PendingTurn,
        result: Result<GuideNextResponse, ApiError>,
    ) -> TurnOutcome {
        if pending.generation != self.generation {
            debug!(
                turn = pending.generation,
                current = self.generation,
                "discarding response for superseded conversation"
            );
            return TurnOutcome::Discarded;
        }
        self.processing = false;

        let outcome = match result {
            Ok(response) => {
                self.state
                    .apply_patch(&response.state_patch, response.next_step);
                let content = if response.assistant_message.trim().is_empty() {
                    SAFE_REPLY.to_string()
                } else {
                    response.assistant_message.clone()
                };
                let closes_wizard = pending.mode == GuideMode::IdentityCreation
                    && response.offers(VALUE_CLOSE_WIZARD);
                let blocked = response.is_blocked();
                self.messages.push(Message::ai(content, response.options));

                if closes_wizard {
                    info!(session_id = %self.session_id, "identity creation finished");
                    TurnOutcome::Completed
                } else if blocked {
                    self.blocked = true;
                    TurnOutcome::Blocked
                } else {
                    TurnOutcome::Replied
                }
            }
            Err(e) => {
                warn!(error = %e, session_id = %self.session_id, "guide turn failed");
                self.messages
                    .push(Message::ai(CONNECTION_FALLBACK, vec![retry_option()]));
                TurnOutcome::Failed
            }
        };
        self.persist();
        outcome
    }

    /// Full turn on an exclusively owned controller.
    pub async fn send(&mut self, text: &str, value: Option<&str>) -> Result<TurnOutcome, TurnError> {
        let pending = match self.begin_turn(text, value)? {
            TurnStart::Pending(pending) => pending,
            TurnStart::Local(outcome) => return Ok(outcome),
        };
        tokio::time::sleep(self.settings.turn_delay).await;
        let orchestrator = Arc::clone(&self.orchestrator);
        let result = orchestrator.next_step(&pending.request).await;
        Ok(self.complete_turn(pending, result))
    }

    /// Full turn on a shared controller. The lock is released while the
    /// orchestrator works, so mode switches can land in between.
    pub async fn dispatch_turn(
        this: &tokio::sync::Mutex<Self>,
        text: &str,
        value: Option<&str>,
    ) -> Result<TurnOutcome, TurnError> {
        let (pending, orchestrator, delay) = {
            let mut guard = this.lock().await;
            match guard.begin_turn(text, value)? {
                TurnStart::Pending(pending) => (
                    pending,
                    Arc::clone(&guard.orchestrator),
                    guard.settings.turn_delay,
                ),
                TurnStart::Local(outcome) => return Ok(outcome),
            }
        };
        tokio::time::sleep(delay).await;
        let result = orchestrator.next_step(&pending.request).await;
        Ok(this.lock().await.complete_turn(pending, result))
    }

    /// Switch view. Always starts the conversation over, even for the same mode.
    pub fn switch_mode(&mut self, mode: ViewMode) {
        info!(session_id = %self.session_id, from = %self.mode, to = %mode, "switching guide mode");
        self.mode = mode;
        self.restart_conversation();
    }

    /// Back to step one in the current mode.
    pub fn reset(&mut self) {
        self.restart_conversation();
    }

    fn restart_conversation(&mut self) {
        self.generation += 1;
        self.state = GuideState::initial();
        self.messages = vec![Message::ai(initial_prompt(self.mode), Vec::new())];
        self.processing = false;
        self.blocked = false;
        self.finished = false;
        self.persist();
    }

    pub fn select_identity(&mut self, identity_id: Option<String>) {
        self.state.identity_id = identity_id.filter(|id| !id.trim().is_empty());
        self.persist();
    }

    /// Turn the manual form into a campaign draft. The caller creates it and
    /// reports back through [`Self::campaign_created`].
    pub fn submit_manual_form(
        &mut self,
        form: ManualForm,
    ) -> Result<CreateCampaignRequest, PreconditionError> {
        if self.processing {
            return Err(PreconditionError::Unsupported("submitting while a turn is running"));
        }
        if form.topic.trim().is_empty() {
            return Err(PreconditionError::MissingField("topic"));
        }
        self.state = form.into_state();
        self.processing = true;
        self.persist();
        Ok(campaign_request(&self.state, self.settings.project_id, today()))
    }

    /// Record how campaign creation went. On success the stored session is
    /// cleared since the conversation is done.
    pub fn campaign_created(&mut self, result: &Result<Campaign, ApiError>) {
        self.processing = false;
        match result {
            Ok(campaign) => {
                info!(campaign_id = campaign.id, name = %campaign.name, "campaign created from guide");
                self.messages.push(Message::ai(CAMPAIGN_CREATED, Vec::new()));
                self.finished = true;
                if let Err(e) = self.store.clear() {
                    warn!(error = %e, "could not clear guide session");
                }
            }
            Err(e) => {
                warn!(error = %e, "campaign creation failed");
                self.messages.push(Message::ai(CAMPAIGN_FAILED, Vec::new()));
                self.persist();
            }
        }
    }

    pub fn record(&self) -> SessionRecord {
        SessionRecord {
            session_id: self.session_id.clone(),
            messages: self.messages.clone(),
            guide_state: self.state.clone(),
            mode: self.mode,
            saved_at_ms: now_ms(),
        }
    }

    fn persist(&self) {
        if self.finished {
            return;
        }
        let saved = session::encode(&self.record()).and_then(|raw| self.store.save(&raw));
        if let Err(e) = saved {
            warn!(error = %e, "could not persist guide session");
        }
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn today() -> chrono::NaiveDate {
    Utc::now().date_naive()
}

fn ttl_ms(settings: &GuideSettings) -> i64 {
    i64::try_from(settings.session_ttl.as_millis()).unwrap_or(i64::MAX)
}
