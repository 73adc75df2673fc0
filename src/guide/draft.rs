use super::prompts::CONFIRM_STEP;
use super::state::{GuideState, Topics};
use crate::domain::{CampaignStatus, CreateCampaignRequest};
use chrono::NaiveDate;

const DEFAULT_OBJECTIVE: &str = "Generar engagement y posicionamiento";
const DEFAULT_TONE: &str = "professional";
const DEFAULT_PLATFORM: &str = "linkedin";
const GENERAL_TOPIC: &str = "General";

/// Fields of the manual campaign form (the non-conversational path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualForm {
    pub topic: String,
    pub platform: String,
    pub tone: String,
    pub identity_id: Option<String>,
    pub extra_info: String,
}

impl Default for ManualForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            platform: DEFAULT_PLATFORM.into(),
            tone: DEFAULT_TONE.into(),
            identity_id: None,
            extra_info: String::new(),
        }
    }
}

impl ManualForm {
    /// The form maps onto a state already at the confirmation step.
    pub fn into_state(self) -> GuideState {
        GuideState {
            step: CONFIRM_STEP,
            topics: Some(Topics::List(vec![self.topic.trim().to_string()])),
            platform: Some(self.platform),
            tone: Some(self.tone),
            identity_id: self.identity_id.filter(|id| !id.trim().is_empty()),
            extra_context: Some(self.extra_info),
            conversation_summary: None,
            ..GuideState::initial()
        }
    }
}

/// Build the campaign to create from the accumulated conversation.
pub fn campaign_request(
    state: &GuideState,
    project_id: i64,
    today: NaiveDate,
) -> CreateCampaignRequest {
    let topics = state.topic_items();
    let platform = non_empty(state.platform.as_deref()).unwrap_or(DEFAULT_PLATFORM);
    let first_topic = topics.first().map_or(GENERAL_TOPIC, String::as_str);

    let goal = non_empty(state.objective.as_deref())
        .or_else(|| non_empty(state.extra_context.as_deref()))
        .unwrap_or(DEFAULT_OBJECTIVE);
    let topic_label = if topics.is_empty() {
        GENERAL_TOPIC.to_string()
    } else {
        topics.join(",")
    };

    CreateCampaignRequest {
        project_id,
        name: format!("Campaña {platform} - {first_topic}"),
        objective: format!("{goal} [Temas: {topic_label}]"),
        tone: non_empty(state.tone.as_deref())
            .unwrap_or(DEFAULT_TONE)
            .to_string(),
        identity_id: state.identity_id.clone(),
        topics: (!topics.is_empty()).then(|| topics.join(",")),
        posts_per_day: state.posts_per_day.as_ref().and_then(|p| p.count()),
        schedule_strategy: state.schedule_strategy.clone(),
        start_date: today.format("%Y-%m-%d").to_string(),
        end_date: None,
        status: Some(CampaignStatus::Draft),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
