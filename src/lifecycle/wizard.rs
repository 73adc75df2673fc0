use crate::domain::{AutomationSetup, AutonomyStatus, Campaign, CreateCampaignRequest};
use crate::error::PreconditionError;
use chrono::NaiveDate;

const DEFAULT_TONE: &str = "Professional";
const DEFAULT_STRATEGY: &str = "interval";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum WizardStep {
    Details,
    Strategy,
    Automation,
    Review,
}

impl WizardStep {
    pub fn number(self) -> usize {
        self as usize + 1
    }
}

/// Multi-step campaign creation: details, strategy, automation, review.
/// Each `advance` validates the step being left.
#[derive(Debug, Clone)]
pub struct CampaignWizard {
    step: WizardStep,
    pub request: CreateCampaignRequest,
    pub autonomy_status: AutonomyStatus,
    pub style_locked: bool,
}

impl CampaignWizard {
    pub fn new(project_id: i64, today: NaiveDate) -> Self {
        Self {
            step: WizardStep::Details,
            request: CreateCampaignRequest {
                project_id,
                tone: DEFAULT_TONE.into(),
                topics: Some(String::new()),
                posts_per_day: Some(1),
                schedule_strategy: Some(DEFAULT_STRATEGY.into()),
                start_date: today.format("%Y-%m-%d").to_string(),
                ..CreateCampaignRequest::default()
            },
            autonomy_status: AutonomyStatus::AutonomousActive,
            style_locked: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn advance(&mut self) -> Result<WizardStep, PreconditionError> {
        self.step = match self.step {
            WizardStep::Details => {
                if self.request.name.trim().is_empty() {
                    return Err(PreconditionError::MissingField("name"));
                }
                if self.request.objective.trim().is_empty() {
                    return Err(PreconditionError::MissingField("objective"));
                }
                WizardStep::Strategy
            }
            WizardStep::Strategy => {
                let topics = self.request.topics.as_deref().unwrap_or_default();
                if topics.trim().is_empty() {
                    return Err(PreconditionError::MissingField("topics"));
                }
                WizardStep::Automation
            }
            WizardStep::Automation | WizardStep::Review => WizardStep::Review,
        };
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Details | WizardStep::Strategy => WizardStep::Details,
            WizardStep::Automation => WizardStep::Strategy,
            WizardStep::Review => WizardStep::Automation,
        };
        self.step
    }

    /// The campaign to create. Only available once the review step is reached.
    pub fn submission(&self) -> Result<&CreateCampaignRequest, PreconditionError> {
        if self.step != WizardStep::Review {
            return Err(PreconditionError::MissingField("review"));
        }
        Ok(&self.request)
    }

    /// Automation settings for the campaign the server just created.
    pub fn automation_for(&self, campaign: &Campaign) -> AutomationSetup {
        AutomationSetup {
            project_id: campaign.project_id,
            name: campaign.name.clone(),
            status: "active".into(),
            autonomy_status: self.autonomy_status,
            style_locked: self.style_locked,
        }
    }
}
