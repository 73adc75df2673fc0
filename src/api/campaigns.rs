use super::{ApiClient, Envelope};
use crate::domain::{Campaign, CampaignUpdate, CreateCampaignRequest, GenerateResult};
use crate::error::ApiError;
use serde_json::json;

pub const DEFAULT_GENERATE_COUNT: u32 = 3;
pub const DEFAULT_PLATFORM: &str = "linkedin";

impl ApiClient {
    pub async fn list_campaigns(&self, project_id: i64) -> Result<Vec<Campaign>, ApiError> {
        self.get(
            "/campaigns/",
            &[("project_id", project_id.to_string())],
            Envelope::Bare,
        )
        .await
    }

    pub async fn get_campaign(&self, id: i64) -> Result<Campaign, ApiError> {
        self.get(&format!("/campaigns/{id}"), &[], Envelope::Bare)
            .await
    }

    pub async fn create_campaign(
        &self,
        request: &CreateCampaignRequest,
    ) -> Result<Campaign, ApiError> {
        self.post("/campaigns/", Some(request), Envelope::Bare).await
    }

    pub async fn update_campaign(
        &self,
        id: i64,
        update: &CampaignUpdate,
    ) -> Result<Campaign, ApiError> {
        self.put(&format!("/campaigns/{id}"), update, Envelope::Bare)
            .await
    }

    /// Ask the server to draft `count` posts for a campaign.
    pub async fn generate_posts(
        &self,
        id: i64,
        count: u32,
        platform: &str,
    ) -> Result<GenerateResult, ApiError> {
        let body = json!({ "count": count, "platform": platform });
        self.post(
            &format!("/campaigns/{id}/generate"),
            Some(&body),
            Envelope::Bare,
        )
        .await
    }
}
