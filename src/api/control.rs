use super::{ApiClient, Envelope};
use crate::domain::{
    AutomationSetup, AutomationStatus, DashboardStats, DecisionHistory, OverrideAction,
    Recommendation, RecommendationAction,
};
use crate::error::ApiError;
use serde_json::{Value, json};

const CONTROL: &str = "/internal/control";

impl ApiClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get(&format!("{CONTROL}/dashboard/stats"), &[], Envelope::Bare)
            .await
    }

    pub async fn recommendations(&self, status: &str) -> Result<Vec<Recommendation>, ApiError> {
        self.get(
            &format!("{CONTROL}/recommendations"),
            &[("status", status.to_string())],
            Envelope::Bare,
        )
        .await
    }

    pub async fn act_on_recommendation(
        &self,
        id: i64,
        action: RecommendationAction,
    ) -> Result<Value, ApiError> {
        self.post_empty(
            &format!("{CONTROL}/recommendation/{id}/{action}"),
            Envelope::Bare,
        )
        .await
    }

    /// Kill switch: pauses every active automation server-side.
    pub async fn emergency_stop(&self) -> Result<Value, ApiError> {
        self.post_empty(&format!("{CONTROL}/emergency-stop"), Envelope::Bare)
            .await
    }

    pub async fn manual_override(
        &self,
        automation_id: i64,
        action: OverrideAction,
        reason: &str,
    ) -> Result<Value, ApiError> {
        let body = json!({ "reason": reason });
        self.post(
            &format!("{CONTROL}/campaign/{automation_id}/override/{action}"),
            Some(&body),
            Envelope::Bare,
        )
        .await
    }

    pub async fn setup_automation(&self, setup: &AutomationSetup) -> Result<Value, ApiError> {
        self.post(&format!("{CONTROL}/setup"), Some(setup), Envelope::Bare)
            .await
    }

    pub async fn automation_status(
        &self,
        automation_id: i64,
    ) -> Result<AutomationStatus, ApiError> {
        self.get(
            &format!("{CONTROL}/campaign/{automation_id}/status"),
            &[],
            Envelope::Bare,
        )
        .await
    }

    pub async fn decision_history(
        &self,
        automation_id: Option<i64>,
        limit: u32,
        offset: u32,
    ) -> Result<DecisionHistory, ApiError> {
        let mut query = vec![("limit", limit.to_string()), ("offset", offset.to_string())];
        if let Some(id) = automation_id {
            query.push(("automation_id", id.to_string()));
        }
        self.get(&format!("{CONTROL}/history"), &query, Envelope::Bare)
            .await
    }
}
