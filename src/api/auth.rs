use super::{ApiClient, Envelope};
use crate::domain::{ConnectedAccount, LoginUrl};
use crate::error::ApiError;

impl ApiClient {
    pub async fn connected_accounts(&self) -> Result<Vec<ConnectedAccount>, ApiError> {
        self.get("/auth/accounts", &[], Envelope::Data).await
    }

    pub async fn disconnect_account(&self, id: i64) -> Result<bool, ApiError> {
        self.delete(&format!("/auth/accounts/{id}"), Envelope::Data)
            .await
    }

    pub async fn linkedin_login_url(&self, project_id: i64) -> Result<String, ApiError> {
        let login: LoginUrl = self
            .get(
                "/auth/linkedin/login",
                &[("project_id", project_id.to_string())],
                Envelope::Bare,
            )
            .await?;
        Ok(login.url)
    }
}
