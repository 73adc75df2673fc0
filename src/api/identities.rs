use super::{ApiClient, Envelope};
use crate::domain::{CreateIdentityRequest, Identity, IdentityUpdate};
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_identities(&self, project_id: i64) -> Result<Vec<Identity>, ApiError> {
        self.get(
            "/identities/",
            &[("project_id", project_id.to_string())],
            Envelope::Bare,
        )
        .await
    }

    pub async fn create_identity(
        &self,
        request: &CreateIdentityRequest,
    ) -> Result<Identity, ApiError> {
        self.post("/identities/", Some(request), Envelope::Bare)
            .await
    }

    pub async fn update_identity(
        &self,
        id: &str,
        update: &IdentityUpdate,
    ) -> Result<Identity, ApiError> {
        self.put(&format!("/identities/{id}"), update, Envelope::Bare)
            .await
    }

    /// Soft delete: the identity is kept with status `archived`.
    pub async fn archive_identity(&self, id: &str) -> Result<Identity, ApiError> {
        self.update_identity(id, &IdentityUpdate::archive()).await
    }
}
