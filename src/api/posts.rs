use super::{ApiClient, Envelope};
use crate::domain::{Post, PostUpdate};
use crate::error::ApiError;

impl ApiClient {
    /// `PUT /posts/{id}`. Legacy `scheduled_date` is folded into `scheduled_for`.
    pub async fn update_post(&self, id: i64, update: PostUpdate) -> Result<Post, ApiError> {
        let payload = update.normalized();
        self.put(&format!("/posts/{id}"), &payload, Envelope::Data)
            .await
    }

    pub async fn publish_post(&self, id: i64) -> Result<Post, ApiError> {
        self.post_empty(&format!("/posts/{id}/publish"), Envelope::Data)
            .await
    }

    /// Record that a post was published by hand outside the automation.
    pub async fn mark_post_published(&self, id: i64) -> Result<Post, ApiError> {
        self.post_empty(&format!("/posts/{id}/mark-published"), Envelope::Data)
            .await
    }
}
