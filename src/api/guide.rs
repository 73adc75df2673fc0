use super::{ApiClient, Envelope};
use crate::error::ApiError;
use crate::guide::{GuideNextRequest, GuideNextResponse, Orchestrator};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

impl ApiClient {
    pub async fn guide_next(
        &self,
        request: &GuideNextRequest,
    ) -> Result<GuideNextResponse, ApiError> {
        debug!(
            session_id = %request.guide_session_id,
            mode = %request.mode,
            step = request.current_step,
            "guide turn"
        );
        self.post("/guide/next", Some(request), Envelope::Bare)
            .await
    }
}

impl Orchestrator for ApiClient {
    fn next_step<'a>(
        &'a self,
        request: &'a GuideNextRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GuideNextResponse, ApiError>> + Send + 'a>> {
        Box::pin(self.guide_next(request))
    }
}
