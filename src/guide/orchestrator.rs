use super::types::{GuideNextRequest, GuideNextResponse};
use crate::error::ApiError;
use std::future::Future;
use std::pin::Pin;

/// Anything that can answer a guide turn. The HTTP client is the production
/// implementation; tests script their own.
pub trait Orchestrator: Send + Sync {
    fn next_step<'a>(
        &'a self,
        request: &'a GuideNextRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GuideNextResponse, ApiError>> + Send + 'a>>;
}
