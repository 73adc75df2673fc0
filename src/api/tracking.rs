use super::{ApiClient, Envelope};
use crate::domain::{ExportFormat, TrackingReport};
use crate::error::ApiError;
use reqwest::Method;

const TRACKING_PATH: &str = "/internal/tracking";

fn project_query(project_id: Option<i64>) -> Vec<(&'static str, String)> {
    project_id
        .map(|id| vec![("project_id", id.to_string())])
        .unwrap_or_default()
}

impl ApiClient {
    pub async fn tracking_report(
        &self,
        project_id: Option<i64>,
    ) -> Result<TrackingReport, ApiError> {
        self.get(TRACKING_PATH, &project_query(project_id), Envelope::Bare)
            .await
    }

    /// Download the report in `format`. Returns the raw file contents.
    pub async fn export_tracking(
        &self,
        format: ExportFormat,
        project_id: Option<i64>,
    ) -> Result<Vec<u8>, ApiError> {
        let mut query = vec![("format", format.to_string())];
        query.extend(project_query(project_id));
        let builder = self.request(Method::GET, TRACKING_PATH).query(&query);
        self.send_raw(Method::GET, TRACKING_PATH, builder).await
    }
}
