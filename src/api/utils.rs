use super::ApiClient;
use crate::error::ApiError;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractedText {
    pub text: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

const EXTRACT_PATH: &str = "/utils/extract-text";

impl ApiClient {
    /// Server-side text extraction for PDFs and other non-plain files.
    pub async fn extract_text(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<ExtractedText, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|source| ApiError::Transport {
                path: EXTRACT_PATH.to_string(),
                source,
            })?;
        let form = Form::new().part("file", part);
        let builder = self.request(Method::POST, EXTRACT_PATH).multipart(form);
        self.send_json(Method::POST, EXTRACT_PATH, builder, super::Envelope::Bare)
            .await
    }
}
