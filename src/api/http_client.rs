use super::envelope::Envelope;
use crate::config::Config;
use crate::error::ApiError;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const MAX_DETAIL_CHARS: usize = 300;

pub fn build_api_client(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Typed client for the dashboard REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(base_url, build_api_client(30, 10))
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::with_client(
            &config.api_url,
            build_api_client(config.http.timeout_secs, config.http.connect_timeout_secs),
        )
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ApiError> {
        let parsed = url::Url::parse(base_url)
            .map_err(|e| ApiError::BaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::BaseUrl(format!("{base_url}: unsupported scheme")));
        }
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.endpoint(path))
    }

    /// Send and decode a JSON response through `envelope`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
        envelope: Envelope,
    ) -> Result<T, ApiError> {
        let body = self.send_raw(method, path, builder).await?;
        let value: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            })?
        };
        envelope.open(value).map_err(|message| ApiError::Decode {
            path: path.to_string(),
            message,
        })
    }

    /// Send and return the raw body. Non-2xx statuses become `ApiError::Server`.
    pub(crate) async fn send_raw(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Vec<u8>, ApiError> {
        let response = builder.send().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;
        let status = response.status();
        debug!(method = %method, path, status = status.as_u16(), "api response");

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;

        if !status.is_success() {
            return Err(ApiError::Server {
                path: path.to_string(),
                status: status.as_u16(),
                detail: error_detail(status, &body),
            });
        }
        Ok(body.to_vec())
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        envelope: Envelope,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).query(query);
        self.send_json(Method::GET, path, builder, envelope).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
        envelope: Envelope,
    ) -> Result<T, ApiError> {
        let mut builder = self.request(Method::POST, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send_json(Method::POST, path, builder, envelope).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        envelope: Envelope,
    ) -> Result<T, ApiError> {
        self.post::<(), T>(path, None, envelope).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        envelope: Envelope,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::PUT, path).json(body);
        self.send_json(Method::PUT, path, builder, envelope).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        envelope: Envelope,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::DELETE, path);
        self.send_json(Method::DELETE, path, builder, envelope).await
    }
}

/// Human-readable failure reason: the body's `detail` field when present,
/// otherwise the (truncated) body, otherwise the status reason.
pub(crate) fn error_detail(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body)
        && let Some(detail) = value.get("detail")
    {
        return match detail {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
    }

    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }
    if trimmed.chars().count() > MAX_DETAIL_CHARS {
        let cut: String = trimmed.chars().take(MAX_DETAIL_CHARS).collect();
        format!("{cut}…")
    } else {
        trimmed.to_string()
    }
}
