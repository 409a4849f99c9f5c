use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use scout_logging::scout_debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::wire::{CreateTaskBody, ListEnvelope};
use crate::{ApiError, FailureKind, LeadRecord, TaskRecord};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5050";

const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Scheme, host and optional path prefix of the backend.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 8 * 1024 * 1024,
        }
    }
}

/// The three remote operations the client depends on. Each call is a
/// single attempt; failures are returned, never retried.
#[async_trait::async_trait]
pub trait TaskApi: Send + Sync {
    /// `GET /v1/task/list`
    async fn list_tasks(&self) -> Result<Vec<TaskRecord>, ApiError>;

    /// `POST /v1/task/create` with `{ "www": ... }`; the response body is ignored.
    async fn create_task(&self, www: &str) -> Result<(), ApiError>;

    /// `GET /v1/lead/{task_id}`
    async fn get_leads(&self, task_id: &str) -> Result<Vec<LeadRecord>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ApiSettings,
    base: Url,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let base = parse_base_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            base,
            client,
        })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::new(FailureKind::InvalidUrl, "base url cannot take a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_list<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(segments)?;
        scout_debug!("GET {}", url);
        let body = self
            .read_body(self.client.get(url).header(ACCEPT, JSON))
            .await?;
        let envelope: ListEnvelope<T> = serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        Ok(envelope.result.unwrap_or_default())
    }

    /// Sends the request and collects the body, enforcing status and size.
    async fn read_body(&self, request: reqwest::RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl TaskApi for ReqwestApi {
    async fn list_tasks(&self) -> Result<Vec<TaskRecord>, ApiError> {
        self.get_list(&["v1", "task", "list"]).await
    }

    async fn create_task(&self, www: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["v1", "task", "create"])?;
        let body = serde_json::to_vec(&CreateTaskBody { www })
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        scout_debug!("POST {} ({} bytes)", url, body.len());
        self.read_body(
            self.client
                .post(url)
                .header(CONTENT_TYPE, JSON)
                .header(ACCEPT, JSON)
                .body(body),
        )
        .await?;
        Ok(())
    }

    async fn get_leads(&self, task_id: &str) -> Result<Vec<LeadRecord>, ApiError> {
        self.get_list(&["v1", "lead", task_id]).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim())
        .map_err(|err| ApiError::new(FailureKind::InvalidUrl, format!("{raw}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ApiError::new(
            FailureKind::InvalidUrl,
            format!("{raw}: expected an http(s) base url"),
        ));
    }
    Ok(url)
}

fn too_large(max_bytes: u64, actual: u64) -> ApiError {
    ApiError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ApiError::new(FailureKind::InvalidUrl, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> ReqwestApi {
        ReqwestApi::new(ApiSettings {
            base_url: base_url.to_string(),
            ..ApiSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoints_append_to_base_path() {
        let root = api("http://localhost:5050");
        assert_eq!(
            root.endpoint(&["v1", "task", "list"]).unwrap().as_str(),
            "http://localhost:5050/v1/task/list"
        );

        let prefixed = api("https://scraper.example.com/api/");
        assert_eq!(
            prefixed.endpoint(&["v1", "lead", "12"]).unwrap().as_str(),
            "https://scraper.example.com/api/v1/lead/12"
        );
    }

    #[test]
    fn task_ids_are_encoded_as_one_segment() {
        let root = api("http://localhost:5050");
        assert_eq!(
            root.endpoint(&["v1", "lead", "a/b c"]).unwrap().as_str(),
            "http://localhost:5050/v1/lead/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_non_http_base() {
        let err = ReqwestApi::new(ApiSettings {
            base_url: "mailto:ops@example.com".to_string(),
            ..ApiSettings::default()
        })
        .unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);

        let err = ReqwestApi::new(ApiSettings {
            base_url: "not a url".to_string(),
            ..ApiSettings::default()
        })
        .unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
