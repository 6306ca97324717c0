use crate::domain::model::{Graduate, GraduateDraft, ListEnvelope};
use crate::domain::ports::GraduateStore;
use crate::utils::error::{PortalError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;

const GENERIC_OPERATION_FAILED: &str = "Operation failed";
const GENERIC_DELETE_FAILED: &str = "Failed to delete graduate";

/// HTTP client for the graduates REST endpoint. Maps non-success responses to
/// `RemoteError`, surfacing the server's JSON `message` field verbatim when
/// one is present.
#[derive(Debug)]
pub struct HttpGraduateStore {
    base_url: String,
    client: Client,
}

impl HttpGraduateStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Same store with an optional per-request timeout and extra headers sent
    /// on every request. The plain constructor configures neither, so a hung
    /// request blocks its action indefinitely.
    pub fn with_options(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(headers) = headers {
            builder = builder.default_headers(Self::header_map(headers)?);
        }
        let client = builder.build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                PortalError::InvalidConfigValueError {
                    field: "api.headers".to_string(),
                    value: name.clone(),
                    reason: format!("Invalid header name: {}", e),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| PortalError::InvalidConfigValueError {
                    field: "api.headers".to_string(),
                    value: value.clone(),
                    reason: format!("Invalid header value: {}", e),
                })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Extracts the server's `message` for a failed mutation, falling back to
    /// a per-operation generic notice.
    async fn remote_error(response: Response, fallback: &str) -> PortalError {
        let status = response.status();
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            Err(_) => fallback.to_string(),
        };
        tracing::debug!("Server rejected request ({}): {}", status, message);
        PortalError::RemoteError { message }
    }
}

#[async_trait]
impl GraduateStore for HttpGraduateStore {
    async fn list(&self) -> Result<Vec<Graduate>> {
        tracing::debug!("GET {}", self.base_url);
        let response = self.client.get(&self.base_url).send().await?;

        if !response.status().is_success() {
            return Err(Self::remote_error(response, "Failed to load graduates").await);
        }

        // List responses arrive wrapped in a `data` envelope.
        let envelope: ListEnvelope = response.json().await?;
        tracing::debug!("Fetched {} graduates", envelope.data.len());
        Ok(envelope.data)
    }

    async fn create(&self, draft: &GraduateDraft) -> Result<Graduate> {
        tracing::debug!("POST {}", self.base_url);
        let response = self
            .client
            .post(&self.base_url)
            .json(&draft.payload())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::remote_error(response, GENERIC_OPERATION_FAILED).await);
        }

        let created: Graduate = response.json().await?;
        Ok(created)
    }

    async fn update(&self, id: u64, draft: &GraduateDraft) -> Result<Graduate> {
        let url = self.record_url(id);
        tracing::debug!("PATCH {}", url);
        let response = self.client.patch(&url).json(&draft.payload()).send().await?;

        if !response.status().is_success() {
            return Err(Self::remote_error(response, GENERIC_OPERATION_FAILED).await);
        }

        let updated: Graduate = response.json().await?;
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let url = self.record_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;

        if !response.status().is_success() {
            // Deletes never surface server detail, only the generic notice.
            tracing::debug!("Delete rejected with status {}", response.status());
            return Err(PortalError::RemoteError {
                message: GENERIC_DELETE_FAILED.to_string(),
            });
        }

        Ok(())
    }
}
