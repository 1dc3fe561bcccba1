pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod types;

pub use error::{ClientError, Result};
pub use types::{
    AnalyzeRequest, AnalyzeResponse, DangerItem, HistoryEntry, Job, JobStatus, Report, Source,
};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON-over-HTTP seam. Every call either yields a parsed JSON value or a
/// [`ClientError`]; a body that is not valid JSON reads as `{}`.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value>;
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value>;
}

/// `reqwest`-backed transport rooted at the service base URL.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl JsonTransport for HttpTransport {
    async fn get_json(&self, path: &str) -> Result<Value> {
        let resp = self.client.get(self.endpoint(path)).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        decode_response(status.as_u16(), &body)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let resp = self
            .client
            .post(self.endpoint(path))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        decode_response(status.as_u16(), &body)
    }
}

/// Turn a raw HTTP response into a JSON value or a request error.
///
/// Unparseable bodies become an empty object. On a non-2xx status the error
/// message is the body's `detail` field, or `Request failed (<status>)`.
pub fn decode_response(status: u16, body: &[u8]) -> Result<Value> {
    let data: Value =
        serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Default::default()));

    if (200..300).contains(&status) {
        return Ok(data);
    }

    let message = match data.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Null) | Some(Value::String(_)) | Some(Value::Bool(false)) | None => {
            format!("Request failed ({status})")
        }
        Some(other) => other.to_string(),
    };
    Err(ClientError::Request { status, message })
}

/// Typed endpoints of the analysis service.
pub struct FactCheckClient<T = HttpTransport> {
    transport: T,
}

impl FactCheckClient<HttpTransport> {
    pub fn http(base_url: &str) -> Self {
        Self::new(HttpTransport::new(base_url))
    }
}

impl<T: JsonTransport> FactCheckClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn get_json(&self, path: &str) -> Result<Value> {
        self.transport.get_json(path).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        self.transport.post_json(path, body).await
    }

    /// Create (or reuse) an analysis job for a URL.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        let body = serde_json::to_value(request)?;
        let value = self.post_json("/api/analyze", &body).await?;
        let resp: AnalyzeResponse = decode(value)?;
        tracing::info!(job_id = %resp.job_id, cached = resp.cached, "Analysis job created");
        Ok(resp)
    }

    pub async fn job(&self, job_id: &str) -> Result<Job> {
        let value = self.get_json(&format!("/api/jobs/{job_id}")).await?;
        decode(value)
    }

    /// Most recent jobs, newest first as ordered by the service.
    pub async fn history(&self, limit: u32) -> Result<Vec<HistoryEntry>> {
        let value = self.get_json(&format!("/api/history?limit={limit}")).await?;
        let entries: Vec<HistoryEntry> = decode(value)?;
        tracing::debug!(count = entries.len(), limit, "Fetched history");
        Ok(entries)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}
