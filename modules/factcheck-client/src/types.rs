use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// --- Job lifecycle ---

/// Status token reported by the analysis service.
///
/// The service moves a job through a few running states before it settles on
/// `completed` or `failed`. Unrecognised tokens are kept verbatim and count as
/// still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Queued,
    Running,
    Downloading,
    Transcribing,
    FactChecking,
    Completed,
    Failed,
    Other(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Running => "running",
            JobStatus::Downloading => "downloading",
            JobStatus::Transcribing => "transcribing",
            JobStatus::FactChecking => "fact_checking",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Other(token) => token,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl From<String> for JobStatus {
    fn from(token: String) -> Self {
        match token.as_str() {
            "queued" => JobStatus::Queued,
            "running" => JobStatus::Running,
            "downloading" => JobStatus::Downloading,
            "transcribing" => JobStatus::Transcribing,
            "fact_checking" => JobStatus::FactChecking,
            "completed" => JobStatus::Completed,
            "failed" => JobStatus::Failed,
            _ => JobStatus::Other(token),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A server-tracked analysis job, as returned by `GET /api/jobs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub status: JobStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: u32,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub output_language: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub report: Option<Report>,
    #[serde(default)]
    pub transcript: Option<String>,
}

// --- Report ---

/// Structured output attached to a completed job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, deserialize_with = "finite_number")]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub overall_verdict: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub whats_right: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub whats_wrong: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub missing_context: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub danger: Vec<DangerItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources_used: Vec<Source>,
    /// Claim records are owned by the service; the client only pretty-prints them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub claims: Vec<serde_json::Value>,
    #[serde(default)]
    pub limitations: Option<String>,
}

impl Report {
    /// Raw score, 0 when the service omitted it.
    pub fn score(&self) -> f64 {
        self.overall_score.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DangerItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Only finite JSON numbers are kept; anything else reads as absent.
    #[serde(default, deserialize_with = "finite_number")]
    pub severity: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub accessed_at: Option<String>,
}

// --- History ---

/// Summarized projection of a past job from `GET /api/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub output_language: Option<String>,
    pub status: JobStatus,
    #[serde(default, deserialize_with = "finite_number")]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub overall_verdict: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// --- Submission ---

/// Body for `POST /api/analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub url: String,
    pub output_language: String,
    pub provider: String,
    pub force: bool,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub job_id: String,
    /// True when the service reused a saved analysis instead of starting a new one.
    #[serde(default)]
    pub cached: bool,
}

// --- Lenient field decoding ---

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn finite_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).filter(|n| n.is_finite()))
}
