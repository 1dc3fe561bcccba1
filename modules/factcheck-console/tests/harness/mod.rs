// Shared fixtures for console flow tests.

#![allow(dead_code)]

use std::time::Duration;

use factcheck_client::testing::MockTransport;
use factcheck_client::FactCheckClient;
use factcheck_console::{Analyzer, Session};
use serde_json::{json, Value};

pub const JOB_PATH: &str = "/api/jobs/job-1";

pub fn analyzer(transport: &MockTransport) -> Analyzer<MockTransport> {
    Analyzer::new(FactCheckClient::new(transport.clone())).with_poll_interval(Duration::from_millis(2000))
}

pub fn session_with(url: &str, api_key: &str) -> Session {
    let mut session = Session::default();
    session.url_input = url.to_string();
    session.api_key_input = api_key.to_string();
    session
}

pub fn running(status: &str, progress: u32) -> Value {
    json!({
        "id": "job-1",
        "url": "https://example.com/v/1",
        "output_language": "ar",
        "status": status,
        "progress": progress,
    })
}

pub fn failed(error: Option<&str>) -> Value {
    json!({
        "id": "job-1",
        "url": "https://example.com/v/1",
        "output_language": "ar",
        "status": "failed",
        "progress": 100,
        "error": error,
    })
}

pub fn report() -> Value {
    json!({
        "generated_at": "2025-01-02T03:04:05Z",
        "overall_score": 72,
        "overall_verdict": "mostly_accurate",
        "summary": "Mostly holds up.",
        "whats_right": ["Dates are correct"],
        "whats_wrong": ["Overstates the effect"],
        "missing_context": [],
        "danger": [
            {"category": "medical_misinformation", "severity": 4, "description": "Dosage advice"},
            {"category": "other", "severity": null, "description": "Minor"},
        ],
        "sources_used": [
            {"title": "Study", "url": "https://journal.example/s", "publisher": "Journal"},
            {"title": "Blog", "url": "https://blog.example/b"},
        ],
        "claims": [{"claim": "X causes Y", "verdict": "mixed", "confidence": 60}],
    })
}

pub fn completed(output_language: &str) -> Value {
    json!({
        "id": "job-1",
        "url": "https://example.com/v/1",
        "output_language": output_language,
        "status": "completed",
        "progress": 100,
        "transcript": "hello world",
        "report": report(),
    })
}
