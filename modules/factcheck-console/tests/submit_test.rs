mod harness;

use std::time::Duration;

use factcheck_client::testing::{Method, MockTransport};
use factcheck_console::catalog::providers;
use factcheck_console::{AnalysisError, AnalysisOutcome, ScreenState, Session};
use serde_json::json;

use harness::{analyzer, completed, failed, running, session_with, JOB_PATH};

const ANALYZE: &str = "/api/analyze";

#[tokio::test]
async fn missing_credential_never_reaches_the_network() {
    let transport = MockTransport::new();
    let analyzer = analyzer(&transport);
    let mut session = session_with("https://example.com/v/1", "   ");
    session.provider = providers::find("openai").unwrap();
    let mut screen = ScreenState::new();

    let err = analyzer
        .run_analysis(&mut session, &mut screen, false)
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Validation(_)));
    assert_eq!(transport.call_count(), 0);
    assert!(screen.run_enabled_log.is_empty());
    assert!(screen.status_visible);
    assert!(screen.result.is_none());
    let message = screen.error.expect("error shown");
    assert!(message.starts_with("Please enter your OpenAI API key."));
    assert!(message.contains("https://platform.openai.com/api-keys"));
    assert!(session.last_submitted_url.is_empty());
}

#[tokio::test]
async fn empty_url_is_a_silent_no_op() {
    let transport = MockTransport::new();
    let analyzer = analyzer(&transport);
    let mut session = session_with("  ", "key");
    let mut screen = ScreenState::new();

    let outcome = analyzer
        .run_analysis(&mut session, &mut screen, false)
        .await
        .unwrap();

    assert!(matches!(outcome, AnalysisOutcome::Skipped));
    assert_eq!(transport.call_count(), 0);
    assert!(!screen.status_visible);
    assert!(screen.error.is_none());
}

#[tokio::test(start_paused = true)]
async fn successful_run_posts_request_and_renders() {
    let transport = MockTransport::new()
        .on_post(ANALYZE, json!({"job_id": "job-1", "cached": false}))
        .on_get(JOB_PATH, running("downloading", 20))
        .on_get(JOB_PATH, completed("fr"));
    let analyzer = analyzer(&transport);
    let mut session = session_with(" https://example.com/v/1 ", "key-123");
    session.select_language_code("fr");
    let mut screen = ScreenState::new();

    let outcome = analyzer
        .run_analysis(&mut session, &mut screen, false)
        .await
        .unwrap();

    assert!(matches!(outcome, AnalysisOutcome::Completed(_)));
    let calls = transport.calls();
    assert_eq!(calls[0].method, Method::Post);
    assert_eq!(
        calls[0].body,
        Some(json!({
            "url": "https://example.com/v/1",
            "output_language": "fr",
            "provider": "gemini",
            "force": false,
            "api_key": "key-123",
        }))
    );
    assert_eq!(screen.status_log[0], ("queued".to_string(), 0));
    assert_eq!(screen.result_renders, 1);
    assert!(screen.info.is_none());
    assert_eq!(screen.run_enabled_log, vec![false, true]);
    assert_eq!(session.last_submitted_url, "https://example.com/v/1");
}

#[tokio::test(start_paused = true)]
async fn cached_result_shows_notice() {
    let transport = MockTransport::new()
        .on_post(ANALYZE, json!({"job_id": "job-1", "cached": true}))
        .on_get(JOB_PATH, completed("ar"));
    let analyzer = analyzer(&transport);
    let mut session = session_with("https://example.com/v/1", "key");
    let mut screen = ScreenState::new();

    analyzer
        .run_analysis(&mut session, &mut screen, false)
        .await
        .unwrap();

    assert_eq!(
        screen.info.as_deref(),
        Some("Loaded saved analysis. Enable re-run to refresh.")
    );
}

#[tokio::test]
async fn request_error_detail_is_shown_and_run_re_enabled() {
    let transport =
        MockTransport::new().on_post_status(ANALYZE, 400, "Gemini API key is required.");
    let analyzer = analyzer(&transport);
    let mut session = session_with("https://example.com/v/1", "key");
    let mut screen = ScreenState::new();

    let err = analyzer
        .run_analysis(&mut session, &mut screen, false)
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Request(_)));
    assert_eq!(screen.error.as_deref(), Some("Gemini API key is required."));
    assert_eq!(screen.run_enabled_log, vec![false, true]);
}

#[tokio::test(start_paused = true)]
async fn poll_failure_is_shown_and_run_re_enabled() {
    let transport = MockTransport::new()
        .on_post(ANALYZE, json!({"job_id": "job-1"}))
        .on_get_network_error(JOB_PATH, "connection reset");
    let analyzer = analyzer(&transport);
    let mut session = session_with("https://example.com/v/1", "key");
    let mut screen = ScreenState::new();

    let err = analyzer
        .run_analysis(&mut session, &mut screen, false)
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Transport(_)));
    assert_eq!(
        screen.error.as_deref(),
        Some("Network error: connection reset")
    );
    assert!(screen.run_enabled);
}

#[tokio::test(start_paused = true)]
async fn failed_job_keeps_server_message() {
    let transport = MockTransport::new()
        .on_post(ANALYZE, json!({"job_id": "job-1"}))
        .on_get(JOB_PATH, failed(Some("Transcription failed")));
    let analyzer = analyzer(&transport);
    let mut session = session_with("https://example.com/v/1", "key");
    let mut screen = ScreenState::new();

    let err = analyzer
        .run_analysis(&mut session, &mut screen, false)
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::JobFailed(ref m) if m == "Transcription failed"));
    assert_eq!(screen.error.as_deref(), Some("Transcription failed"));
    assert!(screen.result.is_none());
    assert!(screen.run_enabled);
}

#[tokio::test(start_paused = true)]
async fn rerun_resubmits_last_url_with_force() {
    let transport = MockTransport::new()
        .on_post(ANALYZE, json!({"job_id": "job-1"}))
        .on_get(JOB_PATH, completed("ar"));
    let analyzer = analyzer(&transport);
    let mut session = Session::default();
    session.last_submitted_url = "https://example.com/v/1".into();
    session.url_input = "https://edited.example/other".into();
    session.api_key_input = "key".into();
    let mut screen = ScreenState::new();

    analyzer.rerun(&mut session, &mut screen).await.unwrap();

    assert!(session.force);
    assert_eq!(session.url_input, "https://example.com/v/1");
    let body = transport.calls()[0].body.clone().unwrap();
    assert_eq!(body["url"], "https://example.com/v/1");
    assert_eq!(body["force"], true);
}

#[tokio::test(start_paused = true)]
async fn superseded_submission_skips_notice_and_errors() {
    let transport = MockTransport::new()
        .with_latency(Duration::from_millis(100))
        .on_post(ANALYZE, json!({"job_id": "job-1", "cached": true}))
        .on_get_network_error(JOB_PATH, "connection reset");
    let analyzer = analyzer(&transport);
    let mut session = session_with("https://example.com/v/1", "key");
    let other_tab = session.clone();
    let mut screen = ScreenState::new();

    let supersede = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        other_tab.begin_submission();
    };
    let (result, ()) = tokio::join!(
        analyzer.run_analysis(&mut session, &mut screen, false),
        supersede
    );

    assert!(matches!(result, Err(AnalysisError::Transport(_))));
    assert!(screen.info.is_none());
    assert!(screen.error.is_none());
    assert!(screen.result.is_none());
    assert_eq!(screen.status_log, vec![("queued".to_string(), 0)]);
    assert_eq!(screen.run_enabled_log, vec![false, true]);
}

#[tokio::test(start_paused = true)]
async fn superseded_while_polling_returns_superseded() {
    let transport = MockTransport::new()
        .on_post(ANALYZE, json!({"job_id": "job-1"}))
        .on_get(JOB_PATH, running("queued", 5))
        .on_get(JOB_PATH, completed("ar"));
    let analyzer = analyzer(&transport);
    let mut session = session_with("https://example.com/v/1", "key");
    let other_tab = session.clone();
    let mut screen = ScreenState::new();

    let supersede = async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        other_tab.begin_submission();
    };
    let (result, ()) = tokio::join!(
        analyzer.run_analysis(&mut session, &mut screen, false),
        supersede
    );

    assert!(matches!(result, Ok(AnalysisOutcome::Superseded)));
    assert_eq!(screen.result_renders, 0);
    assert!(screen.error.is_none());
    assert_eq!(screen.run_enabled_log, vec![false, true]);
}
