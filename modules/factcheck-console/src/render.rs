use factcheck_client::{Job, Report};

use crate::format::{self, ScoreBand};
use crate::session::Session;
use crate::view::{DirectionAttrs, ReportView, SourceLink, View};

/// Project a job's report into display state. Jobs without a report render
/// as an empty report with score 0.
pub fn build_report_view(job: &Job, report_language: &str) -> ReportView {
    let empty = Report::default();
    let report = job.report.as_ref().unwrap_or(&empty);

    let raw_score = report.score();
    let score = format::clamp_score(raw_score);

    let verdict = format::humanize_enum(report.overall_verdict.as_deref());
    let verdict_text = if verdict.is_empty() {
        String::new()
    } else {
        format!("Overall: {verdict}")
    };

    ReportView {
        score,
        score_text: format::score_percent(raw_score),
        band: ScoreBand::for_score(raw_score),
        verdict_text,
        generated_at: format::format_when(report.generated_at.as_deref()),
        summary: report.summary.clone(),
        whats_right: report.whats_right.clone(),
        whats_wrong: report.whats_wrong.clone(),
        missing_context: report.missing_context.clone(),
        danger: report.danger.iter().map(format::danger_line).collect(),
        sources: report
            .sources_used
            .iter()
            .map(|s| SourceLink::new(format::source_text(s), s.url.clone()))
            .collect(),
        claims_json: format::claims_json(&report.claims),
        transcript: job.transcript.clone().unwrap_or_default(),
        limitations: report.limitations.clone().unwrap_or_default(),
        direction: DirectionAttrs::for_language(report_language),
    }
}

/// Paint a completed job as the active result.
///
/// The report language sticks to the session so later renders of jobs without
/// an `output_language` keep the same direction.
pub fn render_result<V: View>(view: &mut V, session: &mut Session, job: &Job) {
    if let Some(lang) = job.output_language.as_deref().filter(|l| !l.is_empty()) {
        session.report_language = Some(lang.to_string());
    }
    let lang = session.direction_language().to_string();
    session.report_language = Some(lang.clone());

    let report = build_report_view(job, &lang);
    tracing::debug!(job_id = %job.id, lang = %lang, score = report.score, "Rendering result");
    view.show_result(&report);
}
