use factcheck_client::{AnalyzeRequest, Job, JsonTransport};

use crate::error::{AnalysisError, Result};
use crate::poller::PollOutcome;
use crate::session::{Session, Ticket};
use crate::view::View;
use crate::Analyzer;

const CACHED_NOTICE: &str = "Loaded saved analysis. Enable re-run to refresh.";

#[derive(Debug)]
pub enum AnalysisOutcome {
    /// The URL input was empty; nothing happened.
    Skipped,
    Completed(Job),
    /// A newer submission took over; this one left the view alone.
    Superseded,
}

impl<T: JsonTransport> Analyzer<T> {
    /// Submit the session's URL and follow the job to the end.
    ///
    /// Failures are shown on the error surface and returned. The run control is
    /// disabled while the request is in flight and re-enabled on every exit
    /// path once it was disabled.
    pub async fn run_analysis<V: View>(
        &self,
        session: &mut Session,
        view: &mut V,
        force: bool,
    ) -> Result<AnalysisOutcome> {
        let url = session.url_input.trim().to_string();
        if url.is_empty() {
            return Ok(AnalysisOutcome::Skipped);
        }

        let api_key = session.api_key_input.trim().to_string();
        if api_key.is_empty() {
            let message = session.provider.missing_key_message();
            view.set_status_visible(true);
            view.hide_result();
            view.hide_info();
            view.show_error(&message);
            return Err(AnalysisError::Validation(message));
        }

        session.last_submitted_url = url.clone();
        let ticket = session.begin_submission();

        view.set_run_enabled(false);
        view.set_status_visible(true);
        view.hide_result();
        view.hide_error();
        view.hide_info();
        view.set_status("queued", 0);

        let request = AnalyzeRequest {
            url,
            output_language: session.language.code.to_string(),
            provider: session.provider.id.to_string(),
            force,
            api_key,
        };
        let result = self.submit_and_poll(&request, &ticket, session, view).await;

        if let Err(err) = &result {
            if ticket.is_current() && !matches!(err, AnalysisError::JobFailed(_)) {
                view.show_error(&err.to_string());
            }
        }
        view.set_run_enabled(true);
        result
    }

    /// Re-run the last submitted URL, bypassing the saved analysis.
    pub async fn rerun<V: View>(
        &self,
        session: &mut Session,
        view: &mut V,
    ) -> Result<AnalysisOutcome> {
        if !session.last_submitted_url.is_empty() {
            session.url_input = session.last_submitted_url.clone();
        }
        session.force = true;
        self.run_analysis(session, view, true).await
    }

    async fn submit_and_poll<V: View>(
        &self,
        request: &AnalyzeRequest,
        ticket: &Ticket,
        session: &mut Session,
        view: &mut V,
    ) -> Result<AnalysisOutcome> {
        tracing::info!(
            url = %request.url,
            language = %request.output_language,
            provider = %request.provider,
            force = request.force,
            "Submitting analysis"
        );
        let created = self.client().analyze(request).await?;
        if created.cached && ticket.is_current() {
            view.show_info(CACHED_NOTICE);
        }

        match self.poller().poll(&created.job_id, ticket, session, view).await? {
            PollOutcome::Completed(job) => Ok(AnalysisOutcome::Completed(job)),
            PollOutcome::Failed(message) => Err(AnalysisError::JobFailed(message)),
            PollOutcome::Superseded => Ok(AnalysisOutcome::Superseded),
        }
    }
}
