use std::time::Duration;

use factcheck_client::{FactCheckClient, Job, JobStatus, JsonTransport};

use crate::error::Result;
use crate::render::render_result;
use crate::session::{Session, Ticket};
use crate::view::View;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

const UNKNOWN_FAILURE: &str = "Unknown error.";

#[derive(Debug)]
pub enum PollOutcome {
    Completed(Job),
    /// The job failed; carries the message shown on the error surface.
    Failed(String),
    /// A newer submission took over before this job settled.
    Superseded,
}

/// Drives status checks for one job until it settles.
pub struct JobPoller<'a, T> {
    client: &'a FactCheckClient<T>,
    interval: Duration,
}

impl<'a, T: JsonTransport> JobPoller<'a, T> {
    pub fn new(client: &'a FactCheckClient<T>, interval: Duration) -> Self {
        Self { client, interval }
    }

    /// Poll until `completed` or `failed`. There is no timeout and no retry:
    /// the first failed fetch ends the loop with that error.
    ///
    /// After every fetch the ticket is checked; a superseded loop returns
    /// without touching the view.
    pub async fn poll<V: View>(
        &self,
        job_id: &str,
        ticket: &Ticket,
        session: &mut Session,
        view: &mut V,
    ) -> Result<PollOutcome> {
        loop {
            let job = self.client.job(job_id).await?;

            if !ticket.is_current() {
                tracing::info!(job_id, ticket = ticket.id(), "Poll superseded by newer submission");
                return Ok(PollOutcome::Superseded);
            }

            view.set_status(job.status.as_str(), job.progress);

            match job.status {
                JobStatus::Failed => {
                    let message = job
                        .error
                        .as_deref()
                        .filter(|e| !e.is_empty())
                        .unwrap_or(UNKNOWN_FAILURE)
                        .to_string();
                    tracing::info!(job_id, error = %message, "Job failed");
                    view.show_error(&message);
                    view.hide_result();
                    return Ok(PollOutcome::Failed(message));
                }
                JobStatus::Completed => {
                    tracing::info!(job_id, "Job completed");
                    view.hide_error();
                    render_result(view, session, &job);
                    return Ok(PollOutcome::Completed(job));
                }
                _ => {
                    tracing::debug!(job_id, status = %job.status, progress = job.progress, "Job still in progress");
                    tokio::time::sleep(self.interval).await;
                }
            }
        }
    }
}
