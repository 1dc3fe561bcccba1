use factcheck_client::{HistoryEntry, Job, JsonTransport};

use crate::error::Result;
use crate::format::{self, ScoreBand};
use crate::render::render_result;
use crate::session::Session;
use crate::view::View;
use crate::Analyzer;

pub const EMPTY_HISTORY_MESSAGE: &str = "No analyses yet.";
const LOADED_NOTICE: &str = "Loaded from history.";
const FALLBACK_LANGUAGE: &str = "ar";
const NO_SCORE: &str = "—";

/// One line of the history panel.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: String,
    pub score_text: String,
    /// `None` when the job has no score yet; shown muted.
    pub band: Option<ScoreBand>,
    pub url: String,
    pub language_badge: String,
    pub status_badge: String,
    pub when: String,
}

impl HistoryRow {
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        let (score_text, band) = match entry.overall_score {
            Some(score) => (
                format!("{}%", format::format_number(score)),
                Some(ScoreBand::for_score(score)),
            ),
            None => (NO_SCORE.to_string(), None),
        };

        Self {
            id: entry.id.clone(),
            score_text,
            band,
            url: entry.url.clone(),
            language_badge: entry
                .output_language
                .as_deref()
                .filter(|l| !l.is_empty())
                .unwrap_or(FALLBACK_LANGUAGE)
                .to_uppercase(),
            status_badge: entry.status.as_str().to_string(),
            when: format::format_when(entry.updated_at.as_deref()),
        }
    }
}

impl<T: JsonTransport> Analyzer<T> {
    /// Fetch recent jobs and show them in server order.
    pub async fn load_history<V: View>(&self, view: &mut V) -> Result<Vec<HistoryRow>> {
        let entries = self.client().history(self.history_limit).await?;
        let rows: Vec<HistoryRow> = entries.iter().map(HistoryRow::from_entry).collect();
        view.show_history(&rows);
        Ok(rows)
    }

    /// Open or close the history panel; opening reloads it.
    pub async fn toggle_history<V: View>(&self, session: &mut Session, view: &mut V) -> Result<()> {
        if session.history_open {
            session.history_open = false;
            view.hide_history();
            return Ok(());
        }
        session.history_open = true;
        self.load_history(view).await?;
        Ok(())
    }

    /// Load a past job as the active result and restore its inputs.
    pub async fn open_history_entry<V: View>(
        &self,
        job_id: &str,
        session: &mut Session,
        view: &mut V,
    ) -> Result<Job> {
        let job = match self.client().job(job_id).await {
            Ok(job) => job,
            Err(err) => {
                view.show_error(&err.to_string());
                return Err(err.into());
            }
        };

        view.hide_error();
        view.set_status_visible(false);

        session.url_input = job.url.clone();
        session.last_submitted_url = job.url.clone();
        let code = job
            .output_language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(FALLBACK_LANGUAGE);
        session.select_language_code(code);
        session.force = false;

        view.show_info(LOADED_NOTICE);
        render_result(view, session, &job);

        session.history_open = false;
        view.hide_history();

        tracing::info!(job_id, url = %job.url, "Opened job from history");
        Ok(job)
    }
}
