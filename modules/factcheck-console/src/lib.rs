pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod menu;
pub mod poller;
pub mod render;
pub mod session;
pub mod submit;
pub mod terminal;
pub mod view;

pub use config::ConsoleConfig;
pub use error::{AnalysisError, Result};
pub use poller::{JobPoller, PollOutcome, DEFAULT_POLL_INTERVAL};
pub use session::{Session, Ticket};
pub use submit::AnalysisOutcome;
pub use view::{ReportView, ScreenState, View};

use std::time::Duration;

use factcheck_client::{FactCheckClient, HttpTransport, JsonTransport};

pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Client core: submission, polling and history flows over one service
/// connection. Flows paint through a [`View`] and read/write a [`Session`].
pub struct Analyzer<T = HttpTransport> {
    client: FactCheckClient<T>,
    poll_interval: Duration,
    history_limit: u32,
}

impl Analyzer<HttpTransport> {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(FactCheckClient::http(&config.base_url))
            .with_poll_interval(config.poll_interval)
            .with_history_limit(config.history_limit)
    }
}

impl<T: JsonTransport> Analyzer<T> {
    pub fn new(client: FactCheckClient<T>) -> Self {
        Self {
            client,
            poll_interval: DEFAULT_POLL_INTERVAL,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_history_limit(mut self, limit: u32) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn client(&self) -> &FactCheckClient<T> {
        &self.client
    }

    pub fn poller(&self) -> JobPoller<'_, T> {
        JobPoller::new(&self.client, self.poll_interval)
    }
}
