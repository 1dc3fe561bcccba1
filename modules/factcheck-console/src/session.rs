use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::catalog::languages::{self, Language};
use crate::catalog::providers::{self, Provider};

/// Client-side state shared by the submission, polling and history flows.
#[derive(Debug, Clone)]
pub struct Session {
    pub language: Language,
    pub provider: Provider,
    pub url_input: String,
    pub api_key_input: String,
    pub force: bool,
    pub last_submitted_url: String,
    /// Language of the report currently on screen, if any.
    pub report_language: Option<String>,
    pub history_open: bool,
    generation: Arc<AtomicU64>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(languages::default_language(), providers::default_provider())
    }
}

impl Session {
    pub fn new(language: Language, provider: Provider) -> Self {
        Self {
            language,
            provider,
            url_input: String::new(),
            api_key_input: String::new(),
            force: false,
            last_submitted_url: String::new(),
            report_language: None,
            history_open: false,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a new submission. Tickets from earlier submissions stop being current.
    pub fn begin_submission(&self) -> Ticket {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            id,
            generation: Arc::clone(&self.generation),
        }
    }

    /// Select a catalog language by code. Unknown codes leave the selection as is.
    pub fn select_language_code(&mut self, code: &str) -> bool {
        match languages::find(code) {
            Some(language) => {
                self.language = language;
                true
            }
            None => false,
        }
    }

    /// Language used for report direction: the shown report's, else the selection.
    pub fn direction_language(&self) -> &str {
        self.report_language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(self.language.code)
    }
}

/// Generation number handed to one submission's poll loop.
#[derive(Debug, Clone)]
pub struct Ticket {
    id: u64,
    generation: Arc<AtomicU64>,
}

impl Ticket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }
}
