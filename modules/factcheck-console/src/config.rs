use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::catalog::languages::{self, Language};
use crate::catalog::providers::{self, Provider, PROVIDERS};

/// Console configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    // Service
    pub base_url: String,

    // Defaults for the pickers
    pub provider: Provider,
    pub output_language: Language,

    // Polling / history
    pub poll_interval: Duration,
    pub history_limit: u32,

    // Provider keys, indexed like `PROVIDERS`
    api_keys: Vec<Option<String>>,
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from a variable lookup. Unset variables take their
    /// defaults; set but malformed ones are rejected.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let provider_id = var("FACTCHECK_PROVIDER").unwrap_or_else(|| "gemini".to_string());
        let provider = providers::find(&provider_id)
            .with_context(|| format!("FACTCHECK_PROVIDER: unknown provider {provider_id:?}"))?;

        let language_code =
            var("FACTCHECK_OUTPUT_LANGUAGE").unwrap_or_else(|| "ar".to_string());
        let output_language = languages::find(&language_code).with_context(|| {
            format!("FACTCHECK_OUTPUT_LANGUAGE: unsupported language {language_code:?}")
        })?;

        let poll_interval_ms: u64 = var("FACTCHECK_POLL_INTERVAL_MS")
            .unwrap_or_else(|| "2000".to_string())
            .trim()
            .parse()
            .context("FACTCHECK_POLL_INTERVAL_MS must be a whole number of milliseconds")?;
        if poll_interval_ms == 0 {
            bail!("FACTCHECK_POLL_INTERVAL_MS must be greater than zero");
        }

        let history_limit: u32 = var("FACTCHECK_HISTORY_LIMIT")
            .unwrap_or_else(|| "50".to_string())
            .trim()
            .parse()
            .context("FACTCHECK_HISTORY_LIMIT must be a non-negative whole number")?;

        Ok(Self {
            base_url: var("FACTCHECK_BASE_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8000".to_string()),
            provider,
            output_language,
            poll_interval: Duration::from_millis(poll_interval_ms),
            history_limit,
            api_keys: PROVIDERS
                .iter()
                .map(|p| var(p.key_env).filter(|k| !k.trim().is_empty()))
                .collect(),
        })
    }

    /// Key for `provider` from the environment, if set.
    pub fn api_key_for(&self, provider: &Provider) -> Option<&str> {
        PROVIDERS
            .iter()
            .position(|p| p.id == provider.id)
            .and_then(|i| self.api_keys.get(i))
            .and_then(|k| k.as_deref())
    }

    pub fn log_redacted(&self) {
        let keys: Vec<String> = PROVIDERS
            .iter()
            .map(|p| {
                let state = if self.api_key_for(p).is_some() { "set" } else { "unset" };
                format!("{}={state}", p.key_env)
            })
            .collect();
        info!(
            base_url = %self.base_url,
            provider = self.provider.id,
            output_language = self.output_language.code,
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            history_limit = self.history_limit,
            api_keys = %keys.join(","),
            "Loaded config"
        );
    }
}
