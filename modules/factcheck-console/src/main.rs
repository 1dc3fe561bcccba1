use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use dialoguer::{Input, Select};
use tracing_subscriber::EnvFilter;

use factcheck_console::catalog::{languages, providers};
use factcheck_console::menu::{MenuController, MenuKind};
use factcheck_console::terminal::TerminalView;
use factcheck_console::{AnalysisOutcome, Analyzer, ConsoleConfig, Session};

#[derive(Parser)]
#[command(name = "factcheck")]
#[command(about = "Fact-check a video or post URL through the analysis service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a URL and wait for its report
    Analyze(AnalyzeArgs),

    /// List recent analyses
    History {
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Show the report of a past job
    Open { job_id: String },

    /// List supported output languages
    Languages {
        /// Case-insensitive match on code or name
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// List analysis providers
    Providers,
}

#[derive(Args)]
struct AnalyzeArgs {
    url: String,

    /// Output language code (e.g. ar, en, fr)
    #[arg(short, long)]
    lang: Option<String>,

    /// Pick the output language interactively
    #[arg(long, conflicts_with = "lang")]
    pick_language: bool,

    /// Analysis provider (gemini, openai, deepseek)
    #[arg(short, long)]
    provider: Option<String>,

    /// Re-run even if a saved analysis exists
    #[arg(short, long)]
    force: bool,

    /// Provider API key (defaults to the provider's environment variable)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", style("error:").red().bold(), e);
            ExitCode::from(1)
        }
    }
}

// Flow failures are painted by the view; they only set the exit code here.
fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // The progress bar redraws on stderr, so only warnings log by default.
    // RUST_LOG=factcheck=info brings the flow logs back.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("factcheck=warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config = ConsoleConfig::from_env()?;
    config.log_redacted();

    match cli.command {
        Commands::Analyze(args) => cmd_analyze(&config, args).await,
        Commands::History { limit } => cmd_history(&config, limit).await,
        Commands::Open { job_id } => cmd_open(&config, &job_id).await,
        Commands::Languages { filter } => {
            cmd_languages(filter.as_deref().unwrap_or(""));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Providers => {
            cmd_providers();
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn cmd_analyze(config: &ConsoleConfig, args: AnalyzeArgs) -> Result<ExitCode> {
    let mut session = Session::new(config.output_language, config.provider);

    if let Some(id) = args.provider {
        let Some(provider) = providers::find(&id) else {
            bail!("unknown provider {id:?}; run `factcheck providers`");
        };
        session.provider = provider;
    }

    if let Some(code) = args.lang {
        let Some(language) = languages::find(&code) else {
            let suggestions: Vec<_> = languages::filter(&code).iter().map(|l| l.code).collect();
            if suggestions.is_empty() {
                bail!("unsupported language {code:?}; run `factcheck languages`");
            }
            bail!("unsupported language {code:?}; did you mean: {}", suggestions.join(", "));
        };
        session.language = language;
    } else if args.pick_language {
        pick_language_interactively(&mut session)?;
    }

    session.url_input = args.url;
    session.force = args.force;
    session.api_key_input = args
        .api_key
        .or_else(|| config.api_key_for(&session.provider).map(String::from))
        .unwrap_or_default();

    let analyzer = Analyzer::from_config(config);
    let mut view = TerminalView::new();
    match analyzer.run_analysis(&mut session, &mut view, args.force).await {
        Ok(AnalysisOutcome::Skipped) => bail!("URL is empty"),
        result => Ok(exit_code(result.is_ok())),
    }
}

fn pick_language_interactively(session: &mut Session) -> Result<()> {
    let mut menus = MenuController::new();
    menus.open(MenuKind::Language);
    let query: String = Input::new()
        .with_prompt("Search language")
        .allow_empty(true)
        .interact_text()
        .context("language search prompt failed")?;
    menus.set_language_query(&query);

    let candidates = menus.visible_languages();
    if candidates.is_empty() {
        menus.key("Escape");
        bail!("no language matches {query:?}");
    }

    let items: Vec<String> = candidates
        .iter()
        .map(|l| format!("{} ({})", l.name, l.code))
        .collect();
    let choice = Select::new()
        .with_prompt("Output language")
        .items(&items)
        .default(0)
        .interact()
        .context("language selection failed")?;
    menus.select_language(session, candidates[choice]);
    Ok(())
}

async fn cmd_history(config: &ConsoleConfig, limit: Option<u32>) -> Result<ExitCode> {
    let mut analyzer = Analyzer::from_config(config);
    if let Some(limit) = limit {
        analyzer = analyzer.with_history_limit(limit);
    }
    let mut session = Session::new(config.output_language, config.provider);
    let mut view = TerminalView::new();
    analyzer.toggle_history(&mut session, &mut view).await?;
    Ok(ExitCode::SUCCESS)
}

async fn cmd_open(config: &ConsoleConfig, job_id: &str) -> Result<ExitCode> {
    let analyzer = Analyzer::from_config(config);
    let mut session = Session::new(config.output_language, config.provider);
    let mut view = TerminalView::new();
    let opened = analyzer
        .open_history_entry(job_id, &mut session, &mut view)
        .await;
    Ok(exit_code(opened.is_ok()))
}

fn cmd_languages(filter: &str) {
    for language in languages::filter(filter) {
        let direction = if language.is_rtl() { " rtl" } else { "" };
        println!(
            "{:<4}{}{}",
            style(language.code).bold(),
            language.name,
            style(direction).dim()
        );
    }
}

fn cmd_providers() {
    for provider in providers::PROVIDERS {
        println!(
            "{:<10}{:<10}{:<20}{:<18}{}",
            style(provider.id).bold(),
            provider.name,
            provider.key_label,
            provider.key_env,
            style(provider.help()).dim()
        );
    }
}
