//! Terminal implementation of [`View`].
//!
//! Output is append-only, so the `hide_*` calls only settle the progress bar.
//! Text direction is carried with Unicode isolates around each block.

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};

use crate::format::ScoreBand;
use crate::history::{HistoryRow, EMPTY_HISTORY_MESSAGE};
use crate::view::{Direction, ReportView, View};

pub struct TerminalView {
    bar: Option<ProgressBar>,
    run_enabled: bool,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            bar: None,
            run_enabled: true,
        }
    }

    pub fn run_enabled(&self) -> bool {
        self.run_enabled
    }

    fn bar(&mut self) -> &ProgressBar {
        self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::with_template("{spinner} [{bar:30}] {pos:>3}% {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            bar
        })
    }

    fn settle_bar(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl View for TerminalView {
    fn set_status(&mut self, status: &str, progress: u32) {
        let bar = self.bar();
        bar.set_position(u64::from(progress.min(100)));
        bar.set_message(status.to_string());
    }

    fn set_status_visible(&mut self, visible: bool) {
        if visible {
            self.bar();
        } else {
            self.settle_bar();
        }
    }

    fn show_error(&mut self, message: &str) {
        self.settle_bar();
        eprintln!("{} {}", style("error:").red().bold(), message);
    }

    fn hide_error(&mut self) {}

    fn show_info(&mut self, message: &str) {
        match &self.bar {
            Some(bar) => bar.println(style(message).cyan().to_string()),
            None => println!("{}", style(message).cyan()),
        }
    }

    fn hide_info(&mut self) {}

    fn show_result(&mut self, report: &ReportView) {
        self.settle_bar();
        print_report(report);
    }

    fn hide_result(&mut self) {}

    fn set_run_enabled(&mut self, enabled: bool) {
        self.run_enabled = enabled;
    }

    fn show_history(&mut self, rows: &[HistoryRow]) {
        if rows.is_empty() {
            println!("{}", style(EMPTY_HISTORY_MESSAGE).dim());
            return;
        }
        for row in rows {
            let score = match row.band {
                Some(band) => banded(format!("{:>6}", row.score_text), band),
                None => style(format!("{:>6}", row.score_text)).dim(),
            };
            println!(
                "{score}  {}  [{}] [{}] [{}]  {}",
                row.url,
                row.language_badge,
                row.status_badge,
                row.when,
                style(&row.id).dim()
            );
        }
    }

    fn hide_history(&mut self) {}
}

fn banded<D>(value: D, band: ScoreBand) -> StyledObject<D> {
    match band {
        ScoreBand::Danger => style(value).red(),
        ScoreBand::Warning => style(value).yellow(),
        ScoreBand::Success => style(value).green(),
    }
    .bold()
}

fn isolate(direction: Direction, text: &str) -> String {
    let open = match direction {
        Direction::Ltr => '\u{2066}',
        Direction::Rtl => '\u{2067}',
        Direction::Auto => '\u{2068}',
    };
    format!("{open}{text}\u{2069}")
}

fn heading(title: &str) {
    println!("\n{}", style(title).bold().underlined());
}

fn print_list(direction: Direction, items: &[String]) {
    for item in items {
        println!("  • {}", isolate(direction, item));
    }
}

fn print_report(report: &ReportView) {
    let dir = &report.direction;

    println!(
        "{}  {}",
        banded(&report.score_text, report.band),
        style(&report.verdict_text).bold()
    );
    if !report.generated_at.is_empty() {
        println!("{}", style(format!("Generated {}", report.generated_at)).dim());
    }

    if !report.summary.is_empty() {
        heading("Summary");
        println!("{}", isolate(dir.narrative, &report.summary));
    }

    let lists = [
        ("What's right", &report.whats_right),
        ("What's wrong", &report.whats_wrong),
        ("Missing context", &report.missing_context),
        ("Danger", &report.danger),
    ];
    for (title, items) in lists {
        if !items.is_empty() {
            heading(title);
            print_list(dir.narrative, items);
        }
    }

    if !report.sources.is_empty() {
        heading("Sources");
        for source in &report.sources {
            println!(
                "  • {} {}",
                isolate(dir.sources, &source.text),
                style(format!("<{}>", source.href)).dim()
            );
        }
    }

    heading("Claims");
    println!("{}", isolate(dir.claims, &report.claims_json));

    if !report.limitations.is_empty() {
        heading("Limitations");
        println!("{}", isolate(dir.narrative, &report.limitations));
    }

    if !report.transcript.is_empty() {
        heading("Transcript");
        println!("{}", isolate(dir.transcript, &report.transcript));
    }
}
