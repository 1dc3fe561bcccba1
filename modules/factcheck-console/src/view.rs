// Rendering seam.
//
// The poller, renderer and flows paint through `View`, never a concrete
// surface. `ScreenState` is the headless implementation: it keeps the visible
// state as plain data so flows can be asserted on without a terminal.

use crate::format::ScoreBand;
use crate::history::HistoryRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
    Auto,
}

impl Direction {
    pub fn for_language(code: &str) -> Self {
        if crate::catalog::is_rtl(code) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
            Direction::Auto => "auto",
        }
    }
}

/// Direction attributes for each block of a rendered report.
///
/// `narrative` covers the model-written fields (summary, lists, danger);
/// those also carry `lang`. Sources and transcript mix scripts and stay on
/// auto-detection; the claims JSON is always left-to-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionAttrs {
    pub lang: String,
    pub narrative: Direction,
    pub sources: Direction,
    pub transcript: Direction,
    pub claims: Direction,
}

impl DirectionAttrs {
    pub fn for_language(code: &str) -> Self {
        let lang = code.trim().to_lowercase();
        Self {
            narrative: Direction::for_language(&lang),
            lang,
            sources: Direction::Auto,
            transcript: Direction::Auto,
            claims: Direction::Ltr,
        }
    }
}

/// A source rendered as a link that opens in a new context without a referrer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub text: String,
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl SourceLink {
    pub fn new(text: String, href: String) -> Self {
        Self {
            text,
            href,
            target: "_blank",
            rel: "noreferrer",
        }
    }
}

/// Display state of a completed job's report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    /// Clamped to [0, 100].
    pub score: f64,
    pub score_text: String,
    pub band: ScoreBand,
    pub verdict_text: String,
    pub generated_at: String,
    pub summary: String,
    pub whats_right: Vec<String>,
    pub whats_wrong: Vec<String>,
    pub missing_context: Vec<String>,
    pub danger: Vec<String>,
    pub sources: Vec<SourceLink>,
    pub claims_json: String,
    pub transcript: String,
    pub limitations: String,
    pub direction: DirectionAttrs,
}

pub trait View {
    fn set_status(&mut self, status: &str, progress: u32);
    fn set_status_visible(&mut self, visible: bool);

    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);

    fn show_info(&mut self, message: &str);
    fn hide_info(&mut self);

    fn show_result(&mut self, report: &ReportView);
    fn hide_result(&mut self);

    fn set_run_enabled(&mut self, enabled: bool);

    fn show_history(&mut self, rows: &[HistoryRow]);
    fn hide_history(&mut self);
}

/// Headless view: the last painted state of every surface.
#[derive(Debug, Clone)]
pub struct ScreenState {
    pub status_visible: bool,
    pub status_text: String,
    pub progress: u32,
    /// Every status update in order, as `(status, progress)`.
    pub status_log: Vec<(String, u32)>,
    pub error: Option<String>,
    pub info: Option<String>,
    pub result: Option<ReportView>,
    pub result_renders: usize,
    pub run_enabled: bool,
    /// Every run-control change in order.
    pub run_enabled_log: Vec<bool>,
    pub history: Option<Vec<HistoryRow>>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            status_visible: false,
            status_text: String::new(),
            progress: 0,
            status_log: Vec::new(),
            error: None,
            info: None,
            result: None,
            result_renders: 0,
            run_enabled: true,
            run_enabled_log: Vec::new(),
            history: None,
        }
    }
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for ScreenState {
    fn set_status(&mut self, status: &str, progress: u32) {
        self.status_text = status.to_string();
        self.progress = progress;
        self.status_log.push((status.to_string(), progress));
    }

    fn set_status_visible(&mut self, visible: bool) {
        self.status_visible = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn show_info(&mut self, message: &str) {
        self.info = Some(message.to_string());
    }

    fn hide_info(&mut self) {
        self.info = None;
    }

    fn show_result(&mut self, report: &ReportView) {
        self.result = Some(report.clone());
        self.result_renders += 1;
    }

    fn hide_result(&mut self) {
        self.result = None;
    }

    fn set_run_enabled(&mut self, enabled: bool) {
        self.run_enabled = enabled;
        self.run_enabled_log.push(enabled);
    }

    fn show_history(&mut self, rows: &[HistoryRow]) {
        self.history = Some(rows.to_vec());
    }

    fn hide_history(&mut self) {
        self.history = None;
    }
}
