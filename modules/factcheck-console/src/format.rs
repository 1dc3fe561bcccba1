//! Text formatting for report and history display.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use factcheck_client::{DangerItem, Source};

const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Score bands used to color a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Danger,
    Warning,
    Success,
}

impl ScoreBand {
    /// Boundaries sit at 50 and 80, each belonging to the upper band.
    pub fn for_score(score: f64) -> Self {
        if score < 50.0 {
            ScoreBand::Danger
        } else if score < 80.0 {
            ScoreBand::Warning
        } else {
            ScoreBand::Success
        }
    }
}

pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Whole numbers print without a fractional part.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// `"72%"` for a clamped score.
pub fn score_percent(score: f64) -> String {
    format!("{}%", format_number(clamp_score(score)))
}

/// `needs_review` → `Needs Review`. Absent or empty input gives an empty string.
pub fn humanize_enum(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return String::new();
    };

    let mut out = String::with_capacity(value.len());
    let mut prev_is_word = false;
    for c in value.chars() {
        let c = if c == '_' { ' ' } else { c };
        let is_word = c.is_alphanumeric();
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// Local date-time for an ISO timestamp. Unparseable input comes back verbatim;
/// absent input is empty.
pub fn format_when(raw: Option<&str>) -> String {
    format_when_in(raw, &Local)
}

pub fn format_when_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return String::new();
    };
    match parse_timestamp(raw, tz) {
        Some(dt) => dt.format(DISPLAY_TIME_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

// Offset-less timestamps are read in `tz`; bare dates as UTC midnight.
fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return tz.from_local_datetime(&naive).earliest();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
        return Some(midnight.with_timezone(tz));
    }
    None
}

/// `medical (severity 4/5): x`, or `other: y` without a severity.
pub fn danger_line(item: &DangerItem) -> String {
    let category = if item.category.is_empty() {
        "other"
    } else {
        item.category.as_str()
    };
    let severity = item
        .severity
        .filter(|s| s.is_finite())
        .map(|s| format!(" (severity {}/5)", format_number(s)))
        .unwrap_or_default();
    format!("{category}{severity}: {}", item.description)
}

/// Link text for a source: `Publisher — Title`, or just the title.
pub fn source_text(source: &Source) -> String {
    match source.publisher.as_deref().filter(|p| !p.is_empty()) {
        Some(publisher) => format!("{publisher} — {}", source.title),
        None => source.title.clone(),
    }
}

pub fn claims_json(claims: &[serde_json::Value]) -> String {
    serde_json::to_string_pretty(claims).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn score_is_clamped() {
        assert_eq!(score_percent(-5.0), "0%");
        assert_eq!(score_percent(0.0), "0%");
        assert_eq!(score_percent(72.0), "72%");
        assert_eq!(score_percent(72.5), "72.5%");
        assert_eq!(score_percent(140.0), "100%");
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(ScoreBand::for_score(49.9), ScoreBand::Danger);
        assert_eq!(ScoreBand::for_score(50.0), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_score(79.9), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_score(80.0), ScoreBand::Success);
        assert_eq!(ScoreBand::for_score(-10.0), ScoreBand::Danger);
        assert_eq!(ScoreBand::for_score(120.0), ScoreBand::Success);
    }

    #[test]
    fn humanize() {
        assert_eq!(humanize_enum(Some("needs_review")), "Needs Review");
        assert_eq!(humanize_enum(Some("mostly_accurate")), "Mostly Accurate");
        assert_eq!(humanize_enum(Some("false")), "False");
        assert_eq!(humanize_enum(Some("")), "");
        assert_eq!(humanize_enum(None), "");
    }

    #[test]
    fn when_formats_valid_and_echoes_invalid() {
        assert_eq!(
            format_when_in(Some("2025-03-04T05:06:07Z"), &Utc),
            "2025-03-04 05:06:07"
        );
        assert_eq!(
            format_when_in(Some("2025-03-04T05:06:07.123456+02:00"), &Utc),
            "2025-03-04 03:06:07"
        );
        assert_eq!(
            format_when_in(Some("2025-03-04T05:06:07.5"), &Utc),
            "2025-03-04 05:06:07"
        );
        assert_eq!(format_when_in(Some("yesterday"), &Utc), "yesterday");
        assert_eq!(format_when_in(None, &Utc), "");
    }

    #[test]
    fn danger_lines() {
        let with = DangerItem {
            category: "medical".into(),
            severity: Some(4.0),
            description: "x".into(),
            mitigation: None,
        };
        assert_eq!(danger_line(&with), "medical (severity 4/5): x");

        let without = DangerItem {
            category: "other".into(),
            severity: None,
            description: "y".into(),
            mitigation: None,
        };
        assert_eq!(danger_line(&without), "other: y");

        let blank = DangerItem {
            category: String::new(),
            severity: None,
            description: "z".into(),
            mitigation: None,
        };
        assert_eq!(danger_line(&blank), "other: z");
    }

    #[test]
    fn source_link_text() {
        let mut source = Source {
            title: "T".into(),
            url: "u".into(),
            publisher: Some("P".into()),
            accessed_at: None,
        };
        assert_eq!(source_text(&source), "P — T");
        source.publisher = None;
        assert_eq!(source_text(&source), "T");
    }

    #[test]
    fn claims_pretty_print() {
        assert_eq!(claims_json(&[]), "[]");
        assert_eq!(
            claims_json(&[json!({"claim": "c"})]),
            "[\n  {\n    \"claim\": \"c\"\n  }\n]"
        );
    }
}
