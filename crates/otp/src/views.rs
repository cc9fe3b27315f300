//! Recent-history rendering.

use askama::Template;

use crate::history::{OtpHistory, OtpRecord};

/// History row display data.
#[derive(Debug, Clone)]
pub struct HistoryEntryView {
    pub code: String,
    pub time: String,
    pub date: String,
    pub source: String,
}

impl From<&OtpRecord> for HistoryEntryView {
    fn from(record: &OtpRecord) -> Self {
        Self {
            code: record.code.to_string(),
            time: record.timestamp.format("%H:%M:%S").to_string(),
            date: record.timestamp.format("%d/%m/%Y").to_string(),
            source: record.source.label().to_owned(),
        }
    }
}

/// Recent-history list template; renders an italicized placeholder row
/// when the history is empty.
#[derive(Template)]
#[template(path = "otp_history.html")]
pub struct HistoryTemplate {
    pub entries: Vec<HistoryEntryView>,
}

/// Render the recent-history list, newest first.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_history(history: &OtpHistory) -> askama::Result<String> {
    HistoryTemplate {
        entries: history.records().iter().map(HistoryEntryView::from).collect(),
    }
    .render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::history::OtpSource;
    use chrono::{TimeZone, Utc};
    use mainmarket_core::OtpCode;

    #[test]
    fn test_empty_history_renders_placeholder() {
        let html = render_history(&OtpHistory::new()).unwrap();
        assert!(html.contains("<em>No codes detected yet</em>"));
        assert!(!html.contains("otp-code"));
    }

    #[test]
    fn test_rows_newest_first() {
        let mut history = OtpHistory::new();
        let at = Utc.with_ymd_and_hms(2026, 8, 30, 14, 5, 9).unwrap();
        history.record(OtpRecord {
            code: OtpCode::parse("1234").unwrap(),
            timestamp: at,
            source: OtpSource::Manual,
        });
        history.record(OtpRecord {
            code: OtpCode::parse("987654").unwrap(),
            timestamp: at,
            source: OtpSource::Automatic,
        });

        let html = render_history(&history).unwrap();
        assert!(html.contains("14:05:09"));
        assert!(html.contains("30/08/2026"));
        assert!(html.contains("manual input"));
        assert!(html.contains("automatic detection"));

        // Newest record renders before the older one.
        let newest = html.find("987654").unwrap();
        let oldest = html.find("1234").unwrap();
        assert!(newest < oldest);
    }
}
