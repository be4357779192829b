//! Change report rendering.

use chrono::{DateTime, Utc};
use screener_core::types::{ChangeReport, MetricSnapshot};

/// Render a change report into one Telegram-HTML message: header with
/// timestamp, the full current list, then newcomer and dropout sections
/// when present. Pure.
pub fn format_report(report: &ChangeReport, timestamp: DateTime<Utc>) -> String {
    let mut parts = Vec::new();

    parts.push("📊 <b>Stock Screener Update</b>".to_string());
    parts.push(format!("⏰ {}", timestamp.format("%Y-%m-%d %H:%M:%S")));
    parts.push(String::new());

    parts.push(format!(
        "✅ <b>Current Qualified ({})</b>",
        report.current.len()
    ));
    parts.push(format_snapshots(report.current.iter()));

    if !report.newcomers.is_empty() {
        parts.push(String::new());
        parts.push(format!("📈 <b>Newcomers ({})</b>", report.newcomers.len()));
        parts.push(format_snapshots(report.newcomers.iter()));
    }

    if !report.dropouts.is_empty() {
        parts.push(String::new());
        parts.push(format!("📉 <b>Dropouts ({})</b>", report.dropouts.len()));
        parts.push(format_snapshots(report.dropouts.iter()));
    }

    parts.join("\n")
}

fn format_snapshots<'a>(snapshots: impl Iterator<Item = &'a MetricSnapshot>) -> String {
    let lines: Vec<String> = snapshots.map(format_snapshot).collect();
    if lines.is_empty() {
        return "None".to_string();
    }
    lines.join("\n\n")
}

fn format_snapshot(snapshot: &MetricSnapshot) -> String {
    format!(
        "<b>{}</b>\n  Price: {:.2}\n  RSI: {:.1}\n  P/EMA20: +{:.2}%\n  EMA20/50: +{:.2}%\n  Turnover: {:.1}B",
        snapshot.symbol,
        snapshot.price,
        snapshot.rsi,
        snapshot.price_vs_ema20_pct,
        snapshot.ema20_vs_ema50_pct,
        snapshot.avg_turnover20 / 1_000_000_000.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_core::types::QualifyingSet;

    fn snapshot(symbol: &str) -> MetricSnapshot {
        MetricSnapshot::new(symbol, 102.5, 62.5, 101.0, 99.0, 25.4e9, 1.49, 2.02)
    }

    fn timestamp() -> DateTime<Utc> {
        "2025-06-02T08:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_full_report_sections() {
        let current: QualifyingSet = [snapshot("BBB"), snapshot("CCC")].into_iter().collect();
        let report = ChangeReport {
            current,
            newcomers: vec![snapshot("CCC")],
            dropouts: vec![snapshot("AAA")],
        };

        let text = format_report(&report, timestamp());

        assert!(text.contains("<b>Stock Screener Update</b>"));
        assert!(text.contains("2025-06-02 08:00:00"));
        assert!(text.contains("Current Qualified (2)"));
        assert!(text.contains("Newcomers (1)"));
        assert!(text.contains("Dropouts (1)"));
        assert!(text.contains("<b>AAA</b>"));
        assert!(text.contains("RSI: 62.5"));
        assert!(text.contains("Turnover: 25.4B"));
    }

    #[test]
    fn test_sections_omitted_when_empty() {
        let report = ChangeReport {
            current: [snapshot("BBB")].into_iter().collect(),
            newcomers: vec![],
            dropouts: vec![snapshot("AAA")],
        };

        let text = format_report(&report, timestamp());

        assert!(!text.contains("Newcomers"));
        assert!(text.contains("Dropouts (1)"));
    }

    #[test]
    fn test_empty_current_list_renders_placeholder() {
        let report = ChangeReport {
            current: QualifyingSet::new(),
            newcomers: vec![],
            dropouts: vec![snapshot("AAA")],
        };

        let text = format_report(&report, timestamp());
        assert!(text.contains("Current Qualified (0)\nNone"));
    }

    #[test]
    fn test_formatting_is_pure() {
        let report = ChangeReport {
            current: [snapshot("BBB")].into_iter().collect(),
            newcomers: vec![snapshot("BBB")],
            dropouts: vec![],
        };
        assert_eq!(
            format_report(&report, timestamp()),
            format_report(&report, timestamp())
        );
    }
}
