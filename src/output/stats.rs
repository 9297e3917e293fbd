//! Crawl summary reporting

use crate::output::traits::CrawlSummary;
use crate::state::StopReason;
use std::fmt::Write;

/// Formats a crawl summary as human-readable text
pub fn format_summary(summary: &CrawlSummary) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "=== Crawl Summary ===\n");
    let _ = writeln!(out, "App: {}", summary.app_id);
    let _ = writeln!(out, "Started: {}", summary.started_at.to_rfc3339());
    if let Some(finished) = summary.finished_at {
        let _ = writeln!(out, "Finished: {}", finished.to_rfc3339());
    }
    if let Some(seconds) = summary.duration_seconds() {
        let _ = writeln!(out, "Duration: {}s", seconds);
    }
    out.push('\n');

    let _ = writeln!(out, "Pages:");
    let _ = writeln!(out, "  Last page requested: {}", summary.last_page);
    let _ = writeln!(out, "  Pages written: {}", summary.pages_written);
    if !summary.pages_skipped.is_empty() {
        let skipped: Vec<String> = summary.pages_skipped.iter().map(u32::to_string).collect();
        let _ = writeln!(
            out,
            "  Pages skipped ({}): {}",
            summary.pages_skipped.len(),
            skipped.join(", ")
        );
    }
    out.push('\n');

    let _ = writeln!(out, "Records:");
    let _ = writeln!(out, "  Total: {}", summary.records_written);
    let _ = writeln!(out, "  Placeholders: {}", summary.placeholders_written);
    out.push('\n');

    match summary.stop_reason {
        Some(reason) => {
            let _ = writeln!(out, "Stopped: {}", reason);
        }
        None => {
            let _ = writeln!(out, "Stopped: not finished");
        }
    }

    let _ = write!(
        out,
        "{}, output written to \"{}\"",
        closing_line(summary.stop_reason),
        summary.output
    );
    out
}

fn closing_line(reason: Option<StopReason>) -> String {
    match reason {
        Some(StopReason::EmptyPage { .. }) => "All pages crawled".to_string(),
        Some(StopReason::PageCeiling { max_page }) => {
            format!("Stopped at page ceiling {}", max_page)
        }
        Some(StopReason::PageFailure { page }) => format!("Stopped after page {} failed", page),
        None => "Crawl not finished".to_string(),
    }
}

/// Prints a crawl summary to stdout
pub fn print_summary(summary: &CrawlSummary) {
    println!("{}", format_summary(summary));
}
