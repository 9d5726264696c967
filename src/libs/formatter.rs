//! Hour-value formatting for display.
//!
//! Aggregated cells are fractional hours (f64) end to end; only the terminal
//! views convert them to "HH:MM" strings. Exports keep the raw numbers so
//! external tools can do their own math.

/// Formats fractional hours as "HH:MM", rounded to the nearest minute.
///
/// Negative inputs clamp to "00:00"; the aggregator never produces them, but
/// a formatter must not panic on odd input.
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round().max(0.0) as i64;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
