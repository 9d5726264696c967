//! Adapter for the external Watson time tracker.
//!
//! Watson owns the raw data; this module shells out to `watson log --csv`
//! for a caller-specified range and parses the CSV export into [`TimeEntry`]
//! values. Pass-through arguments use Watson's own option vocabulary without
//! hyphens (`week current`, `from 2025-01-01`); known option words gain their
//! `--` prefix here.
//!
//! Nothing beyond the entry shape leaks out of this module; the pipeline
//! never learns how entries were obtained.

use crate::libs::config::Config;
use crate::libs::entry::TimeEntry;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::process::Command;

/// `watson log` option words that need a `--` prefix when passed through.
/// Everything else (dates, project names, tag values) passes unchanged.
const FLAG_ARGS: &[&str] = &[
    "c", "current", "C", "no-current", "r", "reverse", "R", "no-reverse", "f", "from", "t", "to",
    "y", "year", "m", "month", "l", "luna", "w", "week", "d", "day", "a", "all", "p", "project",
    "T", "tag", "ignore-project", "ignore-tag",
];

/// Handle for invoking the tracker binary.
pub struct Watson {
    command: String,
}

impl Watson {
    pub fn new(config: &Config) -> Self {
        Watson {
            command: config.watson.clone().unwrap_or_default().command,
        }
    }

    /// Fetches entries for the range described by the pass-through arguments.
    pub fn log(&self, args: &[String]) -> Result<Vec<TimeEntry>> {
        let args = prefix_args(args);
        msg_debug!(format!("{}", Message::WatsonRunning(format!("{} log --csv {}", self.command, args.join(" ")))));

        let output = Command::new(&self.command)
            .arg("log")
            .arg("--csv")
            .args(&args)
            .output()
            .with_context(|| format!("failed to run '{}'; is the tracker installed?", self.command))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(msg_error_anyhow!(Message::WatsonFailed(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            ))));
        }

        parse_csv(&output.stdout)
    }
}

/// Applies the flag-word prefixing rule to pass-through arguments.
pub fn prefix_args(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| {
            if FLAG_ARGS.contains(&arg.as_str()) {
                format!("--{}", arg)
            } else {
                arg.clone()
            }
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct LogRecord {
    #[serde(default)]
    #[allow(dead_code)]
    id: Option<String>,
    start: String,
    stop: String,
    project: String,
    #[serde(default)]
    tags: String,
}

/// Parses `watson log --csv` output.
///
/// Tags arrive as one comma-joined field (`"deploy, @office"`); they are
/// split and trimmed here so the pipeline sees clean tag values. Empty
/// output parses to an empty entry list.
pub fn parse_csv(raw: &[u8]) -> Result<Vec<TimeEntry>> {
    let mut reader = csv::Reader::from_reader(raw);
    let mut entries = vec![];
    for record in reader.deserialize() {
        let record: LogRecord = record.context("malformed CSV record in tracker output")?;
        entries.push(TimeEntry {
            start: parse_timestamp(&record.start)?,
            stop: parse_timestamp(&record.stop)?,
            project: record.project,
            tags: split_tags(&record.tags),
        });
    }
    Ok(entries)
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .with_context(|| format!("unparseable timestamp '{}' in tracker output", raw))
}
