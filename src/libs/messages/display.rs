//! Display implementation for application messages.
//!
//! All user-facing text lives in this one match so wording stays consistent
//! and the message variants remain plain data everywhere else.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file found".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleWatson => "Watson tracker settings".to_string(),
            Message::ConfigModulePlot => "Plot defaults".to_string(),
            Message::PromptWatsonCommand => "Watson command".to_string(),
            Message::PromptDefaultPeriod => "Default period (day, week, month, quarter, year)".to_string(),
            Message::PromptDefaultSort => "Default sort mode (time, name)".to_string(),
            Message::PromptDefaultTruncate => "Truncate project names at the first '.' by default?".to_string(),

            // === TRACKER MESSAGES ===
            Message::WatsonRunning(command) => format!("Running: {}", command),
            Message::WatsonFailed(status) => format!("Watson exited with {}", status),
            Message::NoEntriesFound => "No time entries found for the requested range".to_string(),

            // === PIPELINE MESSAGES ===
            Message::EntriesSkipped(count) => format!("Skipped {} malformed entr{}", count, if *count == 1 { "y" } else { "ies" }),
            Message::EntrySkipped(project, fault) => format!("Skipped entry for project '{}': {}", project, fault),
            Message::EmptyDimension(title) => format!("{}: nothing to chart", title),

            // === GRAPH MESSAGES ===
            Message::GraphSection(title) => title.clone(),
            Message::GraphSectionRange(title, from, to) => format!("{}: {} to {}", title, from, to),
            Message::TotalsHeader => "Time spent by project".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(what, format) => format!("Exporting {} as {}", what, format),
            Message::ExportedTo(path) => format!("Data exported to: {}", path),
        };
        write!(f, "{}", text)
    }
}
