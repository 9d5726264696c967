pub mod export;
pub mod graph;
pub mod init;
pub mod totals;

use crate::libs::entry::{EntryFault, TimeEntry};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Chart time per period by project, attribute, and location")]
    Graph(graph::GraphArgs),
    #[command(about = "Show total hours by project for the whole range")]
    Totals(totals::TotalsArgs),
    #[command(about = "Export chart series to CSV, JSON, or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        init_tracing();
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Graph(args) => graph::cmd(args),
            Commands::Totals(args) => totals::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Registers the tracing subscriber when debug-mode routing is active;
/// without a subscriber the message macros' tracing events would be dropped.
fn init_tracing() {
    if crate::libs::messages::macros::is_debug_mode() {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }
}

/// Surfaces entries the pipeline screened out as malformed.
pub(crate) fn warn_faults(faults: &[(TimeEntry, EntryFault)]) {
    if faults.is_empty() {
        return;
    }
    msg_warning!(Message::EntriesSkipped(faults.len()));
    for (entry, fault) in faults {
        msg_debug!(format!("{}", Message::EntrySkipped(entry.project.clone(), fault.to_string())));
    }
}
