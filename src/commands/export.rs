//! Chart-data export command.
//!
//! Runs the same pipeline as `graph`, then writes the pivoted series to a
//! file instead of the terminal. See `libs::export` for the formats.

use crate::{
    api::watson::Watson,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        pipeline,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path; defaults to a timestamped name like
    /// `wplot_20250115_143022.csv`
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    plot: super::graph::PlotArgs,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let plot_config = args.plot.plot_config(&config);
    plot_config.validate()?;

    msg_info!(Message::ExportingData("chart series".to_string(), format!("{:?}", args.format)));

    let entries = Watson::new(&config).log(&args.plot.watson_args)?;
    let data = pipeline::run(entries, &plot_config)?;
    super::warn_faults(&data.faults);

    Exporter::new(args.format, args.output).export(&data.series)?;
    Ok(())
}
