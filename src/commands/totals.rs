//! Whole-range project totals command.
//!
//! The second page of the report: total hours per project across the whole
//! queried range, most time first, with no period axis.

use crate::{
    api::watson::Watson,
    libs::{config::Config, filter::IgnoreRule, messages::Message, pipeline, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TotalsArgs {
    /// Remove all text in project names after the first period
    #[arg(long)]
    truncate: bool,

    /// Exclude entries of this project (repeatable)
    #[arg(long, value_name = "NAME")]
    ignore_project: Vec<String>,

    /// Arguments for `watson log [WATSON_ARGS] --csv` without any hyphens
    #[arg(value_name = "WATSON_ARGS", trailing_var_arg = true)]
    watson_args: Vec<String>,
}

pub fn cmd(args: TotalsArgs) -> Result<()> {
    let config = Config::read()?;
    let defaults = config.plot.clone().unwrap_or_default();
    let truncate = args.truncate || defaults.truncate;
    let ignore: Vec<IgnoreRule> = args.ignore_project.iter().map(IgnoreRule::project).collect();

    let entries = Watson::new(&config).log(&args.watson_args)?;
    let (totals, faults) = pipeline::project_totals(entries, truncate, &ignore);
    super::warn_faults(&faults);

    if totals.is_empty() {
        msg_info!(Message::NoEntriesFound);
        return Ok(());
    }

    msg_print!(Message::TotalsHeader, true);
    View::totals(&totals)
}
