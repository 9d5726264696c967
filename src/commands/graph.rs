//! Chart generation command.
//!
//! The main operation: fetch entries from the tracker, run the
//! categorization and aggregation pipeline, and render one section per
//! requested dimension.

use crate::{
    api::watson::Watson,
    libs::{
        bucket::Period,
        config::Config,
        filter::IgnoreRule,
        messages::Message,
        order::SortMode,
        pipeline::{self, PlotConfig},
        pivot::Dimension,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

/// Pipeline options shared by the `graph` and `export` commands.
///
/// Omitted options fall back to the `plot` module of the configuration file;
/// trailing arguments pass through to `watson log`.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Plots to build; defaults to hours, attributes, and location
    #[arg(long, value_enum, num_args = 1.., value_name = "DIMENSION")]
    pub plot: Option<Vec<Dimension>>,

    /// Date grouping granularity
    #[arg(long, value_enum)]
    pub period: Option<Period>,

    /// Sort categories by decreasing time or alphabetically by name
    #[arg(long, value_enum)]
    pub sort: Option<SortMode>,

    /// Remove all text in project and tag names after the first period
    /// (useful for combining subprojects)
    #[arg(long)]
    pub truncate: bool,

    /// Exclude entries of this project (repeatable)
    #[arg(long, value_name = "NAME")]
    pub ignore_project: Vec<String>,

    /// Exclude entries carrying this attribute tag (repeatable)
    #[arg(long, value_name = "NAME")]
    pub ignore_attribute: Vec<String>,

    /// Exclude entries carrying this location tag (repeatable)
    #[arg(long, value_name = "NAME")]
    pub ignore_location: Vec<String>,

    /// Arguments for `watson log [WATSON_ARGS] --csv` without any hyphens,
    /// such as `week current`; run `watson log --help` for the full list
    #[arg(value_name = "WATSON_ARGS", trailing_var_arg = true)]
    pub watson_args: Vec<String>,
}

impl PlotArgs {
    /// Resolves CLI options against file-config defaults into the immutable
    /// configuration the pipeline consumes.
    pub fn plot_config(&self, config: &Config) -> PlotConfig {
        let defaults = config.plot.clone().unwrap_or_default();

        let mut ignore: Vec<IgnoreRule> = vec![];
        ignore.extend(self.ignore_project.iter().map(IgnoreRule::project));
        ignore.extend(self.ignore_attribute.iter().map(IgnoreRule::attribute));
        ignore.extend(self.ignore_location.iter().map(IgnoreRule::location));

        PlotConfig {
            dimensions: self
                .plot
                .clone()
                .unwrap_or_else(|| vec![Dimension::Hours, Dimension::Attributes, Dimension::Location]),
            period: self.period.unwrap_or(defaults.period),
            sort: self.sort.unwrap_or(defaults.sort),
            truncate: self.truncate || defaults.truncate,
            ignore,
        }
    }
}

#[derive(Debug, Args)]
pub struct GraphArgs {
    #[command(flatten)]
    plot: PlotArgs,

    /// Display the covered date range in section headers
    #[arg(long)]
    date: bool,
}

pub fn cmd(args: GraphArgs) -> Result<()> {
    let config = Config::read()?;
    let plot_config = args.plot.plot_config(&config);
    // Reject a bad configuration before the tracker is even invoked.
    plot_config.validate()?;

    let entries = Watson::new(&config).log(&args.plot.watson_args)?;
    let data = pipeline::run(entries, &plot_config)?;
    super::warn_faults(&data.faults);

    if data.series.iter().all(|series| series.is_empty()) {
        msg_info!(Message::NoEntriesFound);
        return Ok(());
    }

    for series in &data.series {
        let title = series.dimension.title().to_string();
        match series.range() {
            Some((from, to)) if args.date => {
                msg_print!(Message::GraphSectionRange(title, from.to_string(), to.to_string()), true)
            }
            _ => msg_print!(Message::GraphSection(title), true),
        }
        if series.is_empty() {
            msg_info!(Message::EmptyDimension(series.dimension.title().to_string()));
            continue;
        }
        View::series(series)?;
    }

    Ok(())
}
