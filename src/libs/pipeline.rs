//! The record categorization and aggregation pipeline.
//!
//! A single pass over the entry list: classify tags, drop ignored entries,
//! bucket by period, aggregate into one pivot table per requested dimension,
//! and order each table's category axis. Every stage is a pure transformation
//! of its predecessor's output; the pipeline holds no state across runs and
//! is safe to invoke repeatedly with different configurations.

use crate::libs::bucket::Period;
use crate::libs::entry::{self, ClassifiedEntry, EntryFault, TimeEntry};
use crate::libs::filter::{self, IgnoreRule};
use crate::libs::normalize;
use crate::libs::order::{self, SortMode};
use crate::libs::pivot::{self, Dimension, PivotTable};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use thiserror::Error;

/// Full configuration for one pipeline run.
///
/// Constructed once from resolved CLI options and file-config defaults,
/// passed by reference through the whole pipeline, never mutated.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Dimensions to build tables for, in the order they will be rendered.
    pub dimensions: Vec<Dimension>,
    pub period: Period,
    pub sort: SortMode,
    pub truncate: bool,
    pub ignore: Vec<IgnoreRule>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            dimensions: vec![Dimension::Hours, Dimension::Attributes, Dimension::Location],
            period: Period::default(),
            sort: SortMode::default(),
            truncate: false,
            ignore: vec![],
        }
    }
}

impl PlotConfig {
    /// Rejects configurations the pipeline must not run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions.is_empty() {
            return Err(ConfigError::NoDimensions);
        }
        for (i, dimension) in self.dimensions.iter().enumerate() {
            if self.dimensions[..i].contains(dimension) {
                return Err(ConfigError::DuplicateDimension(*dimension));
            }
        }
        for rule in &self.ignore {
            if !self.dimensions.contains(&rule.dimension()) {
                return Err(ConfigError::IgnoredDimensionNotPlotted {
                    dimension: rule.dimension(),
                    value: rule.value().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Invalid-configuration conditions, reported before the pipeline runs.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("no plot dimensions selected")]
    NoDimensions,
    #[error("plot dimension '{0}' selected more than once")]
    DuplicateDimension(Dimension),
    #[error("ignore rule for '{value}' targets the '{dimension}' dimension, which is not selected for plotting")]
    IgnoredDimensionNotPlotted { dimension: Dimension, value: String },
}

/// Chart-ready series for one dimension.
///
/// `rows` are chronological; each row's `values` align index-for-index with
/// `categories`, so the series can be fed to a stacked-bar renderer as-is.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionSeries {
    pub dimension: Dimension,
    /// Category axis in final order.
    pub categories: Vec<String>,
    pub rows: Vec<SeriesRow>,
}

/// One bucket's slice of a series.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesRow {
    pub bucket: String,
    pub values: Vec<f64>,
}

impl SeriesRow {
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl DimensionSeries {
    /// Freezes a pivot table into its renderable form.
    pub fn from_table(table: &PivotTable, sort: SortMode) -> Self {
        let categories = order::order_categories(table, sort);
        let rows = table
            .buckets()
            .map(|bucket| SeriesRow {
                bucket: bucket.label.clone(),
                values: categories.iter().map(|category| table.value(bucket, category)).collect(),
            })
            .collect();
        DimensionSeries {
            dimension: table.dimension(),
            categories,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(SeriesRow::total).sum()
    }

    /// First and last bucket labels, for date-range headings.
    pub fn range(&self) -> Option<(&str, &str)> {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some((first.bucket.as_str(), last.bucket.as_str())),
            _ => None,
        }
    }
}

/// Result of one pipeline run: chart-ready series plus the entries screened
/// out as malformed, for the caller to surface.
#[derive(Debug)]
pub struct PlotData {
    pub series: Vec<DimensionSeries>,
    pub faults: Vec<(TimeEntry, EntryFault)>,
}

/// Runs the whole pipeline for one configuration.
///
/// Fails fast on an invalid configuration without touching the entries. An
/// entry set that filters down to nothing is not an error; every requested
/// dimension still yields a well-formed empty series.
pub fn run(entries: Vec<TimeEntry>, config: &PlotConfig) -> Result<PlotData, ConfigError> {
    config.validate()?;

    let (valid, faults) = entry::screen(entries);
    let kept: Vec<ClassifiedEntry> = valid
        .iter()
        .map(TimeEntry::classify)
        .filter(|classified| filter::keep(classified, &config.ignore))
        .collect();

    let series = config
        .dimensions
        .iter()
        .map(|&dimension| {
            let table = pivot::aggregate(&kept, dimension, config.period, config.truncate);
            DimensionSeries::from_table(&table, config.sort)
        })
        .collect();

    Ok(PlotData { series, faults })
}

/// Total hours per (normalized) project across the whole queried range,
/// descending by time with an alphabetical tie-break.
pub fn project_totals(
    entries: Vec<TimeEntry>,
    truncate: bool,
    ignore: &[IgnoreRule],
) -> (Vec<(String, f64)>, Vec<(TimeEntry, EntryFault)>) {
    let (valid, faults) = entry::screen(entries);
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for classified in valid.iter().map(TimeEntry::classify) {
        if !filter::keep(&classified, ignore) {
            continue;
        }
        let project = normalize::display_label(&classified.project, truncate);
        *totals.entry(project).or_insert(0.0) += classified.hours();
    }

    let mut ranked: Vec<(String, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
    });
    (ranked, faults)
}
