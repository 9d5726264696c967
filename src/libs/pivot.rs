//! Pivot tables: duration summed per (bucket, category value).
//!
//! One table is built per requested plot dimension. The hours dimension
//! categorizes by project; the attributes and location dimensions categorize
//! by tag value, where an entry carrying several values in a dimension
//! contributes its *full* duration to each of them. Entries with no value in
//! a dimension land in the reserved [`NONE_LABEL`] category so the table
//! stays reconcilable against the entry set.
//!
//! Label truncation is applied here, as labels enter the table, so raw names
//! that collapse to the same truncated form share one accumulator
//! (merge-before-sum).

use crate::libs::bucket::{Bucket, Period};
use crate::libs::entry::ClassifiedEntry;
use crate::libs::normalize;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Reserved category for entries with no value in a dimension.
pub const NONE_LABEL: &str = "None";

/// A plot dimension: the category axis a pivot table is built over.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Hours by project.
    Hours,
    /// Hours by attribute tag.
    Attributes,
    /// Hours by location tag.
    Location,
}

impl Dimension {
    /// Section heading used by views and exports.
    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Hours => "Hours",
            Dimension::Attributes => "Attributes",
            Dimension::Location => "Location",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Dimension::Hours => "hours",
            Dimension::Attributes => "attributes",
            Dimension::Location => "location",
        };
        write!(f, "{}", name)
    }
}

/// Duration summed per (bucket, category value) for one dimension.
///
/// Buckets iterate chronologically; cell values are fractional hours with no
/// rounding applied.
#[derive(Debug, Clone)]
pub struct PivotTable {
    dimension: Dimension,
    truncate: bool,
    cells: BTreeMap<Bucket, BTreeMap<String, f64>>,
    // Smallest raw label observed per category; the orderer uses it to break
    // ties between names that merged under truncation.
    raw_labels: BTreeMap<String, String>,
}

impl PivotTable {
    pub fn new(dimension: Dimension, truncate: bool) -> Self {
        PivotTable {
            dimension,
            truncate,
            cells: BTreeMap::new(),
            raw_labels: BTreeMap::new(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Accumulates `hours` into the cell for `bucket` and the normalized form
    /// of `raw_label`.
    pub fn add(&mut self, bucket: Bucket, raw_label: &str, hours: f64) {
        let category = normalize::display_label(raw_label, self.truncate);
        self.raw_labels
            .entry(category.clone())
            .and_modify(|smallest| {
                if raw_label < smallest.as_str() {
                    *smallest = raw_label.to_string();
                }
            })
            .or_insert_with(|| raw_label.to_string());
        *self
            .cells
            .entry(bucket)
            .or_default()
            .entry(category)
            .or_insert(0.0) += hours;
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Buckets in chronological order.
    pub fn buckets(&self) -> impl Iterator<Item = &Bucket> {
        self.cells.keys()
    }

    /// Every category value present anywhere in the table.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.cells
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect()
    }

    /// Accumulated hours for one cell; absent cells read as zero.
    pub fn value(&self, bucket: &Bucket, category: &str) -> f64 {
        self.cells
            .get(bucket)
            .and_then(|row| row.get(category))
            .copied()
            .unwrap_or(0.0)
    }

    /// Category total summed across all buckets.
    pub fn category_total(&self, category: &str) -> f64 {
        self.cells.values().filter_map(|row| row.get(category)).sum()
    }

    /// Grand total across every cell.
    pub fn total(&self) -> f64 {
        self.cells.values().flat_map(|row| row.values()).sum()
    }

    /// The smallest raw label that fed a category; the category name itself
    /// when nothing was recorded for it.
    pub fn raw_label<'a>(&'a self, category: &'a str) -> &'a str {
        self.raw_labels.get(category).map(String::as_str).unwrap_or(category)
    }
}

/// Builds the pivot table for one dimension from classified entries.
pub fn aggregate(entries: &[ClassifiedEntry], dimension: Dimension, period: Period, truncate: bool) -> PivotTable {
    let mut table = PivotTable::new(dimension, truncate);
    for entry in entries {
        let bucket = Bucket::from_start(entry.start, period);
        let hours = entry.hours();
        match dimension {
            Dimension::Hours => table.add(bucket, &entry.project, hours),
            Dimension::Attributes => add_tag_values(&mut table, bucket, &entry.attributes, hours),
            Dimension::Location => add_tag_values(&mut table, bucket, &entry.locations, hours),
        }
    }
    table
}

fn add_tag_values(table: &mut PivotTable, bucket: Bucket, values: &BTreeSet<String>, hours: f64) {
    if values.is_empty() {
        table.add(bucket, NONE_LABEL, hours);
        return;
    }
    for value in values {
        table.add(bucket.clone(), value, hours);
    }
}
