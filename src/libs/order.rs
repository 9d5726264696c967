//! Ordering of the categorical axis.

use crate::libs::pivot::{PivotTable, NONE_LABEL};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How the category axis of each chart is sorted.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Descending by total duration, ties broken alphabetically.
    #[default]
    Time,
    /// Alphabetical, case-insensitive, ties broken by raw label.
    Name,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SortMode::Time => "time",
            SortMode::Name => "name",
        };
        write!(f, "{}", name)
    }
}

/// Returns the table's category values in axis order.
///
/// The reserved `None` category always sorts last regardless of mode, so it
/// reads as a residual rather than competing with real categories.
pub fn order_categories(table: &PivotTable, mode: SortMode) -> Vec<String> {
    let mut categories: Vec<&str> = table.categories().into_iter().collect();
    categories.sort_by(|a, b| match (*a == NONE_LABEL, *b == NONE_LABEL) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => match mode {
            SortMode::Name => name_order(table, a, b),
            SortMode::Time => table
                .category_total(b)
                .partial_cmp(&table.category_total(a))
                .unwrap_or(Ordering::Equal)
                .then_with(|| name_order(table, a, b)),
        },
    });
    categories.into_iter().map(str::to_string).collect()
}

fn name_order(table: &PivotTable, a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| table.raw_label(a).cmp(table.raw_label(b)))
}
