//! Terminal rendering of pivoted series.
//!
//! The stand-in for a charting backend: each series arrives already ordered
//! (buckets chronological, categories per the sort mode) and is printed as a
//! table, one row per bucket and one column per category.

use crate::libs::formatter::format_hours;
use crate::libs::pipeline::DimensionSeries;
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Renders one dimension's series, with a total column and a closing
    /// per-category total row. Zero cells print blank so the stacked shape
    /// stays readable.
    pub fn series(series: &DimensionSeries) -> Result<()> {
        let mut table = Table::new();

        let mut header = vec![Cell::new("PERIOD")];
        for category in &series.categories {
            header.push(Cell::new(category));
        }
        header.push(Cell::new("TOTAL"));
        table.add_row(Row::new(header));

        for series_row in &series.rows {
            let mut cells = vec![Cell::new(&series_row.bucket)];
            for value in &series_row.values {
                cells.push(Cell::new(&cell_text(*value)));
            }
            cells.push(Cell::new(&format_hours(series_row.total())));
            table.add_row(Row::new(cells));
        }

        let mut totals = vec![Cell::new("TOTAL")];
        for (idx, _) in series.categories.iter().enumerate() {
            let sum: f64 = series.rows.iter().map(|r| r.values[idx]).sum();
            totals.push(Cell::new(&format_hours(sum)));
        }
        totals.push(Cell::new(&format_hours(series.total())));
        table.add_row(Row::new(totals));

        table.printstd();
        Ok(())
    }

    /// Renders whole-range project totals.
    pub fn totals(totals: &[(String, f64)]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["PROJECT", "HOURS"]);
        for (project, hours) in totals {
            table.add_row(row![project, format_hours(*hours)]);
        }
        table.printstd();
        Ok(())
    }
}

fn cell_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format_hours(value)
    }
}
