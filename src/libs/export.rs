//! Chart-data export for external plotting tools.
//!
//! Writes the same pivoted series the terminal view renders, in formats a
//! plotting tool or spreadsheet can consume directly: long-form CSV, JSON
//! mirroring the series structure, or an Excel workbook with one worksheet
//! per dimension. Cell values stay as raw fractional hours; no display
//! rounding is applied on the way out.

use crate::libs::messages::Message;
use crate::libs::pipeline::DimensionSeries;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Long-form CSV: one record per non-zero (dimension, period, category) cell.
    Csv,
    /// Pretty-printed JSON mirroring the series structure.
    Json,
    /// Excel workbook, one worksheet per dimension.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Writes pivoted series to a file in the chosen format.
pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Exporter { format, output }
    }

    /// Exports the series, returning the path written.
    pub fn export(&self, series: &[DimensionSeries]) -> Result<PathBuf> {
        let path = self.resolve_path();
        match self.format {
            ExportFormat::Csv => write_csv(&path, series)?,
            ExportFormat::Json => write_json(&path, series)?,
            ExportFormat::Excel => write_excel(&path, series)?,
        }
        msg_success!(Message::ExportedTo(path.display().to_string()));
        Ok(path)
    }

    /// Explicit output path, or a timestamped default in the working
    /// directory (e.g. `wplot_20250115_143022.csv`).
    fn resolve_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(format!(
                "wplot_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                self.format.extension()
            )),
        }
    }
}

fn write_csv(path: &PathBuf, series: &[DimensionSeries]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["dimension", "period", "category", "hours"])?;
    for dimension_series in series {
        for row in &dimension_series.rows {
            for (category, value) in dimension_series.categories.iter().zip(&row.values) {
                // Zero cells are omitted; long-form consumers read absent as zero.
                if *value == 0.0 {
                    continue;
                }
                writer.write_record([
                    dimension_series.dimension.to_string().as_str(),
                    row.bucket.as_str(),
                    category.as_str(),
                    value.to_string().as_str(),
                ])?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

fn write_json(path: &PathBuf, series: &[DimensionSeries]) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, series)?;
    Ok(())
}

fn write_excel(path: &PathBuf, series: &[DimensionSeries]) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    for dimension_series in series {
        let sheet = workbook.add_worksheet();
        sheet.set_name(dimension_series.dimension.title())?;

        sheet.write_with_format(0, 0, "Period", &bold)?;
        for (col, category) in dimension_series.categories.iter().enumerate() {
            sheet.write_with_format(0, col as u16 + 1, category, &bold)?;
        }

        for (row_idx, row) in dimension_series.rows.iter().enumerate() {
            sheet.write(row_idx as u32 + 1, 0, row.bucket.as_str())?;
            for (col, value) in row.values.iter().enumerate() {
                sheet.write(row_idx as u32 + 1, col as u16 + 1, *value)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
