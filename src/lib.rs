//! # wplot - charts for the Watson time tracker
//!
//! A command-line companion for [Watson](https://tailordev.github.io/Watson/)
//! that exports tracked time and pivots it into per-period charts.
//!
//! ## Features
//!
//! - **Tag Classification**: splits tags into attributes and `@`-marked locations
//! - **Calendar Bucketing**: day, week, month, quarter, and year grouping
//! - **Pivoted Series**: hours per (period, project/attribute/location) cell
//! - **Filtering**: ignore rules per project, attribute, or location
//! - **Name Truncation**: collapse dotted subproject names into one category
//! - **Data Export**: chart-ready CSV, JSON, and Excel output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wplot::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
