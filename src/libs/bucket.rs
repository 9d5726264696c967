//! Calendar bucketing for the chronological axis.
//!
//! Every entry maps to exactly one bucket, chosen from its *start* timestamp.
//! An entry whose stop time crosses a bucket boundary is not split; its whole
//! duration lands in the start bucket. Buckets carry their own start date as
//! the sort key so chronological ordering never depends on label formatting.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Period granularity for grouping entries.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        };
        write!(f, "{}", name)
    }
}

/// One calendar bucket.
///
/// `start` is the first day of the period and doubles as the sort key; the
/// derived `Ord` compares it first. `label` is what the chart axis shows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bucket {
    pub start: NaiveDate,
    pub label: String,
}

impl Bucket {
    /// Buckets a timestamp at the given granularity.
    pub fn from_start(start: NaiveDateTime, period: Period) -> Self {
        let date = start.date();
        match period {
            Period::Day => Bucket {
                start: date,
                label: date.format("%Y-%m-%d").to_string(),
            },
            Period::Week => {
                // ISO semantics: the week starts Monday and is labeled with
                // the week-numbering year, which can differ from the calendar
                // year around January 1st.
                let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
                let iso = date.iso_week();
                Bucket {
                    start: monday,
                    label: format!("{}-W{:02}", iso.year(), iso.week()),
                }
            }
            Period::Month => Bucket {
                start: first_of(date.year(), date.month()),
                label: date.format("%Y-%m").to_string(),
            },
            Period::Quarter => {
                let quarter = (date.month0() / 3) + 1;
                Bucket {
                    start: first_of(date.year(), (quarter - 1) * 3 + 1),
                    label: format!("{}-Q{}", date.year(), quarter),
                }
            }
            Period::Year => Bucket {
                start: first_of(date.year(), 1),
                label: date.format("%Y").to_string(),
            },
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn first_of(year: i32, month: u32) -> NaiveDate {
    // Day 1 exists in every month.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}
