//! Time entry model and tag classification.
//!
//! A [`TimeEntry`] is one recorded span of tracked time as reported by the
//! tracker. Before aggregation every entry is classified: its tag list is
//! split into *attributes* and *locations* by the `@` marker rule. The split
//! is exhaustive and exclusive, so a tag lands in exactly one category.

use chrono::{Duration, NaiveDateTime};
use std::collections::BTreeSet;
use std::fmt;

/// First character marking a location tag.
pub const LOCATION_MARKER: char = '@';

/// A single recorded span of tracked time.
///
/// Produced by the source adapter and consumed read-only by the pipeline.
/// Entries that violate `stop >= start` or carry an empty project are weeded
/// out by [`screen`] before any aggregation happens.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
    pub project: String,
    pub tags: Vec<String>,
}

impl TimeEntry {
    pub fn duration(&self) -> Duration {
        self.stop - self.start
    }

    /// Entry duration in fractional hours. No rounding happens here; display
    /// formatting is the renderer's concern.
    pub fn hours(&self) -> f64 {
        self.duration().num_seconds() as f64 / 3600.0
    }

    /// Splits the tag list into attribute and location sets.
    pub fn classify(&self) -> ClassifiedEntry {
        let mut attributes = BTreeSet::new();
        let mut locations = BTreeSet::new();
        for raw in &self.tags {
            match Tag::classify(raw) {
                Tag::Attribute(name) => {
                    attributes.insert(name);
                }
                Tag::Location(place) => {
                    locations.insert(place);
                }
            }
        }
        ClassifiedEntry {
            start: self.start,
            stop: self.stop,
            project: self.project.clone(),
            attributes,
            locations,
        }
    }
}

/// A tag assigned to its category.
///
/// Modeled as an explicit variant so call sites never re-inspect raw strings
/// for the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Attribute(String),
    Location(String),
}

impl Tag {
    /// Classifies a raw tag string. A tag is a location iff its first
    /// character is [`LOCATION_MARKER`]; the marker is stripped from the
    /// stored value.
    pub fn classify(raw: &str) -> Self {
        match raw.strip_prefix(LOCATION_MARKER) {
            Some(place) => Tag::Location(place.to_string()),
            None => Tag::Attribute(raw.to_string()),
        }
    }
}

/// A time entry with its tags split into category sets.
///
/// The sets are disjoint by construction. An empty tag list yields two empty
/// sets, which is a valid state, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedEntry {
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
    pub project: String,
    pub attributes: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

impl ClassifiedEntry {
    pub fn hours(&self) -> f64 {
        (self.stop - self.start).num_seconds() as f64 / 3600.0
    }
}

/// Reason an entry was rejected before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFault {
    /// `stop` precedes `start`.
    NegativeDuration,
    /// The project field is empty.
    MissingProject,
}

impl fmt::Display for EntryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryFault::NegativeDuration => write!(f, "stop time precedes start time"),
            EntryFault::MissingProject => write!(f, "missing project name"),
        }
    }
}

/// Splits raw entries into usable ones and faulted ones.
///
/// One bad record must not void the whole report, so malformed entries are
/// collected for the caller to surface instead of failing the run.
pub fn screen(entries: Vec<TimeEntry>) -> (Vec<TimeEntry>, Vec<(TimeEntry, EntryFault)>) {
    let mut kept = Vec::with_capacity(entries.len());
    let mut faulted = vec![];
    for entry in entries {
        if entry.stop < entry.start {
            faulted.push((entry, EntryFault::NegativeDuration));
        } else if entry.project.trim().is_empty() {
            faulted.push((entry, EntryFault::MissingProject));
        } else {
            kept.push(entry);
        }
    }
    (kept, faulted)
}
