//! Entry exclusion rules.
//!
//! An ignore rule names a category value in one plot dimension; any entry
//! carrying that value is dropped entirely, not just stripped of the matching
//! tag. Filtering runs once, before bucketing, so an excluded entry never
//! contributes partial duration to any bucket.

use crate::libs::entry::{ClassifiedEntry, LOCATION_MARKER};
use crate::libs::pivot::Dimension;

/// One exclusion rule: the dimension it targets and the raw value it names.
///
/// Rules compare against raw (pre-truncation) values; `Project("voyager2")`
/// does not match `voyager2.launch` even when truncation is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreRule {
    Project(String),
    Attribute(String),
    Location(String),
}

impl IgnoreRule {
    pub fn project(name: impl Into<String>) -> Self {
        IgnoreRule::Project(name.into())
    }

    pub fn attribute(name: impl Into<String>) -> Self {
        IgnoreRule::Attribute(name.into())
    }

    /// Builds a location rule. Accepts the value with or without the `@`
    /// marker, since locations are stored without it.
    pub fn location(name: impl Into<String>) -> Self {
        let name = name.into();
        let place = name.strip_prefix(LOCATION_MARKER).unwrap_or(&name);
        IgnoreRule::Location(place.to_string())
    }

    /// The plot dimension whose category values this rule names.
    pub fn dimension(&self) -> Dimension {
        match self {
            IgnoreRule::Project(_) => Dimension::Hours,
            IgnoreRule::Attribute(_) => Dimension::Attributes,
            IgnoreRule::Location(_) => Dimension::Location,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            IgnoreRule::Project(v) | IgnoreRule::Attribute(v) | IgnoreRule::Location(v) => v,
        }
    }

    fn matches(&self, entry: &ClassifiedEntry) -> bool {
        match self {
            IgnoreRule::Project(v) => entry.project == *v,
            IgnoreRule::Attribute(v) => entry.attributes.contains(v),
            IgnoreRule::Location(v) => entry.locations.contains(v),
        }
    }
}

/// Keep decision for one entry against the whole rule set.
pub fn keep(entry: &ClassifiedEntry, rules: &[IgnoreRule]) -> bool {
    !rules.iter().any(|rule| rule.matches(entry))
}
