//! Label truncation for collapsing sub-projects.
//!
//! Watson users often name sub-projects with dotted labels
//! (`voyager2.launch`, `voyager2.cruise`). With truncation enabled, labels
//! are cut at the first `.` so dotted variants merge into one category. The
//! merge happens before any duration is summed; see the aggregator.

/// Cuts a label at the first `.`; labels without one are returned unchanged.
///
/// Idempotent: truncating an already-truncated label is a no-op.
pub fn truncate(label: &str) -> &str {
    match label.split_once('.') {
        Some((head, _)) => head,
        None => label,
    }
}

/// Applies the truncate flag to a label, yielding the display form.
pub fn display_label(label: &str, truncate_enabled: bool) -> String {
    if truncate_enabled {
        truncate(label).to_string()
    } else {
        label.to_string()
    }
}
