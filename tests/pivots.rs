#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use wplot::libs::bucket::{Bucket, Period};
    use wplot::libs::entry::{ClassifiedEntry, TimeEntry};
    use wplot::libs::pivot::{aggregate, Dimension, NONE_LABEL};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn entry(start: NaiveDateTime, hours: i64, project: &str, tags: &[&str]) -> ClassifiedEntry {
        TimeEntry {
            start,
            stop: start + chrono::Duration::hours(hours),
            project: project.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
        .classify()
    }

    #[test]
    fn test_hours_dimension_categorizes_by_project() {
        let entries = vec![
            entry(dt(2025, 1, 6, 9, 0), 2, "apollo11", &[]),
            entry(dt(2025, 1, 6, 14, 0), 1, "voyager2", &[]),
            entry(dt(2025, 1, 7, 9, 0), 3, "apollo11", &[]),
        ];
        let table = aggregate(&entries, Dimension::Hours, Period::Day, false);

        assert_eq!(table.category_total("apollo11"), 5.0);
        assert_eq!(table.category_total("voyager2"), 1.0);
        assert_eq!(table.total(), 6.0);
    }

    #[test]
    fn test_no_duration_lost_or_double_counted_across_buckets() {
        let entries = vec![
            entry(dt(2025, 1, 6, 9, 0), 2, "apollo11", &[]),
            entry(dt(2025, 1, 13, 9, 0), 3, "apollo11", &[]),
            entry(dt(2025, 2, 3, 9, 0), 4, "voyager2", &[]),
        ];
        let expected: f64 = entries.iter().map(|e| e.hours()).sum();

        for period in [Period::Day, Period::Week, Period::Month, Period::Year] {
            let table = aggregate(&entries, Dimension::Hours, period, false);
            assert!((table.total() - expected).abs() < 1e-9, "period {:?}", period);
        }
    }

    #[test]
    fn test_truncation_merges_before_summing() {
        let entries = vec![
            entry(dt(2025, 1, 6, 9, 0), 2, "voyager2.launch", &["@office"]),
            entry(dt(2025, 1, 6, 13, 0), 3, "voyager2.cruise", &["@home"]),
        ];
        let table = aggregate(&entries, Dimension::Hours, Period::Day, true);

        let categories = table.categories();
        assert_eq!(categories.len(), 1);
        assert!(categories.contains("voyager2"));
        assert_eq!(table.category_total("voyager2"), 5.0);
    }

    #[test]
    fn test_merged_category_remembers_smallest_raw_label() {
        let entries = vec![
            entry(dt(2025, 1, 6, 9, 0), 2, "voyager2.launch", &[]),
            entry(dt(2025, 1, 6, 13, 0), 3, "voyager2.cruise", &[]),
        ];
        let table = aggregate(&entries, Dimension::Hours, Period::Day, true);

        assert_eq!(table.raw_label("voyager2"), "voyager2.cruise");
    }

    #[test]
    fn test_tag_dimensions_split_by_marker() {
        let entries = vec![entry(dt(2025, 1, 6, 9, 0), 1, "apollo11", &["eva", "@moon"])];

        let attributes = aggregate(&entries, Dimension::Attributes, Period::Day, false);
        assert_eq!(attributes.categories().into_iter().collect::<Vec<_>>(), vec!["eva"]);
        assert_eq!(attributes.category_total("eva"), 1.0);

        let locations = aggregate(&entries, Dimension::Location, Period::Day, false);
        assert_eq!(locations.categories().into_iter().collect::<Vec<_>>(), vec!["moon"]);
        assert_eq!(locations.category_total("moon"), 1.0);
    }

    #[test]
    fn test_co_occurring_tags_each_get_full_duration() {
        let entries = vec![entry(dt(2025, 1, 6, 9, 0), 2, "apollo11", &["eva", "comms"])];
        let table = aggregate(&entries, Dimension::Attributes, Period::Day, false);

        // Duration is not split across co-occurring tags.
        assert_eq!(table.category_total("eva"), 2.0);
        assert_eq!(table.category_total("comms"), 2.0);
    }

    #[test]
    fn test_untagged_entries_land_in_none_category() {
        let entries = vec![
            entry(dt(2025, 1, 6, 9, 0), 2, "apollo11", &[]),
            entry(dt(2025, 1, 6, 13, 0), 1, "apollo11", &["eva"]),
        ];
        let table = aggregate(&entries, Dimension::Attributes, Period::Day, false);

        assert_eq!(table.category_total(NONE_LABEL), 2.0);
        assert_eq!(table.category_total("eva"), 1.0);
    }

    #[test]
    fn test_entry_is_assigned_to_its_start_bucket() {
        // Crosses midnight; the whole duration belongs to Jan 6.
        let entries = vec![entry(dt(2025, 1, 6, 23, 0), 4, "apollo11", &[])];
        let table = aggregate(&entries, Dimension::Hours, Period::Day, false);

        let jan6 = Bucket::from_start(dt(2025, 1, 6, 23, 0), Period::Day);
        let jan7 = Bucket::from_start(dt(2025, 1, 7, 1, 0), Period::Day);
        assert_eq!(table.value(&jan6, "apollo11"), 4.0);
        assert_eq!(table.value(&jan7, "apollo11"), 0.0);
    }

    #[test]
    fn test_fractional_hours_are_preserved() {
        let start = dt(2025, 1, 6, 9, 0);
        let entries = vec![TimeEntry {
            start,
            stop: start + chrono::Duration::minutes(100),
            project: "apollo11".to_string(),
            tags: vec![],
        }
        .classify()];
        let table = aggregate(&entries, Dimension::Hours, Period::Day, false);

        assert!((table.total() - 100.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_entry_set_yields_empty_table() {
        let table = aggregate(&[], Dimension::Hours, Period::Day, false);

        assert!(table.is_empty());
        assert_eq!(table.total(), 0.0);
        assert!(table.categories().is_empty());
    }
}
