#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use wplot::libs::bucket::Period;
    use wplot::libs::entry::{EntryFault, TimeEntry};
    use wplot::libs::filter::IgnoreRule;
    use wplot::libs::order::SortMode;
    use wplot::libs::pipeline::{project_totals, run, ConfigError, PlotConfig};
    use wplot::libs::pivot::Dimension;

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn entry(start: NaiveDateTime, hours: i64, project: &str, tags: &[&str]) -> TimeEntry {
        TimeEntry {
            start,
            stop: start + chrono::Duration::hours(hours),
            project: project.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn all_dimensions() -> PlotConfig {
        PlotConfig::default()
    }

    #[test]
    fn test_validate_rejects_empty_dimension_list() {
        let config = PlotConfig {
            dimensions: vec![],
            ..PlotConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::NoDimensions));
    }

    #[test]
    fn test_validate_rejects_duplicate_dimensions() {
        let config = PlotConfig {
            dimensions: vec![Dimension::Hours, Dimension::Hours],
            ..PlotConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::DuplicateDimension(Dimension::Hours)));
    }

    #[test]
    fn test_validate_rejects_ignore_rule_for_unplotted_dimension() {
        let config = PlotConfig {
            dimensions: vec![Dimension::Attributes],
            ignore: vec![IgnoreRule::project("break")],
            ..PlotConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::IgnoredDimensionNotPlotted {
                dimension: Dimension::Hours,
                value: "break".to_string(),
            })
        );
    }

    #[test]
    fn test_invalid_configuration_fails_before_running() {
        let config = PlotConfig {
            dimensions: vec![],
            ..PlotConfig::default()
        };

        assert!(run(vec![entry(dt(6, 9), 1, "apollo11", &[])], &config).is_err());
    }

    #[test]
    fn test_one_series_per_requested_dimension_in_order() {
        let data = run(vec![entry(dt(6, 9), 1, "apollo11", &["eva", "@moon"])], &all_dimensions()).unwrap();

        let dimensions: Vec<Dimension> = data.series.iter().map(|s| s.dimension).collect();
        assert_eq!(dimensions, vec![Dimension::Hours, Dimension::Attributes, Dimension::Location]);
    }

    #[test]
    fn test_zero_entries_yield_well_formed_empty_series() {
        let data = run(vec![], &all_dimensions()).unwrap();

        assert_eq!(data.series.len(), 3);
        for series in &data.series {
            assert!(series.is_empty());
            assert!(series.categories.is_empty());
            assert_eq!(series.total(), 0.0);
        }
    }

    #[test]
    fn test_ignored_project_vanishes_from_every_dimension() {
        let entries = vec![
            entry(dt(6, 9), 2, "apollo11", &["eva", "@moon"]),
            entry(dt(6, 12), 4, "break", &["rest", "@home"]),
        ];
        let config = PlotConfig {
            ignore: vec![IgnoreRule::project("break")],
            ..PlotConfig::default()
        };
        let data = run(entries, &config).unwrap();

        // Total hours drop by exactly the ignored project's 4 hours.
        assert_eq!(data.series[0].total(), 2.0);
        for series in &data.series {
            assert!(!series.categories.iter().any(|c| c == "rest" || c == "home" || c == "break"));
        }
    }

    #[test]
    fn test_malformed_entries_are_screened_and_reported() {
        let backwards = TimeEntry {
            start: dt(6, 12),
            stop: dt(6, 9),
            project: "apollo11".to_string(),
            tags: vec![],
        };
        let unnamed = entry(dt(6, 13), 1, "  ", &[]);
        let good = entry(dt(6, 9), 2, "apollo11", &[]);

        let data = run(vec![backwards, unnamed, good], &all_dimensions()).unwrap();

        assert_eq!(data.faults.len(), 2);
        assert_eq!(data.faults[0].1, EntryFault::NegativeDuration);
        assert_eq!(data.faults[1].1, EntryFault::MissingProject);
        // Only the good entry contributes.
        assert_eq!(data.series[0].total(), 2.0);
    }

    #[test]
    fn test_rows_are_chronological_and_aligned_with_categories() {
        let entries = vec![
            entry(dt(20, 9), 1, "beta", &[]),
            entry(dt(6, 9), 2, "alpha", &[]),
            entry(dt(13, 9), 3, "alpha", &[]),
        ];
        let config = PlotConfig {
            dimensions: vec![Dimension::Hours],
            period: Period::Week,
            sort: SortMode::Name,
            ..PlotConfig::default()
        };
        let data = run(entries, &config).unwrap();
        let series = &data.series[0];

        let buckets: Vec<&str> = series.rows.iter().map(|r| r.bucket.as_str()).collect();
        assert_eq!(buckets, vec!["2025-W02", "2025-W03", "2025-W04"]);
        assert_eq!(series.categories, vec!["alpha", "beta"]);
        // Row values align index-for-index with the category axis.
        assert_eq!(series.rows[0].values, vec![2.0, 0.0]);
        assert_eq!(series.rows[1].values, vec![3.0, 0.0]);
        assert_eq!(series.rows[2].values, vec![0.0, 1.0]);
    }

    #[test]
    fn test_series_range_spans_first_and_last_bucket() {
        let entries = vec![
            entry(dt(6, 9), 1, "apollo11", &[]),
            entry(dt(20, 9), 1, "apollo11", &[]),
        ];
        let config = PlotConfig {
            dimensions: vec![Dimension::Hours],
            ..PlotConfig::default()
        };
        let data = run(entries, &config).unwrap();

        assert_eq!(data.series[0].range(), Some(("2025-01-06", "2025-01-20")));
    }

    #[test]
    fn test_truncated_projects_merge_in_the_pipeline() {
        let entries = vec![
            entry(dt(6, 9), 2, "voyager2.launch", &["@office"]),
            entry(dt(6, 13), 3, "voyager2.cruise", &["@home"]),
        ];
        let config = PlotConfig {
            dimensions: vec![Dimension::Hours],
            truncate: true,
            ..PlotConfig::default()
        };
        let data = run(entries, &config).unwrap();
        let series = &data.series[0];

        assert_eq!(series.categories, vec!["voyager2"]);
        assert_eq!(series.total(), 5.0);
    }

    #[test]
    fn test_project_totals_rank_descending_with_name_tiebreak() {
        let entries = vec![
            entry(dt(6, 9), 1, "zulu", &[]),
            entry(dt(6, 11), 3, "echo", &[]),
            entry(dt(7, 9), 1, "alpha", &[]),
        ];
        let (totals, faults) = project_totals(entries, false, &[]);

        assert!(faults.is_empty());
        let names: Vec<&str> = totals.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["echo", "alpha", "zulu"]);
        assert_eq!(totals[0].1, 3.0);
    }

    #[test]
    fn test_project_totals_honor_truncation_and_ignores() {
        let entries = vec![
            entry(dt(6, 9), 2, "voyager2.launch", &[]),
            entry(dt(6, 13), 3, "voyager2.cruise", &[]),
            entry(dt(6, 18), 4, "break", &[]),
        ];
        let ignore = vec![IgnoreRule::project("break")];
        let (totals, _) = project_totals(entries, true, &ignore);

        assert_eq!(totals, vec![("voyager2".to_string(), 5.0)]);
    }
}
