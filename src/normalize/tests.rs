//! Normalization Tests
//!
//! Validates the title scanning state machine, marker stripping, and display
//! name composition.
//!
//! ## Test Scopes
//! - **Classification**: Year vs month boundary, ordering, last-wins rules.
//! - **Series marker**: The single-shot check of the first post-prefix token.
//! - **Stripping**: First-occurrence-only splicing and whitespace trimming.
//! - **Composition**: The `[EVS] title (month-years)` display format.

#[cfg(test)]
mod tests {
    use crate::normalize::normalize_record;
    use crate::normalize::types::RawFileRecord;

    fn raw(title: &str) -> RawFileRecord {
        RawFileRecord {
            title: title.to_string(),
            name: format!("{}.md", title),
            date: None,
            path: None,
            extname: Some("md".to_string()),
            slug: Some("slug-1".to_string()),
        }
    }

    fn normalize(title: &str) -> crate::normalize::types::CleanedFileRecord {
        normalize_record(&raw(title), "slug-1")
    }

    // ============================================================
    // DATE PREFIX CLASSIFICATION
    // ============================================================

    #[test]
    fn test_years_sorted_ascending() {
        let clean = normalize("2019 2007 Live");

        assert_eq!(clean.years, vec!["2007", "2019"]);
        assert_eq!(clean.title, "Live");
        assert_eq!(clean.name, "Live (2007, 2019)");
    }

    #[test]
    fn test_month_vs_year_classification() {
        let clean = normalize("07 2007 Waltz");

        assert_eq!(clean.month.as_deref(), Some("07"));
        assert_eq!(clean.years, vec!["2007"]);
    }

    #[test]
    fn test_year_boundary_at_1000() {
        let clean = normalize("1000 Hymn");
        assert_eq!(clean.years, vec!["1000"]);
        assert!(clean.month.is_none());

        let clean = normalize("999 Hymn");
        assert!(clean.years.is_empty());
        assert_eq!(clean.month.as_deref(), Some("999"));
    }

    #[test]
    fn test_last_month_wins() {
        let clean = normalize("03 07 2019 Concert");

        assert_eq!(clean.month.as_deref(), Some("07"));
        assert_eq!(clean.years, vec!["2019"]);
    }

    #[test]
    fn test_month_keeps_original_token_text() {
        // "07" stays "07", not "7"
        let clean = normalize("07 2020 Song");
        assert_eq!(clean.month.as_deref(), Some("07"));
    }

    #[test]
    fn test_year_canonical_form_strips_leading_zeros() {
        // "02020" classifies as year 2020; only the canonical "2020" is
        // spliced out of the title, so the leading zero survives.
        let clean = normalize("02020 Song");

        assert_eq!(clean.years, vec!["2020"]);
        assert_eq!(clean.title, "0 Song");
    }

    #[test]
    fn test_no_numeric_prefix() {
        let clean = normalize("Autumn Leaves");

        assert!(clean.years.is_empty());
        assert!(clean.month.is_none());
        assert!(clean.evs.is_none());
        assert_eq!(clean.title, "Autumn Leaves");
        assert_eq!(clean.name, "Autumn Leaves ()");
    }

    #[test]
    fn test_prefix_ends_at_first_non_numeric_token() {
        // "2020" after "Song" is outside the date prefix and stays in place
        let clean = normalize("Song 2020 Live");

        assert!(clean.years.is_empty());
        assert_eq!(clean.title, "Song 2020 Live");
        assert_eq!(clean.name, "Song 2020 Live ()");
    }

    // ============================================================
    // SERIES MARKER (single-shot check)
    // ============================================================

    #[test]
    fn test_series_marker_after_date_prefix() {
        let clean = normalize("2020 evs Song Live");

        assert_eq!(clean.evs.as_deref(), Some("evs"));
        assert_eq!(clean.title, "Song Live");
        assert_eq!(clean.name, "[EVS] Song Live (2020)");
    }

    #[test]
    fn test_series_marker_is_single_shot() {
        // "evs" appears later in the title but only the first post-prefix
        // token is ever inspected
        let clean = normalize("2020 Song evs Live");

        assert!(clean.evs.is_none());
        assert_eq!(clean.title, "Song evs Live");
        assert_eq!(clean.name, "Song evs Live (2020)");
    }

    #[test]
    fn test_series_marker_without_date_prefix() {
        // The very first token is the post-prefix token when no numbers lead
        let clean = normalize("evs Song");

        assert_eq!(clean.evs.as_deref(), Some("evs"));
        assert_eq!(clean.title, "Song");
        assert_eq!(clean.name, "[EVS] Song ()");
    }

    #[test]
    fn test_all_numeric_title_has_no_series_marker() {
        let clean = normalize("2020 2019");

        assert!(clean.evs.is_none());
        assert_eq!(clean.years, vec!["2019", "2020"]);
        assert_eq!(clean.title, "");
        assert_eq!(clean.name, " (2019, 2020)");
    }

    // ============================================================
    // MARKER STRIPPING
    // ============================================================

    #[test]
    fn test_markers_stripped_once_each() {
        let clean = normalize("2020 evs Song Live");

        // "2020" and "evs" removed once each, whitespace trimmed
        assert_eq!(clean.title, "Song Live");
    }

    #[test]
    fn test_recurring_marker_value_stripped_only_once() {
        let clean = normalize("2020 Vision 2020");

        assert_eq!(clean.years, vec!["2020"]);
        assert_eq!(clean.title, "Vision 2020");
    }

    // ============================================================
    // KEYWORDS
    // ============================================================

    #[test]
    fn test_keywords_taken_before_stripping() {
        let clean = normalize("2020 evs Song Live");

        // Full ordered token list of the original title, markers included
        assert_eq!(clean.keywords, vec!["2020", "evs", "song", "live"]);
    }

    #[test]
    fn test_keywords_not_deduplicated() {
        let clean = normalize("Song Song Song");

        assert_eq!(clean.keywords, vec!["song", "song", "song"]);
    }

    // ============================================================
    // DISPLAY NAME COMPOSITION
    // ============================================================

    #[test]
    fn test_name_with_month_segment() {
        let clean = normalize("07 2020 Song");

        assert_eq!(clean.name, "Song (07-2020)");
    }

    #[test]
    fn test_name_with_all_markers() {
        let clean = normalize("07 2007 2019 evs Ballade");

        assert_eq!(clean.name, "[EVS] Ballade (07-2007, 2019)");
    }

    #[test]
    fn test_raw_fields_carried_over() {
        let mut input = raw("2020 Song");
        input.date = Some("2020-01-01".to_string());
        input.path = Some("/songs/song.md".to_string());

        let clean = normalize_record(&input, "slug-1");

        assert_eq!(clean.slug, "slug-1");
        assert_eq!(clean.date.as_deref(), Some("2020-01-01"));
        assert_eq!(clean.path.as_deref(), Some("/songs/song.md"));
        assert_eq!(clean.extname.as_deref(), Some("md"));
    }
}
