//! Property tests for the source excerpt window.

use proptest::prelude::*;

use clasp_shell::domain::excerpt::SourceExcerptWindow;

fn source_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ;(){}=]{0,30}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The window always has five rows, consecutive numbers and
    /// exactly one marked row in the middle.
    #[test]
    fn property_window_shape(
        lines in proptest::collection::vec(source_line(), 0..40),
        line in 1usize..60,
    ) {
        let window = SourceExcerptWindow::from_source(&lines.join("\n"), line);
        let rows = window.rows();

        prop_assert_eq!(rows.len(), 5);
        prop_assert_eq!(rows.iter().filter(|r| r.marked).count(), 1);
        prop_assert!(rows[2].marked);
        for (offset, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.number, line as i64 - 2 + offset as i64);
        }
    }

    /// PROPERTY: A row is a placeholder exactly when its number is outside the file.
    #[test]
    fn property_placeholders_match_file_bounds(
        lines in proptest::collection::vec(source_line(), 1..20),
        line in 1usize..25,
    ) {
        let total = lines.len() as i64;
        let window = SourceExcerptWindow::from_source(&lines.join("\n"), line);

        for row in window.rows() {
            let outside = row.number < 1 || row.number > total;
            prop_assert_eq!(row.is_placeholder(), outside);
        }
    }

    /// PROPERTY: Every formatted row puts the separator in the same column.
    #[test]
    fn property_rows_are_aligned(
        lines in proptest::collection::vec(source_line(), 0..150),
        line in 1usize..200,
    ) {
        let window = SourceExcerptWindow::from_source(&lines.join("\n"), line);
        let width = window.number_width();

        for row in window.rows() {
            let formatted = row.format(width);
            prop_assert_eq!(formatted.find(" |"), Some(width));
        }
    }
}
