//! Property tests for tool output parsing.

use proptest::prelude::*;

use clasp_shell::domain::diagnostics::{
    locate_syntax_error, parse_failure_diagnostics, parse_success_output, SyntaxErrorScan,
};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary output.
    #[test]
    fn property_parsers_never_panic(text in "(?s).{0,256}") {
        let _ = parse_success_output(&text);
        let _ = parse_failure_diagnostics(&text);
        let _ = locate_syntax_error(&text);
    }

    /// PROPERTY: A well-formed syntax error line is always located.
    #[test]
    fn property_well_formed_report_is_located(
        line in 1usize..100_000,
        file in "[A-Za-z_][A-Za-z0-9_]{0,12}(/[A-Za-z0-9_]{1,8}){0,3}",
    ) {
        let stderr = format!("Error: Syntax error: oops. line: {line} file: {file}\n");
        let report = parse_failure_diagnostics(&stderr);
        match report.syntax {
            SyntaxErrorScan::Located(locator) => {
                prop_assert_eq!(locator.line_number, line);
                prop_assert_eq!(locator.file_path, file);
            }
            other => prop_assert!(false, "expected located scan, got {:?}", other),
        }
    }

    /// PROPERTY: Every branch-marker line becomes exactly one change line.
    #[test]
    fn property_change_lines_match_marker_count(
        names in proptest::collection::vec("[A-Za-z]{1,10}\\.js", 0..10),
    ) {
        let stdout: String = names.iter().map(|n| format!("  └─ {n}\n")).collect();
        let summary = parse_success_output(&stdout);
        prop_assert_eq!(summary.change_lines.len(), names.len());
        prop_assert_eq!(summary.changed_file_count, None);
    }
}
