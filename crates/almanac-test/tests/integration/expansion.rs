use almanac_calendar::calendar::core::{Event, RepeatInfo};
use almanac_calendar::calendar::expand::expand_dates;

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../almanac-calendar/tests/expansion_cases_data/mod.rs"
));

/// ## Summary
/// Integration-level validation for recurrence expansion using shared cases.
#[test_log::test]
fn expansion_cases_integration() {
    for case in expansion_cases() {
        assert_case(&case);
    }
}
