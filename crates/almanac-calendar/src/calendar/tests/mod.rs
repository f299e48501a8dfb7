
mod expansion_cases {
    use crate::calendar::core::{Event, RepeatInfo};
    use crate::calendar::expand::expand_dates;

    include!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/expansion_cases_data/mod.rs"
    ));

    #[test_log::test]
    fn expansion_cases_unit() {
        for case in expansion_cases() {
            assert_case(&case);
        }
    }
}
