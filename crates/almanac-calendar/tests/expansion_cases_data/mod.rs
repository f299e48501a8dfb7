// Shared expansion cases. The including module must have `Event`,
// `RepeatInfo` and `expand_dates` in scope.

use almanac_core::types::RepeatType;
use chrono::{NaiveDate, NaiveTime};

pub struct ExpansionCase {
    pub name: &'static str,
    pub kind: RepeatType,
    pub interval: i32,
    pub anchor: &'static str,
    pub end_date: Option<&'static str>,
    pub cutoff: &'static str,
    pub expected: &'static [&'static str],
}

#[expect(clippy::too_many_lines)]
pub fn expansion_cases() -> Vec<ExpansionCase> {
    vec![
        ExpansionCase {
            name: "daily_basic",
            kind: RepeatType::Daily,
            interval: 1,
            anchor: "2025-11-10",
            end_date: Some("2025-11-14"),
            cutoff: "2026-12-31",
            expected: &[
                "2025-11-10",
                "2025-11-11",
                "2025-11-12",
                "2025-11-13",
                "2025-11-14",
            ],
        },
        ExpansionCase {
            name: "daily_every_third_day",
            kind: RepeatType::Daily,
            interval: 3,
            anchor: "2025-11-10",
            end_date: Some("2025-11-20"),
            cutoff: "2026-12-31",
            expected: &["2025-11-10", "2025-11-13", "2025-11-16", "2025-11-19"],
        },
        ExpansionCase {
            name: "daily_across_new_year",
            kind: RepeatType::Daily,
            interval: 1,
            anchor: "2025-12-30",
            end_date: Some("2026-01-02"),
            cutoff: "2026-12-31",
            expected: &["2025-12-30", "2025-12-31", "2026-01-01", "2026-01-02"],
        },
        ExpansionCase {
            name: "weekly_basic",
            kind: RepeatType::Weekly,
            interval: 1,
            anchor: "2025-11-10",
            end_date: Some("2025-12-01"),
            cutoff: "2026-12-31",
            expected: &["2025-11-10", "2025-11-17", "2025-11-24", "2025-12-01"],
        },
        ExpansionCase {
            name: "weekly_biweekly_until_cutoff",
            kind: RepeatType::Weekly,
            interval: 2,
            anchor: "2025-11-03",
            end_date: None,
            cutoff: "2025-12-01",
            expected: &["2025-11-03", "2025-11-17", "2025-12-01"],
        },
        ExpansionCase {
            name: "weekly_through_leap_day",
            kind: RepeatType::Weekly,
            interval: 1,
            anchor: "2024-02-22",
            end_date: Some("2024-03-07"),
            cutoff: "2026-12-31",
            expected: &["2024-02-22", "2024-02-29", "2024-03-07"],
        },
        ExpansionCase {
            name: "monthly_skips_short_months",
            kind: RepeatType::Monthly,
            interval: 1,
            anchor: "2025-01-31",
            end_date: Some("2025-04-30"),
            cutoff: "2026-12-31",
            expected: &["2025-01-31", "2025-03-31"],
        },
        ExpansionCase {
            name: "monthly_day_31_full_year",
            kind: RepeatType::Monthly,
            interval: 1,
            anchor: "2025-01-31",
            end_date: Some("2025-12-31"),
            cutoff: "2026-12-31",
            expected: &[
                "2025-01-31",
                "2025-03-31",
                "2025-05-31",
                "2025-07-31",
                "2025-08-31",
                "2025-10-31",
                "2025-12-31",
            ],
        },
        ExpansionCase {
            name: "monthly_day_30_skips_february_only",
            kind: RepeatType::Monthly,
            interval: 1,
            anchor: "2024-01-30",
            end_date: Some("2024-04-30"),
            cutoff: "2026-12-31",
            expected: &["2024-01-30", "2024-03-30", "2024-04-30"],
        },
        ExpansionCase {
            name: "monthly_every_other_month",
            kind: RepeatType::Monthly,
            interval: 2,
            anchor: "2025-01-15",
            end_date: Some("2025-07-15"),
            cutoff: "2026-12-31",
            expected: &["2025-01-15", "2025-03-15", "2025-05-15", "2025-07-15"],
        },
        ExpansionCase {
            name: "yearly_basic",
            kind: RepeatType::Yearly,
            interval: 1,
            anchor: "2024-11-07",
            end_date: Some("2026-11-07"),
            cutoff: "2030-12-31",
            expected: &["2024-11-07", "2025-11-07", "2026-11-07"],
        },
        ExpansionCase {
            name: "yearly_leap_day_skips_common_years",
            kind: RepeatType::Yearly,
            interval: 1,
            anchor: "2024-02-29",
            end_date: None,
            cutoff: "2032-12-31",
            expected: &["2024-02-29", "2028-02-29", "2032-02-29"],
        },
        ExpansionCase {
            name: "cutoff_before_end_date",
            kind: RepeatType::Daily,
            interval: 1,
            anchor: "2025-11-10",
            end_date: Some("2025-12-31"),
            cutoff: "2025-11-12",
            expected: &["2025-11-10", "2025-11-11", "2025-11-12"],
        },
        ExpansionCase {
            name: "anchor_past_cutoff",
            kind: RepeatType::Weekly,
            interval: 1,
            anchor: "2025-11-10",
            end_date: None,
            cutoff: "2025-11-01",
            expected: &["2025-11-10"],
        },
    ]
}

fn parse_case_date(name: &str, value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Case {name} has bad date {value}: {err}"))
}

pub fn assert_case(case: &ExpansionCase) {
    let mut repeat = RepeatInfo::new(case.kind, case.interval);
    if let Some(end_date) = case.end_date {
        repeat = repeat.until(parse_case_date(case.name, end_date));
    }
    let anchor = Event::new(
        case.name,
        parse_case_date(case.name, case.anchor),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    )
    .with_repeat(repeat);

    let actual = expand_dates(&anchor, parse_case_date(case.name, case.cutoff))
        .unwrap_or_else(|err| panic!("Case {} failed to expand: {}", case.name, err));
    let expected: Vec<NaiveDate> = case
        .expected
        .iter()
        .map(|value| parse_case_date(case.name, value))
        .collect();

    assert_eq!(actual, expected, "Case {} did not match", case.name);
}
