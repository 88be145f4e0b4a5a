use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use welldesk_auth::trial::{evaluate, parse_enrollment_date, EnrollmentDate, TrialDecision};
use welldesk_types::StudioRecord;

fn studio(enrollment_date: &str, paid: &str) -> StudioRecord {
    StudioRecord {
        username: "acme".into(),
        password: "pw".into(),
        display_name: "Acme Wellness".into(),
        logo_url: None,
        style_guide: String::new(),
        enrollment_date: enrollment_date.into(),
        paid: paid.into(),
    }
}

#[test]
fn unpaid_studio_blocked_after_grace_period() {
    // Enrolled 2020-01-01, checked 10 days later: 7 days overdue.
    let now = Utc.with_ymd_and_hms(2020, 1, 11, 12, 0, 0).unwrap();
    let decision = evaluate(&studio("01/01/2020", "NO"), now);
    assert_eq!(decision, TrialDecision::Blocked { days_overdue: 7 });
}

#[test]
fn paid_studio_always_allowed() {
    let now = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(evaluate(&studio("2020-01-01", "SI"), now), TrialDecision::Allowed);
}

#[test]
fn paid_flag_survives_case_and_whitespace() {
    let now = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(evaluate(&studio("01/01/2020", " si "), now), TrialDecision::Allowed);
}

#[test]
fn paid_studio_allowed_even_with_garbage_date() {
    let now = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(evaluate(&studio("not a date", "SI"), now), TrialDecision::Allowed);
}

#[test]
fn malformed_date_fails_open() {
    let now = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(evaluate(&studio("yesterday-ish", "NO"), now), TrialDecision::Allowed);
}

#[test]
fn empty_date_fails_open() {
    let now = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(evaluate(&studio("", "NO"), now), TrialDecision::Allowed);
}

#[test]
fn future_enrollment_counts_as_zero_elapsed() {
    let now = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(evaluate(&studio("01/06/2020", "NO"), now), TrialDecision::Allowed);
}

#[test]
fn grace_boundary_day_is_still_allowed() {
    // Exactly 3 elapsed days: allowed. The 4th day blocks.
    let enrolled = studio("01/01/2020", "NO");
    let day3 = Utc.with_ymd_and_hms(2020, 1, 4, 23, 0, 0).unwrap();
    assert_eq!(evaluate(&enrolled, day3), TrialDecision::Allowed);

    let day4 = Utc.with_ymd_and_hms(2020, 1, 5, 0, 30, 0).unwrap();
    assert_eq!(evaluate(&enrolled, day4), TrialDecision::Blocked { days_overdue: 1 });
}

#[test]
fn all_three_formats_parse() {
    let expected = EnrollmentDate::Date(chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(parse_enrollment_date("05/03/2024"), expected);
    assert_eq!(parse_enrollment_date("05-03-2024"), expected);
    assert_eq!(parse_enrollment_date("2024-03-05"), expected);
    assert_eq!(parse_enrollment_date(" 2024-03-05 "), expected);
}

#[test]
fn unparseable_text_is_malformed() {
    assert_eq!(parse_enrollment_date("03/2024"), EnrollmentDate::Malformed);
    assert_eq!(parse_enrollment_date("soon"), EnrollmentDate::Malformed);
    assert_eq!(parse_enrollment_date(""), EnrollmentDate::Empty);
}

proptest! {
    // Once blocked, an unpaid studio stays blocked with a non-decreasing
    // overdue count as time moves forward.
    #[test]
    fn blocking_is_monotonic_in_time(elapsed in 4i64..3650, advance in 0i64..3650) {
        let enrolled = studio("01/01/2020", "NO");
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();

        let t1 = start + Duration::days(elapsed);
        let t2 = t1 + Duration::days(advance);

        prop_assert_eq!(
            evaluate(&enrolled, t1),
            TrialDecision::Blocked { days_overdue: elapsed - 3 }
        );
        prop_assert_eq!(
            evaluate(&enrolled, t2),
            TrialDecision::Blocked { days_overdue: elapsed + advance - 3 }
        );
    }
}
