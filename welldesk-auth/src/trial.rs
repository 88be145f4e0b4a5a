//! Time-boxed trial gating for studio accounts.
//!
//! Unpaid studios get a fixed grace period from their enrollment date.
//! The enrollment cell is free text edited by humans, so parsing failures
//! must never lock out a legitimate tenant: a missing or malformed date
//! fails open, and that branch is an explicit variant rather than a
//! swallowed exception.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;
use welldesk_types::StudioRecord;

/// Days of access an unpaid studio gets after enrollment.
pub const GRACE_PERIOD_DAYS: i64 = 3;

/// Date formats accepted in the enrollment cell, tried in order.
const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// Outcome of parsing the enrollment cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollmentDate {
    Date(NaiveDate),
    Empty,
    Malformed,
}

/// Whether a studio may establish a session right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrialDecision {
    Allowed,
    Blocked { days_overdue: i64 },
}

/// Parses the enrollment cell, trying each accepted format in order.
pub fn parse_enrollment_date(text: &str) -> EnrollmentDate {
    let text = text.trim();
    if text.is_empty() {
        return EnrollmentDate::Empty;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return EnrollmentDate::Date(date);
        }
    }
    EnrollmentDate::Malformed
}

/// Evaluates the trial gate for a studio at the given instant.
///
/// A paid studio is always allowed regardless of its enrollment date,
/// parseable or not. Future enrollment dates count as zero elapsed days.
pub fn evaluate(studio: &StudioRecord, now: DateTime<Utc>) -> TrialDecision {
    if studio.is_paid() {
        return TrialDecision::Allowed;
    }

    let enrolled = match parse_enrollment_date(&studio.enrollment_date) {
        EnrollmentDate::Date(date) => date,
        EnrollmentDate::Empty => return TrialDecision::Allowed,
        EnrollmentDate::Malformed => {
            // Fail open: a garbled cell must not lock the tenant out.
            warn!(
                "unparseable enrollment date for studio {:?}, allowing",
                studio.username
            );
            return TrialDecision::Allowed;
        }
    };

    let elapsed_days = (now.date_naive() - enrolled).num_days().max(0);
    if elapsed_days > GRACE_PERIOD_DAYS {
        TrialDecision::Blocked {
            days_overdue: elapsed_days - GRACE_PERIOD_DAYS,
        }
    } else {
        TrialDecision::Allowed
    }
}
