//! Date validators.
//!
//! Each attachment wraps a pure predicate over the date payload and fails
//! with a specific `VALUE_OBJECT_ERROR`-scoped code carrying the offending
//! value in `data`. The error names describe the violation, not the check:
//! a failing [`before`] reports [`DATE_AFTER_ERROR`] and a failing [`after`]
//! reports [`DATE_BEFORE_ERROR`].

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Months, Utc};

use crate::errors::{DomainError, ErrorFamily, ErrorScope};
use crate::value_object::attachment::Attachment;
use crate::value_object::offending_value;
use crate::value_object::primitive::Primitive;
use crate::value_object::validator::Validator;

/// The value is not a date.
pub const DATE_INVALID_ERROR: &str = "DATE_INVALID_ERROR";
/// The date is not in the past.
pub const DATE_PAST_ERROR: &str = "DATE_PAST_ERROR";
/// The date is not in the future.
pub const DATE_FUTURE_ERROR: &str = "DATE_FUTURE_ERROR";
/// The date is before the expected date.
pub const DATE_BEFORE_ERROR: &str = "DATE_BEFORE_ERROR";
/// The date is after the expected date.
pub const DATE_AFTER_ERROR: &str = "DATE_AFTER_ERROR";
/// The date is younger than the expected age.
pub const DATE_MAX_AGE_ERROR: &str = "DATE_MAX_AGE_ERROR";
/// The date is outside the expected range.
pub const DATE_NOT_IN_RANGE_ERROR: &str = "DATE_NOT_IN_RANGE_ERROR";
/// The date does not fall on a weekday.
pub const DATE_NOT_WEEKDAY_ERROR: &str = "DATE_NOT_WEEKDAY_ERROR";
/// The date does not fall on a weekend.
pub const DATE_NOT_WEEKEND_ERROR: &str = "DATE_NOT_WEEKEND_ERROR";

static DATE_ERRORS: LazyLock<ErrorFamily> = LazyLock::new(|| {
    ErrorFamily::new(&[
        (DATE_INVALID_ERROR, ErrorScope::ValueObjectError),
        (DATE_PAST_ERROR, ErrorScope::ValueObjectError),
        (DATE_FUTURE_ERROR, ErrorScope::ValueObjectError),
        (DATE_BEFORE_ERROR, ErrorScope::ValueObjectError),
        (DATE_AFTER_ERROR, ErrorScope::ValueObjectError),
        (DATE_MAX_AGE_ERROR, ErrorScope::ValueObjectError),
        (DATE_NOT_IN_RANGE_ERROR, ErrorScope::ValueObjectError),
        (DATE_NOT_WEEKDAY_ERROR, ErrorScope::ValueObjectError),
        (DATE_NOT_WEEKEND_ERROR, ErrorScope::ValueObjectError),
    ])
});

fn date_error(code: &'static str, message: String, value: &Primitive) -> DomainError {
    DATE_ERRORS.error_with(code, message, offending_value(value))
}

fn check(value: &Primitive, predicate: impl Fn(DateTime<Utc>) -> bool) -> bool {
    value.as_date().is_some_and(predicate)
}

/// Validates that the value is a date primitive.
#[must_use]
pub fn valid() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "isValid",
        |value| value.as_date().is_some(),
        |value| date_error(DATE_INVALID_ERROR, format!("Invalid date: {value}"), value),
    ))
}

/// Validates that the date is strictly in the past.
#[must_use]
pub fn past() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "isPast",
        |value| check(value, |date| date < Utc::now()),
        |value| {
            date_error(
                DATE_PAST_ERROR,
                format!("Date is not in the past: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the date is strictly in the future.
#[must_use]
pub fn future() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "isFuture",
        |value| check(value, |date| date > Utc::now()),
        |value| {
            date_error(
                DATE_FUTURE_ERROR,
                format!("Date is not in the future: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the date is strictly before `expected`.
#[must_use]
pub fn before(expected: DateTime<Utc>) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "isBefore",
        move |value| check(value, |date| date < expected),
        move |value| {
            date_error(
                DATE_AFTER_ERROR,
                format!("Date is after the expected date {expected}: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the date is strictly after `expected`.
#[must_use]
pub fn after(expected: DateTime<Utc>) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "isAfter",
        move |value| check(value, |date| date > expected),
        move |value| {
            date_error(
                DATE_BEFORE_ERROR,
                format!("Date is before the expected date {expected}: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the date is at least `years` years in the past.
#[must_use]
pub fn max_age(years: u32) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "maxAge",
        move |value| {
            check(value, |date| {
                Utc::now()
                    .checked_sub_months(Months::new(years * 12))
                    .is_some_and(|threshold| date < threshold)
            })
        },
        move |value| {
            date_error(
                DATE_MAX_AGE_ERROR,
                format!("Date is younger than the expected age {years}: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the date lies in the inclusive range `[min, max]`.
#[must_use]
pub fn in_range(min: DateTime<Utc>, max: DateTime<Utc>) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "inRange",
        move |value| check(value, |date| date >= min && date <= max),
        move |value| {
            date_error(
                DATE_NOT_IN_RANGE_ERROR,
                format!("Date is not in range [{min}, {max}]: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the date falls on a weekday (Monday through Friday).
#[must_use]
pub fn weekday() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "isWeekday",
        |value| check(value, |date| date.weekday().number_from_monday() <= 5),
        |value| {
            date_error(
                DATE_NOT_WEEKDAY_ERROR,
                format!("Date is not on a weekday: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the date falls on a weekend (Saturday or Sunday).
#[must_use]
pub fn weekend() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "isWeekend",
        |value| check(value, |date| date.weekday().number_from_monday() >= 6),
        |value| {
            date_error(
                DATE_NOT_WEEKEND_ERROR,
                format!("Date is not on a weekend: {value}"),
                value,
            )
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_object::{PrimitiveKind, ValueObjectType};
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    // =========================================================================
    // Past / Future Tests
    // =========================================================================

    #[rstest]
    fn past_accepts_old_dates_and_rejects_future_ones() {
        let birth = ValueObjectType::declare("BirthDate", PrimitiveKind::Date)
            .with(past())
            .seal();

        assert!(birth.create(Some(date(1990, 5, 20).into())).is_ok());

        let error = birth.create(Some(date(2999, 1, 1).into())).unwrap_err();
        assert_eq!(error.code, DATE_PAST_ERROR);
        assert_eq!(error.scope.to_string(), "VALUE_OBJECT_ERROR");
    }

    #[rstest]
    fn future_accepts_upcoming_dates() {
        let expiry = ValueObjectType::declare("ExpiryDate", PrimitiveKind::Date)
            .with(future())
            .seal();

        assert!(expiry.create(Some(date(2999, 1, 1).into())).is_ok());
        assert_eq!(
            expiry.create(Some(date(1990, 1, 1).into())).unwrap_err().code,
            DATE_FUTURE_ERROR
        );
    }

    // =========================================================================
    // Before / After Tests
    // =========================================================================

    #[rstest]
    fn failing_before_reports_date_after_error() {
        let cutoff = ValueObjectType::declare("Cutoff", PrimitiveKind::Date)
            .with(before(date(2024, 1, 1)))
            .seal();

        assert!(cutoff.create(Some(date(2023, 12, 31).into())).is_ok());
        assert_eq!(
            cutoff.create(Some(date(2024, 6, 1).into())).unwrap_err().code,
            DATE_AFTER_ERROR
        );
    }

    #[rstest]
    fn failing_after_reports_date_before_error() {
        let opening = ValueObjectType::declare("Opening", PrimitiveKind::Date)
            .with(after(date(2024, 1, 1)))
            .seal();

        assert!(opening.create(Some(date(2024, 6, 1).into())).is_ok());
        assert_eq!(
            opening
                .create(Some(date(2023, 12, 31).into()))
                .unwrap_err()
                .code,
            DATE_BEFORE_ERROR
        );
    }

    // =========================================================================
    // Age / Range Tests
    // =========================================================================

    #[rstest]
    fn max_age_requires_an_old_enough_date() {
        let adult_birth = ValueObjectType::declare("AdultBirthDate", PrimitiveKind::Date)
            .with(max_age(18))
            .seal();

        assert!(adult_birth.create(Some(date(1990, 5, 20).into())).is_ok());

        let recent = Utc::now() - Months::new(12);
        let error = adult_birth.create(Some(recent.into())).unwrap_err();
        assert_eq!(error.code, DATE_MAX_AGE_ERROR);
    }

    #[rstest]
    fn in_range_is_inclusive_on_both_ends() {
        let window = ValueObjectType::declare("Window", PrimitiveKind::Date)
            .with(in_range(date(2024, 1, 1), date(2024, 12, 31)))
            .seal();

        assert!(window.create(Some(date(2024, 1, 1).into())).is_ok());
        assert!(window.create(Some(date(2024, 12, 31).into())).is_ok());
        assert_eq!(
            window.create(Some(date(2025, 1, 1).into())).unwrap_err().code,
            DATE_NOT_IN_RANGE_ERROR
        );
    }

    // =========================================================================
    // Weekday / Weekend Tests
    // =========================================================================

    #[rstest]
    fn weekday_accepts_monday_through_friday() {
        let delivery = ValueObjectType::declare("DeliveryDate", PrimitiveKind::Date)
            .with(weekday())
            .seal();

        // 2024-03-01 is a Friday, 2024-03-02 a Saturday.
        assert!(delivery.create(Some(date(2024, 3, 1).into())).is_ok());
        assert_eq!(
            delivery.create(Some(date(2024, 3, 2).into())).unwrap_err().code,
            DATE_NOT_WEEKDAY_ERROR
        );
    }

    #[rstest]
    fn weekend_accepts_saturday_and_sunday() {
        let visit = ValueObjectType::declare("VisitDate", PrimitiveKind::Date)
            .with(weekend())
            .seal();

        assert!(visit.create(Some(date(2024, 3, 2).into())).is_ok());
        assert!(visit.create(Some(date(2024, 3, 3).into())).is_ok());
        assert_eq!(
            visit.create(Some(date(2024, 3, 4).into())).unwrap_err().code,
            DATE_NOT_WEEKEND_ERROR
        );
    }

    // =========================================================================
    // Validity Tests
    // =========================================================================

    #[rstest]
    fn non_date_primitive_fails_validity_check() {
        let stamp = ValueObjectType::declare("Stamp", PrimitiveKind::Date)
            .with(valid())
            .seal();

        let error = stamp.create(Some("2024-03-01".into())).unwrap_err();
        assert_eq!(error.code, DATE_INVALID_ERROR);
        assert_eq!(error.data.unwrap()["value"], json!("2024-03-01"));
    }
}
