//! Number validators.
//!
//! Each attachment wraps a pure predicate over the numeric payload and fails
//! with a specific `VALUE_OBJECT_ERROR`-scoped code carrying the offending
//! value in `data`. A non-number primitive fails every predicate here.

use std::sync::LazyLock;

use crate::errors::{DomainError, ErrorFamily, ErrorScope};
use crate::value_object::attachment::Attachment;
use crate::value_object::offending_value;
use crate::value_object::primitive::Primitive;
use crate::value_object::validator::Validator;

/// The number exceeds the maximum value.
pub const NUMBER_EXCEEDS_MAXIMUM_ERROR: &str = "NUMBER_EXCEEDS_MAXIMUM_ERROR";
/// The number is below the minimum value.
pub const NUMBER_BELOW_MINIMUM_ERROR: &str = "NUMBER_BELOW_MINIMUM_ERROR";
/// The number is not an integer.
pub const NUMBER_NOT_INTEGER_ERROR: &str = "NUMBER_NOT_INTEGER_ERROR";
/// The number is negative but should be positive.
pub const NUMBER_NEGATIVE_ERROR: &str = "NUMBER_NEGATIVE_ERROR";
/// The number is positive but should be negative.
pub const NUMBER_POSITIVE_ERROR: &str = "NUMBER_POSITIVE_ERROR";
/// The number is outside the expected range.
pub const NUMBER_NOT_IN_RANGE_ERROR: &str = "NUMBER_NOT_IN_RANGE_ERROR";

static NUMBER_ERRORS: LazyLock<ErrorFamily> = LazyLock::new(|| {
    ErrorFamily::new(&[
        (NUMBER_EXCEEDS_MAXIMUM_ERROR, ErrorScope::ValueObjectError),
        (NUMBER_BELOW_MINIMUM_ERROR, ErrorScope::ValueObjectError),
        (NUMBER_NOT_INTEGER_ERROR, ErrorScope::ValueObjectError),
        (NUMBER_NEGATIVE_ERROR, ErrorScope::ValueObjectError),
        (NUMBER_POSITIVE_ERROR, ErrorScope::ValueObjectError),
        (NUMBER_NOT_IN_RANGE_ERROR, ErrorScope::ValueObjectError),
    ])
});

fn number_error(code: &'static str, message: String, value: &Primitive) -> DomainError {
    NUMBER_ERRORS.error_with(code, message, offending_value(value))
}

fn check(value: &Primitive, predicate: impl Fn(f64) -> bool) -> bool {
    value.as_number().is_some_and(predicate)
}

/// Validates that the number is at most `max`.
#[must_use]
pub fn max(max: f64) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "max",
        move |value| check(value, |n| n <= max),
        move |value| {
            number_error(
                NUMBER_EXCEEDS_MAXIMUM_ERROR,
                format!("Number exceeds maximum value: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the number is at least `min`.
#[must_use]
pub fn min(min: f64) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "min",
        move |value| check(value, |n| n >= min),
        move |value| {
            number_error(
                NUMBER_BELOW_MINIMUM_ERROR,
                format!("Number below minimum value: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the number is an integer.
#[must_use]
pub fn integer() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "integer",
        |value| check(value, |n| n.fract() == 0.0 && n.is_finite()),
        |value| {
            number_error(
                NUMBER_NOT_INTEGER_ERROR,
                format!("Number is not an integer: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the number is zero or positive.
#[must_use]
pub fn positive() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "positive",
        |value| check(value, |n| n >= 0.0),
        |value| {
            number_error(
                NUMBER_NEGATIVE_ERROR,
                format!("Number is negative and should be positive: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the number is strictly negative.
#[must_use]
pub fn negative() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "negative",
        |value| check(value, |n| n < 0.0),
        |value| {
            number_error(
                NUMBER_POSITIVE_ERROR,
                format!("Number is positive and should be negative: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the number lies in the inclusive range `[min, max]`.
#[must_use]
pub fn range(min: f64, max: f64) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "range",
        move |value| check(value, |n| n >= min && n <= max),
        move |value| {
            number_error(
                NUMBER_NOT_IN_RANGE_ERROR,
                format!("Number is not in range [{min}, {max}]: {value}"),
                value,
            )
        },
    ))
}
