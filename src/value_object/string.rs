//! String validators.
//!
//! Each attachment wraps a pure predicate over the string payload and fails
//! with a specific `VALUE_OBJECT_ERROR`-scoped code carrying the offending
//! value in `data`. A non-string primitive fails every predicate here.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{DomainError, ErrorFamily, ErrorScope};
use crate::value_object::attachment::Attachment;
use crate::value_object::offending_value;
use crate::value_object::primitive::Primitive;
use crate::value_object::validator::Validator;

/// The string's length is not the exact expected length.
pub const STRING_LENGTH_ERROR: &str = "STRING_LENGTH_ERROR";
/// The string is shorter than the minimum length.
pub const STRING_MIN_LENGTH_ERROR: &str = "STRING_MIN_LENGTH_ERROR";
/// The string is longer than the maximum length.
pub const STRING_MAX_LENGTH_ERROR: &str = "STRING_MAX_LENGTH_ERROR";
/// The string does not start with the expected prefix.
pub const STRING_STARTS_WITH_ERROR: &str = "STRING_STARTS_WITH_ERROR";
/// The string does not end with the expected suffix.
pub const STRING_ENDS_WITH_ERROR: &str = "STRING_ENDS_WITH_ERROR";
/// The string does not contain the expected substring.
pub const STRING_INCLUDES_ERROR: &str = "STRING_INCLUDES_ERROR";
/// The string does not match the expected pattern.
pub const STRING_REGEX_ERROR: &str = "STRING_REGEX_ERROR";

static STRING_ERRORS: LazyLock<ErrorFamily> = LazyLock::new(|| {
    ErrorFamily::new(&[
        (STRING_LENGTH_ERROR, ErrorScope::ValueObjectError),
        (STRING_MIN_LENGTH_ERROR, ErrorScope::ValueObjectError),
        (STRING_MAX_LENGTH_ERROR, ErrorScope::ValueObjectError),
        (STRING_STARTS_WITH_ERROR, ErrorScope::ValueObjectError),
        (STRING_ENDS_WITH_ERROR, ErrorScope::ValueObjectError),
        (STRING_INCLUDES_ERROR, ErrorScope::ValueObjectError),
        (STRING_REGEX_ERROR, ErrorScope::ValueObjectError),
    ])
});

fn string_error(code: &'static str, message: String, value: &Primitive) -> DomainError {
    STRING_ERRORS.error_with(code, message, offending_value(value))
}

fn check(value: &Primitive, predicate: impl Fn(&str) -> bool) -> bool {
    value.as_str().is_some_and(predicate)
}

/// Validates that the string has exactly `length` characters.
#[must_use]
pub fn length(length: usize) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "length",
        move |value| check(value, |s| s.chars().count() == length),
        move |value| {
            string_error(
                STRING_LENGTH_ERROR,
                format!("The length must be {length}: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the string has at least `min` characters.
#[must_use]
pub fn min_length(min: usize) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "minLength",
        move |value| check(value, |s| s.chars().count() >= min),
        move |value| {
            string_error(
                STRING_MIN_LENGTH_ERROR,
                format!("The minimum length must be {min}: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the string has at most `max` characters.
#[must_use]
pub fn max_length(max: usize) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "maxLength",
        move |value| check(value, |s| s.chars().count() <= max),
        move |value| {
            string_error(
                STRING_MAX_LENGTH_ERROR,
                format!("The maximum length must be {max}: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the string matches `pattern`.
#[must_use]
pub fn matches(pattern: Regex) -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "regex",
        move |value| check(value, |s| pattern.is_match(s)),
        move |value| {
            string_error(
                STRING_REGEX_ERROR,
                format!("Invalid regex for string: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the string starts with `prefix`.
#[must_use]
pub fn starts_with(prefix: impl Into<String>) -> Attachment {
    let prefix = prefix.into();
    let expected = prefix.clone();
    Attachment::validation(Validator::from_predicate(
        "startsWith",
        move |value| check(value, |s| s.starts_with(&prefix)),
        move |value| {
            string_error(
                STRING_STARTS_WITH_ERROR,
                format!("It must start with {expected}: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the string ends with `suffix`.
#[must_use]
pub fn ends_with(suffix: impl Into<String>) -> Attachment {
    let suffix = suffix.into();
    let expected = suffix.clone();
    Attachment::validation(Validator::from_predicate(
        "endsWith",
        move |value| check(value, |s| s.ends_with(&suffix)),
        move |value| {
            string_error(
                STRING_ENDS_WITH_ERROR,
                format!("It must end with {expected}: {value}"),
                value,
            )
        },
    ))
}

/// Validates that the string contains `substring`.
#[must_use]
pub fn includes(substring: impl Into<String>) -> Attachment {
    let substring = substring.into();
    let expected = substring.clone();
    Attachment::validation(Validator::from_predicate(
        "includes",
        move |value| check(value, |s| s.contains(&substring)),
        move |value| {
            string_error(
                STRING_INCLUDES_ERROR,
                format!("It must include {expected}: {value}"),
                value,
            )
        },
    ))
}
