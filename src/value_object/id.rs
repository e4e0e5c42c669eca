//! Identifier formats and default generators.
//!
//! The generation algorithms themselves are black boxes from the `uuid`,
//! `ulid`, and `nanoid` crates, consumed as pluggable default-value
//! providers. This module contributes the format validators and the
//! ready-made declarations combining a format check with its generator.
//!
//! # Examples
//!
//! ```rust
//! use hexon::value_object::id;
//!
//! let user_id = id::uuid("UserId").seal();
//!
//! // No argument: the bound generator supplies a fresh UUID.
//! let generated = user_id.create(None).unwrap();
//! assert_eq!(generated.value().as_str().unwrap().len(), 36);
//!
//! let rejected = user_id.create(Some("bad-uuid".into())).unwrap_err();
//! assert_eq!(rejected.code, "UUID_MALFORMED_ERROR");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::errors::{DomainError, ErrorFamily, ErrorScope};
use crate::value_object::attachment::Attachment;
use crate::value_object::factory::{TypeDeclaration, ValueObjectType};
use crate::value_object::primitive::{Primitive, PrimitiveKind};
use crate::value_object::validator::Validator;

/// The string is not a well-formed UUID.
pub const UUID_MALFORMED_ERROR: &str = "UUID_MALFORMED_ERROR";
/// The string is not a well-formed ULID.
pub const ULID_MALFORMED_ERROR: &str = "ULID_MALFORMED_ERROR";
/// The string is not a well-formed nanoid.
pub const NANOID_MALFORMED_ERROR: &str = "NANOID_MALFORMED_ERROR";

static ID_ERRORS: LazyLock<ErrorFamily> = LazyLock::new(|| {
    ErrorFamily::new(&[
        (UUID_MALFORMED_ERROR, ErrorScope::ValueObjectError),
        (ULID_MALFORMED_ERROR, ErrorScope::ValueObjectError),
        (NANOID_MALFORMED_ERROR, ErrorScope::ValueObjectError),
    ])
});

/// The default nanoid alphabet at its default length of 21.
static NANOID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9_-]{21}$").unwrap_or_else(|_| unreachable!()));

fn id_error(code: &'static str, technique: &'static str, value: &Primitive) -> DomainError {
    let mut data = serde_json::Map::new();
    data.insert("value".to_string(), value.to_value());
    data.insert("technique".to_string(), technique.into());
    ID_ERRORS.error_with(code, format!("Malformed {technique} identifier: {value}"), data)
}

/// Binds a UUID v4 generator as the type's default value.
#[must_use]
pub fn uuid_default() -> Attachment {
    Attachment::default_value(|| Primitive::String(Uuid::new_v4().to_string()))
}

/// Validates that the string is a canonical hyphenated UUID.
#[must_use]
pub fn uuid_format() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "uuidValidator",
        |value| {
            value
                .as_str()
                .is_some_and(|s| s.len() == 36 && Uuid::try_parse(s).is_ok())
        },
        |value| id_error(UUID_MALFORMED_ERROR, "uuid", value),
    ))
}

/// Binds a ULID generator as the type's default value.
#[must_use]
pub fn ulid_default() -> Attachment {
    Attachment::default_value(|| Primitive::String(ulid::Ulid::new().to_string()))
}

/// Validates that the string is a 26-character Crockford base32 ULID.
#[must_use]
pub fn ulid_format() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "ulidValidator",
        |value| {
            value
                .as_str()
                .is_some_and(|s| s.len() == 26 && ulid::Ulid::from_string(s).is_ok())
        },
        |value| id_error(ULID_MALFORMED_ERROR, "ulid", value),
    ))
}

/// Binds a nanoid generator (default alphabet, 21 characters) as the type's
/// default value.
#[must_use]
pub fn nanoid_default() -> Attachment {
    Attachment::default_value(|| Primitive::String(nanoid::nanoid!()))
}

/// Validates that the string is a 21-character default-alphabet nanoid.
#[must_use]
pub fn nanoid_format() -> Attachment {
    Attachment::validation(Validator::from_predicate(
        "nanoIdValidator",
        |value| value.as_str().is_some_and(|s| NANOID_PATTERN.is_match(s)),
        |value| id_error(NANOID_MALFORMED_ERROR, "nanoId", value),
    ))
}

/// Opens a declaration for a UUID identifier type: format check plus
/// generator.
#[must_use]
pub fn uuid(name: impl Into<String>) -> TypeDeclaration {
    ValueObjectType::declare(name, PrimitiveKind::String)
        .with(uuid_default())
        .with(uuid_format())
}

/// Opens a declaration for a ULID identifier type: format check plus
/// generator.
#[must_use]
pub fn ulid(name: impl Into<String>) -> TypeDeclaration {
    ValueObjectType::declare(name, PrimitiveKind::String)
        .with(ulid_default())
        .with(ulid_format())
}

/// Opens a declaration for a nanoid identifier type: format check plus
/// generator.
#[must_use]
pub fn nanoid(name: impl Into<String>) -> TypeDeclaration {
    ValueObjectType::declare(name, PrimitiveKind::String)
        .with(nanoid_default())
        .with(nanoid_format())
}
