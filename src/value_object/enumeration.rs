//! Bounded enumerations over string or number members.
//!
//! An enumeration type is an ordinary value-object type whose membership
//! validator constrains the value to a closed set. [`of`] opens a
//! declaration with the membership check pre-attached, mirroring how the
//! other ready-made declarations work.

use std::sync::LazyLock;

use crate::errors::{ErrorFamily, ErrorScope};
use crate::value_object::attachment::Attachment;
use crate::value_object::factory::{TypeDeclaration, ValueObjectType};
use crate::value_object::primitive::Primitive;
use crate::value_object::validator::Validator;

/// The value is not a member of the enumeration.
pub const ENUM_INVALID_MEMBER_ERROR: &str = "ENUM_INVALID_MEMBER_ERROR";

static ENUM_ERRORS: LazyLock<ErrorFamily> =
    LazyLock::new(|| ErrorFamily::new(&[(ENUM_INVALID_MEMBER_ERROR, ErrorScope::ValueObjectError)]));

/// Validates that the value is one of `allowed`.
///
/// The failure data carries both the offending value and the allowed
/// members.
#[must_use]
pub fn members(allowed: Vec<Primitive>) -> Attachment {
    let allowed_values: Vec<serde_json::Value> =
        allowed.iter().map(Primitive::to_value).collect();

    Attachment::validation(Validator::from_predicate(
        "enumContains",
        move |value| allowed.contains(value),
        move |value| {
            let mut data = serde_json::Map::new();
            data.insert("value".to_string(), value.to_value());
            data.insert(
                "allowedValues".to_string(),
                serde_json::Value::Array(allowed_values.clone()),
            );
            ENUM_ERRORS.error_with(
                ENUM_INVALID_MEMBER_ERROR,
                format!("Invalid enum value: {value}"),
                data,
            )
        },
    ))
}

/// Opens a declaration for an enumeration type with the membership
/// validator pre-attached.
///
/// The primitive kind is taken from the first member; all members must be
/// strings or numbers.
///
/// # Panics
///
/// Panics when `allowed` is empty or contains a member that is neither a
/// string nor a number. An ill-formed enumeration is a declaration bug.
#[must_use]
pub fn of(name: impl Into<String>, allowed: Vec<Primitive>) -> TypeDeclaration {
    let name = name.into();
    let kind = allowed
        .first()
        .unwrap_or_else(|| panic!("enumeration `{name}` declared with no members"))
        .kind();
    assert!(
        allowed.iter().all(|member| matches!(
            member,
            Primitive::String(_) | Primitive::Number(_)
        )),
        "enumeration `{name}` members must be strings or numbers"
    );

    ValueObjectType::declare(name, kind).with(members(allowed))
}
