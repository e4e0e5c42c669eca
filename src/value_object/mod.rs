//! Value-object construction and validation engine.
//!
//! A value object is an immutable pair of primitive value and declared type
//! name, constructed only through validation. Types are declared once at
//! startup: a declaration stacks [`Attachment`]s (validators and an optional
//! default generator), then seals into an immutable [`ValueObjectType`]
//! whose `create` returns a `Result` instead of throwing.
//!
//! # Structure
//!
//! - [`primitive`] - The raw kinds a value object can hold
//! - [`validator`] - Named, pure validation functions
//! - [`registry`] - Per-type validator lists and default bindings
//! - [`attachment`] - Declarative binding of validators and defaults
//! - [`factory`] - Declaration, sealing, and the `create` algorithm
//! - [`string`], [`number`], [`date`] - Per-kind validator families
//! - [`enumeration`] - Bounded enumerations over strings and numbers
//! - [`id`] - Identifier formats and default generators
//!
//! # Examples
//!
//! ```rust
//! use hexon::value_object::{string, PrimitiveKind, ValueObjectType};
//!
//! let user_name = ValueObjectType::declare("UserName", PrimitiveKind::String)
//!     .with(string::min_length(3))
//!     .seal();
//!
//! assert!(user_name.create(Some("Joe".into())).is_ok());
//! assert!(user_name.create(Some("Jo".into())).is_err());
//! ```

pub mod attachment;
pub mod date;
pub mod enumeration;
pub mod factory;
pub mod id;
pub mod number;
pub mod primitive;
pub mod registry;
pub mod string;
pub mod validator;

pub use attachment::Attachment;
pub use factory::{TypeDeclaration, ValueObject, ValueObjectType};
pub use primitive::{Primitive, PrimitiveKind};
pub use registry::{DefaultBinding, DefaultValueFn, TypeKey, ValidatorRegistry};
pub use validator::{Validator, ValidatorFn};

use serde_json::{Map, Value};

/// Diagnostic data carrying the offending value, shared by every per-kind
/// validator family.
pub(crate) fn offending_value(value: &Primitive) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert("value".to_string(), value.to_value());
    data
}
