//! # hexon
//!
//! A toolkit for building validated, immutable domain primitives: value
//! objects, entities, domain errors, and domain events.
//!
//! ## Overview
//!
//! Domain types are declared once at startup and sealed into immutable,
//! shareable handles. Construction after that point is a pure function from
//! an optional primitive to a `Result`:
//!
//! - **Errors**: scoped, coded [`errors::DomainError`] values with
//!   structured diagnostic data
//! - **Value Objects**: declaration, validator and default-value
//!   attachments, and the `create` algorithm in [`value_object`]
//! - **Validator Families**: ready-made string, number, date, enumeration,
//!   and identifier rules
//! - **Entities**: value-object records and their primitive projection in
//!   [`entity`]
//! - **Events**: timestamped state-change records in [`event`]
//! - **Criteria**: composable filters over primitive projections in
//!   [`specification`]
//!
//! ## Example
//!
//! ```rust
//! use hexon::prelude::*;
//!
//! let user_name = ValueObjectType::declare("UserName", PrimitiveKind::String)
//!     .with(string::min_length(5))
//!     .with(string::max_length(15))
//!     .seal();
//!
//! let name = user_name.create(Some("Bob Smith".into())).unwrap();
//! assert_eq!(name.value().as_str(), Some("Bob Smith"));
//!
//! let error = user_name.create(Some("Bob".into())).unwrap_err();
//! assert_eq!(error.code, "STRING_MIN_LENGTH_ERROR");
//! ```

#![warn(missing_docs)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and the per-kind validator families.
///
/// # Usage
///
/// ```rust
/// use hexon::prelude::*;
/// ```
pub mod prelude {
    pub use crate::entity::{CollectionElement, Entity, EntityField, EntityProps, Fields};
    pub use crate::errors::{DomainError, ErrorFamily, ErrorScope};
    pub use crate::event::{DomainEvent, EventCode};
    pub use crate::specification::{Criteria, Filter, Operator};
    pub use crate::value_object::{
        Attachment, Primitive, PrimitiveKind, TypeDeclaration, Validator, ValueObject,
        ValueObjectType, date, enumeration, id, number, string,
    };
}

pub mod entity;
pub mod errors;
pub mod event;
pub mod specification;
pub mod value_object;
