//! Declarative attachment of validators and default generators.
//!
//! An [`Attachment`] binds one behavior to a value-object type at
//! declaration time: either a validation or a default-value generator.
//! Attachments are designed to be stacked on a [`TypeDeclaration`] with
//! `.with(...)`; each per-kind family (string, number, date, enumeration,
//! identifier) is a set of functions returning attachments built from pure
//! predicates.
//!
//! [`TypeDeclaration`]: crate::value_object::TypeDeclaration

use std::fmt;
use std::sync::Arc;

use crate::value_object::primitive::Primitive;
use crate::value_object::registry::DefaultValueFn;
use crate::value_object::validator::Validator;

/// One behavior to bind to a type declaration.
pub enum Attachment {
    /// Registers a validator for the type.
    Validation(Validator),
    /// Binds the type's default-value generator (last one attached wins).
    DefaultValue(DefaultValueFn),
}

impl Attachment {
    /// Wraps a validator as an attachment.
    #[must_use]
    pub const fn validation(validator: Validator) -> Self {
        Self::Validation(validator)
    }

    /// Wraps a zero-argument generator as a default-value attachment.
    pub fn default_value(generator: impl Fn() -> Primitive + Send + Sync + 'static) -> Self {
        Self::DefaultValue(Arc::new(generator))
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(validator) => formatter
                .debug_tuple("Validation")
                .field(&validator.name())
                .finish(),
            Self::DefaultValue(_) => formatter.write_str("DefaultValue"),
        }
    }
}
