//! Named validation functions.
//!
//! A [`Validator`] is a pure check over a primitive: it either succeeds or
//! reports one specific [`DomainError`]. Validators carry a stable name used
//! for diagnostics and tests, never for dispatch.

use std::fmt;
use std::sync::Arc;

use crate::errors::DomainError;
use crate::value_object::primitive::Primitive;

/// The check function of a validator.
pub type ValidatorFn = Arc<dyn Fn(&Primitive) -> Result<(), DomainError> + Send + Sync>;

/// A named, pure validation function.
///
/// Cloning a validator is cheap: the check function is shared.
#[derive(Clone)]
pub struct Validator {
    name: &'static str,
    check: ValidatorFn,
}

impl Validator {
    /// Creates a validator from a check function.
    pub fn new(
        name: &'static str,
        check: impl Fn(&Primitive) -> Result<(), DomainError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            check: Arc::new(check),
        }
    }

    /// Creates a validator from a boolean predicate and an error
    /// constructor.
    ///
    /// The predicate decides success; on failure the error constructor
    /// receives the offending value and produces the specific error to
    /// report. This is the uniform shape every per-kind validator family is
    /// built from.
    pub fn from_predicate(
        name: &'static str,
        predicate: impl Fn(&Primitive) -> bool + Send + Sync + 'static,
        error: impl Fn(&Primitive) -> DomainError + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, move |value| {
            if predicate(value) {
                Ok(())
            } else {
                Err(error(value))
            }
        })
    }

    /// The stable diagnostic name of this validator.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the check against a primitive.
    ///
    /// # Errors
    ///
    /// Returns the validator's specific [`DomainError`] when the value does
    /// not satisfy the check.
    pub fn run(&self, value: &Primitive) -> Result<(), DomainError> {
        (self.check)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Validator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
