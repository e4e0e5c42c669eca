//! Error taxonomy for domain failures.
//!
//! Every validation or business-rule failure in this crate is reported as a
//! [`DomainError`]: a plain structured value carrying a scope, a stable code,
//! a human-readable message, and optional diagnostic data. Errors are
//! returned, never thrown; they are safe to log, serialize, or compare by
//! code and scope.
//!
//! Error codes are uppercase, underscore-separated, and always end in
//! `_ERROR`. Each code belongs to exactly one [`ErrorFamily`], which binds it
//! to its [`ErrorScope`]. The display name of an error is derived
//! deterministically from its code: `STRING_MIN_LENGTH_ERROR` becomes
//! `StringMinLengthError`.
//!
//! # Examples
//!
//! ```rust
//! use hexon::errors::{ErrorFamily, ErrorScope};
//!
//! let family = ErrorFamily::new(&[
//!     ("USER_NOT_ADULT_ERROR", ErrorScope::BusinessRuleError),
//! ]);
//!
//! let error = family.error("USER_NOT_ADULT_ERROR", "The user must be an adult");
//! assert_eq!(error.scope, ErrorScope::BusinessRuleError);
//! assert_eq!(error.name(), "UserNotAdultError");
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The architectural layer that raised an error.
///
/// The scope set is closed: every domain error belongs to exactly one of
/// these categories, and a code determines its scope through the family it
/// was defined in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorScope {
    /// A business rule was violated (e.g. an email address already in use).
    BusinessRuleError,
    /// A value object failed construction-time validation.
    ValueObjectError,
    /// An external collaborator (port, repository) failed in a way that
    /// affects domain logic.
    AdapterError,
    /// A domain specification was not satisfied (e.g. an inactive account
    /// attempting to log in).
    SpecificationError,
    /// A use case could not complete its operation.
    UseCaseError,
}

impl ErrorScope {
    /// Returns the canonical uppercase form of the scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BusinessRuleError => "BUSINESS_RULE_ERROR",
            Self::ValueObjectError => "VALUE_OBJECT_ERROR",
            Self::AdapterError => "ADAPTER_ERROR",
            Self::SpecificationError => "SPECIFICATION_ERROR",
            Self::UseCaseError => "USE_CASE_ERROR",
        }
    }
}

impl fmt::Display for ErrorScope {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A structured domain failure.
///
/// Domain errors are expected, data-dependent outcomes: they travel through
/// `Result` values and never cross a value-object boundary as a panic. The
/// `data` map carries the violating value (or a descriptive subset) for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct DomainError {
    /// The layer that raised the error.
    pub scope: ErrorScope,
    /// Stable uppercase code ending in `_ERROR`.
    pub code: &'static str,
    /// Human-readable description of the failure.
    pub message: String,
    /// Additional diagnostic data, typically including the offending value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl DomainError {
    /// The display name derived from the error code.
    ///
    /// ```rust
    /// use hexon::errors::{ErrorFamily, ErrorScope};
    ///
    /// let family = ErrorFamily::new(&[
    ///     ("STRING_MIN_LENGTH_ERROR", ErrorScope::ValueObjectError),
    /// ]);
    /// let error = family.error("STRING_MIN_LENGTH_ERROR", "too short");
    /// assert_eq!(error.name(), "StringMinLengthError");
    /// ```
    #[must_use]
    pub fn name(&self) -> String {
        derive_type_name(self.code)
    }
}

/// A closed family of error codes sharing one data shape, each bound to its
/// scope.
///
/// Families are defined once, at startup, and then only mint error
/// instances. Defining a family with a malformed code, or minting an error
/// for a code outside the family, is a programmer error and panics.
#[derive(Debug, Clone)]
pub struct ErrorFamily {
    scopes: HashMap<&'static str, ErrorScope>,
}

impl ErrorFamily {
    /// Defines a family from a code-to-scope mapping.
    ///
    /// # Panics
    ///
    /// Panics if any code is not uppercase, underscore-separated, and
    /// ending in `_ERROR`. A malformed code is a declaration bug, not a
    /// recoverable condition.
    #[must_use]
    pub fn new(mapping: &[(&'static str, ErrorScope)]) -> Self {
        let mut scopes = HashMap::with_capacity(mapping.len());
        for &(code, scope) in mapping {
            assert!(
                is_valid_error_code(code),
                "malformed error code `{code}`: codes must be uppercase, \
                 underscore-separated, and end in `_ERROR`"
            );
            scopes.insert(code, scope);
        }
        Self { scopes }
    }

    /// The scope bound to `code`, if the code belongs to this family.
    #[must_use]
    pub fn scope_of(&self, code: &str) -> Option<ErrorScope> {
        self.scopes.get(code).copied()
    }

    /// Returns true if `code` belongs to this family.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.scopes.contains_key(code)
    }

    /// Mints an error for `code` with no diagnostic data.
    ///
    /// # Panics
    ///
    /// Panics if `code` was not declared in this family.
    #[must_use]
    pub fn error(&self, code: &'static str, message: impl Into<String>) -> DomainError {
        self.build(code, message.into(), None)
    }

    /// Mints an error for `code` carrying diagnostic data.
    ///
    /// # Panics
    ///
    /// Panics if `code` was not declared in this family.
    #[must_use]
    pub fn error_with(
        &self,
        code: &'static str,
        message: impl Into<String>,
        data: Map<String, Value>,
    ) -> DomainError {
        self.build(code, message.into(), Some(data))
    }

    fn build(&self, code: &'static str, message: String, data: Option<Map<String, Value>>) -> DomainError {
        let scope = self
            .scopes
            .get(code)
            .copied()
            .unwrap_or_else(|| panic!("error code `{code}` was not declared in this family"));

        DomainError {
            scope,
            code,
            message,
            data,
        }
    }
}

/// Derives a PascalCase type name from an uppercase, underscore-separated
/// code.
///
/// The rule applies identically to error codes and event codes:
/// `STRING_MIN_LENGTH_ERROR` → `StringMinLengthError`,
/// `USER_CREATED_EVENT` → `UserCreatedEvent`.
#[must_use]
pub fn derive_type_name(code: &str) -> String {
    code.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect()
}

fn is_valid_error_code(code: &str) -> bool {
    code.ends_with("_ERROR")
        && code.len() > "_ERROR".len()
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
