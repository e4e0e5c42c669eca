//! Value-object declaration and construction.
//!
//! A value-object type is declared once, at startup: [`ValueObjectType::declare`]
//! opens a [`TypeDeclaration`], attachments stack validators and an optional
//! default generator onto it, and [`TypeDeclaration::seal`] freezes the
//! result into an immutable [`ValueObjectType`]. After sealing, `create`
//! only reads the frozen snapshot and allocates a new instance, so
//! concurrent `create` calls are fully independent and need no locking.
//!
//! # Examples
//!
//! ```rust
//! use hexon::value_object::{string, PrimitiveKind, ValueObjectType};
//!
//! let user_name = ValueObjectType::declare("UserName", PrimitiveKind::String)
//!     .with(string::min_length(3))
//!     .with(string::max_length(15))
//!     .seal();
//!
//! let joe = user_name.create(Some("Joe".into())).unwrap();
//! assert_eq!(joe.value().as_str(), Some("Joe"));
//!
//! let too_short = user_name.create(Some("Jo".into())).unwrap_err();
//! assert_eq!(too_short.code, "STRING_MIN_LENGTH_ERROR");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::errors::DomainError;
use crate::value_object::attachment::Attachment;
use crate::value_object::primitive::{Primitive, PrimitiveKind};
use crate::value_object::registry::{DefaultBinding, DefaultValueFn, TypeKey, ValidatorRegistry};
use crate::value_object::validator::Validator;

/// An immutable pair of primitive value and declared type name.
///
/// Instances are created only through [`ValueObjectType::create`], so a
/// value object always satisfies every validator of its type. Identity is
/// structural: two value objects are equal iff they have the same declared
/// type name and the same value. A value object is never equal to an
/// instance of a structurally identical but differently named type.
#[derive(Debug, Clone)]
pub struct ValueObject {
    value: Primitive,
    type_name: Arc<str>,
}

impl ValueObject {
    pub(crate) fn new(value: Primitive, type_name: Arc<str>) -> Self {
        Self { value, type_name }
    }

    /// The validated primitive value.
    #[must_use]
    pub const fn value(&self) -> &Primitive {
        &self.value
    }

    /// The declared type name, e.g. `"UserName"`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Structural equality: same declared type name and same value.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl PartialEq for ValueObject {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.value == other.value
    }
}

impl fmt::Display for ValueObject {
    /// Renders the JSON form `{"value":...}`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}",
            serde_json::json!({ "value": self.value })
        )
    }
}

/// The declaration phase of a value-object type.
///
/// A declaration owns the type's slot in the validation registry and the
/// default binding while attachments run; [`seal`](Self::seal) snapshots both
/// into the frozen [`ValueObjectType`]. Attachments register in call order.
#[derive(Debug)]
pub struct TypeDeclaration {
    key: TypeKey,
    name: String,
    kind: PrimitiveKind,
    registry: ValidatorRegistry,
    defaults: DefaultBinding,
}

impl TypeDeclaration {
    /// Applies one attachment: a validation is appended to the registry, a
    /// default value overwrites any previously bound generator.
    #[must_use]
    pub fn with(mut self, attachment: Attachment) -> Self {
        match attachment {
            Attachment::Validation(validator) => self.registry.register(self.key, validator),
            Attachment::DefaultValue(generator) => self.defaults.bind(self.key, generator),
        }
        self
    }

    /// Freezes the declaration into an immutable type.
    #[must_use]
    pub fn seal(self) -> ValueObjectType {
        let validators: Arc<[Validator]> = self.registry.get(self.key).to_vec().into();
        let default_value = self.defaults.get(self.key).cloned();

        tracing::debug!(
            name = %self.name,
            kind = %self.kind,
            validators = validators.len(),
            has_default = default_value.is_some(),
            "sealed value object type"
        );

        ValueObjectType {
            key: self.key,
            name: self.name.into(),
            kind: self.kind,
            validators,
            default_value,
        }
    }
}

/// A sealed, immutable value-object type: the construction algorithm
/// parameterized by a name, a primitive kind, an ordered validator set, and
/// an optional default generator.
#[derive(Clone)]
pub struct ValueObjectType {
    key: TypeKey,
    name: Arc<str>,
    kind: PrimitiveKind,
    validators: Arc<[Validator]>,
    default_value: Option<DefaultValueFn>,
}

impl ValueObjectType {
    /// Opens a declaration for a new type.
    ///
    /// Declarations run once, during startup, strictly before the first
    /// `create` call for the type.
    #[must_use]
    pub fn declare(name: impl Into<String>, kind: PrimitiveKind) -> TypeDeclaration {
        TypeDeclaration {
            key: TypeKey::next(),
            name: name.into(),
            kind,
            registry: ValidatorRegistry::new(),
            defaults: DefaultBinding::new(),
        }
    }

    /// Creates a validated value object.
    ///
    /// When `value` is `None` the bound default generator supplies the
    /// value. Every registered validator runs against the final value,
    /// unconditionally; the first failure in registration order is
    /// returned, otherwise a new immutable [`ValueObject`] holding the
    /// final value and the declared type name.
    ///
    /// An explicit value never triggers the generator, even when it equals
    /// what the generator would produce.
    ///
    /// # Errors
    ///
    /// Returns the [`DomainError`] of the first failing validator in
    /// registration order.
    ///
    /// # Panics
    ///
    /// Panics when `value` is `None` and no default generator is bound.
    /// That is a misdeclared type, not a bad input: it must fail fast and
    /// loudly instead of being coerced into a domain error.
    pub fn create(&self, value: Option<Primitive>) -> Result<ValueObject, DomainError> {
        let final_value = match value {
            Some(value) => value,
            None => {
                let generator = self.default_value.as_ref().unwrap_or_else(|| {
                    panic!(
                        "value not provided and type `{}` has no default value generator",
                        self.name
                    )
                });
                generator()
            }
        };

        // Every validator runs; the first failure in registration order wins.
        let mut first_failure = None;
        for validator in self.validators.iter() {
            if let Err(error) = validator.run(&final_value) {
                first_failure.get_or_insert(error);
            }
        }

        match first_failure {
            Some(error) => {
                tracing::debug!(
                    type_name = %self.name,
                    code = error.code,
                    "value object validation failed"
                );
                Err(error)
            }
            None => Ok(ValueObject::new(final_value, Arc::clone(&self.name))),
        }
    }

    /// The unique key of this declared type.
    #[must_use]
    pub const fn key(&self) -> TypeKey {
        self.key
    }

    /// The declared display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The primitive kind this type holds.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// The registered validators, in registration order.
    #[must_use]
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// The diagnostic names of the registered validators.
    #[must_use]
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(Validator::name).collect()
    }

    /// Whether a default-value generator is bound.
    #[must_use]
    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }
}

impl fmt::Debug for ValueObjectType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ValueObjectType")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("validators", &self.validator_names())
            .field("has_default_value", &self.has_default_value())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorFamily, ErrorScope};
    use rstest::rstest;
    use std::sync::LazyLock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static TEST_ERRORS: LazyLock<ErrorFamily> = LazyLock::new(|| {
        ErrorFamily::new(&[
            ("STRING_EMPTY_ERROR", ErrorScope::ValueObjectError),
            ("STRING_UPPER_ERROR", ErrorScope::ValueObjectError),
        ])
    });

    fn not_empty() -> Attachment {
        Attachment::validation(Validator::from_predicate(
            "notEmpty",
            |value| value.as_str().is_some_and(|s| !s.is_empty()),
            |value| {
                let mut data = serde_json::Map::new();
                data.insert("value".to_string(), value.to_value());
                TEST_ERRORS.error_with("STRING_EMPTY_ERROR", "empty string", data)
            },
        ))
    }

    fn all_uppercase() -> Attachment {
        Attachment::validation(Validator::from_predicate(
            "allUppercase",
            |value| {
                value
                    .as_str()
                    .is_some_and(|s| s.chars().all(|c| c.is_ascii_uppercase()))
            },
            |value| {
                let mut data = serde_json::Map::new();
                data.insert("value".to_string(), value.to_value());
                TEST_ERRORS.error_with("STRING_UPPER_ERROR", "not uppercase", data)
            },
        ))
    }

    // =========================================================================
    // Creation Tests
    // =========================================================================

    #[rstest]
    fn accepted_value_round_trips_untouched() {
        let code = ValueObjectType::declare("CountryCode", PrimitiveKind::String)
            .with(not_empty())
            .with(all_uppercase())
            .seal();

        let instance = code.create(Some("BR".into())).unwrap();

        assert_eq!(instance.value(), &Primitive::from("BR"));
        assert_eq!(instance.type_name(), "CountryCode");
    }

    #[rstest]
    fn first_failing_validator_in_registration_order_wins() {
        let code = ValueObjectType::declare("CountryCode", PrimitiveKind::String)
            .with(not_empty())
            .with(all_uppercase())
            .seal();

        // Both validators fail for the empty string; the first registered
        // one is reported.
        let error = code.create(Some("".into())).unwrap_err();
        assert_eq!(error.code, "STRING_EMPTY_ERROR");

        let error = code.create(Some("br".into())).unwrap_err();
        assert_eq!(error.code, "STRING_UPPER_ERROR");
    }

    #[rstest]
    fn failure_data_includes_offending_value() {
        let code = ValueObjectType::declare("CountryCode", PrimitiveKind::String)
            .with(all_uppercase())
            .seal();

        let error = code.create(Some("br".into())).unwrap_err();

        assert_eq!(error.data.unwrap()["value"], serde_json::json!("br"));
    }

    #[rstest]
    fn every_validator_runs_even_after_a_failure() {
        static RUNS: AtomicUsize = AtomicUsize::new(0);

        let counting = |name: &'static str| {
            Attachment::validation(Validator::from_predicate(
                name,
                |_| {
                    RUNS.fetch_add(1, Ordering::SeqCst);
                    false
                },
                |_| TEST_ERRORS.error("STRING_EMPTY_ERROR", "always fails"),
            ))
        };

        let doomed = ValueObjectType::declare("Doomed", PrimitiveKind::String)
            .with(counting("first"))
            .with(counting("second"))
            .with(counting("third"))
            .seal();

        let _ = doomed.create(Some("anything".into()));

        assert_eq!(RUNS.load(Ordering::SeqCst), 3);
    }

    #[rstest]
    fn type_without_validators_accepts_anything() {
        let free = ValueObjectType::declare("FreeText", PrimitiveKind::String).seal();

        assert!(free.create(Some("anything at all".into())).is_ok());
    }

    // =========================================================================
    // Default Generator Tests
    // =========================================================================

    #[rstest]
    fn generator_is_invoked_only_when_value_is_absent() {
        static GENERATED: AtomicUsize = AtomicUsize::new(0);

        let stamped = ValueObjectType::declare("Stamped", PrimitiveKind::String)
            .with(Attachment::default_value(|| {
                GENERATED.fetch_add(1, Ordering::SeqCst);
                Primitive::from("generated")
            }))
            .seal();

        // An explicit value, even one equal to the generator's output,
        // never triggers the generator.
        let explicit = stamped.create(Some("generated".into())).unwrap();
        assert_eq!(GENERATED.load(Ordering::SeqCst), 0);
        assert_eq!(explicit.value().as_str(), Some("generated"));

        let defaulted = stamped.create(None).unwrap();
        assert_eq!(GENERATED.load(Ordering::SeqCst), 1);
        assert_eq!(defaulted.value().as_str(), Some("generated"));
    }

    #[rstest]
    fn last_default_attachment_wins() {
        let stamped = ValueObjectType::declare("Stamped", PrimitiveKind::String)
            .with(Attachment::default_value(|| Primitive::from("first")))
            .with(Attachment::default_value(|| Primitive::from("second")))
            .seal();

        let defaulted = stamped.create(None).unwrap();

        assert_eq!(defaulted.value().as_str(), Some("second"));
    }

    #[rstest]
    #[should_panic(expected = "has no default value generator")]
    fn missing_value_without_generator_panics() {
        let bare = ValueObjectType::declare("Bare", PrimitiveKind::String).seal();

        let _ = bare.create(None);
    }

    // =========================================================================
    // Registry Snapshot Tests
    // =========================================================================

    #[rstest]
    fn sealed_type_reports_every_attached_validator() {
        let code = ValueObjectType::declare("CountryCode", PrimitiveKind::String)
            .with(not_empty())
            .with(all_uppercase())
            .seal();

        assert_eq!(code.validators().len(), 2);
        let names = code.validator_names();
        assert!(names.contains(&"notEmpty"));
        assert!(names.contains(&"allUppercase"));
        assert!(!code.has_default_value());
    }

    #[rstest]
    fn attachment_count_is_independent_of_order() {
        let forward = ValueObjectType::declare("Forward", PrimitiveKind::String)
            .with(not_empty())
            .with(all_uppercase())
            .seal();
        let reversed = ValueObjectType::declare("Reversed", PrimitiveKind::String)
            .with(all_uppercase())
            .with(not_empty())
            .seal();

        assert_eq!(forward.validators().len(), reversed.validators().len());

        let mut forward_names = forward.validator_names();
        let mut reversed_names = reversed.validator_names();
        forward_names.sort_unstable();
        reversed_names.sort_unstable();
        assert_eq!(forward_names, reversed_names);
    }

    #[rstest]
    fn declared_types_have_distinct_keys() {
        let first = ValueObjectType::declare("First", PrimitiveKind::String).seal();
        let second = ValueObjectType::declare("Second", PrimitiveKind::String).seal();

        assert_ne!(first.key(), second.key());
    }

    // =========================================================================
    // ValueObject Equality Tests
    // =========================================================================

    #[rstest]
    fn equality_requires_same_type_name_and_value() {
        let name = ValueObjectType::declare("UserName", PrimitiveKind::String).seal();
        let nickname = ValueObjectType::declare("NickName", PrimitiveKind::String).seal();

        let joe = name.create(Some("Joe".into())).unwrap();
        let joe_again = name.create(Some("Joe".into())).unwrap();
        let jane = name.create(Some("Jane".into())).unwrap();
        let joe_nick = nickname.create(Some("Joe".into())).unwrap();

        // Reflexive and symmetric.
        assert!(joe.equals(&joe));
        assert!(joe.equals(&joe_again));
        assert!(joe_again.equals(&joe));

        // Different value, same type.
        assert!(!joe.equals(&jane));

        // Same value, structurally identical but differently named type.
        assert!(!joe.equals(&joe_nick));
    }

    #[rstest]
    fn display_renders_value_json() {
        let name = ValueObjectType::declare("UserName", PrimitiveKind::String).seal();
        let joe = name.create(Some("Joe".into())).unwrap();

        assert_eq!(joe.to_string(), r#"{"value":"Joe"}"#);
    }
}
