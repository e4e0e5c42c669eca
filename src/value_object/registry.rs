//! Validation registry and default-value binding.
//!
//! Both stores are keyed by [`TypeKey`], a process-unique token identifying
//! one declared value-object type (not its runtime instances). They are
//! populated during the declaration phase, strictly before the first
//! `create` call for the type, and are never mutated afterwards: the
//! factory seals an immutable snapshot per type, so post-initialization
//! reads need no locking.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::value_object::primitive::Primitive;
use crate::value_object::validator::Validator;

/// A process-unique token identifying one declared value-object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey(u64);

impl TypeKey {
    /// Allocates a fresh key, distinct from every key allocated before.
    #[must_use]
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Per-type ordered collection of validators.
///
/// Entries are append-only: there is no removal operation, and each
/// `register` call adds exactly one entry (avoiding duplicates is the
/// caller's responsibility).
#[derive(Debug, Default)]
pub struct ValidatorRegistry {
    entries: HashMap<TypeKey, Vec<Validator>>,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validator to the type's list, creating the list if absent.
    pub fn register(&mut self, key: TypeKey, validator: Validator) {
        self.entries.entry(key).or_default().push(validator);
    }

    /// The validators registered for a type, in registration order.
    ///
    /// An absent key yields an empty slice, never an error.
    #[must_use]
    pub fn get(&self, key: TypeKey) -> &[Validator] {
        self.entries.get(&key).map_or(&[], Vec::as_slice)
    }
}

/// A zero-argument generator producing a value when none is supplied.
pub type DefaultValueFn = Arc<dyn Fn() -> Primitive + Send + Sync>;

/// Per-type optional default-value generator.
///
/// At most one generator per type: a second binding overwrites the first.
#[derive(Default)]
pub struct DefaultBinding {
    generators: HashMap<TypeKey, DefaultValueFn>,
}

impl DefaultBinding {
    /// Creates an empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the generator for a type; last write wins.
    pub fn bind(&mut self, key: TypeKey, generator: DefaultValueFn) {
        self.generators.insert(key, generator);
    }

    /// The generator bound for a type, if any.
    #[must_use]
    pub fn get(&self, key: TypeKey) -> Option<&DefaultValueFn> {
        self.generators.get(&key)
    }
}

impl std::fmt::Debug for DefaultBinding {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DefaultBinding")
            .field("bound_types", &self.generators.len())
            .finish()
    }
}
