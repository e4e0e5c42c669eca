//! Entities and primitive projection.
//!
//! An entity is a record of value objects (plus a mandatory identity) that
//! represents a business concept. This module specifies only the thin
//! consumer side of the construction engine: composing value objects into
//! [`EntityProps`] and projecting them to raw primitives for logging,
//! events, or persistence adapters.
//!
//! Projection rules, per field:
//!
//! - a single value object emits its value;
//! - a collection whose elements are all raw primitives is emitted
//!   unchanged, otherwise each value-object element's value is extracted;
//! - a raw JSON-compatible field (string/number/boolean/object) is emitted
//!   as-is;
//! - a nested record is projected recursively;
//! - anything else is silently dropped.
//!
//! # Examples
//!
//! ```rust
//! use hexon::entity::{EntityField, EntityProps};
//! use hexon::value_object::{id, enumeration};
//!
//! let user_id = id::uuid("UserId").seal();
//! let role = enumeration::of("UserRole", vec!["ADMIN".into(), "USER".into()]).seal();
//!
//! let props = EntityProps::new(user_id.create(None).unwrap())
//!     .field("roles", EntityField::collection_of(vec![
//!         role.create(Some("ADMIN".into())).unwrap(),
//!         role.create(Some("USER".into())).unwrap(),
//!     ]));
//!
//! let primitives = props.to_primitives();
//! assert_eq!(primitives["roles"], serde_json::json!(["ADMIN", "USER"]));
//! ```

use serde_json::{Map, Value};

use crate::value_object::{Primitive, ValueObject};

/// One element of a collection field: either a raw primitive or a value
/// object.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionElement {
    /// A raw primitive, emitted as-is.
    Primitive(Primitive),
    /// A value object, projected to its value.
    Object(ValueObject),
}

impl From<Primitive> for CollectionElement {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

impl From<ValueObject> for CollectionElement {
    fn from(value: ValueObject) -> Self {
        Self::Object(value)
    }
}

/// A named field of an entity-shaped record.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityField {
    /// A single value object.
    Single(ValueObject),
    /// A collection of raw primitives and/or value objects.
    Collection(Vec<CollectionElement>),
    /// A nested record of fields, projected recursively.
    Nested(Fields),
    /// An already primitive-compatible value, emitted as-is.
    Raw(Value),
    /// A field the projection does not recognize; silently dropped.
    Opaque,
}

impl EntityField {
    /// A collection built entirely from value objects.
    #[must_use]
    pub fn collection_of(objects: Vec<ValueObject>) -> Self {
        Self::Collection(objects.into_iter().map(CollectionElement::Object).collect())
    }

    /// A collection built entirely from raw primitives.
    #[must_use]
    pub fn primitives_of(values: Vec<Primitive>) -> Self {
        Self::Collection(values.into_iter().map(CollectionElement::Primitive).collect())
    }
}

impl From<ValueObject> for EntityField {
    fn from(value: ValueObject) -> Self {
        Self::Single(value)
    }
}

/// An insertion-ordered record of named fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields(Vec<(String, EntityField)>);

impl Fields {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a field, keeping insertion order.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, field: impl Into<EntityField>) -> Self {
        self.0.push((name.into(), field.into()));
        self
    }

    /// Iterates the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityField)> {
        self.0.iter().map(|(name, field)| (name.as_str(), field))
    }
}

/// The properties of an entity: a mandatory identity value object plus an
/// insertion-ordered record of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityProps {
    id: ValueObject,
    fields: Fields,
}

impl EntityProps {
    /// Creates a record with the mandatory identity.
    #[must_use]
    pub const fn new(id: ValueObject) -> Self {
        Self {
            id,
            fields: Fields::new(),
        }
    }

    /// Appends a field, keeping insertion order.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: impl Into<EntityField>) -> Self {
        self.fields = self.fields.with(name, field);
        self
    }

    /// The identity value object.
    #[must_use]
    pub const fn id(&self) -> &ValueObject {
        &self.id
    }

    /// The non-identity fields, in insertion order.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Projects the record to raw primitives; see the module documentation
    /// for the per-field rules.
    #[must_use]
    pub fn to_primitives(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("id".to_string(), self.id.value().to_value());
        project_fields(&self.fields, &mut record);
        record
    }
}

fn project_fields(fields: &Fields, record: &mut Map<String, Value>) {
    for (name, field) in fields.iter() {
        match field {
            EntityField::Single(object) => {
                record.insert(name.to_string(), object.value().to_value());
            }
            EntityField::Collection(elements) => {
                record.insert(name.to_string(), project_collection(elements));
            }
            EntityField::Nested(nested) => {
                let mut nested_record = Map::new();
                project_fields(nested, &mut nested_record);
                record.insert(name.to_string(), Value::Object(nested_record));
            }
            EntityField::Raw(value) => {
                record.insert(name.to_string(), value.clone());
            }
            EntityField::Opaque => {}
        }
    }
}

fn project_collection(elements: &[CollectionElement]) -> Value {
    let all_raw_primitives = elements
        .iter()
        .all(|element| matches!(element, CollectionElement::Primitive(_)));

    if all_raw_primitives {
        // Already raw: the collection passes through unchanged.
        Value::Array(
            elements
                .iter()
                .filter_map(|element| match element {
                    CollectionElement::Primitive(primitive) => Some(primitive.to_value()),
                    CollectionElement::Object(_) => None,
                })
                .collect(),
        )
    } else {
        // At least one value object: extract values element by element.
        Value::Array(
            elements
                .iter()
                .map(|element| match element {
                    CollectionElement::Primitive(primitive) => primitive.to_value(),
                    CollectionElement::Object(object) => object.value().to_value(),
                })
                .collect(),
        )
    }
}

/// A domain entity: a thin wrapper over [`EntityProps`] exposing the
/// primitive projection. Behavior and invariants beyond projection belong
/// to the concrete domain types composing this one.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    props: EntityProps,
}

impl Entity {
    /// Wraps a validated property record.
    #[must_use]
    pub const fn new(props: EntityProps) -> Self {
        Self { props }
    }

    /// The identity value object.
    #[must_use]
    pub const fn id(&self) -> &ValueObject {
        self.props.id()
    }

    /// The underlying properties.
    #[must_use]
    pub const fn props(&self) -> &EntityProps {
        &self.props
    }

    /// The primitive projection of the properties.
    #[must_use]
    pub fn primitives(&self) -> Map<String, Value> {
        self.props.to_primitives()
    }
}
