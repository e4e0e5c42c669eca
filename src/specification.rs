//! Criteria filters over primitive projections.
//!
//! A [`Filter`] names a field, an operator, and an expected value, and is
//! evaluated against a projected primitives record (the output of
//! [`EntityProps::to_primitives`]). Filters compose into [`Criteria`] with
//! `and`/`or`/`not`. The vocabulary follows the primitive kinds: equality
//! everywhere; contains/starts-with/ends-with for strings and arrays;
//! ordering for numbers and for dates through their RFC 3339 string form.
//!
//! Evaluation is total: an unknown field, or an operator applied to a
//! mismatched kind, is simply no match — never an error.
//!
//! [`EntityProps::to_primitives`]: crate::entity::EntityProps::to_primitives

use serde_json::{Map, Value};

use crate::value_object::Primitive;

/// The comparison to apply between a field and the expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// The field equals the expected value.
    Equals,
    /// The field differs from the expected value.
    NotEqual,
    /// A string field contains the expected substring, or an array field
    /// contains the expected element.
    Contains,
    /// An array field does not contain the expected element.
    NotContains,
    /// A string field starts with the expected prefix.
    StartsWith,
    /// A string field ends with the expected suffix.
    EndsWith,
    /// The field is strictly less than the expected value.
    Lt,
    /// The field is at most the expected value.
    Lte,
    /// The field is strictly greater than the expected value.
    Gt,
    /// The field is at least the expected value.
    Gte,
}

/// One field comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    operator: Operator,
    value: Primitive,
}

impl Filter {
    /// Creates a filter for `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Primitive>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Evaluates the filter against a projected primitives record.
    #[must_use]
    pub fn matches(&self, record: &Map<String, Value>) -> bool {
        let Some(actual) = record.get(&self.field) else {
            return false;
        };
        let expected = self.value.to_value();

        match self.operator {
            Operator::Equals => *actual == expected,
            Operator::NotEqual => *actual != expected,
            Operator::Contains => contains(actual, &expected),
            Operator::NotContains => {
                actual.is_array() && !contains(actual, &expected)
            }
            Operator::StartsWith => both_strings(actual, &expected)
                .is_some_and(|(actual, expected)| actual.starts_with(expected)),
            Operator::EndsWith => both_strings(actual, &expected)
                .is_some_and(|(actual, expected)| actual.ends_with(expected)),
            Operator::Lt => compare(actual, &expected)
                .is_some_and(|ordering| ordering == std::cmp::Ordering::Less),
            Operator::Lte => compare(actual, &expected).is_some_and(std::cmp::Ordering::is_le),
            Operator::Gt => compare(actual, &expected)
                .is_some_and(|ordering| ordering == std::cmp::Ordering::Greater),
            Operator::Gte => compare(actual, &expected).is_some_and(std::cmp::Ordering::is_ge),
        }
    }
}

fn contains(actual: &Value, expected: &Value) -> bool {
    match actual {
        Value::String(actual) => expected
            .as_str()
            .is_some_and(|expected| actual.contains(expected)),
        Value::Array(elements) => elements.contains(expected),
        _ => false,
    }
}

fn both_strings<'a>(actual: &'a Value, expected: &'a Value) -> Option<(&'a str, &'a str)> {
    Some((actual.as_str()?, expected.as_str()?))
}

fn compare(actual: &Value, expected: &Value) -> Option<std::cmp::Ordering> {
    match (actual, expected) {
        (Value::Number(actual), Value::Number(expected)) => {
            actual.as_f64()?.partial_cmp(&expected.as_f64()?)
        }
        // Dates project to RFC 3339 strings, which order lexicographically.
        (Value::String(actual), Value::String(expected)) => Some(actual.as_str().cmp(expected)),
        _ => None,
    }
}

/// A composable predicate over a projected primitives record.
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria {
    /// A single field comparison.
    Filter(Filter),
    /// All criteria must match.
    And(Vec<Criteria>),
    /// At least one criterion must match.
    Or(Vec<Criteria>),
    /// The inner criterion must not match.
    Not(Box<Criteria>),
}

impl Criteria {
    /// Wraps a single filter.
    #[must_use]
    pub fn filter(field: impl Into<String>, operator: Operator, value: impl Into<Primitive>) -> Self {
        Self::Filter(Filter::new(field, operator, value))
    }

    /// Evaluates the criteria against a projected primitives record.
    #[must_use]
    pub fn matches(&self, record: &Map<String, Value>) -> bool {
        match self {
            Self::Filter(filter) => filter.matches(record),
            Self::And(criteria) => criteria.iter().all(|criterion| criterion.matches(record)),
            Self::Or(criteria) => criteria.iter().any(|criterion| criterion.matches(record)),
            Self::Not(criterion) => !criterion.matches(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityField, EntityProps};
    use crate::value_object::{PrimitiveKind, ValueObjectType, enumeration, id, number};
    use rstest::rstest;

    fn user_record() -> Map<String, Value> {
        let user_id = id::uuid("UserId").seal();
        let user_name = ValueObjectType::declare("UserName", PrimitiveKind::String).seal();
        let age = ValueObjectType::declare("UserAge", PrimitiveKind::Number)
            .with(number::positive())
            .seal();
        let role = enumeration::of("UserRole", vec!["ADMIN".into(), "USER".into()]).seal();

        EntityProps::new(user_id.create(None).unwrap())
            .field("name", user_name.create(Some("Bob Smith".into())).unwrap())
            .field("age", age.create(Some(33.0.into())).unwrap())
            .field(
                "roles",
                EntityField::collection_of(vec![role.create(Some("ADMIN".into())).unwrap()]),
            )
            .to_primitives()
    }

    // =========================================================================
    // Filter Tests
    // =========================================================================

    #[rstest]
    #[case(Operator::Equals, "Bob Smith", true)]
    #[case(Operator::Equals, "Alice", false)]
    #[case(Operator::NotEqual, "Alice", true)]
    #[case(Operator::StartsWith, "Bob", true)]
    #[case(Operator::EndsWith, "Smith", true)]
    #[case(Operator::Contains, "b S", true)]
    #[case(Operator::Contains, "xyz", false)]
    fn string_operators(#[case] operator: Operator, #[case] expected: &str, #[case] matched: bool) {
        let filter = Filter::new("name", operator, expected);

        assert_eq!(filter.matches(&user_record()), matched);
    }

    #[rstest]
    #[case(Operator::Lt, 40.0, true)]
    #[case(Operator::Lt, 33.0, false)]
    #[case(Operator::Lte, 33.0, true)]
    #[case(Operator::Gt, 18.0, true)]
    #[case(Operator::Gte, 34.0, false)]
    fn number_operators(#[case] operator: Operator, #[case] expected: f64, #[case] matched: bool) {
        let filter = Filter::new("age", operator, expected);

        assert_eq!(filter.matches(&user_record()), matched);
    }

    #[rstest]
    fn array_contains_checks_membership() {
        let record = user_record();

        assert!(Filter::new("roles", Operator::Contains, "ADMIN").matches(&record));
        assert!(Filter::new("roles", Operator::NotContains, "USER").matches(&record));
        assert!(!Filter::new("roles", Operator::Contains, "USER").matches(&record));
    }

    #[rstest]
    fn unknown_field_never_matches() {
        let filter = Filter::new("missing", Operator::Equals, "anything");

        assert!(!filter.matches(&user_record()));
    }

    #[rstest]
    fn kind_mismatch_never_matches() {
        // Ordering against a string field that is not a date-like string.
        let filter = Filter::new("age", Operator::StartsWith, "3");

        assert!(!filter.matches(&user_record()));
    }

    // =========================================================================
    // Criteria Tests
    // =========================================================================

    #[rstest]
    fn and_requires_every_criterion() {
        let criteria = Criteria::And(vec![
            Criteria::filter("name", Operator::StartsWith, "Bob"),
            Criteria::filter("age", Operator::Gte, 18.0),
        ]);

        assert!(criteria.matches(&user_record()));

        let stricter = Criteria::And(vec![
            Criteria::filter("name", Operator::StartsWith, "Bob"),
            Criteria::filter("age", Operator::Gte, 65.0),
        ]);
        assert!(!stricter.matches(&user_record()));
    }

    #[rstest]
    fn or_requires_any_criterion() {
        let criteria = Criteria::Or(vec![
            Criteria::filter("name", Operator::Equals, "Alice"),
            Criteria::filter("age", Operator::Equals, 33.0),
        ]);

        assert!(criteria.matches(&user_record()));
    }

    #[rstest]
    fn not_negates_the_inner_criterion() {
        let criteria = Criteria::Not(Box::new(Criteria::filter(
            "name",
            Operator::Equals,
            "Alice",
        )));

        assert!(criteria.matches(&user_record()));
    }
}
