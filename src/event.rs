//! Domain events.
//!
//! A domain event is a timestamped, uniquely identified record of a state
//! change, carrying the primitive projection of an entity-shaped record as
//! its payload. Event codes follow the same convention as error codes —
//! uppercase, underscore-separated — but end in `_EVENT`, and the event
//! name is derived from the code by the same rule
//! (`USER_CREATED_EVENT` → `UserCreatedEvent`).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::entity::EntityProps;
use crate::errors::derive_type_name;

/// An uppercase, underscore-separated code ending in `_EVENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventCode(&'static str);

impl EventCode {
    /// Wraps a code after checking its shape.
    ///
    /// # Panics
    ///
    /// Panics if the code is not uppercase, underscore-separated, and
    /// ending in `_EVENT`. A malformed code is a declaration bug.
    #[must_use]
    pub fn new(code: &'static str) -> Self {
        assert!(
            is_valid_event_code(code),
            "malformed event code `{code}`: codes must be uppercase, \
             underscore-separated, and end in `_EVENT`"
        );
        Self(code)
    }

    /// The raw code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// The display name derived from the code.
    #[must_use]
    pub fn derive_name(self) -> String {
        derive_type_name(self.0)
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

fn is_valid_event_code(code: &str) -> bool {
    code.ends_with("_EVENT")
        && code.len() > "_EVENT".len()
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// A timestamped, uniquely identified record of a domain state change.
///
/// The canonical string form — for logs or message brokers — is the JSON of
/// the record in field order `id, timestamp, name, code, payload`.
#[derive(Debug, Clone, Serialize)]
pub struct DomainEvent {
    /// Unique identifier of this event occurrence.
    pub id: String,
    /// When the event was created.
    pub timestamp: DateTime<Utc>,
    /// Display name derived from the code.
    pub name: String,
    /// The event code identifying the kind of change.
    pub code: EventCode,
    /// The primitive projection of the relevant entity properties.
    pub payload: Map<String, Value>,
}

impl DomainEvent {
    /// Creates an event for `code`, projecting `props` as the payload.
    ///
    /// The id and timestamp are generated here: a fresh UUID and the
    /// current UTC time.
    #[must_use]
    pub fn new(code: EventCode, props: &EntityProps) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            name: code.derive_name(),
            code,
            payload: props.to_primitives(),
        }
    }
}

impl fmt::Display for DomainEvent {
    /// Renders the canonical JSON form in field order
    /// `id, timestamp, name, code, payload`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        formatter.write_str(&json)
    }
}
