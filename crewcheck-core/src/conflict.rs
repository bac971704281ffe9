//! Conflict records: one person booked on two events.

use serde::{Deserialize, Serialize};

use crate::event::EventId;

/// A double booking of `person` across `event1` and `event2`.
///
/// The pair is undirected; use the helpers here instead of comparing
/// `event1`/`event2` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub event1: EventId,
    pub event2: EventId,
    pub person: String,
}

impl Conflict {
    pub fn new(
        event1: impl Into<EventId>,
        event2: impl Into<EventId>,
        person: impl Into<String>,
    ) -> Self {
        Conflict {
            event1: event1.into(),
            event2: event2.into(),
            person: person.into(),
        }
    }

    pub fn touches(&self, id: &EventId) -> bool {
        self.event1 == *id || self.event2 == *id
    }

    /// The endpoint opposite `id`, or `None` if this record doesn't touch it.
    pub fn other_side(&self, id: &EventId) -> Option<&EventId> {
        if self.event1 == *id {
            Some(&self.event2)
        } else if self.event2 == *id {
            Some(&self.event1)
        } else {
            None
        }
    }

    /// Whether this record links `a` and `b` (either direction).
    pub fn connects(&self, a: &EventId, b: &EventId) -> bool {
        (self.event1 == *a && self.event2 == *b) || (self.event1 == *b && self.event2 == *a)
    }

    /// Whether this record links `a` and `b` through `person`.
    pub fn links(&self, a: &EventId, b: &EventId, person: &str) -> bool {
        self.person == person && self.connects(a, b)
    }
}
