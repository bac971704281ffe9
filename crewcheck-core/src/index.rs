//! Per-event conflict lookups.

use std::collections::HashSet;

use crate::conflict::Conflict;
use crate::event::{Event, EventId};
use crate::schedule::Schedule;

impl Schedule {
    /// Conflict records touching `id`, in dataset order.
    pub fn conflicts_touching<'a>(&'a self, id: &EventId) -> impl Iterator<Item = &'a Conflict> {
        self.conflicts().iter().filter(move |c| c.touches(id))
    }

    /// Number of conflict records touching `id`. Duplicates are counted.
    pub fn conflict_count(&self, id: &EventId) -> usize {
        self.conflicts_touching(id).count()
    }

    /// Distinct people involved in conflicts on `id`, first-seen order.
    pub fn conflicting_staff(&self, id: &EventId) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.conflicts_touching(id)
            .map(|c| c.person.as_str())
            .filter(|person| seen.insert(*person))
            .collect()
    }

    /// Distinct people whose conflicts link `a` and `b`, first-seen order.
    pub fn linking_staff(&self, a: &EventId, b: &EventId) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.conflicts()
            .iter()
            .filter(|c| c.connects(a, b))
            .map(|c| c.person.as_str())
            .filter(|person| seen.insert(*person))
            .collect()
    }

    /// Ids on the other side of conflicts with `id`, deduplicated in
    /// discovery order. Self-links are skipped; dangling ids are kept.
    pub(crate) fn conflict_partners<'a>(&'a self, id: &EventId) -> Vec<&'a EventId> {
        let mut seen = HashSet::new();
        self.conflicts_touching(id)
            .filter_map(|c| c.other_side(id))
            .filter(|other| *other != id && seen.insert(*other))
            .collect()
    }

    /// Events that conflict with `id` because of `staff`.
    pub fn staff_conflicts(&self, id: &EventId, staff: &str) -> Vec<&Event> {
        let mut seen = HashSet::new();
        self.conflicts_touching(id)
            .filter(|c| c.person == staff)
            .filter_map(|c| c.other_side(id))
            .filter(|other| *other != id && seen.insert(*other))
            .filter_map(|other| self.event(other))
            .collect()
    }
}
