//! The loaded board data: events, conflicts and the available staff pool.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::conflict::Conflict;
use crate::event::{BenchStaff, Event, EventId};

/// Immutable snapshot of board data with an id lookup.
///
/// Every query on the board goes through a `Schedule`. Nothing here is
/// mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    events: Vec<Event>,
    conflicts: Vec<Conflict>,
    bench: Vec<BenchStaff>,
    by_id: HashMap<EventId, usize>,
}

impl Schedule {
    pub fn new(events: Vec<Event>, conflicts: Vec<Conflict>) -> Self {
        let mut by_id = HashMap::with_capacity(events.len());
        for (i, event) in events.iter().enumerate() {
            // First occurrence wins
            by_id.entry(event.id.clone()).or_insert(i);
        }

        Schedule {
            events,
            conflicts,
            bench: Vec::new(),
            by_id,
        }
    }

    pub fn with_bench(mut self, bench: Vec<BenchStaff>) -> Self {
        self.bench = bench;
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn bench(&self) -> &[BenchStaff] {
        &self.bench
    }

    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.by_id.get(id).map(|&i| &self.events[i])
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Distinct companies in first-seen order.
    pub fn companies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .map(|e| e.company.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Report malformed or inconsistent records.
    ///
    /// Queries tolerate all of these; this exists so loaders can surface
    /// them.
    pub fn validate(&self) -> Vec<DataIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for event in &self.events {
            if !seen.insert(&event.id) {
                issues.push(DataIssue::DuplicateEventId(event.id.clone()));
            }
            if event.window().is_none() {
                issues.push(DataIssue::MalformedTime {
                    event_id: event.id.clone(),
                    time: event.time.clone(),
                });
            }
        }

        for conflict in &self.conflicts {
            for id in [&conflict.event1, &conflict.event2] {
                if !self.contains(id) {
                    issues.push(DataIssue::DanglingReference {
                        event_id: id.clone(),
                        person: conflict.person.clone(),
                    });
                }
            }
            if conflict.event1 == conflict.event2 {
                issues.push(DataIssue::SelfConflict {
                    event_id: conflict.event1.clone(),
                    person: conflict.person.clone(),
                });
            }
        }

        issues
    }
}

/// A data defect found by [`Schedule::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataIssue {
    DuplicateEventId(EventId),
    MalformedTime { event_id: EventId, time: String },
    DanglingReference { event_id: EventId, person: String },
    SelfConflict { event_id: EventId, person: String },
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataIssue::DuplicateEventId(id) => write!(f, "event id '{id}' appears more than once"),
            DataIssue::MalformedTime { event_id, time } => {
                write!(f, "event '{event_id}' has unparseable time '{time}'")
            }
            DataIssue::DanglingReference { event_id, person } => write!(
                f,
                "conflict for '{person}' references missing event '{event_id}'"
            ),
            DataIssue::SelfConflict { event_id, person } => write!(
                f,
                "conflict for '{person}' links event '{event_id}' to itself"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Staff;

    fn event(id: &str, company: &str, time: &str) -> Event {
        Event {
            id: EventId::new(id),
            name: format!("Event {id}"),
            time: time.to_string(),
            company: company.to_string(),
            staff: vec![Staff::new("Sam", "Host")],
        }
    }

    #[test]
    fn test_companies_in_first_seen_order() {
        let schedule = Schedule::new(
            vec![
                event("1", "Retail Co", "09:00 - 10:00"),
                event("2", "Tech Corp", "09:00 - 10:00"),
                event("3", "Retail Co", "09:00 - 10:00"),
            ],
            vec![],
        );

        assert_eq!(schedule.companies(), vec!["Retail Co", "Tech Corp"]);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let mut second = event("1", "Tech Corp", "11:00 - 12:00");
        second.name = "Shadow".to_string();
        let schedule = Schedule::new(
            vec![event("1", "Retail Co", "09:00 - 10:00"), second],
            vec![],
        );

        let found = schedule.event(&EventId::new("1")).unwrap();
        assert_eq!(found.company, "Retail Co");
        assert_eq!(
            schedule.validate(),
            vec![DataIssue::DuplicateEventId(EventId::new("1"))]
        );
    }

    #[test]
    fn test_validate_reports_defects() {
        let schedule = Schedule::new(
            vec![
                event("1", "Tech Corp", "morning"),
                event("2", "Tech Corp", "09:00 - 10:00"),
            ],
            vec![
                Conflict::new("1", "9", "Sam"),
                Conflict::new("2", "2", "Lee"),
            ],
        );

        let issues = schedule.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&DataIssue::MalformedTime {
            event_id: EventId::new("1"),
            time: "morning".to_string(),
        }));
        assert!(issues.contains(&DataIssue::DanglingReference {
            event_id: EventId::new("9"),
            person: "Sam".to_string(),
        }));
        assert!(issues.contains(&DataIssue::SelfConflict {
            event_id: EventId::new("2"),
            person: "Lee".to_string(),
        }));
    }
}
