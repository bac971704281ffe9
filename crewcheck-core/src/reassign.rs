//! "Change staff" preview for a double-booked person.
//!
//! A preview answers: if `staff` keeps one of the two events, who could
//! cover the other? Nothing here modifies the schedule; choosing a
//! replacement only produces a summary for display.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CrewCheckError;
use crate::event::{BenchStaff, Event};
use crate::schedule::Schedule;
use crate::staff::{PositionGroup, group_by_position};

/// Which side of the conflict gets the replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReassignTarget {
    /// Replace the person on the event being viewed
    #[default]
    Current,
    /// Replace the person on the conflicting event
    Conflict,
}

impl FromStr for ReassignTarget {
    type Err = CrewCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(ReassignTarget::Current),
            "conflict" => Ok(ReassignTarget::Conflict),
            _ => Err(CrewCheckError::Config(format!(
                "Unknown target '{s}'. Expected 'current' or 'conflict'"
            ))),
        }
    }
}

impl fmt::Display for ReassignTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReassignTarget::Current => write!(f, "current"),
            ReassignTarget::Conflict => write!(f, "conflict"),
        }
    }
}

/// What the user picked in the change-staff dialog.
#[derive(Debug, Clone)]
pub struct ReassignmentRequest<'a> {
    pub current: &'a Event,
    pub conflict: &'a Event,
    pub staff: &'a str,
    pub target: ReassignTarget,
}

/// Everything the dialog shows for a request.
#[derive(Debug, Clone)]
pub struct ReassignmentPreview<'a> {
    pub staff: &'a str,
    pub target: ReassignTarget,
    /// Event that would get a new person
    pub replaced_in: &'a Event,
    /// Event `staff` would stay on
    pub kept_in: &'a Event,
    pub position_in_current: &'a str,
    pub position_in_conflict: &'a str,
    /// Position to fill on `replaced_in`
    pub target_position: &'a str,
    pub current_by_position: Vec<PositionGroup>,
    pub conflict_by_position: Vec<PositionGroup>,
    /// Bench staff for `target_position`, best rated first
    pub candidates: Vec<&'a BenchStaff>,
}

/// The summary of a chosen replacement. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignmentChoice {
    pub replacement: String,
    pub replaces: String,
    pub position: String,
    pub replaced_in: String,
    pub kept_in: String,
}

impl fmt::Display for ReassignmentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} takes over as {} in {} ({} stays in {})",
            self.replacement, self.position, self.replaced_in, self.replaces, self.kept_in
        )
    }
}

impl Schedule {
    pub fn preview_reassignment<'a>(
        &'a self,
        request: &ReassignmentRequest<'a>,
    ) -> ReassignmentPreview<'a> {
        let (replaced_in, kept_in) = match request.target {
            ReassignTarget::Current => (request.current, request.conflict),
            ReassignTarget::Conflict => (request.conflict, request.current),
        };

        let position_in_current = request.current.position_or_default(request.staff);
        let position_in_conflict = request.conflict.position_or_default(request.staff);
        let target_position = replaced_in.position_or_default(request.staff);

        let mut candidates: Vec<&BenchStaff> = self
            .bench()
            .iter()
            .filter(|b| b.position == target_position)
            .filter(|b| b.name != request.staff && !replaced_in.has_staff(&b.name))
            .collect();
        candidates.sort_by(|a, b| by_rating(a, b).then_with(|| a.name.cmp(&b.name)));

        ReassignmentPreview {
            staff: request.staff,
            target: request.target,
            replaced_in,
            kept_in,
            position_in_current,
            position_in_conflict,
            target_position,
            current_by_position: group_by_position(&request.current.staff),
            conflict_by_position: group_by_position(&request.conflict.staff),
            candidates,
        }
    }
}

impl ReassignmentPreview<'_> {
    /// Select a replacement from the candidates. `None` if `name` isn't one.
    pub fn choose(&self, name: &str) -> Option<ReassignmentChoice> {
        let pick = self.candidates.iter().find(|c| c.name == name)?;

        Some(ReassignmentChoice {
            replacement: pick.name.clone(),
            replaces: self.staff.to_string(),
            position: self.target_position.to_string(),
            replaced_in: self.replaced_in.name.clone(),
            kept_in: self.kept_in.name.clone(),
        })
    }
}

/// Higher rating first; unrated last.
fn by_rating(a: &BenchStaff, b: &BenchStaff) -> Ordering {
    match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::Conflict;
    use crate::event::{EventId, Staff};

    fn bench(name: &str, position: &str, rating: Option<f32>) -> BenchStaff {
        BenchStaff {
            name: name.to_string(),
            position: position.to_string(),
            experience: None,
            rating,
        }
    }

    fn schedule() -> Schedule {
        let launch = Event {
            id: EventId::new("1"),
            name: "Product Launch".to_string(),
            time: "09:00 - 11:00".to_string(),
            company: "Tech Corp".to_string(),
            staff: vec![Staff::new("Sam", "Host"), Staff::new("Lee", "Designer")],
        };
        let gala = Event {
            id: EventId::new("2"),
            name: "Charity Gala".to_string(),
            time: "10:00 - 12:00".to_string(),
            company: "Healthcare Plus".to_string(),
            staff: vec![Staff::new("Sam", "Lead"), Staff::new("Kim", "Host")],
        };

        let pool = vec![
            bench("David", "Host", Some(4.6)),
            bench("Sarah", "Host", Some(4.8)),
            bench("Kim", "Host", Some(5.0)),
            bench("Noor", "Host", None),
            bench("James", "Lead", Some(4.9)),
        ];

        Schedule::new(vec![launch, gala], vec![Conflict::new("1", "2", "Sam")]).with_bench(pool)
    }

    #[test]
    fn test_preview_targets_current_event() {
        let schedule = schedule();
        let current = schedule.event(&EventId::new("1")).unwrap();
        let conflict = schedule.event(&EventId::new("2")).unwrap();

        let preview = schedule.preview_reassignment(&ReassignmentRequest {
            current,
            conflict,
            staff: "Sam",
            target: ReassignTarget::Current,
        });

        assert_eq!(preview.position_in_current, "Host");
        assert_eq!(preview.position_in_conflict, "Lead");
        assert_eq!(preview.target_position, "Host");
        assert_eq!(preview.kept_in.name, "Charity Gala");

        // Kim is free on the launch, so still a candidate there
        let names: Vec<_> = preview.candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Kim", "Sarah", "David", "Noor"]);
    }

    #[test]
    fn test_preview_targets_conflict_event() {
        let schedule = schedule();
        let current = schedule.event(&EventId::new("1")).unwrap();
        let conflict = schedule.event(&EventId::new("2")).unwrap();

        let preview = schedule.preview_reassignment(&ReassignmentRequest {
            current,
            conflict,
            staff: "Sam",
            target: ReassignTarget::Conflict,
        });

        assert_eq!(preview.target_position, "Lead");
        let names: Vec<_> = preview.candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["James"]);
    }

    #[test]
    fn test_choose_is_informational() {
        let schedule = schedule();
        let current = schedule.event(&EventId::new("1")).unwrap();
        let conflict = schedule.event(&EventId::new("2")).unwrap();
        let preview = schedule.preview_reassignment(&ReassignmentRequest {
            current,
            conflict,
            staff: "Sam",
            target: ReassignTarget::Current,
        });

        let choice = preview.choose("Sarah").unwrap();
        assert_eq!(choice.replaced_in, "Product Launch");
        assert_eq!(choice.kept_in, "Charity Gala");
        assert!(preview.choose("Nobody").is_none());

        // Schedule unchanged
        assert!(current.has_staff("Sam"));
        assert_eq!(schedule.conflict_count(&EventId::new("1")), 1);
    }

    #[test]
    fn test_unknown_staff_uses_default_position() {
        let schedule = schedule();
        let current = schedule.event(&EventId::new("1")).unwrap();
        let conflict = schedule.event(&EventId::new("2")).unwrap();
        let preview = schedule.preview_reassignment(&ReassignmentRequest {
            current,
            conflict,
            staff: "Ghost",
            target: ReassignTarget::Current,
        });

        assert_eq!(preview.target_position, crate::event::DEFAULT_POSITION);
        assert!(preview.candidates.is_empty());
    }
}
