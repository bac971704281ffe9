//! Filter configuration for an expanded card's conflict list.
//!
//! `ConflictFilters` is a value: every update returns a new configuration
//! and leaves the receiver untouched, so the board can keep, compare and
//! replace snapshots freely.

use std::collections::BTreeSet;

use crate::time_window::TimeWindow;

/// Which bound of the time range an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound {
    Start,
    End,
}

/// Time range as entered: two `HH:MM` strings, empty meaning unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeRangeFilter {
    pub start: String,
    pub end: String,
}

impl TimeRangeFilter {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        TimeRangeFilter {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether either bound has been entered.
    pub fn is_set(&self) -> bool {
        !self.start.is_empty() || !self.end.is_empty()
    }

    /// The window to filter by. Only `Some` when both bounds are present
    /// and parse; a half-entered or garbled range filters nothing.
    pub fn window(&self) -> Option<TimeWindow> {
        if self.start.is_empty() || self.end.is_empty() {
            return None;
        }
        TimeWindow::from_bounds(&self.start, &self.end)
    }
}

/// Per-card filters applied to the conflicting-events list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictFilters {
    pub locked_staff: BTreeSet<String>,
    pub hovered_staff: Option<String>,
    pub search_term: String,
    pub time_range: TimeRangeFilter,
    pub selected_companies: BTreeSet<String>,
}

impl ConflictFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` to the locked set, or remove it if already locked.
    pub fn toggle_locked(&self, name: &str) -> Self {
        let mut locked_staff = self.locked_staff.clone();
        if !locked_staff.remove(name) {
            locked_staff.insert(name.to_string());
        }
        ConflictFilters {
            locked_staff,
            ..self.clone()
        }
    }

    pub fn with_locked<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConflictFilters {
            locked_staff: names.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    pub fn with_hovered(&self, name: &str) -> Self {
        ConflictFilters {
            hovered_staff: Some(name.to_string()),
            ..self.clone()
        }
    }

    pub fn without_hover(&self) -> Self {
        ConflictFilters {
            hovered_staff: None,
            ..self.clone()
        }
    }

    pub fn with_search(&self, term: &str) -> Self {
        ConflictFilters {
            search_term: term.to_string(),
            ..self.clone()
        }
    }

    pub fn with_time(&self, bound: TimeBound, value: &str) -> Self {
        let mut time_range = self.time_range.clone();
        match bound {
            TimeBound::Start => time_range.start = value.to_string(),
            TimeBound::End => time_range.end = value.to_string(),
        }
        ConflictFilters {
            time_range,
            ..self.clone()
        }
    }

    pub fn with_time_range(&self, start: &str, end: &str) -> Self {
        ConflictFilters {
            time_range: TimeRangeFilter::new(start, end),
            ..self.clone()
        }
    }

    pub fn with_companies<I, S>(&self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConflictFilters {
            selected_companies: companies.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    /// Empty configuration (what "clear all" produces).
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Staff names the staff filter matches on.
    ///
    /// Locked names win; the hovered name only counts while nothing is
    /// locked.
    pub fn active_staff(&self) -> Vec<&str> {
        if !self.locked_staff.is_empty() {
            self.locked_staff.iter().map(String::as_str).collect()
        } else {
            self.hovered_staff.as_deref().into_iter().collect()
        }
    }

    pub fn is_locked(&self, name: &str) -> bool {
        self.locked_staff.contains(name)
    }

    /// Whether anything has been entered, including half-set time ranges.
    pub fn is_active(&self) -> bool {
        !self.locked_staff.is_empty()
            || self.hovered_staff.is_some()
            || !self.search_term.is_empty()
            || self.time_range.is_set()
            || !self.selected_companies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_locked_returns_new_value() {
        let empty = ConflictFilters::new();
        let locked = empty.toggle_locked("Sam");

        assert!(empty.locked_staff.is_empty());
        assert!(locked.is_locked("Sam"));
        assert_eq!(locked.toggle_locked("Sam"), empty);
    }

    #[test]
    fn test_lock_takes_precedence_over_hover() {
        let hovered = ConflictFilters::new().with_hovered("Lee");
        assert_eq!(hovered.active_staff(), vec!["Lee"]);

        let locked = hovered.toggle_locked("Sam");
        assert_eq!(locked.active_staff(), vec!["Sam"]);

        let released = locked.without_hover().toggle_locked("Sam");
        assert!(released.active_staff().is_empty());
    }

    #[test]
    fn test_time_range_needs_both_bounds() {
        let half = ConflictFilters::new().with_time(TimeBound::Start, "09:00");
        assert!(half.is_active());
        assert!(half.time_range.window().is_none());

        let full = half.with_time(TimeBound::End, "10:00");
        assert!(full.time_range.window().is_some());
    }

    #[test]
    fn test_is_active() {
        assert!(!ConflictFilters::new().is_active());
        assert!(ConflictFilters::new().with_search("gala").is_active());

        let companies = ConflictFilters::new().with_companies(["Tech Corp"]);
        assert!(companies.is_active());
        assert!(!companies.cleared().is_active());
    }
}
