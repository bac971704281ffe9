//! Board view state: which card is expanded and how it is filtered.

use crate::event::{Event, EventId};
use crate::filters::ConflictFilters;
use crate::schedule::Schedule;
use crate::sort::{CompanyFilter, SortKey};

/// Everything the board needs to render, as one replaceable value.
///
/// At most one card is expanded. Its filters are dropped whenever the
/// expanded card changes or collapses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub expanded: Option<EventId>,
    pub filters: ConflictFilters,
    pub sort_key: SortKey,
    pub company: CompanyFilter,
}

impl BoardState {
    pub fn new(sort_key: SortKey, company: CompanyFilter) -> Self {
        BoardState {
            sort_key,
            company,
            ..Self::default()
        }
    }

    /// Expand `id`, or collapse it if it is already expanded.
    pub fn toggle_expanded(&self, id: &EventId) -> Self {
        let expanded = if self.expanded.as_ref() == Some(id) {
            None
        } else {
            Some(id.clone())
        };

        BoardState {
            expanded,
            filters: ConflictFilters::default(),
            ..self.clone()
        }
    }

    pub fn is_expanded(&self, id: &EventId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Replace the expanded card's filters. Ignored while nothing is
    /// expanded.
    pub fn with_filters(&self, filters: ConflictFilters) -> Self {
        if self.expanded.is_none() {
            return self.clone();
        }
        BoardState {
            filters,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort_key: SortKey) -> Self {
        BoardState {
            sort_key,
            ..self.clone()
        }
    }

    pub fn with_company(&self, company: CompanyFilter) -> Self {
        BoardState {
            company,
            ..self.clone()
        }
    }

    /// Cards in display order.
    pub fn visible_events<'a>(&self, schedule: &'a Schedule) -> Vec<&'a Event> {
        schedule.visible_events(&self.company, self.sort_key)
    }

    /// Filtered conflicts of the expanded card; empty when collapsed.
    pub fn conflicting_events<'a>(&self, schedule: &'a Schedule) -> Vec<&'a Event> {
        match &self.expanded {
            Some(id) => schedule.conflicting_events(id, &self.filters),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::Conflict;

    fn event(id: &str) -> Event {
        Event {
            id: EventId::new(id),
            name: format!("Event {id}"),
            time: "09:00 - 10:00".to_string(),
            company: "Tech Corp".to_string(),
            staff: vec![],
        }
    }

    #[test]
    fn test_expanding_another_card_resets_filters() {
        let first = EventId::new("1");
        let second = EventId::new("2");

        let state = BoardState::default()
            .toggle_expanded(&first)
            .with_filters(ConflictFilters::new().toggle_locked("Sam"));
        assert!(state.filters.is_active());

        let switched = state.toggle_expanded(&second);
        assert!(switched.is_expanded(&second));
        assert!(!switched.filters.is_active());
    }

    #[test]
    fn test_collapsing_resets_filters() {
        let id = EventId::new("1");
        let state = BoardState::default()
            .toggle_expanded(&id)
            .with_filters(ConflictFilters::new().with_search("gala"));

        let collapsed = state.toggle_expanded(&id);
        assert_eq!(collapsed.expanded, None);
        assert!(!collapsed.filters.is_active());
    }

    #[test]
    fn test_filters_ignored_while_collapsed() {
        let filters = ConflictFilters::new().with_search("gala");
        let state = BoardState::default().with_filters(filters);
        assert!(!state.filters.is_active());
    }

    #[test]
    fn test_conflicting_events_follow_expanded_card() {
        let schedule = Schedule::new(
            vec![event("1"), event("2"), event("3")],
            vec![
                Conflict::new("1", "2", "Sam"),
                Conflict::new("2", "3", "Lee"),
            ],
        );

        let state = BoardState::default();
        assert!(state.conflicting_events(&schedule).is_empty());

        let state = state.toggle_expanded(&EventId::new("2"));
        let ids: Vec<_> = state
            .conflicting_events(&schedule)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
