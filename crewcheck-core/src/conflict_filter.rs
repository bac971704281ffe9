//! Conflicting-event lookup with the per-card filters applied.

use std::collections::BTreeSet;

use tracing::debug;

use crate::event::{Event, EventId};
use crate::filters::ConflictFilters;
use crate::schedule::Schedule;
use crate::time_window::TimeWindow;

impl Schedule {
    /// Events that conflict with `id` and pass every active filter.
    ///
    /// Filters are conjunctive: staff (locked, else hovered), name search,
    /// time-range overlap, company subset. Order is the order in which
    /// partners were discovered among the conflict records. Unknown ids
    /// and dangling references produce nothing rather than an error.
    pub fn conflicting_events(&self, id: &EventId, filters: &ConflictFilters) -> Vec<&Event> {
        let candidates: Vec<&Event> = self
            .conflict_partners(id)
            .into_iter()
            .filter_map(|other| self.event(other))
            .collect();
        let total = candidates.len();

        let active_staff = filters.active_staff();
        let search = filters.search_term.to_lowercase();
        let window = filters.time_range.window();
        let companies = self.company_restriction(&filters.selected_companies);

        let matched: Vec<&Event> = candidates
            .into_iter()
            .filter(|e| active_staff.is_empty() || self.linked_by_any(id, &e.id, &active_staff))
            .filter(|e| search.is_empty() || e.name.to_lowercase().contains(&search))
            .filter(|e| window.is_none_or(|w| overlaps_or_unparsed(e, &w)))
            .filter(|e| companies.is_none_or(|c| c.contains(&e.company)))
            .collect();

        debug!(
            event = %id,
            candidates = total,
            matched = matched.len(),
            "filtered conflicting events"
        );

        matched
    }

    /// Whether some name in `staff` has a conflict linking `a` and `b`.
    fn linked_by_any(&self, a: &EventId, b: &EventId, staff: &[&str]) -> bool {
        staff
            .iter()
            .any(|person| self.conflicts().iter().any(|c| c.links(a, b, person)))
    }

    /// The company set to restrict to, or `None` when the selection is
    /// empty or covers every known company.
    fn company_restriction<'a>(
        &self,
        selected: &'a BTreeSet<String>,
    ) -> Option<&'a BTreeSet<String>> {
        if selected.is_empty() {
            return None;
        }
        let covers_all = self
            .companies()
            .into_iter()
            .all(|company| selected.contains(company));
        if covers_all { None } else { Some(selected) }
    }
}

/// Time predicate: events with an unparseable `time` always pass.
fn overlaps_or_unparsed(event: &Event, range: &TimeWindow) -> bool {
    match event.window() {
        Some(window) => window.overlaps(range),
        None => true,
    }
}
