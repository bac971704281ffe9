//! Board ordering and the global company filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CrewCheckError;
use crate::event::Event;
use crate::schedule::Schedule;

/// How the board orders its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most conflicts first, ties by name
    #[default]
    Conflicts,
    /// Raw `time` text, ascending
    Time,
    /// Name, ascending, case-sensitive
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Conflicts, SortKey::Time, SortKey::Name];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Conflicts => "conflicts",
            SortKey::Time => "time",
            SortKey::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CrewCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                CrewCheckError::Config(format!(
                    "Unknown sort key '{s}'. Expected one of: conflicts, time, name"
                ))
            })
    }
}

/// Restricts the board to one company, or shows everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompanyFilter {
    #[default]
    All,
    Only(String),
}

impl CompanyFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            CompanyFilter::All => true,
            CompanyFilter::Only(company) => event.company == *company,
        }
    }
}

impl From<String> for CompanyFilter {
    fn from(s: String) -> Self {
        if s == "all" {
            CompanyFilter::All
        } else {
            CompanyFilter::Only(s)
        }
    }
}

impl From<&str> for CompanyFilter {
    fn from(s: &str) -> Self {
        CompanyFilter::from(s.to_string())
    }
}

impl From<CompanyFilter> for String {
    fn from(filter: CompanyFilter) -> Self {
        match filter {
            CompanyFilter::All => "all".to_string(),
            CompanyFilter::Only(company) => company,
        }
    }
}

impl fmt::Display for CompanyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyFilter::All => f.write_str("all"),
            CompanyFilter::Only(company) => f.write_str(company),
        }
    }
}

impl Schedule {
    /// Events shown on the board, filtered by company and ordered by `key`.
    ///
    /// `Time` compares the raw strings. That only orders correctly because
    /// times are zero-padded `HH:MM`; it is not a parsed comparison.
    pub fn visible_events(&self, company: &CompanyFilter, key: SortKey) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events()
            .iter()
            .filter(|e| company.matches(e))
            .collect();

        match key {
            SortKey::Conflicts => {
                // Count once per event, not per comparison
                let mut counted: Vec<(usize, &Event)> = events
                    .into_iter()
                    .map(|e| (self.conflict_count(&e.id), e))
                    .collect();
                counted.sort_by(|(ca, a), (cb, b)| cb.cmp(ca).then_with(|| a.name.cmp(&b.name)));
                events = counted.into_iter().map(|(_, e)| e).collect();
            }
            SortKey::Time => events.sort_by(|a, b| a.time.cmp(&b.time)),
            SortKey::Name => events.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        events
    }
}
