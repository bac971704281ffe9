//! Event and staff types.
//!
//! Events are read from a dataset and never modified afterwards. The `time`
//! field keeps the raw `HH:MM - HH:MM` text so sorting and display see
//! exactly what the dataset contains.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::time_window::TimeWindow;

/// Position shown for a staff member who is not listed on an event.
pub const DEFAULT_POSITION: &str = "Staff";

/// Event identifier.
///
/// Datasets may use numeric or textual ids; both are held as text so that
/// `1` and `"1"` refer to the same event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => EventId(n.to_string()),
            RawId::Text(s) => EventId(s),
        })
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        EventId(id.to_string())
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        EventId(id)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        EventId(id.to_string())
    }
}

/// A staffed event on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// Raw interval text, expected as `HH:MM - HH:MM`
    pub time: String,
    pub company: String,
    #[serde(default)]
    pub staff: Vec<Staff>,
}

impl Event {
    /// Parsed time window, or `None` if `time` is malformed.
    pub fn window(&self) -> Option<TimeWindow> {
        TimeWindow::parse(&self.time)
    }

    pub fn has_staff(&self, name: &str) -> bool {
        self.staff.iter().any(|s| s.name == name)
    }

    /// Position of the first staff entry with this name.
    pub fn position_of(&self, name: &str) -> Option<&str> {
        self.staff
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.position.as_str())
    }

    /// Like [`Event::position_of`], falling back to [`DEFAULT_POSITION`].
    pub fn position_or_default(&self, name: &str) -> &str {
        self.position_of(name).unwrap_or(DEFAULT_POSITION)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A staff assignment embedded in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub name: String,
    pub position: String,
}

impl Staff {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Staff {
            name: name.into(),
            position: position.into(),
        }
    }
}

/// Someone from the available pool who could step in for a conflicting
/// staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchStaff {
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
}
