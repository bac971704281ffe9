//! Time-of-day windows parsed from `HH:MM - HH:MM` text.

use chrono::NaiveTime;

/// An inclusive time-of-day interval.
///
/// No overnight wrap: a window whose end is before its start is compared
/// literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        TimeWindow { start, end }
    }

    /// Parse an event interval such as `09:00 - 10:30`.
    ///
    /// Both tokens must be zero-padded `HH:MM`; whitespace is only allowed
    /// around the dash. Anything else yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let (start, end) = s.split_once('-')?;
        let start = parse_padded(start.trim_end())?;
        let end = parse_padded(end.trim_start())?;
        Some(TimeWindow { start, end })
    }

    /// Build a window from two separately entered bounds (`HH:MM` each).
    pub fn from_bounds(start: &str, end: &str) -> Option<Self> {
        let start = parse_time_of_day(start)?;
        let end = parse_time_of_day(end)?;
        Some(TimeWindow { start, end })
    }

    /// Inclusive overlap: touching endpoints count.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// Parse a single `HH:MM` bound as entered by the user.
pub fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Strict `\d{2}:\d{2}` token
fn parse_padded(token: &str) -> Option<NaiveTime> {
    let bytes = token.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());

    if !well_formed {
        return None;
    }

    NaiveTime::parse_from_str(token, "%H:%M").ok()
}
