//! Core types and queries for crewcheck.
//!
//! This crate holds everything behind the staff-conflict board:
//! - `Event`, `Staff` and `Conflict` records, loaded through `Dataset`
//! - `Schedule`, the immutable snapshot every query runs against
//! - conflict lookups, the filtered conflicting-event list and board sorting
//! - `BoardState`, the expanded-card selector with its filters
//! - a non-committing change-staff preview

pub mod board;
pub mod config;
pub mod conflict;
mod conflict_filter;
pub mod dataset;
pub mod error;
pub mod event;
pub mod filters;
mod index;
pub mod reassign;
pub mod schedule;
pub mod sort;
pub mod staff;
pub mod time_window;

pub use board::BoardState;
pub use config::CrewCheckConfig;
pub use conflict::Conflict;
pub use dataset::Dataset;
pub use error::{CrewCheckError, CrewCheckResult};
pub use event::{BenchStaff, DEFAULT_POSITION, Event, EventId, Staff};
pub use filters::{ConflictFilters, TimeBound, TimeRangeFilter};
pub use reassign::{ReassignTarget, ReassignmentChoice, ReassignmentPreview, ReassignmentRequest};
pub use schedule::{DataIssue, Schedule};
pub use sort::{CompanyFilter, SortKey};
pub use staff::{PositionGroup, group_by_position};
pub use time_window::TimeWindow;
