pub mod check;
pub mod companies;
pub mod config;
pub mod list;
pub mod reassign;
pub mod show;
pub mod staff;

/// Conflicting staff previewed per card in the list view
pub const ISSUE_PREVIEW_LIMIT: usize = 3;
