//! Terminal rendering for crewcheck-core types.
//!
//! Extension traits that add colored output using owo_colors.

use crewcheck_core::{ConflictFilters, DataIssue, Event, PositionGroup, ReassignmentChoice};
use owo_colors::{AnsiColors, OwoColorize};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Badge color per company; unknown companies get a neutral color.
pub fn company_color(company: &str) -> AnsiColors {
    match company {
        "Tech Corp" => AnsiColors::Blue,
        "Global Solutions" => AnsiColors::Magenta,
        "Healthcare Plus" => AnsiColors::BrightMagenta,
        "Retail Co" => AnsiColors::Yellow,
        "Finance Ltd" => AnsiColors::Green,
        "Innovate Inc" => AnsiColors::Cyan,
        "Innovate LLC" => AnsiColors::BrightYellow,
        "Media Inc" => AnsiColors::BrightCyan,
        _ => AnsiColors::White,
    }
}

pub fn company_badge(company: &str) -> String {
    format!("[{}]", company)
        .color(company_color(company))
        .to_string()
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.name.bold(),
            company_badge(&self.company),
            self.time.dimmed()
        )
    }
}

impl Render for DataIssue {
    fn render(&self) -> String {
        format!("{} {}", "!".yellow(), self)
    }
}

impl Render for ReassignmentChoice {
    fn render(&self) -> String {
        format!("{} {}", "→".green(), self.to_string().green())
    }
}

/// Render a position group, highlighting names in `conflicting` and
/// marking names locked in `filters`.
pub fn render_position_group(
    group: &PositionGroup,
    conflicting: &[&str],
    filters: &ConflictFilters,
) -> String {
    let names: Vec<String> = group
        .names
        .iter()
        .map(|name| {
            let label = if filters.is_locked(name) {
                format!("{name} (locked)")
            } else {
                name.clone()
            };
            if conflicting.contains(&name.as_str()) {
                label.red().to_string()
            } else {
                label
            }
        })
        .collect();

    format!("{}: {}", group.position.dimmed(), names.join(", "))
}

pub fn conflict_badge(count: usize) -> String {
    if count == 0 {
        "no conflicts".green().to_string()
    } else {
        conflict_label(count).red().to_string()
    }
}

fn conflict_label(count: usize) -> String {
    format!("{} {}", count, pluralize("conflict", count))
}

/// One line of the conflict-issues summary: who, and on which events.
pub fn issue_line(staff: &str, events: &[&Event]) -> String {
    let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
    format!(
        "{} conflict ({} {}){}",
        staff,
        events.len(),
        pluralize("event", events.len()),
        if names.is_empty() {
            String::new()
        } else {
            format!(": {}", names.join(", "))
        }
    )
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
