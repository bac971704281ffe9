use anyhow::Result;
use crewcheck_core::{BoardState, ConflictFilters, Event, Schedule, group_by_position};
use owo_colors::OwoColorize;

use crate::render::{Render, company_badge, conflict_badge, pluralize, render_position_group};

pub fn run(schedule: &Schedule, event: &Event, board: &BoardState) -> Result<()> {
    let filters = &board.filters;
    let conflicting_staff = schedule.conflicting_staff(&event.id);

    println!(
        "{} {}",
        event.render(),
        conflict_badge(schedule.conflict_count(&event.id))
    );

    println!();
    println!("{}", "Staff".bold());
    for group in group_by_position(&event.staff) {
        println!(
            "   {}",
            render_position_group(&group, &conflicting_staff, filters)
        );
    }

    if !conflicting_staff.is_empty() {
        println!();
        let title = format!("Action required ({} people)", conflicting_staff.len());
        println!("{}", title.red().bold());

        for (i, staff) in conflicting_staff.iter().enumerate() {
            let others = schedule.staff_conflicts(&event.id, staff);
            println!(
                "   {}. {} {}",
                i + 1,
                staff.bold(),
                format!("({})", event.position_or_default(staff)).dimmed()
            );
            for other in others {
                println!("      {} {}", "↔".red(), other.render());
            }
        }
    }

    let matches = board.conflicting_events(schedule);
    let total = schedule
        .conflicting_events(&event.id, &ConflictFilters::new())
        .len();

    println!();
    println!(
        "{}",
        format!(
            "Conflicts with {} other {}",
            total,
            pluralize("event", total)
        )
        .bold()
    );

    if filters.is_active() {
        println!("   {}", describe_filters(board).dimmed());
    }

    if matches.is_empty() {
        let message = if filters.is_active() {
            "No conflicting events match the current filters"
        } else {
            "No conflicting events"
        };
        println!("   {}", message.dimmed());
        return Ok(());
    }

    for other in matches {
        let shared = schedule.linking_staff(&event.id, &other.id);
        println!(
            "   {} {} {}",
            other.name.bold(),
            company_badge(&other.company),
            other.time.dimmed()
        );
        println!("      {}", format!("via {}", shared.join(", ")).dimmed());
    }

    Ok(())
}

/// One-line summary of the active filters.
fn describe_filters(board: &BoardState) -> String {
    let filters = &board.filters;
    let mut parts = Vec::new();

    let staff = filters.active_staff();
    if !staff.is_empty() {
        let kind = if filters.locked_staff.is_empty() {
            "hover"
        } else {
            "locked"
        };
        parts.push(format!("{kind}: {}", staff.join(", ")));
    }
    if !filters.search_term.is_empty() {
        parts.push(format!("search: \"{}\"", filters.search_term));
    }
    if filters.time_range.is_set() {
        let range = &filters.time_range;
        let note = if range.window().is_some() {
            ""
        } else {
            " (inactive)"
        };
        parts.push(format!("time: {}–{}{}", range.start, range.end, note));
    }
    if !filters.selected_companies.is_empty() {
        let companies: Vec<&str> = filters
            .selected_companies
            .iter()
            .map(String::as_str)
            .collect();
        parts.push(format!("companies: {}", companies.join(", ")));
    }

    format!("filtered by {}", parts.join(" · "))
}
