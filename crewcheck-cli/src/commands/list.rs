use anyhow::Result;
use crewcheck_core::{BoardState, Schedule};
use owo_colors::OwoColorize;

use super::ISSUE_PREVIEW_LIMIT;
use crate::render::{Render, conflict_badge, issue_line, pluralize};

pub fn run(schedule: &Schedule, board: &BoardState) -> Result<()> {
    let events = board.visible_events(schedule);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let header = format!(
        "{} {} · sorted by {} · company: {}",
        events.len(),
        pluralize("event", events.len()),
        board.sort_key,
        board.company
    );
    println!("{}", header.dimmed());

    for event in events {
        println!();
        println!(
            "{} {} {}",
            format!("#{}", event.id).dimmed(),
            event.render(),
            conflict_badge(schedule.conflict_count(&event.id))
        );
        let count = event.staff.len();
        let staff_label = format!("{} {}", count, pluralize("staff member", count));
        println!("   {}", staff_label.dimmed());

        let conflicting = schedule.conflicting_staff(&event.id);
        for staff in conflicting.iter().take(ISSUE_PREVIEW_LIMIT) {
            let others = schedule.staff_conflicts(&event.id, staff);
            println!("   {} {}", "•".red(), issue_line(staff, &others).red());
        }
        if conflicting.len() > ISSUE_PREVIEW_LIMIT {
            let more = format!("+{} more", conflicting.len() - ISSUE_PREVIEW_LIMIT);
            println!("   {}", more.dimmed());
        }
    }

    Ok(())
}
