use anyhow::Result;
use crewcheck_core::{Event, Schedule};
use owo_colors::OwoColorize;

use crate::render::{Render, issue_line};

pub fn run(schedule: &Schedule, event: &Event, name: &str) -> Result<()> {
    if !event.has_staff(name) && !schedule.conflicting_staff(&event.id).contains(&name) {
        anyhow::bail!("'{}' is not assigned to {}", name, event.name);
    }

    let others = schedule.staff_conflicts(&event.id, name);

    println!("{}", event.render());
    println!(
        "   {} {}",
        name.bold(),
        format!("({})", event.position_or_default(name)).dimmed()
    );

    if others.is_empty() {
        println!("   {}", "No conflicts for this staff member".green());
        return Ok(());
    }

    println!("   {}", issue_line(name, &others).red());
    for other in others {
        println!(
            "      {} {} {}",
            "↔".red(),
            other.render(),
            format!("as {}", other.position_or_default(name)).dimmed()
        );
    }

    Ok(())
}
