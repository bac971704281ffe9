use anyhow::Result;
use crewcheck_core::Schedule;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};

pub fn run(schedule: &Schedule) -> Result<()> {
    let issues = schedule.validate();

    if issues.is_empty() {
        println!("{}", "No data issues found".green());
        return Ok(());
    }

    let header = format!("{} data {}", issues.len(), pluralize("issue", issues.len()));
    println!("{}", header.yellow().bold());
    for issue in &issues {
        println!("   {}", issue.render());
    }
    let note = "Malformed times pass every time filter; dangling links are skipped.";
    println!("{}", note.dimmed());

    Ok(())
}
