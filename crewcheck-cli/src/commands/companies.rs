use anyhow::Result;
use crewcheck_core::Schedule;
use owo_colors::OwoColorize;

use crate::render::{company_badge, pluralize};

pub fn run(schedule: &Schedule) -> Result<()> {
    let companies = schedule.companies();

    if companies.is_empty() {
        println!("{}", "No companies found".dimmed());
        return Ok(());
    }

    for company in companies {
        let count = schedule
            .events()
            .iter()
            .filter(|e| e.company == company)
            .count();
        let label = format!("{} {}", count, pluralize("event", count));
        println!("{} {}", company_badge(company), label.dimmed());
    }

    Ok(())
}
