use anyhow::Result;
use crewcheck_core::{ConflictFilters, Event, ReassignTarget, ReassignmentRequest, Schedule};
use owo_colors::OwoColorize;

use crate::render::{Render, render_position_group};

pub fn run(
    schedule: &Schedule,
    current: &Event,
    conflict: &Event,
    staff: &str,
    target: ReassignTarget,
    choose: Option<&str>,
) -> Result<()> {
    let linked = schedule
        .conflicts()
        .iter()
        .any(|c| c.links(&current.id, &conflict.id, staff));
    if !linked {
        tracing::warn!(
            staff,
            current = %current.id,
            conflict = %conflict.id,
            "no conflict record links these events through this staff member"
        );
    }

    let preview = schedule.preview_reassignment(&ReassignmentRequest {
        current,
        conflict,
        staff,
        target,
    });

    let no_filters = ConflictFilters::new();
    println!("{}", format!("Change staff: {}", staff).bold());
    println!();
    print_side(
        "Current",
        current,
        preview.position_in_current,
        target == ReassignTarget::Current,
    );
    for group in &preview.current_by_position {
        let line = render_position_group(group, &[staff], &no_filters);
        println!("      {line}");
    }
    print_side(
        "Conflict",
        conflict,
        preview.position_in_conflict,
        target == ReassignTarget::Conflict,
    );
    for group in &preview.conflict_by_position {
        let line = render_position_group(group, &[staff], &no_filters);
        println!("      {line}");
    }

    println!();
    println!(
        "{}",
        format!(
            "Finding a new {} for {} ({} stays in {})",
            preview.target_position, preview.replaced_in.name, staff, preview.kept_in.name
        )
        .yellow()
    );

    if preview.candidates.is_empty() {
        println!("   {}", "No available staff for this position".dimmed());
    }
    for candidate in &preview.candidates {
        let mut details = Vec::new();
        if let Some(experience) = &candidate.experience {
            details.push(experience.clone());
        }
        if let Some(rating) = candidate.rating {
            details.push(format!("★ {rating:.1}"));
        }
        println!("   {} {}", candidate.name, details.join(" · ").dimmed());
    }

    if let Some(name) = choose {
        println!();
        match preview.choose(name) {
            Some(choice) => {
                println!("{}", choice.render());
                println!("   {}", "Preview only, nothing was changed".dimmed());
            }
            None => anyhow::bail!(
                "'{}' is not an available {} for {}",
                name,
                preview.target_position,
                preview.replaced_in.name
            ),
        }
    }

    Ok(())
}

fn print_side(label: &str, event: &Event, position: &str, selected: bool) {
    let marker = if selected {
        "▶".green().to_string()
    } else {
        " ".to_string()
    };
    println!(
        "{} {} {} {}",
        marker,
        format!("{label}:").dimmed(),
        event.render(),
        format!("as {position}").dimmed()
    );
}
