mod commands;
mod render;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use crewcheck_core::{
    BoardState, CompanyFilter, ConflictFilters, CrewCheckConfig, Dataset, Event, EventId,
    ReassignTarget, Schedule, SortKey,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crewcheck")]
#[command(about = "Browse events and the staff conflicts between them")]
struct Cli {
    /// Dataset to load (.json or .toml), overriding the config file
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all event cards
    List {
        /// Only show this company ("all" for every company)
        #[arg(short, long)]
        company: Option<String>,

        /// Order by: conflicts, time or name
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// Expand one event card and list its conflicts
    Show {
        event: String,

        /// Lock a staff member as a filter (repeatable)
        #[arg(long)]
        lock: Vec<String>,

        /// Preview-filter by one staff member (ignored while any are locked)
        #[arg(long)]
        hover: Option<String>,

        /// Only conflicting events whose name contains this text
        #[arg(long)]
        search: Option<String>,

        /// Time range start (HH:MM)
        #[arg(long)]
        from: Option<String>,

        /// Time range end (HH:MM)
        #[arg(long)]
        to: Option<String>,

        /// Only conflicting events from this company (repeatable)
        #[arg(long = "company")]
        companies: Vec<String>,
    },
    /// Show the events a staff member is double-booked on
    Staff { event: String, name: String },
    /// Preview replacing a double-booked staff member
    Reassign {
        event: String,
        conflict: String,
        staff: String,

        /// Event that gets the replacement: current or conflict
        #[arg(long, default_value = "current")]
        target: String,

        /// Pick a replacement from the candidates
        #[arg(long)]
        choose: Option<String>,
    },
    /// List known companies
    Companies,
    /// Report malformed or dangling records in the dataset
    Check,
    /// Show configuration, or save new defaults
    Config {
        /// Dataset file to use when --data isn't given
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Default card order: conflicts, time or name
        #[arg(long)]
        sort: Option<String>,

        /// Default company filter ("all" for every company)
        #[arg(long)]
        company: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.data.as_deref())?;
    let load = || load_schedule(&config, cli.data.as_deref());
    let board = BoardState::new(config.default_sort, config.default_company.clone());

    match cli.command {
        Commands::List { company, sort } => {
            let schedule = load()?;
            let board = apply_board_args(board, company, sort)?;
            commands::list::run(&schedule, &board)
        }
        Commands::Show {
            event,
            lock,
            hover,
            search,
            from,
            to,
            companies,
        } => {
            let schedule = load()?;
            let event = resolve_event(&schedule, &event)?;

            let mut filters = ConflictFilters::new()
                .with_locked(lock)
                .with_companies(companies);
            if let Some(name) = hover {
                filters = filters.with_hovered(&name);
            }
            if let Some(term) = search {
                filters = filters.with_search(&term);
            }
            filters = filters.with_time_range(
                from.as_deref().unwrap_or_default(),
                to.as_deref().unwrap_or_default(),
            );

            let board = board.toggle_expanded(&event.id).with_filters(filters);
            commands::show::run(&schedule, event, &board)
        }
        Commands::Staff { event, name } => {
            let schedule = load()?;
            let event = resolve_event(&schedule, &event)?;
            commands::staff::run(&schedule, event, &name)
        }
        Commands::Reassign {
            event,
            conflict,
            staff,
            target,
            choose,
        } => {
            let schedule = load()?;
            let current = resolve_event(&schedule, &event)?;
            let conflict = resolve_event(&schedule, &conflict)?;
            let target: ReassignTarget = target.parse()?;
            commands::reassign::run(
                &schedule,
                current,
                conflict,
                &staff,
                target,
                choose.as_deref(),
            )
        }
        Commands::Companies => commands::companies::run(&load()?),
        Commands::Check => commands::check::run(&load()?),
        Commands::Config {
            data_file,
            sort,
            company,
        } => {
            let sort = sort.map(|s| s.parse::<SortKey>()).transpose()?;
            let company = company.map(CompanyFilter::from);
            commands::config::run(&config, data_file, sort, company)
        }
    }
}

/// With an explicit `--data` the config file is optional: it is read if
/// present, never created, and a broken one only warns.
fn load_config(data: Option<&Path>) -> Result<CrewCheckConfig> {
    if data.is_none() {
        return Ok(CrewCheckConfig::load()?);
    }

    let config = CrewCheckConfig::config_path()
        .map(|path| CrewCheckConfig::load_or_default(&path))
        .unwrap_or_default();
    Ok(config)
}

fn load_schedule(config: &CrewCheckConfig, data: Option<&Path>) -> Result<Schedule> {
    let dataset = match data {
        Some(path) => Dataset::load(path)?,
        None => config.dataset()?,
    };
    Ok(dataset.into_schedule())
}

fn apply_board_args(
    board: BoardState,
    company: Option<String>,
    sort: Option<String>,
) -> Result<BoardState> {
    let board = match company {
        Some(company) => board.with_company(CompanyFilter::from(company)),
        None => board,
    };
    let board = match sort {
        Some(sort) => board.with_sort(sort.parse::<SortKey>()?),
        None => board,
    };
    Ok(board)
}

fn resolve_event<'a>(schedule: &'a Schedule, id: &str) -> Result<&'a Event> {
    match schedule.event(&EventId::from(id)) {
        Some(event) => Ok(event),
        None => {
            let available: Vec<_> = schedule
                .events()
                .iter()
                .map(|e| e.id.to_string())
                .collect();
            anyhow::bail!(
                "Event '{}' not found. Available: {}",
                id,
                available.join(", ")
            );
        }
    }
}
