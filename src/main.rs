mod commands;
mod config;
mod feed;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use campus_calendar_core::ingest::parse_date;
use campus_calendar_core::DisplayedMonth;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{list::ListOptions, resolve_month, CalendarContext};
use crate::config::GlobalConfig;

#[derive(Parser)]
#[command(name = "campus-cal")]
#[command(about = "Browse the campus academic calendar: month grids, event lists and stats")]
struct Cli {
    /// Event feed (JSON). Use "-" for stdin. Defaults to events_file from config
    #[arg(short, long, global = true)]
    events: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month as a 7-column grid
    Grid {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Only show this category ("all", "exam", "holiday", ...)
        #[arg(short, long)]
        category: Option<String>,

        /// Move forward this many months
        #[arg(long, default_value_t = 0)]
        next: u32,

        /// Move back this many months
        #[arg(long, default_value_t = 0)]
        prev: u32,
    },
    /// List the events overlapping a month, sorted by start date
    List {
        /// Month to list (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Only list this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only events whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only events for this department (campus-wide events are always shown)
        #[arg(short, long)]
        department: Option<String>,
    },
    /// Show the events active on one day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show event counts, for the whole feed or one month
    Stats {
        /// Month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show the category taxonomy
    Categories,
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GlobalConfig::load()?;
    init_logging(&config.log_level);

    tracing::debug!(config = ?config, "Configuration loaded");

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config::init(force),
            ConfigAction::Path => commands::config::path(),
        },
        Commands::Categories => {
            let taxonomy = feed::load_taxonomy(&config)?;
            commands::categories::run(&taxonomy);
            Ok(())
        }
        Commands::Grid {
            month,
            category,
            next,
            prev,
        } => {
            let ctx = CalendarContext::load(config, cli.events.as_deref())?;
            let month = resolve_month(month.as_deref(), ctx.today, next, prev)?;
            commands::grid::run(&ctx, month, category.as_deref())
        }
        Commands::List {
            month,
            category,
            search,
            department,
        } => {
            let ctx = CalendarContext::load(config, cli.events.as_deref())?;
            let month = resolve_month(month.as_deref(), ctx.today, 0, 0)?;
            let options = ListOptions {
                category: category.as_deref(),
                search: search.as_deref(),
                department: department.as_deref(),
            };
            commands::list::run(&ctx, month, options)
        }
        Commands::Day { date, category } => {
            let date = parse_date("date", &date)?;
            let ctx = CalendarContext::load(config, cli.events.as_deref())?;
            commands::day::run(&ctx, date, category.as_deref())
        }
        Commands::Stats { month } => {
            let ctx = CalendarContext::load(config, cli.events.as_deref())?;
            let month = month
                .as_deref()
                .map(str::parse::<DisplayedMonth>)
                .transpose()?;
            commands::stats::run(&ctx, month)
        }
    }
}
