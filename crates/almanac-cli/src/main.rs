//! Almanac CLI Application
//!
//! Command-line interface for the almanac committee planner.

mod args;
mod cli;
mod renderer;

use almanac_core::{MonthOrdering, PlannerBuilder};
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        plan_file,
        no_color,
        term_relative,
        command,
    } = Args::parse();

    let ordering = if term_relative {
        MonthOrdering::TermRelative
    } else {
        MonthOrdering::Calendar
    };

    let planner = PlannerBuilder::new()
        .with_document_path(plan_file)
        .with_month_ordering(ordering)
        .build()
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let today = jiff::Zoned::now().date();

    info!("Almanac started");

    let cli = Cli::new(planner, renderer);
    match command {
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Task { command }) => cli.handle_task_command(command),
        Some(Kanban) => cli.kanban(),
        Some(Timeline) => cli.timeline(today),
        Some(Dashboard) | None => cli.dashboard(today),
    }
}
