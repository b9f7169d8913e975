//! Tend CLI Application
//!
//! Command-line interface for the Tend gardening tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{resolve_at, Cli};
use log::info;
use renderer::TerminalRenderer;
use tend_core::TrackerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        at,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);
    let now = resolve_at(at.as_deref())?;

    info!("Tend started");

    let cli = Cli::new(tracker, renderer, user, now);

    match command {
        Some(Plant { command }) => cli.handle_plant_command(command).await,
        Some(Group { command }) => cli.handle_group_command(command).await,
        Some(Reconcile) => cli.reconcile().await,
        Some(Quests) => cli.quests().await,
        Some(Achievements) => cli.achievements().await,
        Some(Due) | None => cli.due_report().await,
    }
}
