//! Tutor CLI Application
//!
//! Command-line interface for authoring step-by-step tutorials.

mod args;
mod cli;
mod handlers;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use tutor_core::{OperationStatus, TutorError, WorkshopBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        library_file,
        no_color,
        command,
    } = Args::parse();

    let workshop = WorkshopBuilder::new()
        .with_library_path(library_file)
        .build()
        .await
        .context("Failed to open tutorial library")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Tutor started with library {}", workshop.library_path().display());

    let cli = Cli::new(workshop, renderer);
    let result = match command {
        Some(Tutorial { command }) => cli.handle_tutorial_command(command).await,
        Some(Step { command }) => cli.handle_step_command(command).await,
        None => cli.list_tutorials().await,
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match user_error(&err) {
            Some(cause) => {
                eprint!("{}", OperationStatus::from_error(format!("{err:#}"), cause));
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}

/// The library error behind `err`, when the user can fix it by changing
/// their input. Other failures keep anyhow's full report.
fn user_error(err: &anyhow::Error) -> Option<&TutorError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<TutorError>())
        .filter(|cause| cause.is_user_error())
}
