use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{StepCommands, TutorialCommands};

/// Authoring tool for step-by-step tutorials
///
/// Tutorials are chains of steps kept in a local library file. They can be
/// imported from and exported to the plain-text tutorial description format
/// and edited one step at a time.
#[derive(Parser)]
#[command(version, about, name = "tutor")]
pub struct Args {
    /// Path to the library file. Defaults to
    /// $XDG_DATA_HOME/tutor/library.db
    #[arg(long, global = true)]
    pub library_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Without a command the tutorial menu is listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage whole tutorials
    #[command(alias = "t")]
    Tutorial {
        #[command(subcommand)]
        command: TutorialCommands,
    },
    /// Manage individual steps
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
}
