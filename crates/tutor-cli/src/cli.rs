//! Command-line argument definitions using clap
//!
//! Each command has its own clap argument struct that converts into the
//! matching core parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Workshop
//! ```
//!
//! Core parameter types stay free of clap derives. Commands that read files
//! (import, apply) keep the path here and are converted in the handlers once
//! the file has been read.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use tutor_core::{
    params::{CreateTutorial, InsertStep, RenameTutorial, UpdateStep},
    Placement,
};

/// Start a new tutorial
///
/// Creates a tutorial holding a single placeholder step. Asks for
/// confirmation first unless --yes is given.
#[derive(Args)]
pub struct NewTutorialArgs {
    /// Name of the tutorial; must not match an existing one
    pub name: String,
    #[arg(short, long, help = "Author recorded on every step")]
    pub author: Option<String>,
    #[arg(short, long, help = "Icon asset reference recorded on every step")]
    pub icon: Option<String>,
    #[arg(short, long, help = "Create without asking for confirmation")]
    pub yes: bool,
}

impl From<NewTutorialArgs> for CreateTutorial {
    fn from(val: NewTutorialArgs) -> Self {
        CreateTutorial {
            name: val.name,
            author: val.author,
            icon: val.icon,
        }
    }
}

/// Slug of any step, used by commands that act on one step or its tutorial.
#[derive(Args)]
pub struct SlugArgs {
    #[arg(help = "Slug of the step")]
    pub slug: String,
}

/// Import a tutorial description file
///
/// The file is parsed completely before anything is stored. A format error
/// is reported with its line number and nothing is imported.
#[derive(Args)]
pub struct ImportArgs {
    #[arg(help = "Path of the tutorial description file")]
    pub file: PathBuf,
}

/// Export a tutorial in the description format
#[derive(Args)]
pub struct ExportArgs {
    #[arg(help = "Slug of any step of the tutorial")]
    pub slug: String,
    #[arg(short, long, help = "Write to this file instead of standard output")]
    pub output: Option<PathBuf>,
}

/// Rename a tutorial
///
/// Every step of the tutorial gets the new name. Slugs do not change.
#[derive(Args)]
pub struct RenameArgs {
    #[arg(help = "Slug of any step of the tutorial")]
    pub slug: String,
    #[arg(help = "New name; must not match another tutorial")]
    pub name: String,
}

impl From<RenameArgs> for RenameTutorial {
    fn from(val: RenameArgs) -> Self {
        RenameTutorial {
            slug: val.slug,
            name: val.name,
        }
    }
}

/// Add a placeholder step next to an existing one
#[derive(Args)]
pub struct AddStepArgs {
    #[arg(help = "Slug of the step to place the new one against")]
    pub slug: String,
}

impl AddStepArgs {
    pub fn into_params(self, placement: Placement) -> InsertStep {
        InsertStep {
            anchor: self.slug,
            placement,
        }
    }
}

/// Update a step's title, content or hint
///
/// Setting --content replaces any rich content stored from the editor.
#[derive(Args)]
pub struct UpdateStepArgs {
    #[arg(help = "Slug of the step to update")]
    pub slug: String,
    #[arg(short, long, help = "New title for the step")]
    pub title: Option<String>,
    #[arg(short, long, help = "New plain-text content for the step")]
    pub content: Option<String>,
    #[arg(long, conflicts_with = "clear_hint", help = "Hint shown for the step")]
    pub hint: Option<String>,
    #[arg(long, help = "Remove the step's hint")]
    pub clear_hint: bool,
}

impl From<UpdateStepArgs> for UpdateStep {
    fn from(val: UpdateStepArgs) -> Self {
        UpdateStep {
            slug: val.slug,
            title: val.title,
            content: val.content,
            hint: val.hint,
            clear_hint: val.clear_hint,
        }
    }
}

/// Store a document tree emitted by the editor on a step
#[derive(Args)]
pub struct ApplyArgs {
    #[arg(help = "Slug of the edited step")]
    pub slug: String,
    #[arg(help = "Path of the document tree JSON file")]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum TutorialCommands {
    /// Start a new tutorial
    #[command(alias = "n")]
    New(NewTutorialArgs),
    /// List all tutorials
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show every step of a tutorial
    #[command(alias = "s")]
    Show(SlugArgs),
    /// Import a tutorial description file
    #[command(alias = "i")]
    Import(ImportArgs),
    /// Export a tutorial in the description format
    #[command(alias = "e")]
    Export(ExportArgs),
    /// Rename a tutorial
    #[command(alias = "r")]
    Rename(RenameArgs),
    /// Check every tutorial's links
    Check,
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Show a single step
    #[command(alias = "s")]
    Show(SlugArgs),
    /// Add a new step before an existing one
    #[command(alias = "b")]
    AddBefore(AddStepArgs),
    /// Add a new step after an existing one
    #[command(alias = "a")]
    AddAfter(AddStepArgs),
    /// Delete a step and join its neighbors
    #[command(aliases = ["d", "rm"])]
    Delete(SlugArgs),
    /// Update a step's title, content or hint
    #[command(alias = "u")]
    Update(UpdateStepArgs),
    /// Store a document tree emitted by the editor
    Apply(ApplyArgs),
    /// Print the document tree the editor should start from
    Document(SlugArgs),
}
