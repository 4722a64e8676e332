//! Parameter structures for tutorial operations
//!
//! These structures are shared across interfaces without framework-specific
//! derives. The CLI defines its own clap argument structs and converts them
//! into these via `From` implementations:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Workshop → Link model
//! ```
//!
//! Keeping the core parameters free of clap keeps the library usable from
//! other front ends (an editor host, tests) unchanged.

use serde_json::Value;

use crate::{links::Placement, models::TutorialMeta};

/// Parameters for starting a new tutorial.
#[derive(Debug, Clone)]
pub struct CreateTutorial {
    /// Name of the tutorial (trimmed; must be unique)
    pub name: String,
    /// Author recorded on every step
    pub author: Option<String>,
    /// Icon asset reference recorded on every step
    pub icon: Option<String>,
}

impl CreateTutorial {
    /// Metadata for the new run, with unset fields left at their defaults.
    pub fn to_meta(&self) -> TutorialMeta {
        let defaults = TutorialMeta::default();
        TutorialMeta {
            name: self.name.clone(),
            author: self.author.clone().unwrap_or(defaults.author),
            icon: self.icon.clone().unwrap_or(defaults.icon),
        }
    }
}

/// Parameters for adding a step next to an existing one.
#[derive(Debug, Clone)]
pub struct InsertStep {
    /// Slug of the step the new one is placed against
    pub anchor: String,
    pub placement: Placement,
}

/// Parameters for renaming the tutorial a step belongs to.
#[derive(Debug, Clone)]
pub struct RenameTutorial {
    /// Any step of the run to rename
    pub slug: String,
    pub name: String,
}

/// Parameters for editing a step's plain fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateStep {
    pub slug: String,
    pub title: Option<String>,
    /// New plain content; replaces any stored document tree
    pub content: Option<String>,
    pub hint: Option<String>,
    /// Remove the hint; cannot be combined with `hint`
    pub clear_hint: bool,
}

/// An editor change notification for one step.
#[derive(Debug, Clone)]
pub struct ApplyEdit {
    pub slug: String,
    /// Document tree JSON exactly as the editor emitted it
    pub document: Value,
}

/// Tutorial description text to parse and merge into the library.
#[derive(Debug, Clone)]
pub struct ImportTutorial {
    pub text: String,
}
