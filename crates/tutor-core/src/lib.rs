//! Core library for authoring step-by-step tutorials.
//!
//! A tutorial is a doubly-linked run of [`StepRecord`]s inside one flat step
//! collection. This crate provides:
//!
//! - the link model that keeps runs consistent under insert, delete and
//!   rename ([`links`]);
//! - the plain-text tutorial description format ([`parser`],
//!   [`serializer`]);
//! - the rich-text document tree codec used by the editor ([`doctree`]);
//! - a SQLite-backed library ([`db`]) and an async API on top of it
//!   ([`Workshop`]).
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] as markdown and the
//! [`display`] module wraps collections and operation results, so every
//! front end renders the same text.
//!
//! # Quick Start
//!
//! ```rust
//! use tutor_core::{params::ImportTutorial, WorkshopBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let workshop = WorkshopBuilder::new()
//!     .with_library_path(Some("library.db"))
//!     .build()
//!     .await?;
//!
//! let text = "TutorialProperties [\n    TutorialName: Blinky;\n]\n1 {\n    StepTitle: Hi;\n}\n";
//! let summary = workshop
//!     .import_tutorial(&ImportTutorial { text: text.to_string() })
//!     .await?;
//!
//! for step in workshop.tutorial_steps(&summary.head_slug).await? {
//!     println!("{step}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod doctree;
pub mod error;
pub mod links;
pub mod models;
pub mod params;
pub mod parser;
pub mod serializer;
pub mod workshop;

// Re-export commonly used types
pub use db::Library;
pub use display::{
    CreateResult, DeleteResult, LinkReport, OperationStatus, RunSummaries, Steps, UpdateResult,
};
pub use doctree::{DocumentTree, EditSession, Inline, Rendering, RICH_CONTENT_PLACEHOLDER};
pub use error::{FormatError, Result, TutorError};
pub use links::{LinkIssue, Placement};
pub use models::{Platform, RunSummary, StepRecord, TutorialMeta};
pub use params::{
    ApplyEdit, CreateTutorial, ImportTutorial, InsertStep, RenameTutorial, UpdateStep,
};
pub use workshop::{Workshop, WorkshopBuilder};
