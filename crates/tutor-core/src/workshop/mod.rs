//! High-level async API for authoring tutorials.
//!
//! The [`Workshop`] coordinates the library file and the pure link model.
//! Every operation runs on the blocking thread pool and follows the same
//! shape:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Library     │    │   Link model    │    │     Library     │
//! │  (load_steps)   │───▶│  (pure edit)    │───▶│ (replace_steps) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The new collection is only written when the edit succeeds, so a rejected
//! edit leaves the library untouched.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Workshop`] instances
//! - [`tutorial_ops`]: Whole-run operations (list, import, export, rename)
//! - [`step_ops`]: Single-step operations (show, insert, delete, edit)
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use tutor_core::{params::CreateTutorial, WorkshopBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let workshop = WorkshopBuilder::new()
//!     .with_library_path(Some("/tmp/library.db"))
//!     .build()
//!     .await?;
//!
//! let head = workshop
//!     .create_tutorial(&CreateTutorial {
//!         name: "Blinky".to_string(),
//!         author: None,
//!         icon: None,
//!     })
//!     .await?;
//! let text = workshop.export_tutorial(&head.slug).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Library,
    error::{Result, TutorError},
    models::StepRecord,
};

pub mod builder;
pub mod step_ops;
pub mod tutorial_ops;


pub use builder::WorkshopBuilder;

/// Main interface for reading and editing the tutorial library.
#[derive(Debug)]
pub struct Workshop {
    pub(crate) library_path: PathBuf,
}

impl Workshop {
    pub(crate) fn new(library_path: PathBuf) -> Self {
        Self { library_path }
    }

    /// Location of the library file.
    pub fn library_path(&self) -> &Path {
        &self.library_path
    }

    /// Runs a read-only query against the library on the blocking pool.
    async fn read<T, F>(&self, query: F) -> Result<T>
    where
        F: FnOnce(&Library) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let library_path = self.library_path.clone();
        task::spawn_blocking(move || {
            let library = Library::new(&library_path)?;
            query(&library)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Loads the collection, applies a pure edit, and stores the result.
    ///
    /// The edit returns the new collection together with whatever the caller
    /// wants back. Load and store share one transaction, and nothing is
    /// written when the edit fails.
    async fn mutate<T, F>(&self, edit: F) -> Result<T>
    where
        F: FnOnce(&[StepRecord]) -> Result<(Vec<StepRecord>, T)> + Send + 'static,
        T: Send + 'static,
    {
        let library_path = self.library_path.clone();
        task::spawn_blocking(move || {
            let mut library = Library::new(&library_path)?;
            library.edit_steps(edit)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
