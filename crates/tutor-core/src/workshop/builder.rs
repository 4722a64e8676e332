//! Builder for creating and configuring Workshop instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Workshop;
use crate::{
    db::Library,
    error::{Result, TutorError},
};

/// Builder for creating and configuring Workshop instances.
#[derive(Debug, Clone)]
pub struct WorkshopBuilder {
    library_path: Option<PathBuf>,
}

impl WorkshopBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { library_path: None }
    }

    /// Sets a custom library file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tutor/library.db` or `~/.local/share/tutor/library.db`
    pub fn with_library_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.library_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the workshop, creating the library file if needed.
    ///
    /// # Errors
    ///
    /// Returns `TutorError::InvalidInput` if the library path is a directory
    /// Returns `TutorError::FileSystem` if the library directory cannot be created
    /// Returns `TutorError::Database` if the file is not a usable library
    pub async fn build(self) -> Result<Workshop> {
        let library_path = match self.library_path {
            Some(path) => path,
            None => Self::default_library_path()?,
        };

        if library_path.is_dir() {
            return Err(TutorError::invalid_input("library_file").with_reason(format!(
                "{} is a directory, not a library file",
                library_path.display()
            )));
        }

        if let Some(parent) = library_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| TutorError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        // Opening runs the migrations, so an old library is upgraded here
        let path = library_path.clone();
        let stored_steps = task::spawn_blocking(move || Library::new(&path)?.step_count())
            .await
            .map_err(|e| TutorError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        debug!(
            "Using tutorial library at {} ({stored_steps} stored steps)",
            library_path.display()
        );
        Ok(Workshop::new(library_path))
    }

    fn default_library_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tutor")
            .place_data_file("library.db")
            .map_err(|e| TutorError::XdgDirectory(e.to_string()))
    }
}

impl Default for WorkshopBuilder {
    fn default() -> Self {
        Self::new()
    }
}
