//! SQLite persistence for the step collection.
//!
//! The library file holds one table of steps. Reads load the whole
//! collection; writes load and replace it wholesale inside a single immediate
//! transaction, so a reader never observes a half-applied edit and two
//! writers never interleave.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod step_queries;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection to a tutorial library file.
pub struct Library {
    connection: Connection,
}

impl Library {
    /// Opens (or creates) the library and brings its schema up to date.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open library database")?;
        // Another process may hold the write lock for the length of one edit
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let library = Self { connection };
        library.initialize_schema()?;
        Ok(library)
    }
}
