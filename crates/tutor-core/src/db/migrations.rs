//! Library schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, TutorError};

impl super::Library {
    /// Initializes the schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize library schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Brings libraries written by older versions up to date.
    fn apply_migrations(&self) -> Result<()> {
        // Platform tags were not tracked at first
        let has_compatibility: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('steps') WHERE name = 'compatibility'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_compatibility {
            self.connection
                .execute(
                    "ALTER TABLE steps ADD COLUMN compatibility TEXT NOT NULL \
                     DEFAULT 'microbitV1,microbitV2'",
                    [],
                )
                .map_err(|e| {
                    TutorError::database("Failed to add compatibility column to steps table")
                        .with_source(e)
                })?;
        }

        Ok(())
    }
}
