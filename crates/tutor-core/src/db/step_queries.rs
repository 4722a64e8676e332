//! Step collection queries.

use rusqlite::{params, types::Type, Connection, OptionalExtension, TransactionBehavior};
use serde_json::Value;

use super::Library;
use crate::{
    error::{DatabaseResultExt, Result, TutorError},
    models::{Platform, StepRecord},
};

const STEP_COLUMNS: &str = "id, slug, tutorial_name, author, icon, step_title, content, \
                            rich_content, hint, next_slug, prev_slug, compatibility";

const DELETE_ALL_STEPS_SQL: &str = "DELETE FROM steps";
const INSERT_STEP_SQL: &str = "INSERT INTO steps (position, id, slug, tutorial_name, author, icon, step_title, content, rich_content, hint, next_slug, prev_slug, compatibility) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const COUNT_STEPS_SQL: &str = "SELECT COUNT(*) FROM steps";

impl Library {
    /// Constructs a step from a row selected with [`STEP_COLUMNS`].
    fn build_step_from_row(row: &rusqlite::Row) -> rusqlite::Result<StepRecord> {
        let rich_content = row
            .get::<_, Option<String>>(7)?
            .map(|raw| serde_json::from_str::<Value>(&raw))
            .transpose()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

        let tags: String = row.get(11)?;
        let compatibility = Platform::parse_set(&tags).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(11, Type::Text, e.into())
        })?;

        Ok(StepRecord {
            id: row.get(0)?,
            slug: row.get(1)?,
            tutorial_name: row.get(2)?,
            author: row.get(3)?,
            icon: row.get(4)?,
            step_title: row.get(5)?,
            content: row.get(6)?,
            rich_content,
            hint: row.get(8)?,
            next: row.get(9)?,
            prev: row.get(10)?,
            compatibility,
        })
    }

    /// Loads the whole collection in stored order.
    pub fn load_steps(&self) -> Result<Vec<StepRecord>> {
        select_steps(&self.connection)
    }

    /// Fetches a single step by slug.
    pub fn find_step(&self, slug: &str) -> Result<Option<StepRecord>> {
        let sql = format!("SELECT {STEP_COLUMNS} FROM steps WHERE slug = ?1 ORDER BY position LIMIT 1");
        self.connection
            .query_row(&sql, params![slug], Self::build_step_from_row)
            .optional()
            .db_context("Failed to get step")
    }

    /// Number of stored steps.
    pub fn step_count(&self) -> Result<usize> {
        let count: i64 = self
            .connection
            .query_row(COUNT_STEPS_SQL, [], |row| row.get(0))
            .db_context("Failed to count steps")?;
        Ok(count as usize)
    }

    /// Replaces the stored collection with `steps` in one transaction.
    pub fn replace_steps(&mut self, steps: &[StepRecord]) -> Result<()> {
        self.edit_steps(|_| Ok((steps.to_vec(), ())))
    }

    /// Loads the collection, applies `edit`, and stores what it returns.
    ///
    /// The load and the write share one immediate transaction, so a second
    /// writer waits instead of overwriting this edit with a stale snapshot.
    /// Nothing is written when `edit` fails.
    pub fn edit_steps<T, F>(&mut self, edit: F) -> Result<T>
    where
        F: FnOnce(&[StepRecord]) -> Result<(Vec<StepRecord>, T)>,
    {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let steps = select_steps(&tx)?;
        let (updated, output) = edit(&steps)?;
        write_steps(&tx, &updated)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(output)
    }
}

fn select_steps(connection: &Connection) -> Result<Vec<StepRecord>> {
    let sql = format!("SELECT {STEP_COLUMNS} FROM steps ORDER BY position");
    let mut stmt = connection
        .prepare(&sql)
        .db_context("Failed to prepare step query")?;

    let steps = stmt
        .query_map([], Library::build_step_from_row)
        .db_context("Failed to query steps")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read steps")?;
    Ok(steps)
}

fn write_steps(connection: &Connection, steps: &[StepRecord]) -> Result<()> {
    connection
        .execute(DELETE_ALL_STEPS_SQL, [])
        .db_context("Failed to clear steps")?;

    let mut insert = connection
        .prepare(INSERT_STEP_SQL)
        .db_context("Failed to prepare step insert")?;
    for (position, step) in steps.iter().enumerate() {
        let rich_content = step
            .rich_content
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(TutorError::from)?;

        insert
            .execute(params![
                position as i64,
                step.id,
                step.slug,
                step.tutorial_name,
                step.author,
                step.icon,
                step.step_title,
                step.content,
                rich_content,
                step.hint,
                step.next,
                step.prev,
                Platform::join_set(&step.compatibility),
            ])
            .map_err(|e| {
                TutorError::database(format!("Failed to insert step {}", step.slug)).with_source(e)
            })?;
    }
    Ok(())
}
