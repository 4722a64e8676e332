//! Result wrapper types for displaying operation outcomes.
//!
//! These format the results of create, update and delete operations with a
//! one-line confirmation followed by the affected resource.

use std::fmt;

use crate::models::{RunSummary, StepRecord};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use tutor_core::{display::CreateResult, models::{StepRecord, TutorialMeta}};
///
/// let step = StepRecord::new("blinky-2", &TutorialMeta::default(), "New tutorial step", "");
/// let output = CreateResult::new(step).to_string();
/// assert!(output.starts_with("Created step `blinky-2`"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<StepRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created step `{}`", self.resource.slug)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<RunSummary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Imported tutorial '{}'", self.resource.name)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Tracks the list of changes so the user sees what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for UpdateResult<StepRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated step `{}`", self.resource.slug)?;
        self.fmt_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<RunSummary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated tutorial '{}'", self.resource.name)?;
        self.fmt_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// `focus` is where navigation continues; without one the user goes back to
/// the tutorial menu.
pub struct DeleteResult<T> {
    pub resource: T,
    pub focus: Option<String>,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T, focus: Option<String>) -> Self {
        Self { resource, focus }
    }
}

impl fmt::Display for DeleteResult<StepRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted step '{}' (`{}`)",
            self.resource.step_title, self.resource.slug
        )?;
        match &self.focus {
            Some(slug) => writeln!(f, "Continue at `{slug}`"),
            None => writeln!(
                f,
                "Tutorial '{}' has no steps left; back to the tutorial menu",
                self.resource.tutorial_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TutorialMeta;

    fn step() -> StepRecord {
        let meta = TutorialMeta {
            name: "Blinky".to_string(),
            ..TutorialMeta::default()
        };
        StepRecord::new("blinky-1", &meta, "Hello", "Body")
    }

    #[test]
    fn test_update_result_lists_changes() {
        let result = UpdateResult::with_changes(step(), vec!["Updated title".to_string()]);
        let output = result.to_string();
        assert!(output.starts_with("Updated step `blinky-1`"));
        assert!(output.contains("Changes made:\n- Updated title"));
        assert!(output.contains("## Hello"));

        let quiet = UpdateResult::new(step()).to_string();
        assert!(!quiet.contains("Changes made"));
    }

    #[test]
    fn test_delete_result_focus() {
        let output = DeleteResult::new(step(), Some("blinky-2".to_string())).to_string();
        assert!(output.contains("Deleted step 'Hello' (`blinky-1`)"));
        assert!(output.contains("Continue at `blinky-2`"));

        let output = DeleteResult::new(step(), None).to_string();
        assert!(output.contains("back to the tutorial menu"));
    }

    #[test]
    fn test_import_result() {
        let summary = RunSummary::from_head(&step(), 2);
        let output = CreateResult::new(summary).to_string();
        assert!(output.starts_with("Imported tutorial 'Blinky'"));
        assert!(output.contains("(2 steps)"));
    }
}
