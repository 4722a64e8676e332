//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles the empty case itself, so callers can print the
//! result of a query without checking for emptiness first.

use std::{fmt, ops::Index};

use crate::{
    links::LinkIssue,
    models::{RunSummary, StepRecord},
};

/// Newtype wrapper for displaying the tutorial menu.
///
/// # Examples
///
/// ```rust
/// use tutor_core::{
///     display::RunSummaries,
///     models::{StepRecord, RunSummary, TutorialMeta},
/// };
///
/// let meta = TutorialMeta { name: "Blinky".into(), ..TutorialMeta::default() };
/// let head = StepRecord::new("blinky-1", &meta, "Start", "");
/// let menu = RunSummaries(vec![RunSummary::from_head(&head, 1)]);
/// assert!(menu.to_string().contains("## Blinky (1 step)"));
/// ```
pub struct RunSummaries(pub Vec<RunSummary>);

impl RunSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RunSummary> {
        self.0.iter()
    }
}

impl Index<usize> for RunSummaries {
    type Output = RunSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a RunSummaries {
    type Item = &'a RunSummary;
    type IntoIter = std::slice::Iter<'a, RunSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RunSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tutorials found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the steps of one tutorial in order.
pub struct Steps(pub Vec<StepRecord>);

impl Steps {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No steps found.")
        } else {
            for step in &self.0 {
                write!(f, "{step}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the outcome of a link check.
pub struct LinkReport(pub Vec<LinkIssue>);

impl LinkReport {
    /// True when no issue was found.
    pub fn is_clean(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "All tutorial links are intact.");
        }

        let plural = if self.0.len() == 1 { "" } else { "s" };
        writeln!(f, "Found {} link issue{plural}:", self.0.len())?;
        writeln!(f)?;
        for issue in &self.0 {
            writeln!(f, "- {issue}")?;
        }
        Ok(())
    }
}
