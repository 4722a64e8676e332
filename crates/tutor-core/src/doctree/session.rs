//! Editing sessions: the bridge between the rich-text editor and the steps.

use log::debug;
use serde_json::Value;

use super::node::DocumentTree;
use crate::{
    error::{Result, TutorError},
    models::StepRecord,
};

/// Stored as a step's `content` once its document tree is authoritative.
pub const RICH_CONTENT_PLACEHOLDER: &str = "[This step uses rich content]";

/// The tree the editor should start from for this step.
///
/// Returns the stored tree verbatim, or a single paragraph holding the
/// plain content.
pub fn initial_document(step: &StepRecord) -> Result<Value> {
    match &step.rich_content {
        Some(tree) => Ok(tree.clone()),
        None => DocumentTree::from_plain_text(&step.content).to_value(),
    }
}

/// An open editor bound to one step.
///
/// Change notifications from the editor are applied through the session, so
/// the target step is always explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    slug: String,
}

impl EditSession {
    /// Opens a session on the step with the given slug.
    pub fn open(steps: &[StepRecord], slug: &str) -> Result<Self> {
        if !steps.iter().any(|step| step.slug == slug) {
            return Err(TutorError::step_not_found(slug));
        }
        Ok(Self {
            slug: slug.to_string(),
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The document the editor should be seeded with.
    pub fn initial_document(&self, steps: &[StepRecord]) -> Result<Value> {
        let step = steps
            .iter()
            .find(|step| step.slug == self.slug)
            .ok_or_else(|| TutorError::step_not_found(&self.slug))?;
        initial_document(step)
    }

    /// Records the tree emitted by the editor on the session's step.
    ///
    /// The JSON must read as a document tree. It is stored verbatim and the
    /// plain content is replaced by [`RICH_CONTENT_PLACEHOLDER`]; plain text is
    /// never derived back from the tree.
    pub fn apply_change(&self, steps: &[StepRecord], emitted: Value) -> Result<Vec<StepRecord>> {
        DocumentTree::from_value(&emitted)?;

        let mut updated = steps.to_vec();
        let step = updated
            .iter_mut()
            .find(|step| step.slug == self.slug)
            .ok_or_else(|| TutorError::step_not_found(&self.slug))?;

        step.rich_content = Some(emitted);
        step.content = RICH_CONTENT_PLACEHOLDER.to_string();
        debug!("Stored editor document on step {}", self.slug);
        Ok(updated)
    }
}
