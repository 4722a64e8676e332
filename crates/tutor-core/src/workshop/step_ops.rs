//! Step operations for the Workshop.

use serde_json::Value;

use super::Workshop;
use crate::{
    doctree::EditSession,
    error::{Result, TutorError},
    links::{self, Deleted},
    models::StepRecord,
    params::{ApplyEdit, InsertStep, UpdateStep},
};

impl Workshop {
    /// Fetches one step by slug.
    pub async fn show_step(&self, slug: &str) -> Result<StepRecord> {
        let slug = slug.to_string();
        self.read(move |library| {
            library
                .find_step(&slug)?
                .ok_or_else(|| TutorError::step_not_found(&slug))
        })
        .await
    }

    /// Adds a placeholder step before or after an existing one.
    pub async fn insert_step(&self, params: &InsertStep) -> Result<StepRecord> {
        let anchor = params.anchor.clone();
        let placement = params.placement;
        self.mutate(move |steps| {
            let inserted = links::insert_step(steps, &anchor, placement)?;
            let step = links::require(&inserted.steps, &inserted.slug)?.clone();
            Ok((inserted.steps, step))
        })
        .await
    }

    /// Removes a step, joining its neighbors.
    ///
    /// The returned [`Deleted`] carries the slug to navigate to next; `None`
    /// means the tutorial is gone and the menu should be shown.
    pub async fn delete_step(&self, slug: &str) -> Result<Deleted> {
        let slug = slug.to_string();
        self.mutate(move |steps| {
            let deleted = links::delete_step(steps, &slug)?;
            Ok((deleted.steps.clone(), deleted))
        })
        .await
    }

    /// Edits a step's title, plain content or hint.
    pub async fn update_step(&self, params: &UpdateStep) -> Result<StepRecord> {
        let params = params.clone();
        self.mutate(move |steps| {
            let updated = links::update_step(steps, &params)?;
            let step = links::require(&updated, &params.slug)?.clone();
            Ok((updated, step))
        })
        .await
    }

    /// The document tree an editor should be seeded with for this step.
    pub async fn initial_document(&self, slug: &str) -> Result<Value> {
        let slug = slug.to_string();
        self.read(move |library| {
            let steps = library.load_steps()?;
            EditSession::open(&steps, &slug)?.initial_document(&steps)
        })
        .await
    }

    /// Stores a document tree emitted by the editor on the step.
    pub async fn apply_edit(&self, params: &ApplyEdit) -> Result<StepRecord> {
        let slug = params.slug.clone();
        let document = params.document.clone();
        self.mutate(move |steps| {
            let session = EditSession::open(steps, &slug)?;
            let updated = session.apply_change(steps, document)?;
            let step = links::require(&updated, session.slug())?.clone();
            Ok((updated, step))
        })
        .await
    }
}
