//! Structural edits on the step collection.

use std::collections::HashSet;

use log::{debug, warn};

use super::{position, require};
use crate::{
    error::{Result, TutorError},
    models::{normalize_name, slugify, StepRecord, TutorialMeta},
    params::UpdateStep,
};

const NEW_STEP_TITLE: &str = "New tutorial step";
const NEW_TUTORIAL_CONTENT: &str = "New tutorial content";
const NEW_BEFORE_CONTENT: &str = "New tutorial content before what was there before";
const NEW_AFTER_CONTENT: &str = "New tutorial content after what was there before";

/// Where a new step goes relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// A new collection together with the slug of the step that was created.
#[derive(Debug, Clone)]
pub struct Inserted {
    pub steps: Vec<StepRecord>,
    pub slug: String,
}

/// A new collection after a delete, plus where navigation should go next.
///
/// `focus` is the deleted step's successor, else its predecessor, else `None`
/// when the whole run vanished.
#[derive(Debug, Clone)]
pub struct Deleted {
    pub steps: Vec<StepRecord>,
    pub removed: StepRecord,
    pub focus: Option<String>,
}

/// Slug for a new step: the slugified tutorial name plus the collection size,
/// bumped until nothing uses or references it.
fn fresh_slug(steps: &[StepRecord], name: &str) -> String {
    let base = slugify(name);
    let mut counter = steps.len();
    loop {
        let candidate = format!("{base}-{counter}");
        let taken = steps.iter().any(|step| {
            step.slug == candidate
                || step.id == candidate
                || step.next.as_deref() == Some(candidate.as_str())
                || step.prev.as_deref() == Some(candidate.as_str())
        });
        if !taken {
            return candidate;
        }
        counter += 1;
    }
}

/// Sets one link field of `neighbor` to `target`.
///
/// Returns false, leaving the collection untouched, when the neighbor does
/// not exist.
fn relink(
    steps: &mut [StepRecord],
    neighbor: &str,
    field: fn(&mut StepRecord) -> &mut Option<String>,
    target: Option<String>,
) -> bool {
    match position(steps, neighbor) {
        Some(idx) => {
            *field(&mut steps[idx]) = target;
            true
        }
        None => {
            warn!("Neighbor step {neighbor} is missing; leaving its links untouched");
            false
        }
    }
}

fn next_field(step: &mut StepRecord) -> &mut Option<String> {
    &mut step.next
}

fn prev_field(step: &mut StepRecord) -> &mut Option<String> {
    &mut step.prev
}

/// Creates a step next to `anchor_slug` and splices it into the anchor's run.
pub fn insert_step(
    steps: &[StepRecord],
    anchor_slug: &str,
    placement: Placement,
) -> Result<Inserted> {
    let anchor_idx =
        position(steps, anchor_slug).ok_or_else(|| TutorError::step_not_found(anchor_slug))?;
    let anchor = &steps[anchor_idx];

    let slug = fresh_slug(steps, &anchor.tutorial_name);
    let content = match placement {
        Placement::Before => NEW_BEFORE_CONTENT,
        Placement::After => NEW_AFTER_CONTENT,
    };
    let mut step = StepRecord::new(slug.clone(), &anchor.meta(), NEW_STEP_TITLE, content);
    step.compatibility = anchor.compatibility.clone();

    let mut updated = steps.to_vec();
    match placement {
        Placement::Before => {
            step.next = Some(anchor.slug.clone());
            step.prev = anchor.prev.clone();
            if let Some(prev) = &anchor.prev {
                relink(&mut updated, prev, next_field, Some(slug.clone()));
            }
            updated[anchor_idx].prev = Some(slug.clone());
        }
        Placement::After => {
            step.prev = Some(anchor.slug.clone());
            step.next = anchor.next.clone();
            if let Some(next) = &anchor.next {
                relink(&mut updated, next, prev_field, Some(slug.clone()));
            }
            updated[anchor_idx].next = Some(slug.clone());
        }
    }

    debug!("Inserted step {slug} {placement:?} {anchor_slug}");
    updated.push(step);
    Ok(Inserted {
        steps: updated,
        slug,
    })
}

/// Inserts a new step directly before the anchor.
pub fn insert_before(steps: &[StepRecord], anchor_slug: &str) -> Result<Inserted> {
    insert_step(steps, anchor_slug, Placement::Before)
}

/// Inserts a new step directly after the anchor.
pub fn insert_after(steps: &[StepRecord], anchor_slug: &str) -> Result<Inserted> {
    insert_step(steps, anchor_slug, Placement::After)
}

/// Removes a step and links its neighbors directly to each other.
///
/// Deleting a head promotes its successor to head; deleting a tail makes
/// its predecessor the tail; deleting a singleton removes the run.
pub fn delete_step(steps: &[StepRecord], slug: &str) -> Result<Deleted> {
    let idx = position(steps, slug).ok_or_else(|| TutorError::step_not_found(slug))?;

    let mut updated = steps.to_vec();
    let removed = updated.remove(idx);

    // Only neighbors that resolve take part in the repair.
    let prev = removed
        .prev
        .clone()
        .filter(|prev| relink(&mut updated, prev, next_field, removed.next.clone()));
    let next = removed
        .next
        .clone()
        .filter(|next| relink(&mut updated, next, prev_field, prev.clone()));

    // A missing successor must not stay referenced by the predecessor.
    if let (Some(prev), None) = (&prev, &next) {
        if removed.next.is_some() {
            relink(&mut updated, prev, next_field, None);
        }
    }

    debug!("Deleted step {slug}");
    let focus = next.or(prev);
    Ok(Deleted {
        steps: updated,
        removed,
        focus,
    })
}

/// Renames every step of the run containing `slug`.
///
/// Steps are matched by their current tutorial name. The rename is rejected
/// when a different run already uses the (whitespace-normalized) target name;
/// renaming a run to its own name succeeds.
pub fn rename_run(steps: &[StepRecord], slug: &str, new_name: &str) -> Result<Vec<StepRecord>> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(TutorError::invalid_input("name").with_reason("Tutorial name cannot be empty"));
    }

    let current = require(steps, slug)?.tutorial_name.clone();
    let target = normalize_name(new_name);
    if normalize_name(&current) != target
        && steps
            .iter()
            .any(|step| normalize_name(&step.tutorial_name) == target)
    {
        return Err(TutorError::invalid_input("name")
            .with_reason(format!("A tutorial named '{new_name}' already exists")));
    }

    debug!("Renaming tutorial '{current}' to '{new_name}'");
    Ok(steps
        .iter()
        .cloned()
        .map(|mut step| {
            if step.tutorial_name == current {
                step.tutorial_name = new_name.to_string();
            }
            step
        })
        .collect())
}

/// Starts a new tutorial as a singleton run.
pub fn create_tutorial(steps: &[StepRecord], meta: TutorialMeta) -> Result<Inserted> {
    let name = meta.name.trim().to_string();
    if name.is_empty() {
        return Err(TutorError::invalid_input("name").with_reason("Tutorial name cannot be empty"));
    }

    let normalized = normalize_name(&name);
    if steps
        .iter()
        .any(|step| normalize_name(&step.tutorial_name) == normalized)
    {
        return Err(TutorError::invalid_input("name")
            .with_reason(format!("A tutorial named '{name}' already exists")));
    }

    let slug = format!("{}-1", slugify(&name));
    if steps.iter().any(|step| step.slug == slug || step.id == slug) {
        return Err(TutorError::invalid_input("name")
            .with_reason(format!("The slug '{slug}' is already in use")));
    }

    let meta = TutorialMeta { name, ..meta };
    let mut updated = steps.to_vec();
    updated.push(StepRecord::new(
        slug.clone(),
        &meta,
        NEW_STEP_TITLE,
        NEW_TUTORIAL_CONTENT,
    ));
    debug!("Created tutorial '{}' at {slug}", meta.name);
    Ok(Inserted {
        steps: updated,
        slug,
    })
}

/// Adds a parsed run to the collection.
///
/// Rejected as a whole when any of the run's tutorial names or slugs is
/// already used in the collection.
pub fn merge_run(steps: &[StepRecord], run: Vec<StepRecord>) -> Result<Vec<StepRecord>> {
    let existing_names: HashSet<String> = steps
        .iter()
        .map(|step| normalize_name(&step.tutorial_name))
        .collect();
    let existing_keys: HashSet<&str> = steps
        .iter()
        .flat_map(|step| [step.slug.as_str(), step.id.as_str()])
        .collect();

    for step in &run {
        if existing_names.contains(&normalize_name(&step.tutorial_name)) {
            return Err(TutorError::invalid_input("name").with_reason(format!(
                "A tutorial named '{}' already exists",
                step.tutorial_name
            )));
        }
        if existing_keys.contains(step.slug.as_str()) || existing_keys.contains(step.id.as_str())
        {
            return Err(TutorError::invalid_input("slug")
                .with_reason(format!("The slug '{}' is already in use", step.slug)));
        }
    }

    let mut updated = steps.to_vec();
    updated.extend(run);
    Ok(updated)
}

/// Applies title, content and hint edits to one step.
///
/// Setting plain content makes it authoritative again, so any stored
/// document tree is dropped.
pub fn update_step(steps: &[StepRecord], params: &UpdateStep) -> Result<Vec<StepRecord>> {
    if params.hint.is_some() && params.clear_hint {
        return Err(TutorError::invalid_input("hint")
            .with_reason("Cannot set and clear the hint at the same time"));
    }

    let idx =
        position(steps, &params.slug).ok_or_else(|| TutorError::step_not_found(&params.slug))?;
    let mut updated = steps.to_vec();
    let step = &mut updated[idx];

    if let Some(title) = &params.title {
        step.step_title = title.clone();
    }
    if let Some(content) = &params.content {
        step.content = content.clone();
        step.rich_content = None;
    }
    if let Some(hint) = &params.hint {
        step.hint = Some(hint.clone());
    }
    if params.clear_hint {
        step.hint = None;
    }

    Ok(updated)
}
