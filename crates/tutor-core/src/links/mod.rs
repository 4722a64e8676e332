//! Step record and link model.
//!
//! Steps are kept in one flat collection (the arena) and chained into runs by
//! `next`/`prev` slug references. Every operation that touches those
//! references lives in this module so the run invariants are enforced in one
//! place:
//!
//! - following `next` from a step resolves to exactly one step whose `prev`
//!   points back, and vice versa;
//! - a step without `prev` is a run head, and the run heads are exactly the
//!   tutorials listed in the menu.
//!
//! All mutating operations are copy-on-write: they take the current
//! collection by reference and return a new one, leaving the input untouched.
//!
//! A reference that does not resolve (a *dangling* neighbor) never aborts an
//! operation. The operation proceeds on whatever links do resolve and logs a
//! warning; [`verify_links`] reports every such defect.
//!
//! # Examples
//!
//! ```rust
//! use tutor_core::{links, models::TutorialMeta};
//!
//! let meta = TutorialMeta { name: "Blinky".into(), ..TutorialMeta::default() };
//! let created = links::create_tutorial(&[], meta).unwrap();
//! let inserted = links::insert_after(&created.steps, &created.slug).unwrap();
//!
//! let run = links::walk_run(&inserted.steps, &created.slug).unwrap();
//! assert_eq!(run.len(), 2);
//! assert!(links::verify_links(&inserted.steps).is_empty());
//! ```

use std::collections::HashSet;

use log::warn;

use crate::{
    error::{Result, TutorError},
    models::{RunSummary, StepRecord},
};

mod edit;
mod verify;


pub use edit::{
    create_tutorial, delete_step, insert_after, insert_before, insert_step, merge_run,
    rename_run, update_step, Deleted, Inserted, Placement,
};
pub use verify::{verify_links, LinkIssue};

/// Finds a step by slug with a linear scan.
pub fn find_by_slug<'a>(steps: &'a [StepRecord], slug: &str) -> Option<&'a StepRecord> {
    steps.iter().find(|step| step.slug == slug)
}

/// Like [`find_by_slug`], but a missing step is an error.
pub fn require<'a>(steps: &'a [StepRecord], slug: &str) -> Result<&'a StepRecord> {
    find_by_slug(steps, slug).ok_or_else(|| TutorError::step_not_found(slug))
}

pub(crate) fn position(steps: &[StepRecord], slug: &str) -> Option<usize> {
    steps.iter().position(|step| step.slug == slug)
}

/// The steps shown in the tutorial menu, in collection order.
pub fn run_heads(steps: &[StepRecord]) -> Vec<&StepRecord> {
    steps.iter().filter(|step| step.is_run_head()).collect()
}

/// Walks `prev` links from the given step to the head of its run.
///
/// Stops early at a dangling `prev` or a cycle, treating the last resolved
/// step as the head.
pub fn find_head<'a>(steps: &'a [StepRecord], slug: &str) -> Result<&'a StepRecord> {
    let mut current = require(steps, slug)?;
    let mut seen = HashSet::from([current.slug.as_str()]);

    while let Some(prev) = &current.prev {
        let Some(step) = find_by_slug(steps, prev) else {
            warn!(
                "Step {} points to missing previous step {prev}; treating it as the run head",
                current.slug
            );
            break;
        };
        if !seen.insert(step.slug.as_str()) {
            warn!("Cycle detected while looking for the head of {slug}");
            break;
        }
        current = step;
    }

    Ok(current)
}

/// Returns the whole run containing the given step, in link order from the head.
///
/// A dangling `next` ends the walk instead of failing, as does a cycle.
pub fn walk_run<'a>(steps: &'a [StepRecord], slug: &str) -> Result<Vec<&'a StepRecord>> {
    let head = find_head(steps, slug)?;
    Ok(walk_from(steps, head))
}

fn walk_from<'a>(steps: &'a [StepRecord], head: &'a StepRecord) -> Vec<&'a StepRecord> {
    let mut run = vec![head];
    let mut seen = HashSet::from([head.slug.as_str()]);
    let mut current = head;

    while let Some(next) = &current.next {
        let Some(step) = find_by_slug(steps, next) else {
            warn!(
                "Step {} points to missing next step {next}; ending the run there",
                current.slug
            );
            break;
        };
        if !seen.insert(step.slug.as_str()) {
            warn!("Cycle detected after step {}", current.slug);
            break;
        }
        run.push(step);
        current = step;
    }

    run
}

/// Menu entries for every run in the collection.
pub fn summaries(steps: &[StepRecord]) -> Vec<RunSummary> {
    run_heads(steps)
        .into_iter()
        .map(|head| RunSummary::from_head(head, walk_from(steps, head).len()))
        .collect()
}
