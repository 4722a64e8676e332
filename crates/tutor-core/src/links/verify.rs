//! Link integrity checks.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use crate::models::StepRecord;

use super::walk_from;

/// One violation of the run invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkIssue {
    /// Two steps share a slug
    DuplicateSlug { slug: String },
    /// `next` names a step that does not exist
    DanglingNext { slug: String, next: String },
    /// `prev` names a step that does not exist
    DanglingPrev { slug: String, prev: String },
    /// `next` resolves, but that step's `prev` does not point back
    AsymmetricNext { slug: String, next: String },
    /// `prev` resolves, but that step's `next` does not point back
    AsymmetricPrev { slug: String, prev: String },
    /// The step cannot be reached from any run head (e.g. a cycle)
    Unreachable { slug: String },
}

impl fmt::Display for LinkIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkIssue::DuplicateSlug { slug } => write!(f, "Slug {slug} is used more than once"),
            LinkIssue::DanglingNext { slug, next } => {
                write!(f, "Step {slug} links forward to missing step {next}")
            }
            LinkIssue::DanglingPrev { slug, prev } => {
                write!(f, "Step {slug} links back to missing step {prev}")
            }
            LinkIssue::AsymmetricNext { slug, next } => {
                write!(f, "Step {slug} links forward to {next}, which does not link back")
            }
            LinkIssue::AsymmetricPrev { slug, prev } => {
                write!(f, "Step {slug} links back to {prev}, which does not link forward")
            }
            LinkIssue::Unreachable { slug } => {
                write!(f, "Step {slug} is not reachable from any tutorial start")
            }
        }
    }
}

/// Checks every step of the collection against the run invariants.
///
/// An empty result means every run is a well-formed linear chain.
pub fn verify_links(steps: &[StepRecord]) -> Vec<LinkIssue> {
    let mut issues = Vec::new();
    let mut by_slug: HashMap<&str, &StepRecord> = HashMap::new();

    for step in steps {
        if by_slug.insert(step.slug.as_str(), step).is_some() {
            issues.push(LinkIssue::DuplicateSlug {
                slug: step.slug.clone(),
            });
        }
    }

    for step in steps {
        if let Some(next) = &step.next {
            match by_slug.get(next.as_str()) {
                None => issues.push(LinkIssue::DanglingNext {
                    slug: step.slug.clone(),
                    next: next.clone(),
                }),
                Some(target) if target.prev.as_deref() != Some(step.slug.as_str()) => {
                    issues.push(LinkIssue::AsymmetricNext {
                        slug: step.slug.clone(),
                        next: next.clone(),
                    })
                }
                Some(_) => {}
            }
        }
        if let Some(prev) = &step.prev {
            match by_slug.get(prev.as_str()) {
                None => issues.push(LinkIssue::DanglingPrev {
                    slug: step.slug.clone(),
                    prev: prev.clone(),
                }),
                Some(target) if target.next.as_deref() != Some(step.slug.as_str()) => {
                    issues.push(LinkIssue::AsymmetricPrev {
                        slug: step.slug.clone(),
                        prev: prev.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    let reachable: HashSet<&str> = steps
        .iter()
        .filter(|step| step.is_run_head())
        .flat_map(|head| walk_from(steps, head))
        .map(|step| step.slug.as_str())
        .collect();
    for step in steps {
        if !reachable.contains(step.slug.as_str()) {
            issues.push(LinkIssue::Unreachable {
                slug: step.slug.clone(),
            });
        }
    }

    issues
}
