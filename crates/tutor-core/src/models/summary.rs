//! Run summary types for the tutorial menu.

use serde::{Deserialize, Serialize};

use super::StepRecord;

/// Menu entry for one tutorial, built from its run head.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    /// Slug of the first step; opening the tutorial navigates here
    pub head_slug: String,
    /// Name of the tutorial
    pub name: String,
    /// Author of the tutorial
    pub author: String,
    /// Icon asset reference
    pub icon: String,
    /// Number of steps reachable from the head
    pub total_steps: usize,
    /// Whether the tutorial only targets the second hardware revision
    pub v2_only: bool,
}

impl RunSummary {
    /// Create a RunSummary from a run head and the length of its run
    pub fn from_head(head: &StepRecord, total_steps: usize) -> Self {
        Self {
            head_slug: head.slug.clone(),
            name: head.tutorial_name.clone(),
            author: head.author.clone(),
            icon: head.icon.clone(),
            total_steps,
            v2_only: head.is_v2_only(),
        }
    }
}
