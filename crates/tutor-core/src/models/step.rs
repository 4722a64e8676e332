//! Step record definition and related functionality.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Platform, TutorialMeta};

/// One step of a tutorial.
///
/// Steps live in a flat collection and form doubly-linked runs through slug
/// references. Optional references are modelled as `Option`s so that the
/// "defined iff flag" pairs (`hint`/`has_hint`, `next`/`has_next`,
/// `prev`/`has_prev`) cannot disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepRecord {
    /// Identifier, unique within a collection
    pub id: String,

    /// Name of the whole tutorial; shared by every step of the run
    pub tutorial_name: String,

    /// Author of the tutorial
    pub author: String,

    /// Asset reference for the tutorial's icon
    pub icon: String,

    /// Heading of this particular step
    pub step_title: String,

    /// Plain-text body, or a placeholder once `rich_content` is authoritative
    pub content: String,

    /// Editor document tree, stored verbatim as emitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rich_content: Option<Value>,

    /// Optional hint for this step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Stable key used for linking and navigation
    pub slug: String,

    /// Slug of the following step in the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Slug of the preceding step in the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// Target platforms this step works on
    #[serde(default = "Platform::all")]
    pub compatibility: BTreeSet<Platform>,
}

impl StepRecord {
    /// Creates an unlinked step carrying the given tutorial metadata.
    ///
    /// The slug doubles as the id.
    pub fn new(
        slug: impl Into<String>,
        meta: &TutorialMeta,
        step_title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let slug = slug.into();
        Self {
            id: slug.clone(),
            tutorial_name: meta.name.clone(),
            author: meta.author.clone(),
            icon: meta.icon.clone(),
            step_title: step_title.into(),
            content: content.into(),
            rich_content: None,
            hint: None,
            slug,
            next: None,
            prev: None,
            compatibility: Platform::all(),
        }
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// Run heads are the steps listed in the tutorial menu.
    pub fn is_run_head(&self) -> bool {
        self.prev.is_none()
    }

    /// The tutorial metadata shared across the run.
    pub fn meta(&self) -> TutorialMeta {
        TutorialMeta {
            name: self.tutorial_name.clone(),
            author: self.author.clone(),
            icon: self.icon.clone(),
        }
    }

    /// True when the step only targets the second hardware revision.
    pub fn is_v2_only(&self) -> bool {
        self.compatibility.len() == 1 && self.compatibility.contains(&Platform::MicrobitV2)
    }
}
