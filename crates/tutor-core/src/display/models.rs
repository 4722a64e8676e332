//! Display implementations for domain models.
//!
//! Everything here renders markdown, so the same text works in the terminal
//! renderer and when piped to a file.

use std::fmt;

use log::warn;

use crate::{
    doctree::render_step,
    models::{Platform, RunSummary, StepRecord},
};

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StepRecord {
    /// Writes the step body, rendering the document tree when there is one.
    fn fmt_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match render_step(self) {
            Ok(Some(inline)) => write!(f, "{inline}"),
            Ok(None) => writeln!(f, "{}", self.content),
            Err(e) => {
                warn!(
                    "Step {} has an unreadable document tree, showing plain text: {e}",
                    self.slug
                );
                writeln!(f, "{}", self.content)
            }
        }
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.step_title)?;
        writeln!(f)?;

        writeln!(f, "- Tutorial: {}", self.tutorial_name)?;
        writeln!(f, "- Slug: `{}`", self.slug)?;
        if let Some(prev) = &self.prev {
            writeln!(f, "- Previous: `{prev}`")?;
        }
        if let Some(next) = &self.next {
            writeln!(f, "- Next: `{next}`")?;
        }
        if self.is_v2_only() {
            writeln!(f, "- Platforms: V2 only")?;
        }
        writeln!(f)?;

        self.fmt_body(f)?;

        if let Some(hint) = &self.hint {
            writeln!(f)?;
            writeln!(f, "#### Hint")?;
            writeln!(f)?;
            writeln!(f, "{hint}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.total_steps == 1 { "" } else { "s" };
        writeln!(f, "## {} ({} step{plural})", self.name, self.total_steps)?;
        writeln!(f)?;
        writeln!(f, "- **Start**: `{}`", self.head_slug)?;
        writeln!(f, "- **Author**: {}", self.author)?;
        if self.v2_only {
            writeln!(f, "- **Platforms**: V2 only")?;
        }
        writeln!(f)
    }
}
