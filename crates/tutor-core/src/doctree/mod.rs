//! Document tree codec.
//!
//! The rich-text editor is an external collaborator that emits and consumes a
//! JSON node tree (`root`, `paragraph`, `code` and `text` nodes, the latter
//! carrying a style [`FormatMask`]). This module converts such trees into
//! display-ready [`Inline`] content and feeds editor changes back into the
//! step records through an [`EditSession`].
//!
//! ```rust
//! use serde_json::json;
//! use tutor_core::doctree::{DocumentTree, Rendering};
//!
//! let value = json!({"root": {"type": "root", "children": [
//!     {"type": "paragraph", "children": [
//!         {"type": "text", "text": "Hello", "format": 1}
//!     ]}
//! ]}});
//! let tree = DocumentTree::from_value(&value).unwrap();
//! let inline = Rendering::new(&tree).to_inline();
//! assert_eq!(inline.to_string(), "**Hello**\n\n");
//! ```

pub mod node;
pub mod render;
pub mod session;

pub use node::{DocNode, DocumentTree, FormatMask, NodeKind, TextStyle};
pub use render::{Inline, RenderEvent, RenderEvents, Rendering};
pub use session::{initial_document, EditSession, RICH_CONTENT_PLACEHOLDER};

use crate::{error::Result, models::StepRecord};

/// Renders a step's document tree, if it has one.
pub fn render_step(step: &StepRecord) -> Result<Option<Inline>> {
    match &step.rich_content {
        Some(value) => {
            let tree = DocumentTree::from_value(value)?;
            Ok(Some(Rendering::new(&tree).to_inline()))
        }
        None => Ok(None),
    }
}
