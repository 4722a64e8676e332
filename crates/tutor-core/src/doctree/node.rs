//! Typed view of the rich-text editor's JSON document tree.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, TutorError};

/// Inline text style encoded by one bit of a [`FormatMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Bold,
    Italic,
    Strikethrough,
    Underline,
}

impl TextStyle {
    /// Nesting order: each style in this list wraps the ones before it.
    pub const ORDER: [TextStyle; 4] = [
        TextStyle::Bold,
        TextStyle::Italic,
        TextStyle::Strikethrough,
        TextStyle::Underline,
    ];

    pub fn bit(self) -> u32 {
        match self {
            TextStyle::Bold => 1,
            TextStyle::Italic => 1 << 1,
            TextStyle::Strikethrough => 1 << 2,
            TextStyle::Underline => 1 << 3,
        }
    }
}

/// Bit field of text styles carried by `text` nodes.
///
/// Container nodes use a string `format` (alignment) in the editor's output;
/// any non-numeric value reads as an empty mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FormatMask(pub u32);

impl FormatMask {
    pub const PLAIN: FormatMask = FormatMask(0);

    pub fn contains(self, style: TextStyle) -> bool {
        self.0 & style.bit() != 0
    }

    /// The styles set in this mask, in nesting order.
    pub fn styles(self) -> impl Iterator<Item = TextStyle> {
        TextStyle::ORDER
            .into_iter()
            .filter(move |style| self.contains(*style))
    }
}

impl<'de> Deserialize<'de> for FormatMask {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bits(u32),
            Alignment(String),
            Missing,
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bits(bits) => FormatMask(bits),
            Raw::Alignment(_) | Raw::Missing => FormatMask::PLAIN,
        })
    }
}

/// Node type tag. Tags the renderer does not know are kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Root,
    Paragraph,
    Code,
    Text,
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Code => "code",
            NodeKind::Text => "text",
            NodeKind::Other(tag) => tag,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "root" => NodeKind::Root,
            "paragraph" => NodeKind::Paragraph,
            "code" => NodeKind::Code,
            "text" => NodeKind::Text,
            _ => NodeKind::Other(tag),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One node of the document tree.
///
/// Unknown editor fields (`version`, `direction`, `style`, ...) are ignored
/// here; the verbatim JSON is what gets stored on the step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default)]
    pub format: FormatMask,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DocNode>>,
}

impl DocNode {
    pub fn text(text: impl Into<String>, format: FormatMask) -> Self {
        Self {
            kind: NodeKind::Text,
            text: Some(text.into()),
            format,
            children: None,
        }
    }

    pub fn container(kind: NodeKind, children: Vec<DocNode>) -> Self {
        Self {
            kind,
            text: None,
            format: FormatMask::PLAIN,
            children: Some(children),
        }
    }

    pub fn children(&self) -> &[DocNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Concatenates the text of every descendant leaf, ignoring formatting.
    pub fn plain_text(&self) -> String {
        match &self.children {
            Some(children) => children.iter().map(DocNode::plain_text).collect(),
            None => self.text.clone().unwrap_or_default(),
        }
    }
}

/// The editor's top-level wrapper: `{"root": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTree {
    pub root: DocNode,
}

impl DocumentTree {
    /// Reads the typed tree out of the stored JSON without consuming it.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| TutorError::DocumentTree {
            message: e.to_string(),
        })
    }

    /// A tree holding a single paragraph with one unformatted text node.
    pub fn from_plain_text(text: &str) -> Self {
        Self {
            root: DocNode::container(
                NodeKind::Root,
                vec![DocNode::container(
                    NodeKind::Paragraph,
                    vec![DocNode::text(text, FormatMask::PLAIN)],
                )],
            ),
        }
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reads_editor_output() {
        let value = json!({
            "root": {
                "children": [{
                    "children": [{
                        "detail": 0, "format": 1, "mode": "normal", "style": "",
                        "text": "starting off", "type": "text", "version": 1
                    }],
                    "direction": "ltr", "format": "", "indent": 0,
                    "type": "paragraph", "version": 1
                }],
                "direction": "ltr", "format": "", "indent": 0,
                "type": "root", "version": 1
            }
        });

        let tree = DocumentTree::from_value(&value).unwrap();
        assert_eq!(tree.root.kind, NodeKind::Root);
        let paragraph = &tree.root.children()[0];
        assert_eq!(paragraph.kind, NodeKind::Paragraph);
        assert_eq!(paragraph.format, FormatMask::PLAIN);
        let text = &paragraph.children()[0];
        assert_eq!(text.text.as_deref(), Some("starting off"));
        assert!(text.format.contains(TextStyle::Bold));
    }

    #[test]
    fn test_unknown_kinds_are_preserved() {
        let node: DocNode =
            serde_json::from_value(json!({"type": "linebreak", "format": null})).unwrap();
        assert_eq!(node.kind, NodeKind::Other("linebreak".to_string()));
        assert_eq!(node.format, FormatMask::PLAIN);
        assert_eq!(serde_json::to_value(&node).unwrap()["type"], "linebreak");
    }

    #[test]
    fn test_missing_root_is_rejected() {
        let err = DocumentTree::from_value(&json!({"type": "root"})).unwrap_err();
        assert!(matches!(err, TutorError::DocumentTree { .. }));
    }

    #[test]
    fn test_plain_text_flattens_descendants() {
        let code = DocNode::container(
            NodeKind::Code,
            vec![
                DocNode::text("let x", FormatMask(1)),
                DocNode::container(
                    NodeKind::Other("code-highlight".to_string()),
                    vec![DocNode::text(" = 1;", FormatMask::PLAIN)],
                ),
            ],
        );
        assert_eq!(code.plain_text(), "let x = 1;");
    }

    #[test]
    fn test_mask_styles_in_nesting_order() {
        let styles: Vec<_> = FormatMask(0b1010).styles().collect();
        assert_eq!(styles, vec![TextStyle::Italic, TextStyle::Underline]);
        assert_eq!(FormatMask::PLAIN.styles().count(), 0);
    }

    #[test]
    fn test_from_plain_text_round_trips() {
        let tree = DocumentTree::from_plain_text("hello");
        let value = tree.to_value().unwrap();
        assert_eq!(value["root"]["children"][0]["children"][0]["text"], "hello");
        assert_eq!(DocumentTree::from_value(&value).unwrap(), tree);
    }
}
