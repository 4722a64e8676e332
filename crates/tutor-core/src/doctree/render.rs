//! Conversion of a document tree into render-ready inline content.
//!
//! Rendering is a lazy depth-first walk ([`RenderEvents`]) over borrowed
//! nodes. Each call to [`Rendering::events`] starts a fresh walk, so the same
//! tree can be rendered any number of times. [`Rendering::to_inline`] folds
//! the events into an owned [`Inline`] tree for display.

use std::fmt;

use super::node::{DocNode, DocumentTree, FormatMask, NodeKind, TextStyle};

/// One step of the render walk.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent<'a> {
    /// A `root` or `paragraph` node opened a block container
    BlockStart,
    /// The innermost open block container closed
    BlockEnd,
    /// A text leaf with its style mask
    Text { text: &'a str, format: FormatMask },
    /// A code node, already flattened to plain text for the code viewer
    Code(String),
    /// A node type the renderer does not understand
    Placeholder { kind: &'a str },
}

enum Frame<'a> {
    Enter(&'a DocNode),
    Exit,
}

/// Iterator over the render events of one subtree.
///
/// Uses an explicit stack, so deep trees do not recurse. Children of code
/// nodes and of unknown nodes are never visited.
pub struct RenderEvents<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> RenderEvents<'a> {
    fn new(node: &'a DocNode) -> Self {
        Self {
            stack: vec![Frame::Enter(node)],
        }
    }
}

impl<'a> Iterator for RenderEvents<'a> {
    type Item = RenderEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = match self.stack.pop()? {
            Frame::Exit => return Some(RenderEvent::BlockEnd),
            Frame::Enter(node) => node,
        };

        let event = match &node.kind {
            NodeKind::Root | NodeKind::Paragraph => {
                self.stack.push(Frame::Exit);
                self.stack
                    .extend(node.children().iter().rev().map(Frame::Enter));
                RenderEvent::BlockStart
            }
            NodeKind::Text => RenderEvent::Text {
                text: node.text.as_deref().unwrap_or_default(),
                format: node.format,
            },
            NodeKind::Code => RenderEvent::Code(node.plain_text()),
            NodeKind::Other(kind) => RenderEvent::Placeholder { kind },
        };
        Some(event)
    }
}

/// Inline content ready for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Styled {
        style: TextStyle,
        content: Box<Inline>,
    },
    /// Source code handed to the code viewer as one plain string
    Code(String),
    Block(Vec<Inline>),
    /// Empty stand-in for unsupported nodes
    Placeholder,
}

impl Inline {
    /// Wraps text in one layer per style set in the mask.
    ///
    /// Later styles wrap earlier ones, so bold+italic yields italic around
    /// bold.
    pub fn styled(text: &str, format: FormatMask) -> Self {
        format
            .styles()
            .fold(Inline::Text(text.to_string()), |inner, style| Inline::Styled {
                style,
                content: Box::new(inner),
            })
    }
}

/// A render of one document tree.
#[derive(Debug, Clone, Copy)]
pub struct Rendering<'a> {
    root: &'a DocNode,
}

impl<'a> Rendering<'a> {
    pub fn new(tree: &'a DocumentTree) -> Self {
        Self { root: &tree.root }
    }

    pub fn of_node(node: &'a DocNode) -> Self {
        Self { root: node }
    }

    /// Starts a new walk from the root.
    pub fn events(&self) -> RenderEvents<'a> {
        RenderEvents::new(self.root)
    }

    /// Builds the inline tree from a fresh walk.
    pub fn to_inline(&self) -> Inline {
        let mut open: Vec<Vec<Inline>> = vec![Vec::new()];

        for event in self.events() {
            match event {
                RenderEvent::BlockStart => open.push(Vec::new()),
                RenderEvent::BlockEnd => {
                    let children = open.pop().unwrap_or_default();
                    if let Some(parent) = open.last_mut() {
                        parent.push(Inline::Block(children));
                    }
                }
                RenderEvent::Text { text, format } => {
                    if let Some(current) = open.last_mut() {
                        current.push(Inline::styled(text, format));
                    }
                }
                RenderEvent::Code(code) => {
                    if let Some(current) = open.last_mut() {
                        current.push(Inline::Code(code));
                    }
                }
                RenderEvent::Placeholder { .. } => {
                    if let Some(current) = open.last_mut() {
                        current.push(Inline::Placeholder);
                    }
                }
            }
        }

        let mut top = open.pop().unwrap_or_default();
        if top.len() == 1 {
            top.remove(0)
        } else {
            Inline::Block(top)
        }
    }
}

fn style_delimiters(style: TextStyle) -> (&'static str, &'static str) {
    match style {
        TextStyle::Bold => ("**", "**"),
        TextStyle::Italic => ("*", "*"),
        TextStyle::Strikethrough => ("~~", "~~"),
        TextStyle::Underline => ("<u>", "</u>"),
    }
}

/// Markdown rendering of inline content.
impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inline::Text(text) => write!(f, "{text}"),
            Inline::Styled { style, content } => {
                let (open, close) = style_delimiters(*style);
                write!(f, "{open}{content}{close}")
            }
            Inline::Code(code) => write!(f, "\n```\n{code}\n```\n"),
            Inline::Block(children) => {
                for child in children {
                    write!(f, "{child}")?;
                }
                writeln!(f)
            }
            Inline::Placeholder => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(children: Vec<DocNode>) -> DocNode {
        DocNode::container(NodeKind::Paragraph, children)
    }

    fn tree(children: Vec<DocNode>) -> DocumentTree {
        DocumentTree {
            root: DocNode::container(NodeKind::Root, children),
        }
    }

    #[test]
    fn test_bold_italic_nests_italic_around_bold() {
        let inline = Inline::styled("hi", FormatMask(0b0011));
        assert_eq!(
            inline,
            Inline::Styled {
                style: TextStyle::Italic,
                content: Box::new(Inline::Styled {
                    style: TextStyle::Bold,
                    content: Box::new(Inline::Text("hi".to_string())),
                }),
            }
        );
        assert_eq!(inline.to_string(), "***hi***");
    }

    #[test]
    fn test_plain_mask_is_unwrapped() {
        assert_eq!(
            Inline::styled("plain", FormatMask::PLAIN),
            Inline::Text("plain".to_string())
        );
    }

    #[test]
    fn test_all_styles_nest_in_fixed_order() {
        let inline = Inline::styled("x", FormatMask(0b1111));
        assert_eq!(inline.to_string(), "<u>~~***x***~~</u>");
    }

    #[test]
    fn test_events_walk_blocks_in_order() {
        let doc = tree(vec![paragraph(vec![
            DocNode::text("a", FormatMask::PLAIN),
            DocNode::text("b", FormatMask(1)),
        ])]);
        let events: Vec<_> = Rendering::new(&doc).events().collect();
        assert_eq!(
            events,
            vec![
                RenderEvent::BlockStart,
                RenderEvent::BlockStart,
                RenderEvent::Text {
                    text: "a",
                    format: FormatMask::PLAIN
                },
                RenderEvent::Text {
                    text: "b",
                    format: FormatMask(1)
                },
                RenderEvent::BlockEnd,
                RenderEvent::BlockEnd,
            ]
        );
    }

    #[test]
    fn test_events_restart_from_scratch() {
        let doc = tree(vec![paragraph(vec![DocNode::text("a", FormatMask::PLAIN)])]);
        let rendering = Rendering::new(&doc);
        let first: Vec<_> = rendering.events().collect();
        let second: Vec<_> = rendering.events().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_code_is_flattened_and_not_descended() {
        let code = DocNode::container(
            NodeKind::Code,
            vec![
                DocNode::text("print(", FormatMask(1)),
                DocNode::text("1)", FormatMask::PLAIN),
            ],
        );
        let doc = tree(vec![code]);
        let events: Vec<_> = Rendering::new(&doc).events().collect();
        assert_eq!(events[1], RenderEvent::Code("print(1)".to_string()));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_unknown_nodes_become_placeholders() {
        let doc = tree(vec![DocNode::container(
            NodeKind::Other("list".to_string()),
            vec![DocNode::text("hidden", FormatMask::PLAIN)],
        )]);
        let inline = Rendering::new(&doc).to_inline();
        assert_eq!(inline, Inline::Block(vec![Inline::Placeholder]));
        assert!(!inline.to_string().contains("hidden"));
    }

    #[test]
    fn test_to_inline_builds_nested_blocks() {
        let doc = tree(vec![
            paragraph(vec![DocNode::text("Title", FormatMask(1))]),
            paragraph(vec![DocNode::text("Body", FormatMask::PLAIN)]),
        ]);
        let inline = Rendering::new(&doc).to_inline();
        assert_eq!(
            inline,
            Inline::Block(vec![
                Inline::Block(vec![Inline::styled("Title", FormatMask(1))]),
                Inline::Block(vec![Inline::Text("Body".to_string())]),
            ])
        );
        assert_eq!(inline.to_string(), "**Title**\nBody\n\n");
    }

    #[test]
    fn test_render_single_leaf() {
        let leaf = DocNode::text("solo", FormatMask(4));
        let inline = Rendering::of_node(&leaf).to_inline();
        assert_eq!(inline.to_string(), "~~solo~~");
    }
}
