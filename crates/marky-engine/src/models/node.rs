use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// The type of a document node together with the props that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Paragraph,
    Heading {
        /// 1 to 6.
        level: u8,
    },
    Hrule,
    BlockQuote {
        /// Number of `>` markers on the opening line.
        level: usize,
    },
    CodeBlock {
        syntax: Option<String>,
    },
    List {
        ordered: bool,
        bullet: String,
        start: Option<u64>,
    },
    ListItem {
        ordered: bool,
        bullet: String,
        /// Leading blank characters before the bullet.
        indent: usize,
        start: Option<u64>,
    },
    Bold,
    Italic,
    StrikeThrough,
    Link {
        url: String,
        title: Option<String>,
    },
    Image {
        url: String,
        alt: Option<String>,
        title: Option<String>,
    },
    Code,
    LineBreak,
    Text {
        value: String,
    },
    /// A node produced by a caller-supplied schema.
    Custom {
        name: String,
        props: BTreeMap<String, String>,
    },
}

impl NodeKind {
    /// The wire name of this node type, e.g. `block_quote`.
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading { .. } => "heading",
            NodeKind::Hrule => "hrule",
            NodeKind::BlockQuote { .. } => "block_quote",
            NodeKind::CodeBlock { .. } => "code_block",
            NodeKind::List { .. } => "list",
            NodeKind::ListItem { .. } => "list_item",
            NodeKind::Bold => "bold",
            NodeKind::Italic => "italic",
            NodeKind::StrikeThrough => "strike_through",
            NodeKind::Link { .. } => "link",
            NodeKind::Image { .. } => "image",
            NodeKind::Code => "code",
            NodeKind::LineBreak => "line_break",
            NodeKind::Text { .. } => "text",
            NodeKind::Custom { name, .. } => name,
        }
    }

    /// Block-level kinds get their own line in pretty HTML output.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph
                | NodeKind::Heading { .. }
                | NodeKind::BlockQuote { .. }
                | NodeKind::CodeBlock { .. }
                | NodeKind::List { .. }
                | NodeKind::ListItem { .. }
                | NodeKind::Hrule
        )
    }

    fn has_props(&self) -> bool {
        !matches!(
            self,
            NodeKind::Paragraph
                | NodeKind::Hrule
                | NodeKind::Bold
                | NodeKind::Italic
                | NodeKind::StrikeThrough
                | NodeKind::Code
                | NodeKind::LineBreak
        )
    }
}

/// One node of the parsed document tree.
///
/// `children` is `None` for leaves (text, images, rules, breaks) and `Some`
/// for everything that was parsed recursively, even when nothing was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            children: None,
        }
    }

    pub fn branch(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            children: Some(children),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text {
            value: value.into(),
        })
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }

    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Concatenated value of every text node below this one.
    pub fn text_content(&self) -> String {
        match &self.kind {
            NodeKind::Text { value } => value.clone(),
            _ => self.children().iter().map(Node::text_content).collect(),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.kind.name())?;
        if self.kind.has_props() {
            map.serialize_entry("props", &Props(&self.kind))?;
        }
        if let Some(children) = &self.children {
            map.serialize_entry("children", children)?;
        }
        map.end()
    }
}

/// Serializes the props of a kind as a flat map, leaving out absent values.
struct Props<'a>(&'a NodeKind);

impl Serialize for Props<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self.0 {
            NodeKind::Heading { level } => map.serialize_entry("level", level)?,
            NodeKind::BlockQuote { level } => map.serialize_entry("level", level)?,
            NodeKind::CodeBlock { syntax } => map.serialize_entry("syntax", syntax)?,
            NodeKind::List {
                ordered,
                bullet,
                start,
            } => {
                map.serialize_entry("ordered", ordered)?;
                map.serialize_entry("bullet", bullet)?;
                if let Some(start) = start {
                    map.serialize_entry("start", start)?;
                }
            }
            NodeKind::ListItem {
                ordered,
                bullet,
                indent,
                start,
            } => {
                map.serialize_entry("ordered", ordered)?;
                map.serialize_entry("bullet", bullet)?;
                map.serialize_entry("indent", indent)?;
                if let Some(start) = start {
                    map.serialize_entry("start", start)?;
                }
            }
            NodeKind::Link { url, title } => {
                map.serialize_entry("url", url)?;
                if let Some(title) = title {
                    map.serialize_entry("title", title)?;
                }
            }
            NodeKind::Image { url, alt, title } => {
                map.serialize_entry("url", url)?;
                if let Some(alt) = alt {
                    map.serialize_entry("alt", alt)?;
                }
                if let Some(title) = title {
                    map.serialize_entry("title", title)?;
                }
            }
            NodeKind::Text { value } => map.serialize_entry("value", value)?,
            NodeKind::Custom { props, .. } => {
                for (key, value) in props {
                    map.serialize_entry(key, value)?;
                }
            }
            _ => {}
        }
        map.end()
    }
}
