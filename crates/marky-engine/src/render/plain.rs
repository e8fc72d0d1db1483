use std::borrow::Cow;

use super::{Element, Overrides, Renderer};
use crate::error::RenderError;
use crate::models::{Node, NodeKind};

/// Marks where a list item starts inside a rendered list, so the outermost
/// list can lay out nested items as one flat sequence.
const ITEM_START: char = '\u{1e}';

/// Bullet shown for unordered items in plain text.
const PLAIN_BULLET: &str = "•";

#[derive(Debug, Default)]
pub struct PlainOptions {
    pub element: Overrides,
}

/// How a text-based format spells the constructs that survive as markup.
pub(crate) trait Markup {
    fn heading(&self, inner: &str) -> String {
        format!("{inner}\n\n")
    }

    fn bold(&self, inner: &str) -> String {
        inner.to_string()
    }

    fn italic(&self, inner: &str) -> String {
        inner.to_string()
    }

    fn strike_through(&self, inner: &str) -> String {
        inner.to_string()
    }

    fn code(&self, inner: &str) -> String {
        inner.to_string()
    }

    fn code_block(&self, inner: &str) -> String {
        format!("{}\n\n", inner.trim())
    }

    fn unordered_bullet(&self) -> &str;

    /// A link whose label differs from its URL.
    fn named_link(&self, label: &str, url: &str) -> String {
        format!("{label}: {url}")
    }

    /// A non-empty paragraph, `quoted` when it sits inside a block quote.
    fn paragraph(&self, inner: &str, _quoted: bool) -> String {
        format!("{inner}\n\n")
    }
}

/// Position of a node in the tree.
#[derive(Debug, Clone, Copy, Default)]
struct Scope {
    depth: usize,
    lists: usize,
    quoted: bool,
}

impl Scope {
    fn enter(self, kind: &NodeKind) -> Self {
        Self {
            depth: self.depth + 1,
            lists: self.lists + usize::from(matches!(kind, NodeKind::List { .. })),
            quoted: self.quoted || matches!(kind, NodeKind::BlockQuote { .. }),
        }
    }
}

/// Tree walk shared by the text renderers.
pub(crate) struct TextWalker<'a, M> {
    pub markup: &'a M,
    pub element: &'a Overrides,
}

impl<M: Markup> TextWalker<'_, M> {
    pub fn render(&self, nodes: &[Node]) -> Result<String, RenderError> {
        let mut out = String::new();
        self.nodes(nodes, Scope::default(), &mut out)?;
        Ok(out.trim().to_string())
    }

    fn nodes(&self, nodes: &[Node], scope: Scope, out: &mut String) -> Result<(), RenderError> {
        for node in nodes {
            self.node(node, scope, out)?;
        }
        Ok(())
    }

    fn node(&self, node: &Node, scope: Scope, out: &mut String) -> Result<(), RenderError> {
        let inner = match &node.children {
            Some(children) => {
                let mut inner = String::new();
                self.nodes(children, scope.enter(&node.kind), &mut inner)?;
                Some(inner)
            }
            None => None,
        };
        let element = Element {
            kind: &node.kind,
            inner: inner.as_deref(),
            depth: scope.depth,
        };
        if let Some(replacement) = self.element.apply(&element)? {
            out.push_str(&replacement);
            return Ok(());
        }
        self.markup(&element, scope, out);
        Ok(())
    }

    fn markup(&self, element: &Element<'_>, scope: Scope, out: &mut String) {
        let inner = element.inner();
        let markup = self.markup;
        match element.kind {
            NodeKind::Paragraph if inner.is_empty() => {}
            NodeKind::Paragraph => out.push_str(&markup.paragraph(inner, scope.quoted)),
            NodeKind::LineBreak => out.push('\n'),
            NodeKind::Heading { .. } => out.push_str(&markup.heading(inner)),
            NodeKind::BlockQuote { .. } | NodeKind::Custom { .. } => out.push_str(inner),
            NodeKind::CodeBlock { .. } => out.push_str(&markup.code_block(inner)),
            NodeKind::List { .. } if scope.lists == 0 => {
                let items: Vec<&str> = inner
                    .split(ITEM_START)
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .collect();
                out.push_str(&items.join("\n\n"));
                out.push_str("\n\n");
            }
            NodeKind::List { .. } => out.push_str(inner),
            NodeKind::ListItem {
                ordered, bullet, ..
            } => {
                let bullet = if *ordered {
                    bullet.as_str()
                } else {
                    markup.unordered_bullet()
                };
                out.push(ITEM_START);
                out.push_str(bullet);
                out.push(' ');
                out.push_str(&inner.replace('\n', " "));
            }
            NodeKind::Bold => out.push_str(&markup.bold(inner)),
            NodeKind::Italic => out.push_str(&markup.italic(inner)),
            NodeKind::StrikeThrough => out.push_str(&markup.strike_through(inner)),
            NodeKind::Code => out.push_str(&markup.code(inner)),
            NodeKind::Hrule => out.push_str("---\n\n"),
            NodeKind::Link { url, .. } if inner == url => out.push_str(url),
            NodeKind::Link { url, .. } => out.push_str(&markup.named_link(inner, url)),
            NodeKind::Image { .. } => {}
            NodeKind::Text { value } => out.push_str(&literal(value)),
        }
    }
}

/// Text with any item marker removed; only list items place them.
fn literal(text: &str) -> Cow<'_, str> {
    if text.contains(ITEM_START) {
        Cow::Owned(text.replace(ITEM_START, ""))
    } else {
        Cow::Borrowed(text)
    }
}

struct Plain;

impl Markup for Plain {
    fn unordered_bullet(&self) -> &str {
        PLAIN_BULLET
    }
}

/// Renders nodes as plain text: emphasis is dropped, list items become
/// bulleted paragraphs and links spell out their URL.
#[derive(Debug, Default)]
pub struct PlainRenderer {
    options: PlainOptions,
}

impl PlainRenderer {
    pub fn new(options: PlainOptions) -> Self {
        Self { options }
    }
}

impl Renderer for PlainRenderer {
    fn render(&self, nodes: &[Node]) -> Result<String, RenderError> {
        TextWalker {
            markup: &Plain,
            element: &self.options.element,
        }
        .render(nodes)
    }
}
