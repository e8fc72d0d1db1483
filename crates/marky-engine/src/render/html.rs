use super::{Element, Overrides, Renderer};
use crate::error::RenderError;
use crate::models::{Node, NodeKind};

#[derive(Debug, Default)]
pub struct HtmlOptions {
    /// Put every block-level element on its own line.
    pub pretty: bool,
    pub element: Overrides,
    /// Value of the `target` attribute added to every link.
    pub link_target: Option<String>,
}

/// Renders nodes as HTML. Text content is escaped; attribute values are
/// written as parsed.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    fn nodes(&self, nodes: &[Node], depth: usize, out: &mut String) -> Result<(), RenderError> {
        for node in nodes {
            self.node(node, depth, out)?;
        }
        Ok(())
    }

    fn node(&self, node: &Node, depth: usize, out: &mut String) -> Result<(), RenderError> {
        let inner = match &node.children {
            Some(children) => {
                let mut inner = String::new();
                self.nodes(children, depth + 1, &mut inner)?;
                Some(inner)
            }
            None => None,
        };
        let element = Element {
            kind: &node.kind,
            inner: inner.as_deref(),
            depth,
        };
        if let Some(replacement) = self.options.element.apply(&element)? {
            out.push_str(&replacement);
            return Ok(());
        }

        out.push_str(&self.markup(&element));
        if self.options.pretty && node.kind.is_block() {
            out.push('\n');
        }
        Ok(())
    }

    /// Newline after an opening tag whose content is made of blocks.
    fn open_break(&self) -> &'static str {
        if self.options.pretty { "\n" } else { "" }
    }

    fn markup(&self, element: &Element<'_>) -> String {
        let inner = element.inner();
        match element.kind {
            NodeKind::Paragraph => format!("<p>{inner}</p>"),
            NodeKind::Heading { level } => format!("<h{level}>{inner}</h{level}>"),
            NodeKind::Hrule => "<hr>".to_string(),
            NodeKind::BlockQuote { .. } => {
                format!("<blockquote>{}{inner}</blockquote>", self.open_break())
            }
            NodeKind::CodeBlock { .. } => format!("<pre><code>{inner}</code></pre>"),
            NodeKind::List {
                ordered: true,
                start,
                ..
            } => {
                let start = start
                    .filter(|start| *start > 1)
                    .map(|start| format!(r#" start="{start}""#))
                    .unwrap_or_default();
                format!("<ol{start}>{}{inner}</ol>", self.open_break())
            }
            NodeKind::List { .. } => format!("<ul>{}{inner}</ul>", self.open_break()),
            NodeKind::ListItem { .. } => format!("<li>{inner}</li>"),
            NodeKind::Bold => format!("<strong>{inner}</strong>"),
            NodeKind::Italic => format!("<em>{inner}</em>"),
            NodeKind::StrikeThrough => format!("<del>{inner}</del>"),
            NodeKind::Link { url, title } => {
                let mut attributes = attribute("title", title.as_deref());
                attributes.push_str(&attribute("target", self.options.link_target.as_deref()));
                format!(r#"<a href="{url}"{attributes}>{inner}</a>"#)
            }
            NodeKind::Image { url, alt, title } => {
                let mut attributes = attribute("alt", alt.as_deref());
                attributes.push_str(&attribute("title", title.as_deref()));
                format!(r#"<img src="{url}"{attributes}>"#)
            }
            NodeKind::Code => format!("<code>{inner}</code>"),
            NodeKind::LineBreak => "<br>".to_string(),
            NodeKind::Text { value } => html_escape::encode_text(value).into_owned(),
            NodeKind::Custom { .. } => inner.to_string(),
        }
    }
}

/// ` name="value"`, or nothing when the value is absent or empty.
fn attribute(name: &str, value: Option<&str>) -> String {
    value
        .filter(|value| !value.is_empty())
        .map(|value| format!(r#" {name}="{value}""#))
        .unwrap_or_default()
}

impl Renderer for HtmlRenderer {
    fn render(&self, nodes: &[Node]) -> Result<String, RenderError> {
        let mut out = String::new();
        self.nodes(nodes, 0, &mut out)?;
        Ok(out)
    }
}
