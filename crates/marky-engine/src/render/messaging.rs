use super::plain::{Markup, PlainOptions, TextWalker};
use super::Renderer;
use crate::error::RenderError;
use crate::models::Node;
use crate::parsing::blocks::CodeBlock;

const QUOTE: &str = "> ";

struct Messaging;

impl Markup for Messaging {
    fn heading(&self, inner: &str) -> String {
        format!("*{inner}*\n\n")
    }

    fn bold(&self, inner: &str) -> String {
        format!("*{inner}*")
    }

    fn italic(&self, inner: &str) -> String {
        format!("_{inner}_")
    }

    fn strike_through(&self, inner: &str) -> String {
        format!("~{inner}~")
    }

    fn code(&self, inner: &str) -> String {
        format!("`{inner}`")
    }

    fn code_block(&self, inner: &str) -> String {
        let fence = CodeBlock::FENCE;
        format!("{fence}\n{}\n{fence}\n\n", inner.trim())
    }

    fn unordered_bullet(&self) -> &str {
        "-"
    }

    fn named_link(&self, label: &str, url: &str) -> String {
        format!("*{label}:* {url}")
    }

    fn paragraph(&self, inner: &str, quoted: bool) -> String {
        if quoted {
            format!("{QUOTE}{}\n\n", inner.replace('\n', &format!("\n{QUOTE}")))
        } else {
            format!("{inner}\n\n")
        }
    }
}

/// Renders nodes with the lightweight markup chat apps understand:
/// `*bold*`, `_italic_`, `~strike~` and fenced code.
#[derive(Debug, Default)]
pub struct MessagingRenderer {
    options: PlainOptions,
}

impl MessagingRenderer {
    pub fn new(options: PlainOptions) -> Self {
        Self { options }
    }
}

impl Renderer for MessagingRenderer {
    fn render(&self, nodes: &[Node]) -> Result<String, RenderError> {
        TextWalker {
            markup: &Messaging,
            element: &self.options.element,
        }
        .render(nodes)
    }
}
