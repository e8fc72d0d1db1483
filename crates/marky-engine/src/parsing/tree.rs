use std::sync::Arc;

use super::blocks::grouping::PendingGroup;
use super::schema::Registry;
use super::tokenizer::Tokenizer;
use crate::models::{Contains, Node, NodeKind, Token, TokenKind};

/// Turns tokens into nodes, recursing through the block and inline stages
/// according to what each token contains.
pub(crate) struct TreeBuilder<'a> {
    pub registry: &'a Registry,
    pub blocks: &'a Tokenizer,
    pub inlines: &'a Tokenizer,
}

impl TreeBuilder<'_> {
    /// Builds the node for `token`. Root and blank-line tokens have none.
    pub fn node(&self, token: Token) -> Option<Node> {
        let children = self.children(&token);
        let kind = node_kind(token.kind)?;
        Some(Node { kind, children })
    }

    fn children(&self, token: &Token) -> Option<Vec<Node>> {
        match token.contains {
            Contains::Blocks => Some(self.block_nodes(token)),
            Contains::Phrasing => Some(self.inline_nodes(token)),
            Contains::Text => Some(vec![Node::text(token.text.as_str())]),
            Contains::Leaf => None,
        }
    }

    /// Block stage: tokenize, then fold groups, promote text blocks and
    /// recurse.
    pub fn block_nodes(&self, parent: &Token) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut group: Option<PendingGroup> = None;
        let mut tokens = self.blocks.tokenize(&parent.text).into_iter().peekable();

        while let Some(token) = tokens.next() {
            let token = match group.as_mut() {
                Some(pending) => match pending.offer(token, tokens.peek()) {
                    None => continue,
                    Some(refused) => {
                        if let Some(closed) = group.take() {
                            nodes.extend(self.group_nodes(closed));
                        }
                        refused
                    }
                },
                None => token,
            };

            match token.kind {
                TokenKind::WhiteSpace { .. } => {}
                TokenKind::TextBlock if parent.paragraph_text => nodes.extend(self.node(token)),
                TokenKind::TextBlock => nodes.extend(self.inline_nodes(&token)),
                _ => {
                    let schema = token
                        .group
                        .as_deref()
                        .and_then(|id| self.registry.get(id))
                        .map(Arc::clone);
                    let token = match schema {
                        Some(schema) => match PendingGroup::open(schema, token) {
                            Ok(pending) => {
                                group = Some(pending);
                                continue;
                            }
                            Err(token) => token,
                        },
                        None => token,
                    };
                    nodes.extend(self.node(token));
                }
            }
        }

        if let Some(closed) = group {
            nodes.extend(self.group_nodes(closed));
        }
        nodes
    }

    /// Inline stage: every token maps straight to a node.
    pub fn inline_nodes(&self, parent: &Token) -> Vec<Node> {
        self.inlines
            .tokenize(&parent.text)
            .into_iter()
            .filter_map(|token| self.node(token))
            .collect()
    }

    fn group_nodes(&self, group: PendingGroup) -> Vec<Node> {
        let (container, members) = group.close();
        log::trace!(
            "closing {} group with {} members",
            container.name(),
            members.len()
        );
        let children: Vec<Node> = members
            .into_iter()
            .filter_map(|member| self.node(member))
            .collect();
        match node_kind(container.kind) {
            Some(kind) => vec![Node::branch(kind, children)],
            None => children,
        }
    }
}

fn node_kind(kind: TokenKind) -> Option<NodeKind> {
    match kind {
        TokenKind::Node(kind) => Some(kind),
        TokenKind::TextBlock => Some(NodeKind::Paragraph),
        TokenKind::Root | TokenKind::WhiteSpace { .. } => None,
    }
}
