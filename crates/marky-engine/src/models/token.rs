use super::node::NodeKind;

/// What a token's text holds, which decides how its node gets children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contains {
    /// Reparsed with the block schemas.
    Blocks,
    /// Reparsed with the inline schemas.
    Phrasing,
    /// Kept verbatim as a single text child.
    Text,
    /// No children at all.
    #[default]
    Leaf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Synthetic entry point wrapping the whole input.
    Root,
    /// A run of plain lines; becomes a paragraph or is spliced into its parent.
    TextBlock,
    /// Blank lines. Never becomes a node.
    WhiteSpace {
        /// Newlines in the run minus one.
        lines: usize,
    },
    Node(NodeKind),
}

impl TokenKind {
    pub fn name(&self) -> &str {
        match self {
            TokenKind::Root => "root",
            TokenKind::TextBlock => "text_block",
            TokenKind::WhiteSpace { .. } => "white_space",
            TokenKind::Node(kind) => kind.name(),
        }
    }
}

/// Transient unit produced by a tokenizer; lives only for one parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub contains: Contains,
    /// Plain text blocks beneath this token become paragraphs.
    pub paragraph_text: bool,
    /// Id of the group schema that collects consecutive tokens of this kind.
    pub group: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            text: String::new(),
            contains: Contains::Leaf,
            paragraph_text: false,
            group: None,
        }
    }

    pub fn node(kind: NodeKind) -> Self {
        Self::new(TokenKind::Node(kind))
    }

    pub fn root(text: &str) -> Self {
        Self::new(TokenKind::Root)
            .with_text(text)
            .containing(Contains::Blocks)
            .with_paragraph_text()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn containing(mut self, contains: Contains) -> Self {
        self.contains = contains;
        self
    }

    pub fn with_paragraph_text(mut self) -> Self {
        self.paragraph_text = true;
        self
    }

    pub fn grouped_by(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }

    pub fn node_kind(&self) -> Option<&NodeKind> {
        match &self.kind {
            TokenKind::Node(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_white_space(&self) -> bool {
        matches!(self.kind, TokenKind::WhiteSpace { .. })
    }
}
