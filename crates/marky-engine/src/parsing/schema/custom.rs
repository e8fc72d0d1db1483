use regex::Captures;

use super::{Membership, Pattern, Schema, Stage};
use crate::error::PatternError;
use crate::models::{Token, TokenKind};

type TokenFn = dyn Fn(&Captures<'_>, &str) -> Token + Send + Sync;
type AppendFn = dyn Fn(&mut Token, &Token, &str) -> bool + Send + Sync;
type ContainerFn = dyn Fn(&Token) -> Token + Send + Sync;
type IsChildFn = dyn Fn(&Token, &Token, Option<&Token>) -> Membership + Send + Sync;

/// A schema assembled from closures.
///
/// The pattern source is compiled when the parser is built, so a missing
/// capture key surfaces from [`crate::Marky::new`] with the schema's id.
///
/// ```ignore
/// let mention = CustomSchema::inline(r"@(?P<user>\w+)", "user", |caps, _| {
///     Token::node(NodeKind::Custom { name: "mention".into(), props: BTreeMap::new() })
///         .with_text(&caps["user"])
///         .containing(Contains::Text)
/// });
/// ```
pub struct CustomSchema {
    stage: Stage,
    source: Option<(String, String)>,
    trailing: Option<String>,
    not_after: String,
    token: Option<Box<TokenFn>>,
    append: Option<Box<AppendFn>>,
    container: Option<Box<ContainerFn>>,
    is_child: Option<Box<IsChildFn>>,
}

impl CustomSchema {
    fn matching(
        stage: Stage,
        source: &str,
        key: &str,
        token: impl Fn(&Captures<'_>, &str) -> Token + Send + Sync + 'static,
    ) -> Self {
        Self {
            stage,
            source: Some((source.to_string(), key.to_string())),
            trailing: None,
            not_after: String::new(),
            token: Some(Box::new(token)),
            append: None,
            container: None,
            is_child: None,
        }
    }

    pub fn block(
        source: &str,
        key: &str,
        token: impl Fn(&Captures<'_>, &str) -> Token + Send + Sync + 'static,
    ) -> Self {
        Self::matching(Stage::Block, source, key, token)
    }

    pub fn inline(
        source: &str,
        key: &str,
        token: impl Fn(&Captures<'_>, &str) -> Token + Send + Sync + 'static,
    ) -> Self {
        Self::matching(Stage::Inline, source, key, token)
    }

    /// A container schema for tokens that name it in [`Token::group`].
    pub fn group(
        container: impl Fn(&Token) -> Token + Send + Sync + 'static,
        is_child: impl Fn(&Token, &Token, Option<&Token>) -> Membership + Send + Sync + 'static,
    ) -> Self {
        Self {
            stage: Stage::Group,
            source: None,
            trailing: None,
            not_after: String::new(),
            token: None,
            append: None,
            container: Some(Box::new(container)),
            is_child: Some(Box::new(is_child)),
        }
    }

    pub fn with_append(
        mut self,
        append: impl Fn(&mut Token, &Token, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.append = Some(Box::new(append));
        self
    }

    /// See [`Pattern::with_trailing`].
    pub fn with_trailing(mut self, group: &str) -> Self {
        self.trailing = Some(group.to_string());
        self
    }

    /// See [`Pattern::not_preceded_by`].
    pub fn not_preceded_by(mut self, chars: &str) -> Self {
        self.not_after = chars.to_string();
        self
    }
}

impl Schema for CustomSchema {
    fn stage(&self) -> Stage {
        self.stage
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        let Some((source, key)) = &self.source else {
            return Ok(None);
        };
        let mut pattern = Pattern::new(source, key)?.not_preceded_by(&self.not_after);
        if let Some(group) = &self.trailing {
            pattern = pattern.with_trailing(group)?;
        }
        Ok(Some(pattern))
    }

    fn token(&self, captures: &Captures<'_>, full: &str) -> Token {
        match &self.token {
            Some(token) => token(captures, full),
            None => Token::new(TokenKind::TextBlock).with_text(full),
        }
    }

    fn has_append(&self) -> bool {
        self.append.is_some()
    }

    fn append(&self, open: &mut Token, next: &Token, full: &str) -> bool {
        self.append
            .as_ref()
            .is_some_and(|append| append(open, next, full))
    }

    fn container(&self, first: &Token) -> Option<Token> {
        self.container.as_ref().map(|container| container(first))
    }

    fn is_child(&self, container: &Token, next: &Token, peek: Option<&Token>) -> Membership {
        self.is_child
            .as_ref()
            .map_or(Membership::Outside, |is_child| is_child(container, next, peek))
    }
}
