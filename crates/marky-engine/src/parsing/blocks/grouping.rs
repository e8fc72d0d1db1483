use std::sync::Arc;

use crate::models::Token;
use crate::parsing::schema::{Membership, Schema};

/// A container that is still collecting members.
///
/// Groups are lazy: they only close when a token is refused or when the
/// token stream runs out.
pub struct PendingGroup {
    schema: Arc<dyn Schema>,
    container: Token,
    members: Vec<Token>,
}

impl PendingGroup {
    /// Opens a group for `first`. Hands `first` back when the schema builds no
    /// container for it.
    pub fn open(schema: Arc<dyn Schema>, first: Token) -> Result<Self, Token> {
        match schema.container(&first) {
            Some(container) => Ok(Self {
                schema,
                container,
                members: vec![first],
            }),
            None => Err(first),
        }
    }

    /// Offers the next token. Returns it when it does not belong, in which
    /// case the group must be closed.
    pub fn offer(&mut self, next: Token, peek: Option<&Token>) -> Option<Token> {
        match self.schema.is_child(&self.container, &next, peek) {
            Membership::Member => {
                self.members.push(next);
                None
            }
            Membership::LooseMember => {
                log::trace!("{} group turns loose", self.container.name());
                self.container.paragraph_text = true;
                None
            }
            Membership::Outside => Some(next),
        }
    }

    /// The container token and its members. Members inherit the container's
    /// paragraph setting, so a loose list wraps every item's text.
    pub fn close(self) -> (Token, Vec<Token>) {
        let paragraph_text = self.container.paragraph_text;
        let members = self
            .members
            .into_iter()
            .filter(|member| !member.is_white_space())
            .map(|mut member| {
                member.paragraph_text = paragraph_text;
                member
            })
            .collect();
        (self.container, members)
    }
}
