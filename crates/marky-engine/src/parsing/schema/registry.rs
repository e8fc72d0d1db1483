use std::fmt;
use std::sync::Arc;

use super::{Schema, Stage};
use crate::parsing::{blocks, inline};

/// A schema and the id it was registered under.
#[derive(Clone)]
pub struct Entry {
    pub id: String,
    pub schema: Arc<dyn Schema>,
}

/// Ordered catalog of schemas. Order is the tie-break when two schemas match
/// at the same position: earlier entries win.
#[derive(Clone, Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog. `auto_link` enables bare URL detection.
    pub fn with_defaults(auto_link: bool) -> Self {
        let mut registry = Self::new();
        for (id, schema) in blocks::default_schemas()
            .into_iter()
            .chain(inline::default_schemas())
        {
            if id == inline::AUTO_LINK && !auto_link {
                continue;
            }
            registry.merge(id, schema);
        }
        registry
    }

    /// Adds `schema` under `id`. An existing id is replaced in its original
    /// slot, so it keeps its precedence; a new id goes last.
    pub fn merge(&mut self, id: impl Into<String>, schema: Arc<dyn Schema>) {
        let id = id.into();
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                log::debug!("replacing schema `{id}`");
                entry.schema = schema;
            }
            None => {
                log::debug!("registering schema `{id}`");
                self.entries.push(Entry { id, schema });
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Schema>> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.schema)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    /// Entries of one stage, in precedence order.
    pub fn stage(&self, stage: Stage) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(move |entry| entry.schema.stage() == stage)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
