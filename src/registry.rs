//! Story registry: catalog-wide identifier uniqueness and lookup.
//!
//! A [`StoryRegistry`] value can be owned by a host directly; [`global`]
//! exposes the process-scoped instance that module-discovery hosts share.
//! Registration is one atomic insert-if-absent step per entry: every
//! identifier the entry claims is checked before any is inserted, so a
//! colliding declaration is rejected whole and the registry is unchanged.

use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::args::ArgumentSet;
use crate::error::{Result, StoryError};
use crate::story::StoryEntry;
use crate::template::RenderOutput;

/// Registry with Vec storage for deterministic registration-order
/// iteration and a HashMap for O(1) identifier lookup.
#[derive(Default)]
pub struct StoryRegistry {
    entries: Vec<StoryEntry>,
    id_to_entry: HashMap<String, usize>,
}

impl StoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entry`, claiming all of its variant identifiers.
    /// Fails with [`StoryError::DuplicateIdentifier`] if any identifier
    /// is already taken; on failure nothing is inserted.
    pub fn register(&mut self, entry: StoryEntry) -> Result<()> {
        for id in entry.ids() {
            if self.id_to_entry.contains_key(id.as_str()) {
                warn!(id = %id, title = %entry.title_path(), "rejected story entry");
                return Err(StoryError::DuplicateIdentifier(id.to_string()));
            }
        }

        let index = self.entries.len();
        for id in entry.ids() {
            self.id_to_entry.insert(id.to_string(), index);
        }
        debug!(title = %entry.title_path(), "registered story entry");
        self.entries.push(entry);
        Ok(())
    }

    /// Entry owning the variant `id`, if any.
    pub fn find(&self, id: &str) -> Option<&StoryEntry> {
        self.id_to_entry.get(id).map(|&index| &self.entries[index])
    }

    /// Render a variant anywhere in the catalog by identifier.
    pub fn render(&self, id: &str, runtime: &ArgumentSet) -> Result<RenderOutput> {
        let entry = self
            .find(id)
            .ok_or_else(|| StoryError::UnknownVariant(id.to_string()))?;
        entry.render(id, runtime)
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[StoryEntry] {
        &self.entries
    }

    pub fn entries_in_category(&self, category: &str) -> Vec<&StoryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.category() == category)
            .collect()
    }

    /// Unique categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<_> = self.entries.iter().map(|entry| entry.category()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.id_to_entry.clear();
    }
}

static GLOBAL: OnceLock<RwLock<StoryRegistry>> = OnceLock::new();

/// The process-scoped registry shared by all story declarations.
pub fn global() -> &'static RwLock<StoryRegistry> {
    GLOBAL.get_or_init(|| RwLock::new(StoryRegistry::new()))
}

/// Register `entry` in the process-scoped registry.
pub fn register(entry: StoryEntry) -> Result<()> {
    global().write().register(entry)
}

/// Clear the process-scoped registry. Test isolation hook; hosts call
/// this between declaration reload cycles.
pub fn reset() {
    global().write().clear();
}
