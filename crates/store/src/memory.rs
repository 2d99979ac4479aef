//! In-memory repository, insertion-ordered.

use crate::record::Persist;
use loadpack_core::{Result, Store};

/// An insertion-ordered in-memory store.
///
/// `get_all` returns entities in the order they were first saved, which is
/// what drives the container selector's scan order. Useful for tests and
/// for embedding the core without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    entities: Vec<T>,
}

impl<T> MemoryStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Returns the number of stored entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if nothing has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T: Persist + Clone> Store<T> for MemoryStore<T> {
    fn get_by_id(&self, id: &str) -> Result<Option<T>> {
        Ok(self
            .entities
            .iter()
            .find(|entity| Persist::id(*entity) == id)
            .cloned())
    }

    fn get_all(&self) -> Result<Vec<T>> {
        Ok(self.entities.clone())
    }

    fn save(&mut self, entity: &T) -> Result<()> {
        match self
            .entities
            .iter_mut()
            .find(|existing| Persist::id(*existing) == Persist::id(entity))
        {
            Some(slot) => *slot = entity.clone(),
            None => self.entities.push(entity.clone()),
        }
        Ok(())
    }
}
