//! Lock registry: elements that controllers must leave alone.

#[cfg(test)]
#[path = "lock_test.rs"]
mod lock_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::doc::{ElementId, Slide};
use crate::error::EditError;

/// Set of locked element ids. Locked elements are skipped by drag, resize,
/// rotate, align, and z-order operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockRegistry {
    ids: HashSet<ElementId>,
}

impl LockRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock an element. Returns `true` if it was not already locked.
    pub fn lock(&mut self, id: ElementId) -> bool {
        self.ids.insert(id)
    }

    /// Unlock an element. Returns `true` if it was locked.
    pub fn unlock(&mut self, id: &ElementId) -> bool {
        self.ids.remove(id)
    }

    /// Flip the lock state and return the new state.
    pub fn toggle(&mut self, id: ElementId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    #[must_use]
    pub fn is_locked(&self, id: &ElementId) -> bool {
        self.ids.contains(id)
    }

    /// # Errors
    ///
    /// `Locked` when the id is locked.
    pub fn check(&self, id: &ElementId) -> Result<(), EditError> {
        if self.is_locked(id) {
            return Err(EditError::Locked(*id));
        }
        Ok(())
    }

    /// Drop ids that no longer name an element on `slide`.
    pub fn retain_existing(&mut self, slide: &Slide) {
        self.ids.retain(|id| slide.element(id).is_some());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ElementId> for LockRegistry {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}
