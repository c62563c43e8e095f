use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Liked recommendation ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: BTreeSet<u32>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the liked state of `id`; returns the new state.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
