//! Session-scoped favorite records.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::record::RecordId;

/// Set of favorited record identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSet {
    ids: HashSet<RecordId>,
}

impl FavoriteSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present.
    ///
    /// Returns true if `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Returns true if `id` is a favorite.
    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Iterates over favorites in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if there are no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = FavoriteSet::new();
        let id = RecordId::new("https://swapi.dev/api/people/1/");

        assert!(favorites.toggle(id.clone()));
        assert!(favorites.contains(&id));
        assert!(!favorites.toggle(id.clone()));
        assert!(!favorites.contains(&id));
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle(RecordId::new("Leia Organa"));
        let original = favorites.clone();

        let id = RecordId::new("Han Solo");
        favorites.toggle(id.clone());
        favorites.toggle(id);
        assert_eq!(favorites, original);

        let existing = RecordId::new("Leia Organa");
        favorites.toggle(existing.clone());
        favorites.toggle(existing);
        assert_eq!(favorites, original);
        assert_eq!(favorites.len(), 1);
    }
}
