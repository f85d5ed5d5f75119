//! Ordered in-memory entity collections.

use std::collections::HashSet;

use haven_core::error::CoreError;
use haven_core::types::Identified;

/// An ordered, in-memory collection of entities addressed by id.
///
/// The read path hands out immutable slices; the only mutation in scope is
/// the feeding-completion toggle in [`crate::gateway`]. Each store is owned
/// by one view at a time, so no synchronization is needed.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Vec<T>,
}

impl<T: Identified> EntityStore<T> {
    /// Build a store from an ordered sequence, rejecting duplicate ids.
    pub fn new(items: Vec<T>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id().to_owned()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate entity id '{}'",
                    item.id()
                )));
            }
        }

        Ok(Self { items })
    }

    /// The current sequence, in load order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find one entity by id. An unknown id resolves to `None`; the screens
    /// treat that as "profile unavailable" rather than an error.
    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub(crate) fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Debug)]
    struct Row {
        id: String,
    }

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str) -> Row {
        Row { id: id.to_string() }
    }

    #[test]
    fn preserves_load_order() {
        let store = EntityStore::new(vec![row("3"), row("1"), row("2")]).unwrap();
        let ids: Vec<&str> = store.all().iter().map(|r| r.id()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = EntityStore::new(vec![row("1"), row("1")]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains('1'));
    }

    #[test]
    fn find_is_none_for_unknown_id() {
        let store = EntityStore::new(vec![row("1")]).unwrap();
        assert!(store.find("2").is_none());
    }
}
