use std::collections::BTreeMap;
use std::sync::Arc;

use super::Identity;

/// Owns the handles of one kind, keyed by id.
///
/// Interning guarantees that every reference to the same id shares one allocation.
#[derive(Debug, Clone)]
pub struct ItemCollection<T> {
    name: String,
    items: BTreeMap<Arc<str>, T>,
}

impl<T: Identity> ItemCollection<T> {
    /// Creates an empty collection
    pub fn new(name: &str) -> Self {
        ItemCollection {
            name: name.to_string(),
            items: BTreeMap::new(),
        }
    }

    /// Name of the collection
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the handle for `id`, creating it on first use
    pub fn intern(&mut self, id: &str) -> T {
        if let Some(item) = self.items.get(id) {
            return item.clone();
        }

        let key: Arc<str> = Arc::from(id);
        let item = T::from_id(key.clone());
        self.items.insert(key, item.clone());
        item
    }

    /// Returns the handle for `id` without creating it
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    /// Whether a handle exists for `id`
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Number of handles
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no handles
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the handles, ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}

impl<T: Identity> Default for ItemCollection<T> {
    fn default() -> Self {
        ItemCollection::new("Unnamed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    #[test]
    fn test_intern_is_idempotent() {
        let mut docs: ItemCollection<Document> = ItemCollection::new("docs");
        let a = docs.intern("D1");
        let b = docs.intern("D1");
        assert_eq!(a, b);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs.name(), "docs");
    }

    #[test]
    fn test_get_does_not_create() {
        let mut docs: ItemCollection<Document> = ItemCollection::default();
        assert!(docs.get("D1").is_none());
        assert!(docs.is_empty());

        docs.intern("D2");
        docs.intern("D1");
        assert!(docs.contains("D1"));
        assert!(!docs.contains("D3"));

        let ids: Vec<&str> = docs.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec!["D1", "D2"]);
    }
}
