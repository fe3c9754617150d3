use crate::{Document, Result, SelectionKey};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Mapping from selection keys to the explorer's node handles.
///
/// Maintained by whoever renders the explorer tree. When two definitions
/// share a key the first registration is kept.
#[derive(Debug, Clone)]
pub struct ExplorerIndex<H> {
    nodes: HashMap<SelectionKey, H>,
}

impl<H> Default for ExplorerIndex<H> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }
}

impl<H> ExplorerIndex<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from the definitions of a document, in source order.
    ///
    /// `handle_fn` receives each definition's key and its position among the
    /// document's definitions.
    pub fn from_document<F>(text: &str, mut handle_fn: F) -> Result<Self>
    where
        F: FnMut(&SelectionKey, usize) -> H,
    {
        let document = Document::parse(text)?;
        let mut index = Self::new();

        for (position, definition) in document.definitions().iter().enumerate() {
            let key = definition.selection_key();
            let handle = handle_fn(&key, position);
            if !index.register(key, handle) {
                tracing::debug!(position, "Definition key already registered, keeping first");
            }
        }

        Ok(index)
    }

    /// Register a handle. Returns `false` and leaves the index unchanged if
    /// the key is already taken.
    pub fn register(&mut self, key: SelectionKey, handle: H) -> bool {
        match self.nodes.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(handle);
                true
            }
        }
    }

    #[must_use]
    pub fn locate(&self, key: &SelectionKey) -> Option<&H> {
        self.nodes.get(key)
    }

    pub fn remove(&mut self, key: &SelectionKey) -> Option<H> {
        self.nodes.remove(key)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registered keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &SelectionKey> {
        self.nodes.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResolveError;

    #[test]
    fn test_register_and_locate() {
        let mut index = ExplorerIndex::new();
        let key = SelectionKey::new("query", Some("Foo"));

        assert!(index.register(key.clone(), 7));
        assert_eq!(index.locate(&key), Some(&7));
        assert_eq!(index.locate(&SelectionKey::new("query", Some("Bar"))), None);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut index = ExplorerIndex::new();
        let key = SelectionKey::new("query", None);

        assert!(index.register(key.clone(), "first"));
        assert!(!index.register(key.clone(), "second"));
        assert_eq!(index.locate(&key), Some(&"first"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut index = ExplorerIndex::new();
        let foo = SelectionKey::new("query", Some("Foo"));
        let bar = SelectionKey::new("fragment", Some("Bar"));
        index.register(foo.clone(), 1);
        index.register(bar, 2);

        assert_eq!(index.remove(&foo), Some(1));
        assert_eq!(index.remove(&foo), None);
        assert_eq!(index.len(), 1);

        index.clear();
        assert!(index.is_empty());
    }

    #[test]
    fn test_from_document() {
        let source = "{ a } query Foo { b } { c } fragment Bar on T { d }";
        let index = ExplorerIndex::from_document(source, |_, position| position).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.locate(&SelectionKey::new("query", None)), Some(&0));
        assert_eq!(index.locate(&SelectionKey::new("query", Some("Foo"))), Some(&1));
        assert_eq!(index.locate(&SelectionKey::new("fragment", Some("Bar"))), Some(&3));
    }

    #[test]
    fn test_from_unparseable_document() {
        let result = ExplorerIndex::from_document("query {", |_, position| position);
        assert!(matches!(result, Err(ResolveError::Unparseable { .. })));
    }
}
