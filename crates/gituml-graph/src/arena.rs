//! Append-only node id assignment

use std::collections::HashMap;

/// An append-only arena assigning stable node ids to string keys
///
/// Ids are `"<prefix><n>"` with `n` starting at 1 and incrementing only on
/// first sight of a new key, so equal keys always resolve to the same id
/// for the lifetime of one arena. Lookup is O(1) amortized.
#[derive(Debug)]
pub struct NodeArena {
    prefix: &'static str,
    keys: Vec<String>,
    index: HashMap<String, usize>,
}

impl NodeArena {
    /// Create an empty arena whose ids carry the given prefix
    #[must_use]
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            keys: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Resolve a key to its node id, assigning a fresh id on first sight
    ///
    /// Returns the id together with `true` when the key was newly interned
    /// (the caller declares the node exactly once, on that signal).
    pub fn intern(&mut self, key: &str) -> (String, bool) {
        if let Some(&idx) = self.index.get(key) {
            return (self.id_at(idx), false);
        }
        let idx = self.keys.len();
        self.keys.push(key.to_string());
        self.index.insert(key.to_string(), idx);
        (self.id_at(idx), true)
    }

    /// Look up the node id for a key without interning it
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.index.get(key).map(|&idx| self.id_at(idx))
    }

    /// Number of distinct keys interned so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key has been interned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn id_at(&self, idx: usize) -> String {
        format!("{}{}", self.prefix, idx + 1)
    }
}
