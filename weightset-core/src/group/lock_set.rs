use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::weight_group::WeightGroup;
use crate::constants::LOCK_NAMESPACE_SEPARATOR;

/// Members whose weight redistribution must never touch.
///
/// Flat groups store plain member keys. Nested callers store
/// `"parent-child"` keys built with [`LockSet::namespaced`] and project them
/// onto one child group with [`LockSet::scoped`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockSet {
    keys: BTreeSet<String>,
}

impl LockSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespaced key for `child` under `parent`.
    pub fn namespaced(parent: &str, child: &str) -> String {
        format!("{parent}{LOCK_NAMESPACE_SEPARATOR}{child}")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.keys.remove(key)
    }

    /// Flip `key`'s membership. Returns whether it is locked afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Plain-key lock set for the children of `parent`.
    ///
    /// Only the children of `group` are tested, each by its full namespaced
    /// key, so locks held under other parents are never picked up.
    pub fn scoped(&self, parent: &str, group: &WeightGroup) -> LockSet {
        group
            .keys()
            .filter(|child| self.contains(&Self::namespaced(parent, child)))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<K> for LockSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}
