use serde::{Deserialize, Serialize};

use super::lock_set::LockSet;
use super::ordered_map::OrderedMap;
use super::weight_group::WeightGroup;

/// One level of nesting: parent key (pillar or category) to its child group.
///
/// Each child group is balanced on its own. Nothing ties parent-level weights
/// to child-level weights.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NestedWeights {
    groups: OrderedMap<WeightGroup>,
}

impl NestedWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, parent: &str) -> Option<&WeightGroup> {
        self.groups.get(parent)
    }

    pub fn insert(&mut self, parent: impl Into<String>, group: WeightGroup) -> Option<WeightGroup> {
        self.groups.insert(parent, group)
    }

    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WeightGroup)> {
        self.groups.iter()
    }

    /// Every `(parent, child)` pair whose [`LockSet::namespaced`] key is `key`.
    ///
    /// More than one owner means the key cannot tell those members apart,
    /// e.g. `Data` + `Quality-Metrics` and `Data-Quality` + `Metrics`.
    pub fn lock_key_owners(&self, key: &str) -> Vec<(&str, &str)> {
        self.groups
            .iter()
            .flat_map(|(parent, group)| group.keys().map(move |child| (parent, child)))
            .filter(|(parent, child)| LockSet::namespaced(parent, child) == key)
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, WeightGroup)> for NestedWeights {
    fn from_iter<I: IntoIterator<Item = (K, WeightGroup)>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}
