use serde::{Deserialize, Serialize};

use super::ordered_map::OrderedMap;
use crate::constants::{MAX_WEIGHT, MIN_WEIGHT};

/// Ordered mapping from member key (a category or subcategory name) to a
/// percentage weight in `[0, 100]`.
///
/// A settled group sums to 100 within the configured tolerance. Insertion
/// order is preserved through serialisation and is the tie-break order
/// whenever the engine must pick one member over another.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightGroup {
    members: OrderedMap<f64>,
}

impl WeightGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, weight)` pairs. Later duplicates replace earlier ones.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        pairs.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.members.get(key).copied()
    }

    /// Set a member's weight, appending the member if it is new.
    pub fn set(&mut self, key: impl Into<String>, weight: f64) -> Option<f64> {
        self.members.insert(key, weight)
    }

    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.members.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.members.iter().map(|(k, v)| (k, *v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut f64)> {
        self.members.iter_mut()
    }

    /// Raw sum of all weights.
    pub fn total(&self) -> f64 {
        self.members.values().sum()
    }

    /// First member whose weight is NaN or outside `[0, 100]`.
    pub fn first_out_of_range(&self) -> Option<(&str, f64)> {
        self.iter()
            .find(|(_, w)| !(MIN_WEIGHT..=MAX_WEIGHT).contains(w))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for WeightGroup {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for WeightGroup {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_members() {
        let group = WeightGroup::from_pairs([("A", 50.0), ("B", 30.0), ("C", 20.0)]);
        assert_eq!(group.total(), 100.0);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn serializes_as_plain_object() {
        let group = WeightGroup::from_pairs([("Data", 60.0), ("Strategy", 40.0)]);
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(json, r#"{"Data":60.0,"Strategy":40.0}"#);
        let back: WeightGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, group);
    }

    #[test]
    fn finds_out_of_range_members() {
        let group = WeightGroup::from_pairs([("A", 50.0), ("B", f64::NAN)]);
        let (key, _) = group.first_out_of_range().unwrap();
        assert_eq!(key, "B");

        let group = WeightGroup::from_pairs([("A", 100.0), ("B", -0.5)]);
        assert_eq!(group.first_out_of_range().map(|(k, _)| k), Some("B"));

        let group = WeightGroup::from_pairs([("A", 100.0), ("B", 0.0)]);
        assert!(group.first_out_of_range().is_none());
    }
}
