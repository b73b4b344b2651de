use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ItemId;

/// The response store: the current answer for each item id.
///
/// Choice items (setting, rubric) hold the selected option or level key,
/// textarea items hold the current free text. A missing key means the item
/// is unanswered. Answers for items that are no longer rendered (after a
/// branch switch) are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses {
    values: BTreeMap<ItemId, String>,
}

impl Responses {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set the answer for an item, replacing any previous answer.
    pub fn insert(&mut self, id: impl Into<ItemId>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the answer for an item.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Check if an item has an answer.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for an item.
    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.values.remove(id)
    }

    /// Get an iterator over all id-answer pairs, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &str)> {
        self.values.iter().map(|(id, value)| (id, value.as_str()))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Shallow copy of every answer keyed by plain id strings.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(id, value)| (id.as_str().to_string(), value.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Responses {
    type Item = (&'a ItemId, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, ItemId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut responses = Responses::new();
        responses.insert("setting_context", "INPATIENT");
        responses.insert("q7_humanism", "3");

        assert_eq!(responses.get("setting_context"), Some("INPATIENT"));
        assert_eq!(responses.get("q7_humanism"), Some("3"));
        assert_eq!(responses.get("q8_integrity_work_ethic"), None);
    }

    #[test]
    fn insert_overwrites() {
        let mut responses = Responses::new();
        responses.insert("q7_humanism", "1");
        responses.insert("q7_humanism", "4");

        assert_eq!(responses.len(), 1);
        assert_eq!(responses.get("q7_humanism"), Some("4"));
    }

    #[test]
    fn to_map_is_a_copy() {
        let mut responses = Responses::new();
        responses.insert("mspe_placeholder", "looks good");

        let map = responses.to_map();
        responses.remove("mspe_placeholder");

        assert_eq!(map.get("mspe_placeholder").map(String::as_str), Some("looks good"));
        assert!(responses.is_empty());
    }

    #[test]
    fn serializes_as_object() {
        let mut responses = Responses::new();
        responses.insert("q7_humanism", "2");
        responses.insert("q6_interprofessional", "3");

        let json = serde_json::to_string(&responses).unwrap();
        assert_eq!(json, r#"{"q6_interprofessional":"3","q7_humanism":"2"}"#);
    }
}
