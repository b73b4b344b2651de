use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Stable identifier of a question item, e.g. `"q7_humanism"`.
///
/// Ids are unique across a whole `QuestionBank` and are the keys of the
/// `Responses` store and the names of rendered controls.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new item id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the id is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for ItemId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&ItemId> for ItemId {
    fn from(id: &ItemId) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let id = ItemId::new("q7_humanism");
        assert_eq!(format!("{id}"), "q7_humanism");
    }

    #[test]
    fn from_str() {
        let id: ItemId = "setting_context".into();
        assert_eq!(id.as_str(), "setting_context");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ItemId::new("mspe_placeholder");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"mspe_placeholder\"");
    }
}
