use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Identifiers of the items the user saved to the memory garden.
///
/// Persisted as a plain JSON list of strings. Duplicates found in storage are dropped.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SavedCollection {
    ids: Vec<String>,
}

impl SavedCollection {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
    pub fn len(&self) -> usize {
        self.ids.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|saved_id| saved_id == id)
    }
    /// Returns the new membership of `id`.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id.to_owned());
            true
        }
    }
    /// Returns `false` when `id` was not saved.
    pub fn remove(&mut self, id: &str) -> bool {
        let len = self.ids.len();
        self.ids.retain(|saved_id| saved_id != id);
        self.ids.len() != len
    }
}

impl From<Vec<String>> for SavedCollection {
    fn from(ids: Vec<String>) -> Self {
        SavedCollection {
            ids: ids.into_iter().unique().collect(),
        }
    }
}

impl From<SavedCollection> for Vec<String> {
    fn from(collection: SavedCollection) -> Self {
        collection.ids
    }
}
