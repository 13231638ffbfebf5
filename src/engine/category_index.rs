use serde::{Serialize, Serializer};

use crate::{models::Category, rejections::AppError};

/// Category id to display name, ordered by ascending id.
///
/// Serializes as a JSON object keyed by the id in string form, keeping the
/// numeric order (`"2"` comes before `"10"`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    entries: Vec<Category>,
}

impl CategoryIndex {
    pub fn new(mut categories: Vec<Category>) -> Self {
        categories.sort_by_key(|c| c.id);
        categories.dedup_by_key(|c| c.id);
        Self {
            entries: categories,
        }
    }

    pub fn resolve(&self, id: i32) -> Result<&str, AppError> {
        self.entries
            .binary_search_by_key(&id, |c| c.id)
            .map(|idx| self.entries[idx].kind.as_str())
            .map_err(|_| AppError::NotFound)
    }

    pub fn enumerate(&self) -> impl Iterator<Item = (String, &str)> {
        self.entries
            .iter()
            .map(|c| (c.id.to_string(), c.kind.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategoryIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.enumerate())
    }
}
