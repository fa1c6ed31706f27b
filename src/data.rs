use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::normalize_category_id;

pub use crate::types::{AttributeName, CandidateId, CategoryId};

/// A selectable catalog entry.
///
/// Only `id` and `categories` matter to sampling; everything else is carried
/// through untouched for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable unique identifier.
    pub id: CandidateId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Category tags this candidate belongs to (one or more).
    pub categories: Vec<CategoryId>,
    /// Opaque display attributes such as `rate` or `rating`, in insertion order.
    #[serde(flatten)]
    pub attributes: IndexMap<AttributeName, serde_json::Value>,
}

impl Candidate {
    /// Create an uncategorized candidate.
    pub fn new(id: impl Into<CandidateId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            categories: Vec::new(),
            attributes: IndexMap::new(),
        }
    }

    /// Add a category tag.
    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Set a display attribute, replacing any previous value under `name`.
    pub fn with_attribute(
        mut self,
        name: impl Into<AttributeName>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Whether this candidate is tagged with `category` (compared after normalization).
    pub fn has_category(&self, category: &str) -> bool {
        let wanted = normalize_category_id(category);
        self.categories
            .iter()
            .any(|tag| normalize_category_id(tag) == wanted)
    }

    /// Look up a display attribute.
    pub fn attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.attributes.get(name)
    }
}
