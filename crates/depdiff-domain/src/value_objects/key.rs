use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of an entity across datasets
///
/// Entity IDs repeat between tools, so the dataset tag is part of the key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityKey {
    /// Tool-local entity ID
    pub id: i64,
    /// Producing dataset
    pub dataset: String,
}

impl EntityKey {
    /// Create a key
    pub fn new(id: i64, dataset: impl Into<String>) -> Self {
        Self {
            id,
            dataset: dataset.into(),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.dataset, self.id)
    }
}

/// `(left, right)` identity of a classified pair
pub type PairKey = (EntityKey, EntityKey);
