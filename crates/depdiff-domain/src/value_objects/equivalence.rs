use std::collections::{BTreeMap, BTreeSet};

use crate::entities::Entity;
use crate::error::{Error, Result};

/// Translation of left entity IDs into the right dataset's ID space
///
/// Built from pairs classified `Equal`. The mapping is many-to-many: a left
/// ID keeps every right counterpart it was paired with, and callers decide
/// how to treat ambiguity (see [`EquivalenceMapping::ambiguous_count`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceMapping {
    anchor: String,
    forward: BTreeMap<i64, BTreeSet<i64>>,
}

impl EquivalenceMapping {
    /// Empty mapping whose left side is `anchor`
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            forward: BTreeMap::new(),
        }
    }

    /// Build from equal pairs, orienting each pair by its dataset tags
    ///
    /// Exactly one member of every pair must carry the anchor dataset.
    pub fn from_pairs<'a, I>(anchor: impl Into<String>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a Entity, &'a Entity)>,
    {
        let mut mapping = Self::new(anchor);
        for (index, (a, b)) in pairs.into_iter().enumerate() {
            let (left, right) = match (a.dataset == mapping.anchor, b.dataset == mapping.anchor) {
                (true, false) => (a, b),
                (false, true) => (b, a),
                _ => {
                    return Err(Error::invalid_argument(format!(
                        "eq[{index}]: expected exactly one member from dataset '{}', found '{}' and '{}'",
                        mapping.anchor, a.dataset, b.dataset
                    )));
                }
            };
            mapping.insert(left.entity_id, right.entity_id);
        }
        Ok(mapping)
    }

    /// Record that `left` corresponds to `right`
    pub fn insert(&mut self, left: i64, right: i64) {
        self.forward.entry(left).or_default().insert(right);
    }

    /// Dataset on the left side
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Right counterparts of `left`
    pub fn counterparts(&self, left: i64) -> Option<&BTreeSet<i64>> {
        self.forward.get(&left)
    }

    /// True when `left` has at least one counterpart
    pub fn contains(&self, left: i64) -> bool {
        self.forward.contains_key(&left)
    }

    /// Number of mapped left IDs
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True when nothing is mapped
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Number of left IDs with more than one counterpart
    pub fn ambiguous_count(&self) -> usize {
        self.forward.values().filter(|rights| rights.len() > 1).count()
    }

    /// Iterate over `(left, counterparts)` in ascending left order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &BTreeSet<i64>)> {
        self.forward.iter().map(|(left, rights)| (*left, rights))
    }
}
