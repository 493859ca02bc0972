//! Entity Matcher Use Case
//!
//! Classifies every `(left, right)` pair of two entity sets through one
//! comparator and partitions the result into `eq`, `maybe_eq` and `ne`.
//!
//! The scan is a full cross product, O(|L|·|R|) comparator calls. That is the
//! intended cost for inputs of a few thousand entities per dataset. For larger
//! inputs the left set can be split across rayon workers: comparators carry
//! no state between calls, so every partition yields the same classifications
//! and the partial results merge by set union on entity keys.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use depdiff_domain::entities::Entity;
use depdiff_domain::ports::EntityComparator;
use depdiff_domain::value_objects::{CompareResult, EntityKey, PairKey};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// How the cross product is executed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Split the left set across rayon workers
    pub parallel: bool,
    /// Number of partitions, `0` for one per rayon thread
    pub partitions: usize,
}

impl MatcherOptions {
    /// Sequential execution
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Partitioned execution over `partitions` chunks
    pub fn parallel(partitions: usize) -> Self {
        Self {
            parallel: true,
            partitions,
        }
    }
}

/// Key-based accumulator of one scan
///
/// Left and right coverage are tracked separately so that two datasets
/// sharing a tag cannot shadow each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSets {
    /// Pairs classified `Equal`
    pub eq: BTreeSet<PairKey>,
    /// Pairs classified `MaybeEqual`
    pub maybe_eq: BTreeSet<PairKey>,
    covered_left: HashSet<EntityKey>,
    covered_right: HashSet<EntityKey>,
}

impl MatchSets {
    /// Accumulate one classification
    pub fn record(&mut self, lhs: &Entity, rhs: &Entity, result: CompareResult) {
        let target = match result {
            CompareResult::Equal => &mut self.eq,
            CompareResult::MaybeEqual => &mut self.maybe_eq,
            CompareResult::NotEqual => return,
        };
        target.insert((lhs.key(), rhs.key()));
        self.covered_left.insert(lhs.key());
        self.covered_right.insert(rhs.key());
    }

    /// Union of two accumulators
    pub fn merge(mut self, other: Self) -> Self {
        self.eq.extend(other.eq);
        self.maybe_eq.extend(other.maybe_eq);
        self.covered_left.extend(other.covered_left);
        self.covered_right.extend(other.covered_right);
        self
    }

    /// True when `key` of the left set matched anything
    pub fn is_left_covered(&self, key: &EntityKey) -> bool {
        self.covered_left.contains(key)
    }

    /// True when `key` of the right set matched anything
    pub fn is_right_covered(&self, key: &EntityKey) -> bool {
        self.covered_right.contains(key)
    }
}

/// Partitioned result of an entity comparison
///
/// Serializes to `{"eq": [[l, r], ...], "maybe_eq": [[l, r], ...], "ne": [e, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityMatchOutcome {
    /// Confidently equal pairs, ordered by key
    pub eq: Vec<(Entity, Entity)>,
    /// Possibly equal pairs, ordered by key
    pub maybe_eq: Vec<(Entity, Entity)>,
    /// Entities that matched nothing, left set first
    pub ne: Vec<Entity>,
}

/// Cross-product matcher over one comparator
#[derive(Debug, Clone)]
pub struct EntityMatcher {
    comparator: Arc<dyn EntityComparator>,
    options: MatcherOptions,
}

impl EntityMatcher {
    /// Create a sequential matcher
    pub fn new(comparator: Arc<dyn EntityComparator>) -> Self {
        Self {
            comparator,
            options: MatcherOptions::sequential(),
        }
    }

    /// Set the execution options
    pub fn with_options(mut self, options: MatcherOptions) -> Self {
        self.options = options;
        self
    }

    /// Classify `left × right` and resolve the keys back to records
    pub fn run(&self, left: &[Entity], right: &[Entity]) -> EntityMatchOutcome {
        let sets = self.scan(left, right);
        debug!(
            comparator = self.comparator.name(),
            eq = sets.eq.len(),
            maybe_eq = sets.maybe_eq.len(),
            "Cross product finished"
        );
        resolve(left, right, &sets)
    }

    /// Classify `left × right` into key sets
    pub fn scan(&self, left: &[Entity], right: &[Entity]) -> MatchSets {
        let comparator = self.comparator.as_ref();
        if !self.options.parallel || left.len() < 2 {
            return scan_partition(comparator, left, right);
        }

        let partitions = match self.options.partitions {
            0 => rayon::current_num_threads(),
            n => n,
        }
        .clamp(1, left.len());
        let chunk = left.len().div_ceil(partitions);
        debug!(partitions, chunk, "Scanning left set in partitions");

        left.par_chunks(chunk)
            .map(|part| scan_partition(comparator, part, right))
            .reduce(MatchSets::default, MatchSets::merge)
    }
}

fn scan_partition(comparator: &dyn EntityComparator, left: &[Entity], right: &[Entity]) -> MatchSets {
    let mut sets = MatchSets::default();
    for lhs in left {
        for rhs in right {
            sets.record(lhs, rhs, comparator.compare(lhs, rhs));
        }
    }
    sets
}

fn resolve(left: &[Entity], right: &[Entity], sets: &MatchSets) -> EntityMatchOutcome {
    let left_index: HashMap<EntityKey, &Entity> = left.iter().map(|e| (e.key(), e)).collect();
    let right_index: HashMap<EntityKey, &Entity> = right.iter().map(|e| (e.key(), e)).collect();

    let pairs = |keys: &BTreeSet<PairKey>| -> Vec<(Entity, Entity)> {
        keys.iter()
            .filter_map(|(l, r)| {
                let lhs = left_index.get(l)?;
                let rhs = right_index.get(r)?;
                Some(((*lhs).clone(), (*rhs).clone()))
            })
            .collect()
    };

    let mut seen_left = HashSet::new();
    let mut seen_right = HashSet::new();
    let ne = left
        .iter()
        .filter(|e| !sets.is_left_covered(&e.key()) && seen_left.insert(e.key()))
        .chain(
            right
                .iter()
                .filter(|e| !sets.is_right_covered(&e.key()) && seen_right.insert(e.key())),
        )
        .cloned()
        .collect();

    EntityMatchOutcome {
        eq: pairs(&sets.eq),
        maybe_eq: pairs(&sets.maybe_eq),
        ne,
    }
}
