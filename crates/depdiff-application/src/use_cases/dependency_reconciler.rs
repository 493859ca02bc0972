//! Dependency Reconciler Use Case
//!
//! Projects the left dataset's edges into the right dataset's ID space
//! through an [`EquivalenceMapping`] and pairs the edges that land on the
//! same right-side relation.
//!
//! Edges whose destination has no counterpart are dropped without being
//! reported, and there is no `maybe` state: the output only lists matches.

use std::collections::{BTreeMap, HashMap, HashSet};

use depdiff_domain::entities::{Dependency, DependencyIndex};
use depdiff_domain::value_objects::{EquivalenceMapping, TaxonomyTable};
use serde::Serialize;
use tracing::debug;

/// Reconciliation switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Pair edges only when both normalize to the same dependency kind
    pub require_same_kind: bool,
}

/// Matched edge pairs
///
/// Serializes to `{"eq": [[left, right], ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyMatchOutcome {
    /// `(left edge, right edge)` pairs describing the same relation
    pub eq: Vec<(Dependency, Dependency)>,
}

impl DependencyMatchOutcome {
    /// Number of pairs per dependency type of the right edge
    pub fn eq_by_kind(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for (_, right) in &self.eq {
            *counts.entry(right.dependency_type.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Counters collected while reconciling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Left sources that had a counterpart
    pub mapped_sources: usize,
    /// Right counterparts without outgoing edges
    pub silent_counterparts: usize,
    /// Left edges whose destination had no counterpart
    pub dropped_edges: usize,
    /// Candidate pairs rejected by the kind filter
    pub kind_mismatches: usize,
}

/// Edge projector for one pair of datasets
#[derive(Debug, Clone, Default)]
pub struct DependencyReconciler {
    left_table: TaxonomyTable,
    right_table: TaxonomyTable,
    options: ReconcileOptions,
}

impl DependencyReconciler {
    /// Create a reconciler with empty taxonomy tables
    pub fn new(options: ReconcileOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Tables used to normalize dependency kinds for the kind filter
    pub fn with_tables(mut self, left: TaxonomyTable, right: TaxonomyTable) -> Self {
        self.left_table = left;
        self.right_table = right;
        self
    }

    /// Pair left and right edges that describe the same relation
    pub fn reconcile(
        &self,
        left: &DependencyIndex,
        right: &DependencyIndex,
        mapping: &EquivalenceMapping,
    ) -> (DependencyMatchOutcome, ReconcileStats) {
        let mut stats = ReconcileStats::default();
        let mut seen: HashSet<(&Dependency, &Dependency)> = HashSet::new();
        let mut eq = Vec::new();

        for (source, edges) in left.iter() {
            let Some(right_sources) = mapping.counterparts(source) else {
                continue;
            };
            stats.mapped_sources += 1;

            // Left edges keyed by their destination translated into the right ID space
            let mut translated: HashMap<i64, Vec<&Dependency>> = HashMap::new();
            for edge in edges {
                match mapping.counterparts(edge.dependency_dest_id) {
                    Some(dests) => {
                        for dest in dests {
                            translated.entry(*dest).or_default().push(edge);
                        }
                    }
                    None => stats.dropped_edges += 1,
                }
            }

            for right_source in right_sources {
                let Some(right_edges) = right.outgoing(*right_source) else {
                    stats.silent_counterparts += 1;
                    continue;
                };
                for right_edge in right_edges {
                    let Some(candidates) = translated.get(&right_edge.dependency_dest_id) else {
                        continue;
                    };
                    for left_edge in candidates {
                        if !self.kinds_agree(left_edge, right_edge) {
                            stats.kind_mismatches += 1;
                            continue;
                        }
                        if seen.insert((*left_edge, right_edge)) {
                            eq.push(((*left_edge).clone(), right_edge.clone()));
                        }
                    }
                }
            }
        }

        debug!(
            pairs = eq.len(),
            mapped_sources = stats.mapped_sources,
            dropped_edges = stats.dropped_edges,
            "Dependency reconciliation finished"
        );
        (DependencyMatchOutcome { eq }, stats)
    }

    fn kinds_agree(&self, left: &Dependency, right: &Dependency) -> bool {
        if !self.options.require_same_kind {
            return true;
        }
        let lhs = self.left_table.dependency_kind(&left.dependency_type).mapped();
        let rhs = self.right_table.dependency_kind(&right.dependency_type).mapped();
        matches!((lhs, rhs), (Some(a), Some(b)) if a == b)
    }
}
