//! Result Aggregator
//!
//! Turns matcher and reconciler outcomes into the output document and a
//! summary of set sizes. No I/O happens here.

use std::collections::BTreeMap;
use std::fmt;

use depdiff_domain::error::Result;
use depdiff_domain::value_objects::UnmappedType;
use serde::Serialize;

use super::census::TypeCensus;
use super::dependency_reconciler::DependencyMatchOutcome;
use super::entity_matcher::EntityMatchOutcome;

/// Output document of one comparison run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ComparisonReport {
    /// `{"eq": ..., "maybe_eq": ..., "ne": ...}`
    Entity(EntityMatchOutcome),
    /// `{"eq": ...}`
    Dependency(DependencyMatchOutcome),
}

impl ComparisonReport {
    /// Pretty-printed JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set sizes of the report
    pub fn summary(&self) -> ComparisonSummary {
        match self {
            Self::Entity(outcome) => ComparisonSummary {
                eq: outcome.eq.len(),
                maybe_eq: Some(outcome.maybe_eq.len()),
                ne: Some(outcome.ne.len()),
                ..Default::default()
            },
            Self::Dependency(outcome) => ComparisonSummary {
                eq: outcome.eq.len(),
                eq_by_kind: outcome.eq_by_kind(),
                ..Default::default()
            },
        }
    }
}

/// Human-readable counts of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    /// Equal pairs
    pub eq: usize,
    /// Possibly equal pairs, entity runs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maybe_eq: Option<usize>,
    /// Unmatched entities, entity runs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ne: Option<usize>,
    /// Left IDs with several counterparts, dependency runs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambiguous: Option<usize>,
    /// Equal pairs per right-side dependency type, dependency runs only
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub eq_by_kind: BTreeMap<String, usize>,
    /// Raw types no taxonomy rule recognised
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmapped: Vec<UnmappedType>,
}

impl ComparisonSummary {
    /// Attach the ambiguity count of the equivalence mapping
    pub fn with_ambiguous(mut self, ambiguous: usize) -> Self {
        self.ambiguous = Some(ambiguous);
        self
    }

    /// Attach the unmapped types of the given censuses
    pub fn with_census(mut self, censuses: &[TypeCensus]) -> Self {
        self.unmapped = censuses
            .iter()
            .flat_map(|census| census.unmapped.iter().cloned())
            .collect();
        self
    }
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "eq: {}", self.eq)?;
        if let Some(maybe_eq) = self.maybe_eq {
            write!(f, ", maybe_eq: {maybe_eq}")?;
        }
        if let Some(ne) = self.ne {
            write!(f, ", ne: {ne}")?;
        }
        if let Some(ambiguous) = self.ambiguous {
            write!(f, ", ambiguous: {ambiguous}")?;
        }
        for (kind, count) in &self.eq_by_kind {
            write!(f, "\neq[{kind}]: {count}")?;
        }
        for unmapped in &self.unmapped {
            write!(f, "\n{unmapped}")?;
        }
        Ok(())
    }
}
