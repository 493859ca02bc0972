use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{FUZZY_EQUAL_THRESHOLD, FUZZY_MAYBE_THRESHOLD};
use crate::error::Error;

/// Outcome of classifying one pair
///
/// Variants are ordered by confidence, so `NotEqual < MaybeEqual < Equal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareResult {
    /// The pair denotes different elements
    NotEqual,
    /// The pair passed a fuzzy threshold but not the confident one
    MaybeEqual,
    /// The pair confidently denotes the same element
    Equal,
}

impl fmt::Display for CompareResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEqual => write!(f, "ne"),
            Self::MaybeEqual => write!(f, "maybe_eq"),
            Self::Equal => write!(f, "eq"),
        }
    }
}

/// What a comparison run reconciles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareKind {
    /// Entity matching
    Entity,
    /// Dependency reconciliation
    Dependency,
}

impl CompareKind {
    /// Stable lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Dependency => "dependency",
        }
    }
}

impl fmt::Display for CompareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompareKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entity" => Ok(Self::Entity),
            "dependency" => Ok(Self::Dependency),
            other => Err(Error::invalid_argument(format!(
                "Unknown comparison kind '{other}'. Use entity or dependency"
            ))),
        }
    }
}

/// Similarity thresholds for fuzzy name matching
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyThresholds {
    /// Ratio at or above which names are equal
    pub equal: f64,
    /// Ratio at or above which names may be equal
    pub maybe: f64,
}

impl Default for FuzzyThresholds {
    fn default() -> Self {
        Self {
            equal: FUZZY_EQUAL_THRESHOLD,
            maybe: FUZZY_MAYBE_THRESHOLD,
        }
    }
}

impl FuzzyThresholds {
    /// Classify a similarity ratio
    pub fn classify(&self, ratio: f64) -> CompareResult {
        if ratio >= self.equal {
            CompareResult::Equal
        } else if ratio >= self.maybe {
            CompareResult::MaybeEqual
        } else {
            CompareResult::NotEqual
        }
    }
}
