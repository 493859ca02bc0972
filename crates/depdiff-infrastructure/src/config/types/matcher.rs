//! Entity matcher configuration types

use depdiff_application::use_cases::MatcherOptions;
use depdiff_domain::constants::{FUZZY_EQUAL_THRESHOLD, FUZZY_MAYBE_THRESHOLD};
use depdiff_domain::value_objects::FuzzyThresholds;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PARTITIONS;

/// Entity matcher configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Split the cross product across rayon workers
    pub parallel: bool,
    /// Number of partitions, `0` for one per rayon thread
    pub partitions: usize,
    /// Fuzzy ratio at or above which names are equal
    pub fuzzy_equal: f64,
    /// Fuzzy ratio at or above which names may be equal
    pub fuzzy_maybe: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            partitions: DEFAULT_PARTITIONS,
            fuzzy_equal: FUZZY_EQUAL_THRESHOLD,
            fuzzy_maybe: FUZZY_MAYBE_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    /// Fuzzy thresholds for comparator construction
    pub fn thresholds(&self) -> FuzzyThresholds {
        FuzzyThresholds {
            equal: self.fuzzy_equal,
            maybe: self.fuzzy_maybe,
        }
    }

    /// Execution options for the entity matcher
    pub fn options(&self) -> MatcherOptions {
        if self.parallel {
            MatcherOptions::parallel(self.partitions)
        } else {
            MatcherOptions::sequential()
        }
    }
}
