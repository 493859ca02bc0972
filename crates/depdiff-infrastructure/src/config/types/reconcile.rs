//! Dependency reconciler configuration types

use depdiff_application::use_cases::ReconcileOptions;
use serde::{Deserialize, Serialize};

/// Dependency reconciler configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Pair edges only when their canonical kinds agree
    pub require_same_kind: bool,
}

impl ReconcileConfig {
    /// Options for the dependency reconciler
    pub fn options(&self) -> ReconcileOptions {
        ReconcileOptions {
            require_same_kind: self.require_same_kind,
        }
    }
}
