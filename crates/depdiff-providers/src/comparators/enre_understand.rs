//! ENRE against Understand
//!
//! Both tools have a class-level taxonomy, so only same-family pairs are
//! compared.

use std::sync::Arc;

use depdiff_application::registry::{COMPARATORS, ComparatorConfig, ComparatorEntry};
use depdiff_domain::value_objects::{CompareKind, ToolKind, TypeFamily};

use super::{FamilyDispatchComparator, FamilyRule};
use crate::matchers::ExactNameMatcher;

const SHARED_FAMILIES: [TypeFamily; 6] = [
    TypeFamily::Package,
    TypeFamily::Method,
    TypeFamily::Variable,
    TypeFamily::Interface,
    TypeFamily::Enum,
    TypeFamily::Class,
];

/// Family rules of the pair
pub fn rules() -> Vec<FamilyRule> {
    SHARED_FAMILIES
        .iter()
        .map(|family| FamilyRule::same_family(*family, ExactNameMatcher::new()))
        .collect()
}

#[linkme::distributed_slice(COMPARATORS)]
static ENRE_UNDERSTAND: ComparatorEntry = ComparatorEntry {
    left: ToolKind::Enre,
    right: ToolKind::Understand,
    kind: CompareKind::Entity,
    description: "ENRE entities against Understand entities (same family only)",
    factory: |config: &ComparatorConfig| {
        Ok(Arc::new(FamilyDispatchComparator::from_config(config, rules())?))
    },
};
