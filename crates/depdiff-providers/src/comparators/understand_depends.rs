//! Understand against Depends

use std::sync::Arc;

use depdiff_application::registry::{COMPARATORS, ComparatorConfig, ComparatorEntry};
use depdiff_domain::value_objects::{CompareKind, ToolKind, TypeFamily};

use super::{FamilyDispatchComparator, FamilyRule};
use crate::matchers::ExactNameMatcher;

/// Family rules of the pair
pub fn rules() -> Vec<FamilyRule> {
    vec![
        FamilyRule::same_family(TypeFamily::Package, ExactNameMatcher::new()),
        FamilyRule::new(
            &[TypeFamily::Enum, TypeFamily::Class],
            &[TypeFamily::Type],
            ExactNameMatcher::new(),
        ),
        FamilyRule::new(&[TypeFamily::Method], &[TypeFamily::Function], ExactNameMatcher::new()),
        FamilyRule::new(&[TypeFamily::Variable], &[TypeFamily::Var], ExactNameMatcher::new()),
    ]
}

#[linkme::distributed_slice(COMPARATORS)]
static UNDERSTAND_DEPENDS: ComparatorEntry = ComparatorEntry {
    left: ToolKind::Understand,
    right: ToolKind::Depends,
    kind: CompareKind::Entity,
    description: "Understand entities against Depends entities",
    factory: |config: &ComparatorConfig| {
        Ok(Arc::new(FamilyDispatchComparator::from_config(config, rules())?))
    },
};
