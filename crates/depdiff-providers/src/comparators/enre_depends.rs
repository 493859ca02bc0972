//! ENRE against Depends

use std::sync::Arc;

use depdiff_application::registry::{COMPARATORS, ComparatorConfig, ComparatorEntry};
use depdiff_domain::value_objects::{CompareKind, ToolKind, TypeFamily};

use super::{FamilyDispatchComparator, FamilyRule};
use crate::matchers::ExactNameMatcher;

/// Family rules of the pair
pub fn rules() -> Vec<FamilyRule> {
    vec![
        FamilyRule::same_family(TypeFamily::Package, ExactNameMatcher::new()),
        FamilyRule::same_family(TypeFamily::File, ExactNameMatcher::new()),
        FamilyRule::same_family(TypeFamily::Annotation, ExactNameMatcher::new()),
        FamilyRule::new(
            &[TypeFamily::Enum, TypeFamily::Class, TypeFamily::Interface],
            &[TypeFamily::Type],
            ExactNameMatcher::new(),
        ),
        FamilyRule::new(&[TypeFamily::Variable], &[TypeFamily::Var], ExactNameMatcher::new()),
    ]
}

#[linkme::distributed_slice(COMPARATORS)]
static ENRE_DEPENDS: ComparatorEntry = ComparatorEntry {
    left: ToolKind::Enre,
    right: ToolKind::Depends,
    kind: CompareKind::Entity,
    description: "ENRE entities against Depends entities",
    factory: |config: &ComparatorConfig| {
        Ok(Arc::new(FamilyDispatchComparator::from_config(config, rules())?))
    },
};
