//! Code2Graph against Depends
//!
//! Code2Graph spells files as dotted paths and Depends as file system paths,
//! so files go through the path matcher; every other family is compared by
//! exact name.

use std::sync::Arc;

use depdiff_application::registry::{COMPARATORS, ComparatorConfig, ComparatorEntry};
use depdiff_domain::value_objects::{CompareKind, ToolKind, TypeFamily};

use super::{FamilyDispatchComparator, FamilyRule};
use crate::matchers::{ExactNameMatcher, FilePathMatcher, TokenOrder};

/// Family rules of the pair
pub fn rules() -> Vec<FamilyRule> {
    vec![
        FamilyRule::same_family(TypeFamily::File, FilePathMatcher::new(TokenOrder::LeafFirst)),
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
static CODE2GRAPH_DEPENDS: ComparatorEntry = ComparatorEntry {
    left: ToolKind::Code2Graph,
    right: ToolKind::Depends,
    kind: CompareKind::Entity,
    description: "Code2Graph entities against Depends entities (files by path)",
    factory: |config: &ComparatorConfig| {
        Ok(Arc::new(FamilyDispatchComparator::from_config(config, rules())?))
    },
};
