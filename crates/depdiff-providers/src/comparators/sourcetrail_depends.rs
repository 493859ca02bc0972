//! Sourcetrail against Depends
//!
//! Sourcetrail prefixes package names with a separator and prints method
//! signatures differently from Depends, so packages skip the prefix and
//! methods fall back to fuzzy similarity. Type names keep their generic
//! arguments in Sourcetrail and are compared with generics stripped.

use std::sync::Arc;

use depdiff_application::registry::{COMPARATORS, ComparatorConfig, ComparatorEntry};
use depdiff_domain::value_objects::{CompareKind, FuzzyThresholds, ToolKind, TypeFamily};

use super::{FamilyDispatchComparator, FamilyRule};
use crate::constants::SOURCETRAIL_PACKAGE_PREFIX_LEN;
use crate::matchers::{
    ExactNameMatcher, FilePathMatcher, FuzzyNameMatcher, GenericStrippingMatcher, TokenOrder,
};

/// Family rules of the pair
pub fn rules(fuzzy: FuzzyThresholds) -> Vec<FamilyRule> {
    vec![
        FamilyRule::same_family(TypeFamily::File, FilePathMatcher::new(TokenOrder::LeafFirst)),
        FamilyRule::same_family(
            TypeFamily::Package,
            ExactNameMatcher::skipping_left(SOURCETRAIL_PACKAGE_PREFIX_LEN),
        ),
        FamilyRule::new(
            &[TypeFamily::Method],
            &[TypeFamily::Function],
            FuzzyNameMatcher::new(fuzzy),
        ),
        FamilyRule::new(
            &[
                TypeFamily::Interface,
                TypeFamily::Class,
                TypeFamily::Enum,
                TypeFamily::Annotation,
            ],
            &[TypeFamily::Type],
            GenericStrippingMatcher,
        ),
    ]
}

#[linkme::distributed_slice(COMPARATORS)]
static SOURCETRAIL_DEPENDS: ComparatorEntry = ComparatorEntry {
    left: ToolKind::Sourcetrail,
    right: ToolKind::Depends,
    kind: CompareKind::Entity,
    description: "Sourcetrail entities against Depends entities (fuzzy methods, generic-stripped types)",
    factory: |config: &ComparatorConfig| {
        Ok(Arc::new(FamilyDispatchComparator::from_config(
            config,
            rules(config.fuzzy),
        )?))
    },
};
