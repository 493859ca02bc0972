//! Tool-Pair Comparators
//!
//! Every registered comparator is a [`FamilyDispatchComparator`]: both
//! entity types are normalized through their tool's taxonomy table, the first
//! [`FamilyRule`] accepting the two families picks a name matcher, and that
//! matcher decides. Pairs no rule accepts are `NotEqual`, as are entities
//! whose type the taxonomy does not recognise.
//!
//! | Pair | Module |
//! |------|--------|
//! | code2graph → depends | [`code2graph_depends`] |
//! | sourcetrail → depends | [`sourcetrail_depends`] |
//! | understand → depends | [`understand_depends`] |
//! | enre → depends | [`enre_depends`] |
//! | enre → understand | [`enre_understand`] |

pub mod code2graph_depends;
pub mod enre_depends;
pub mod enre_understand;
pub mod sourcetrail_depends;
pub mod understand_depends;

use std::fmt;
use std::sync::Arc;

use depdiff_application::registry::ComparatorConfig;
use depdiff_domain::entities::Entity;
use depdiff_domain::ports::{EntityComparator, NameMatcher};
use depdiff_domain::value_objects::{CompareResult, TaxonomyTable, TypeFamily};

/// Families a name matcher applies to
#[derive(Clone)]
pub struct FamilyRule {
    left: Vec<TypeFamily>,
    right: Vec<TypeFamily>,
    matcher: Arc<dyn NameMatcher>,
}

impl FamilyRule {
    /// Apply `matcher` when the left family is in `left` and the right one in `right`
    pub fn new(left: &[TypeFamily], right: &[TypeFamily], matcher: impl NameMatcher + 'static) -> Self {
        Self {
            left: left.to_vec(),
            right: right.to_vec(),
            matcher: Arc::new(matcher),
        }
    }

    /// Apply `matcher` when both sides belong to `family`
    pub fn same_family(family: TypeFamily, matcher: impl NameMatcher + 'static) -> Self {
        Self::new(&[family], &[family], matcher)
    }

    /// True when the rule covers the two families
    pub fn accepts(&self, left: TypeFamily, right: TypeFamily) -> bool {
        self.left.contains(&left) && self.right.contains(&right)
    }

    /// Name matcher of the rule
    pub fn matcher(&self) -> &dyn NameMatcher {
        self.matcher.as_ref()
    }
}

impl fmt::Debug for FamilyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyRule")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("matcher", &self.matcher.name())
            .finish()
    }
}

/// Comparator that dispatches on canonical type families
#[derive(Debug, Clone)]
pub struct FamilyDispatchComparator {
    name: String,
    left_table: TaxonomyTable,
    right_table: TaxonomyTable,
    rules: Vec<FamilyRule>,
}

impl FamilyDispatchComparator {
    /// Create a comparator from explicit tables
    pub fn new(
        name: impl Into<String>,
        left_table: TaxonomyTable,
        right_table: TaxonomyTable,
        rules: Vec<FamilyRule>,
    ) -> Self {
        Self {
            name: name.into(),
            left_table,
            right_table,
            rules,
        }
    }

    /// Create a comparator using the tables of `config.left` and `config.right`
    pub fn from_config(
        config: &ComparatorConfig,
        rules: Vec<FamilyRule>,
    ) -> std::result::Result<Self, String> {
        let left = config
            .taxonomy
            .require(config.left)
            .map_err(|e| e.to_string())?;
        let right = config
            .taxonomy
            .require(config.right)
            .map_err(|e| e.to_string())?;
        Ok(Self::new(
            format!("{}_{}", config.left, config.right),
            left.clone(),
            right.clone(),
            rules,
        ))
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[FamilyRule] {
        &self.rules
    }
}

impl EntityComparator for FamilyDispatchComparator {
    fn name(&self) -> &str {
        &self.name
    }

    fn compare(&self, lhs: &Entity, rhs: &Entity) -> CompareResult {
        let Some(left) = self.left_table.entity_family(&lhs.entity_type).mapped() else {
            return CompareResult::NotEqual;
        };
        let Some(right) = self.right_table.entity_family(&rhs.entity_type).mapped() else {
            return CompareResult::NotEqual;
        };

        self.rules
            .iter()
            .find(|rule| rule.accepts(left, right))
            .map_or(CompareResult::NotEqual, |rule| {
                rule.matcher().match_names(&lhs.entity_name, &rhs.entity_name)
            })
    }
}
