//! Type and dependency-kind normalization tables
//!
//! Every tool names its entity types and dependency kinds differently
//! ("Public Method", "method", "Function", ...). A [`TaxonomyTable`] maps those
//! raw strings onto canonical vocabularies so comparators can reason about
//! families instead of spellings. Tables are plain data: the default set ships
//! as TOML and is loaded by the infrastructure layer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ToolKind;
use crate::constants::TAXONOMY_VERSION;
use crate::error::{Error, Result};

/// Canonical entity type family
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeFamily {
    File,
    Package,
    Namespace,
    Class,
    Interface,
    Enum,
    EnumConstant,
    Annotation,
    /// Generic "type" bucket used by tools without a class taxonomy
    Type,
    Method,
    Function,
    Variable,
    Field,
    /// Generic "variable" bucket used by tools without a variable taxonomy
    Var,
    Macro,
    Typedef,
    Union,
    Symbol,
    BuiltIn,
}

impl fmt::Display for TypeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Canonical dependency kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DependencyKind {
    Parameter,
    Annotate,
    Import,
    Use,
    Set,
    Cast,
    Implement,
    Extend,
    Call,
    Override,
    TypeArgument,
    Include,
    MacroUse,
    ScopeResolve,
    Contain,
    Return,
    Create,
    Throw,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// How a rule pattern is matched against a raw value (case-insensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Whole string equality
    #[default]
    Exact,
    /// Pattern appears anywhere in the raw value
    Contains,
    /// Raw value ends with the pattern
    Suffix,
}

/// One normalization rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRule<T> {
    /// Raw spelling to look for
    pub pattern: String,
    /// Matching strategy
    #[serde(default)]
    pub mode: MatchMode,
    /// Canonical value the rule yields
    pub canonical: T,
}

impl<T: Copy> TaxonomyRule<T> {
    /// Create a rule
    pub fn new(pattern: impl Into<String>, mode: MatchMode, canonical: T) -> Self {
        Self {
            pattern: pattern.into(),
            mode,
            canonical,
        }
    }

    fn apply(&self, upper_raw: &str) -> Option<T> {
        let pattern = self.pattern.to_uppercase();
        let hit = match self.mode {
            MatchMode::Exact => upper_raw == pattern,
            MatchMode::Contains => upper_raw.contains(&pattern),
            MatchMode::Suffix => upper_raw.ends_with(&pattern),
        };
        hit.then_some(self.canonical)
    }
}

/// Result of looking a raw value up in a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeLookup<T> {
    /// The raw value has a canonical counterpart
    Mapped(T),
    /// No rule matched; incompatible with every family
    Unmapped,
}

impl<T> TypeLookup<T> {
    /// Canonical value, if mapped
    pub fn mapped(self) -> Option<T> {
        match self {
            Self::Mapped(value) => Some(value),
            Self::Unmapped => None,
        }
    }

    /// True when no rule matched
    pub fn is_unmapped(&self) -> bool {
        matches!(self, Self::Unmapped)
    }
}

/// A raw value that no rule of its tool's table recognises
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnmappedType {
    /// Tool that produced the value
    pub tool: String,
    /// Raw type or dependency-kind string
    pub raw: String,
    /// Number of records carrying the value
    pub occurrences: usize,
}

impl fmt::Display for UnmappedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unmapped type '{}' from {} ({} records)",
            self.raw, self.tool, self.occurrences
        )
    }
}

/// Normalization rules of one tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTable {
    /// Entity type rules, first match wins
    #[serde(default)]
    pub entity: Vec<TaxonomyRule<TypeFamily>>,
    /// Dependency kind rules, first match wins
    #[serde(default)]
    pub dependency: Vec<TaxonomyRule<DependencyKind>>,
    /// Native numeric entity type codes
    #[serde(default)]
    pub entity_codes: BTreeMap<String, String>,
    /// Native numeric dependency kind codes
    #[serde(default)]
    pub dependency_codes: BTreeMap<String, String>,
}

impl TaxonomyTable {
    /// Canonical family of a raw entity type
    pub fn entity_family(&self, raw: &str) -> TypeLookup<TypeFamily> {
        first_match(&self.entity, raw)
    }

    /// Canonical kind of a raw dependency type
    pub fn dependency_kind(&self, raw: &str) -> TypeLookup<DependencyKind> {
        first_match(&self.dependency, raw)
    }

    /// Type name behind a native entity code
    pub fn entity_code(&self, code: &str) -> Option<&str> {
        self.entity_codes.get(code).map(String::as_str)
    }

    /// Kind name behind a native dependency code
    pub fn dependency_code(&self, code: &str) -> Option<&str> {
        self.dependency_codes.get(code).map(String::as_str)
    }
}

fn first_match<T: Copy>(rules: &[TaxonomyRule<T>], raw: &str) -> TypeLookup<T> {
    let upper = raw.trim().to_uppercase();
    rules
        .iter()
        .find_map(|rule| rule.apply(&upper))
        .map_or(TypeLookup::Unmapped, TypeLookup::Mapped)
}

/// Versioned set of per-tool tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Table format version
    pub version: u32,
    /// Tables keyed by tool name
    #[serde(default)]
    pub tools: BTreeMap<String, TaxonomyTable>,
}

impl Taxonomy {
    /// Table of `tool`, if configured
    pub fn table(&self, tool: ToolKind) -> Option<&TaxonomyTable> {
        self.tools.get(tool.as_str())
    }

    /// Table of `tool`, or a configuration error naming it
    pub fn require(&self, tool: ToolKind) -> Result<&TaxonomyTable> {
        self.table(tool)
            .ok_or_else(|| Error::configuration(format!("No taxonomy table for tool '{tool}'")))
    }

    /// Check version and rule sanity
    pub fn validate(&self) -> Result<()> {
        if self.version != TAXONOMY_VERSION {
            return Err(Error::configuration(format!(
                "Unsupported taxonomy version {}, expected {}",
                self.version, TAXONOMY_VERSION
            )));
        }
        for (tool, table) in &self.tools {
            if tool.parse::<ToolKind>().is_err() {
                return Err(Error::configuration(format!(
                    "Taxonomy table for unknown tool '{tool}'"
                )));
            }
            let empty_entity = table.entity.iter().any(|r| r.pattern.trim().is_empty());
            let empty_dependency = table.dependency.iter().any(|r| r.pattern.trim().is_empty());
            if empty_entity || empty_dependency {
                return Err(Error::configuration(format!(
                    "Taxonomy table '{tool}' contains an empty pattern"
                )));
            }
        }
        Ok(())
    }
}
