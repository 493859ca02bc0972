//! Registry System
//!
//! Compile-time registration of comparators and format adapters with the
//! `linkme` crate. Implementations in `depdiff-providers` submit entries into
//! the slices declared here; the runner resolves them by key at startup.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    Comparator Registration Flow                  │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  1. Provider defines:  #[linkme::distributed_slice(COMPARATORS)] │
//! │                        static ENTRY: ComparatorEntry = ...       │
//! │                              ↓                                   │
//! │  2. Registry declares: #[linkme::distributed_slice]              │
//! │                        pub static COMPARATORS: [Entry] = [..]    │
//! │                              ↓                                   │
//! │  3. Resolver queries:  COMPARATORS.iter()                        │
//! │                              ↓                                   │
//! │  4. Run selects:       (enre, depends, entity) → comparator      │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Registering a Comparator (in depdiff-providers)
//!
//! ```ignore
//! use depdiff_application::registry::{ComparatorEntry, COMPARATORS};
//!
//! #[linkme::distributed_slice(COMPARATORS)]
//! static ENRE_DEPENDS: ComparatorEntry = ComparatorEntry {
//!     left: ToolKind::Enre,
//!     right: ToolKind::Depends,
//!     kind: CompareKind::Entity,
//!     description: "ENRE entities against Depends entities",
//!     factory: enre_depends_factory,
//! };
//! ```

pub mod adapter;
pub mod comparator;

pub use adapter::{FORMAT_ADAPTERS, FormatAdapterEntry, list_format_adapters, resolve_format_adapter};
pub use comparator::{
    COMPARATORS, ComparatorConfig, ComparatorEntry, list_comparators, resolve_comparator,
};
