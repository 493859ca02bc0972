//! Domain Port Interfaces
//!
//! Contracts implemented by `depdiff-providers` and consumed by the
//! application layer.
//!
//! - **comparator** - pairwise entity classification and name matching
//! - **adapter** - normalization of a tool's native export

/// Raw-output format adapter port
pub mod adapter;
/// Entity comparator and name matcher ports
pub mod comparator;

pub use adapter::{AdapterInput, ConvertedDataset, FormatAdapter};
pub use comparator::{EntityComparator, NameMatcher};
