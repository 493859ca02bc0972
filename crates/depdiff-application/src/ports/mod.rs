//! Application ports
//!
//! - **registry/** - linkme auto-registration of comparators and adapters

pub mod registry;
