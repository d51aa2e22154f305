//! # Source Module
//!
//! Discovery of the declarations the generator works from. The generator core
//! consumes a [`SourceDescription`]: per struct, the ordered fields with their
//! name, type and tag; per function, its receiver type, parameter types and
//! leading doc comment. [`SynDiscovery`] builds that description from a Rust
//! source file.

mod discover;
mod types;

pub use discover::{SourceDiscovery, SynDiscovery, TAG_ATTRIBUTE};
pub use types::*;
