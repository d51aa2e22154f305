//! # CLI Module
//!
//! Command-line entry point of the `apigen` binary.
//!
//! ```bash
//! apigen src/api.rs src/api_gen.rs
//! ```
//!
//! The two positional arguments are the annotated input file and the path of
//! the generated module. There are no other flags: generation settings come from
//! an optional `apigen.toml` next to the input (see [`crate::config`]).
//!
//! ## Exit Status
//!
//! `0` when the module was written, `1` when generation failed. Nothing is
//! written on failure.

mod commands;

pub use commands::{run, run_cli, Cli};
