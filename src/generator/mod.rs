//! # Generator Module
//!
//! Turns an annotated Rust source file into a companion module holding the
//! request binding, the gated handlers and the dispatch tables for it.
//!
//! ## Architecture
//!
//! The generator renders Askama templates from the plans built by [`crate::rules`]
//! and [`crate::handlers`]:
//!
//! ```text
//! source ─SynDiscovery─▶ SourceDescription ─┬─ structs ─parse_rule/plan_field─▶ emit_bind
//!                                            └─ methods ─extract_handler_spec──▶ emit_handler
//!                                                                  DispatchBuilder ─▶ emit_dispatch
//! ```
//!
//! Blocks appear in file order, dispatch tables last. The rendered module is
//! re-parsed with `syn` before it is written, so a template bug surfaces as
//! [`GenError::InvalidOutput`](crate::error::GenError::InvalidOutput) rather than
//! as a broken build downstream.
//!
//! ## Generated Code
//!
//! The output is meant to be included as a child module of the input file:
//!
//! ```rust,ignore
//! #[derive(Default, apigen::ApiParams)]
//! pub struct ProfileParams {
//!     #[apivalidator("required")]
//!     login: String,
//! }
//!
//! impl MyApi {
//!     /// apigen:api {"url": "/user/profile", "auth": false}
//!     pub fn profile(&self, params: ProfileParams) -> Result<User, ApiError> { .. }
//! }
//!
//! #[path = "api_gen.rs"]
//! mod api_gen;
//! ```
//!
//! It imports the parent with `use super::*;`, which gives the generated impls
//! access to private fields, and pulls its support types from
//! [`crate::runtime`].

mod emit;
mod format;
mod pipeline;
mod templates;

pub use emit::{emit_bind, emit_dispatch, emit_handler};
pub use format::{format_output, RUSTFMT_ENV};
pub use pipeline::{generate, generate_file, generate_source, GeneratedModule};
