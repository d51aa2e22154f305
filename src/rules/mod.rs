//! # Rules Module
//!
//! Compiles `apivalidator` field tags into validation rules and binding plans.
//!
//! ```text
//! "required,paramname=id,min=1"  ──parse_rule──▶  ValidationRule
//! (field name, declared type) + ValidationRule ──plan_field──▶ FieldBinding
//! ```
//!
//! Both steps are pure: the same tag and field always produce the same plan.

mod binding;
mod rule;

pub use binding::{plan_field, FieldBinding, FieldKind, IntType};
pub use rule::{parse_rule, ValidationRule};
