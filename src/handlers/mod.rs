//! # Handlers Module
//!
//! Turns routing annotations on business methods into [`HandlerSpec`]s and
//! collects them per receiver into dispatch tables.
//!
//! A business method is annotated through its doc comment:
//!
//! ```text
//! impl MyApi {
//!     /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
//!     pub fn create(&self, params: CreateParams) -> Result<User, ApiError> { .. }
//! }
//! ```
//!
//! `auth` defaults to `false` and `method` to `""` (any verb).

mod dispatch;
mod spec;

pub use dispatch::{DispatchBuilder, DispatchEntry, ReceiverRoutes};
pub use spec::{extract_handler_spec, handler_name, HandlerSpec, RouteAnnotation};
