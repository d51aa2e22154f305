//! # apigen
//!
//! **apigen** reads a Rust source file in which parameter structs carry
//! declarative validation tags and business methods carry routing
//! annotations, and writes a companion module that binds request parameters,
//! gates and calls each business method, and dispatches requests by path.
//!
//! All analysis happens once, ahead of time. The generated code is plain Rust
//! that depends only on the small [`runtime`] module.
//!
//! ## Overview
//!
//! ```rust,ignore
//! use apigen::runtime::{ApiError, ApiRequest, ApiResponse};
//!
//! pub struct MyApi;
//!
//! #[derive(Default, apigen::ApiParams)]
//! pub struct CreateParams {
//!     #[apivalidator("required,min=3")]
//!     login: String,
//!     #[apivalidator("paramname=full_name")]
//!     name: String,
//!     #[apivalidator("enum=user|moderator|admin,default=user")]
//!     status: String,
//!     #[apivalidator("min=0,max=128")]
//!     age: i32,
//! }
//!
//! impl MyApi {
//!     /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
//!     pub fn create(&self, params: CreateParams) -> Result<NewUser, ApiError> {
//!         // ...
//!     }
//! }
//!
//! #[path = "api_gen.rs"]
//! mod api_gen;
//! ```
//!
//! Running `apigen src/api.rs src/api_gen.rs` produces:
//!
//! - `impl Bind for CreateParams`, which reads `login`, `full_name`, `status` and
//!   `age` and enforces their rules in declaration order, failing on the first
//!   violation;
//! - `MyApi::create_handler`, which checks the `X-Auth` credential (403), the
//!   HTTP verb (406), binds the parameters (400) and wraps the result in the
//!   `{"error": .., "response": ..}` envelope;
//! - `impl Service for MyApi`, which routes `/user/create` to the handler and
//!   answers 404 for unknown paths.
//!
//! ## Architecture
//!
//! - **[`rules`]** - tag grammar ([`rules::parse_rule`]) and field planning ([`rules::plan_field`])
//! - **[`handlers`]** - routing annotations ([`handlers::extract_handler_spec`]) and
//!   dispatch tables ([`handlers::DispatchBuilder`])
//! - **[`source`]** - discovery of structs and methods behind [`source::SourceDiscovery`]
//! - **[`generator`]** - template rendering and the file-level pipeline
//! - **[`runtime`]** - request, response and trait types used by generated code
//! - **[`config`]** - generator settings and the `apigen.toml` sidecar
//! - **[`cli`]** / **[`logging`]** - the `apigen` binary
//!
//! ### Generation Flow
//!
//! ```text
//! input.rs ──SynDiscovery──▶ SourceDescription
//!     structs ──parse_rule──▶ ValidationRule ──plan_field──▶ FieldBinding ──emit_bind──▶ impl Bind
//!     methods ──extract_handler_spec──▶ HandlerSpec ──emit_handler──▶ impl R { fn m_handler }
//!                                            └──DispatchBuilder──emit_dispatch──▶ impl Service
//! ```
//!
//! Any malformed tag or annotation aborts the whole run with a
//! [`error::GenError`]; no output file is written in that case.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod logging;
pub mod rules;
pub mod runtime;
pub mod source;

pub use apigen_macros::ApiParams;
pub use config::GeneratorConfig;
pub use error::GenError;
pub use generator::{generate, generate_file, generate_source, GeneratedModule};
