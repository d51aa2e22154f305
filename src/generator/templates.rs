use askama::Template;

/// One `if <condition> { return Err(BindError::new(<message>)); }` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Rust boolean expression that signals a violation
    pub condition: String,
    /// Rust string literal for the error message
    pub message: String,
}

/// Pre-rendered statements for one bound field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Target field, as written in the struct
    pub field_name: String,
    /// Checks on the raw parameter, before the read
    pub guards: Vec<Check>,
    /// Assignment reading the parameter into the field
    pub read: String,
    /// Checks on the stored value, in emission order
    pub checks: Vec<Check>,
    /// Whether a default substitution follows the checks
    pub has_fallback: bool,
    /// The substitution statement
    pub fallback: String,
}

/// Header of every generated module
#[derive(Template)]
#[template(path = "prelude.rs.txt", escape = "none")]
pub struct PreludeTemplate<'a> {
    /// Input file the module was generated from
    pub source_name: &'a str,
    /// Module path of the runtime support types
    pub runtime_path: &'a str,
}

/// `impl Bind for T`
#[derive(Template)]
#[template(path = "bind.rs.txt", escape = "none")]
pub struct BindTemplate<'a> {
    pub struct_name: &'a str,
    pub fields: Vec<FieldView>,
}

/// Gated handler wrapping one business method
#[derive(Template)]
#[template(path = "handler.rs.txt", escape = "none")]
pub struct HandlerTemplate<'a> {
    pub receiver: &'a str,
    pub handler: &'a str,
    pub auth_required: bool,
    /// Header name literal
    pub auth_header: String,
    /// Expected credential literal
    pub auth_token: String,
    pub method_restricted: bool,
    /// Upper-cased verb literal
    pub method: String,
    pub params_type: &'a str,
    pub business_method: &'a str,
    /// Arguments passed to the business method
    pub call_args: &'a str,
}

/// One `"/url" => self.handler(req)` arm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchArm {
    /// Path string literal
    pub pattern: String,
    pub handler: String,
}

/// `impl Service for R`
#[derive(Template)]
#[template(path = "dispatch.rs.txt", escape = "none")]
pub struct DispatchTemplate<'a> {
    pub receiver: &'a str,
    pub arms: Vec<DispatchArm>,
}
