use askama::Template;
use tracing::debug;

use super::templates::{
    BindTemplate, Check, DispatchArm, DispatchTemplate, FieldView, HandlerTemplate,
};
use crate::config::{GeneratorConfig, RequiredIntPolicy};
use crate::error::GenError;
use crate::handlers::{HandlerSpec, ReceiverRoutes};
use crate::rules::{FieldBinding, FieldKind, IntType};

/// Render `s` as a Rust string literal
fn lit(s: &str) -> String {
    format!("{:?}", s)
}

fn check(condition: String, message: String) -> Check {
    Check {
        condition,
        message: lit(&message),
    }
}

fn string_field(binding: &FieldBinding) -> FieldView {
    let FieldBinding {
        field_name: f,
        source_param_name: p,
        rule,
        ..
    } = binding;
    let mut checks = Vec::new();

    if rule.required {
        checks.push(check(
            format!("self.{}.is_empty()", f),
            format!("{} must be not empty", p),
        ));
    }
    if let Some(max) = rule.max {
        checks.push(check(
            format!("self.{}.chars().count() > {}", f, max),
            format!("{} len must be <= {}", p, max),
        ));
    }
    // a zero minimum always holds
    if let Some(min) = rule.min.filter(|m| *m > 0) {
        checks.push(check(
            format!("self.{}.chars().count() < {}", f, min),
            format!("{} len must be >= {}", p, min),
        ));
    }
    if !rule.enum_values.is_empty() {
        let mut accepted: Vec<String> = rule.enum_values.iter().map(|v| lit(v)).collect();
        if rule.has_default() {
            accepted.push(lit(""));
        }
        checks.push(check(
            format!("!matches!(self.{}.as_str(), {})", f, accepted.join(" | ")),
            format!("{} must be one of [{}]", p, rule.enum_values.join(", ")),
        ));
    }

    // a required value is never empty once its check passed
    let fallback = rule
        .default_value
        .as_deref()
        .filter(|d| !d.is_empty() && !rule.required);

    FieldView {
        field_name: f.clone(),
        guards: Vec::new(),
        read: format!("self.{} = req.param({}).to_owned();", f, lit(p)),
        checks,
        has_fallback: fallback.is_some(),
        fallback: fallback
            .map(|d| format!("if self.{0}.is_empty() {{ self.{0} = {1}.to_owned(); }}", f, lit(d)))
            .unwrap_or_default(),
    }
}

fn integer_field(binding: &FieldBinding, int: IntType, policy: RequiredIntPolicy) -> FieldView {
    let FieldBinding {
        field_name: f,
        source_param_name: p,
        rule,
        ..
    } = binding;
    let default = rule.default_value.as_deref().filter(|d| !d.is_empty());
    let mut guards = Vec::new();
    let mut checks = Vec::new();

    // a defaulted required field only exists under the required-first policy,
    // where the raw value has to be present before anything is substituted
    let presence = rule.required && (policy == RequiredIntPolicy::Presence || default.is_some());
    if presence {
        guards.push(check(
            format!("req.param({}).is_empty()", lit(p)),
            format!("{} is required", p),
        ));
    }

    let raw = match default {
        Some(d) if !rule.required => format!("req.param_or({}, {})", lit(p), lit(d)),
        _ => format!("req.param({})", lit(p)),
    };
    let read = format!(
        "self.{} = {}.parse::<{}>().map_err(|_| BindError::new({}))?;",
        f,
        raw,
        int,
        lit(&format!("{} must be int", p))
    );

    if rule.required && !presence {
        checks.push(check(format!("self.{} == 0", f), format!("{} is required", p)));
    }
    let (lo, hi) = int.range();
    if let Some(max) = rule.max.filter(|m| i128::from(*m) < hi) {
        checks.push(check(
            format!("self.{} > {}", f, max),
            format!("{} must be <= {}", p, max),
        ));
    }
    if let Some(min) = rule.min.filter(|m| i128::from(*m) > lo) {
        checks.push(check(
            format!("self.{} < {}", f, min),
            format!("{} must be >= {}", p, min),
        ));
    }

    FieldView {
        field_name: f.clone(),
        guards,
        read,
        checks,
        has_fallback: false,
        fallback: String::new(),
    }
}

/// Emit `impl Bind for <struct_name>` reading `bindings` in order
///
/// Every field is read and checked before the next one; the first violated
/// rule returns its [`BindError`](crate::runtime::BindError).
///
/// # Errors
///
/// [`GenError::UnsupportedFieldType`] if a binding was planned for an
/// unsupported type, or [`GenError::Render`] when the template fails.
pub fn emit_bind(
    struct_name: &str,
    bindings: &[FieldBinding],
    config: &GeneratorConfig,
) -> Result<String, GenError> {
    let mut fields = Vec::with_capacity(bindings.len());
    for binding in bindings {
        let view = match &binding.kind {
            FieldKind::String => string_field(binding),
            FieldKind::Integer(int) => integer_field(binding, *int, config.required_int),
            FieldKind::Unsupported(type_name) => {
                return Err(GenError::UnsupportedFieldType {
                    struct_name: struct_name.to_string(),
                    field: binding.field_name.clone(),
                    type_name: type_name.clone(),
                })
            }
        };
        fields.push(view);
    }
    debug!(struct_name, fields = fields.len(), "emitting bind");
    Ok(BindTemplate {
        struct_name,
        fields,
    }
    .render()?)
}

/// Emit the gated `<method>_handler` for one annotated business method
pub fn emit_handler(spec: &HandlerSpec, config: &GeneratorConfig) -> Result<String, GenError> {
    let call_args = if spec.passes_context {
        "req.context(), params"
    } else {
        "params"
    };
    debug!(
        receiver = %spec.receiver_type,
        handler = %spec.generated_handler_name,
        url = %spec.url,
        "emitting handler"
    );
    Ok(HandlerTemplate {
        receiver: &spec.receiver_type,
        handler: &spec.generated_handler_name,
        auth_required: spec.auth_required,
        auth_header: lit(&config.auth_header),
        auth_token: lit(&config.auth_token),
        method_restricted: spec.restricted_method.is_some(),
        method: lit(spec.restricted_method.as_deref().unwrap_or_default()),
        params_type: &spec.params_type,
        business_method: &spec.business_method_name,
        call_args,
    }
    .render()?)
}

/// Emit `impl Service for R` routing every registered path of one receiver
pub fn emit_dispatch(routes: &ReceiverRoutes) -> Result<String, GenError> {
    let arms = routes
        .entries
        .iter()
        .map(|entry| DispatchArm {
            pattern: lit(&entry.url),
            handler: entry.handler.clone(),
        })
        .collect::<Vec<_>>();
    debug!(receiver = %routes.receiver, routes = arms.len(), "emitting dispatch");
    Ok(DispatchTemplate {
        receiver: &routes.receiver,
        arms,
    }
    .render()?)
}
