use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::source::{MethodDecl, SourceDescription};
use serde::Deserialize;

/// Routing annotation as written after the marker in a doc comment
///
/// ```text
/// /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RouteAnnotation {
    /// Dispatch key
    pub url: String,
    /// Require the credential header
    #[serde(default)]
    pub auth: bool,
    /// Restricted HTTP verb; empty means any
    #[serde(default)]
    pub method: String,
}

/// Routing and gating metadata for one business method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSpec {
    /// Request path dispatched to this handler
    pub url: String,
    /// Whether the credential header is checked
    pub auth_required: bool,
    /// Upper-cased HTTP verb the handler is restricted to
    pub restricted_method: Option<String>,
    /// Type whose `impl` block holds the business method
    pub receiver_type: String,
    /// Business method called with the bound parameters
    pub business_method_name: String,
    /// Parameter struct bound from the request
    pub params_type: String,
    /// Whether the business method takes the request context before its parameters
    pub passes_context: bool,
    /// Name of the generated handler method
    pub generated_handler_name: String,
}

/// Name of the handler generated for a business method
pub fn handler_name(business_method: &str) -> String {
    format!("{}_handler", business_method.trim_start_matches("r#"))
}

/// Build a [`HandlerSpec`] from an annotated method
///
/// `doc` must start with `config.marker`; the rest is parsed as a
/// [`RouteAnnotation`]. The method's trailing parameter names the parameter
/// struct, which must be declared in `source`.
///
/// # Errors
///
/// [`GenError::Annotation`] for malformed or incomplete JSON, and
/// [`GenError::SourceShape`] when the method cannot be wrapped by a handler.
pub fn extract_handler_spec(
    method: &MethodDecl,
    source: &SourceDescription,
    config: &GeneratorConfig,
) -> Result<HandlerSpec, GenError> {
    let qualified = method.qualified_name();
    let annotation_error = |reason: String| GenError::Annotation {
        method: qualified.clone(),
        reason,
    };
    let shape_error = |reason: &str| GenError::SourceShape {
        method: qualified.clone(),
        reason: reason.to_string(),
    };

    let json = method
        .doc
        .trim_start()
        .strip_prefix(config.marker.as_str())
        .ok_or_else(|| annotation_error(format!("doc comment does not start with {}", config.marker)))?;
    let annotation: RouteAnnotation =
        serde_json::from_str(json).map_err(|e| annotation_error(format!("{} in {}", e, json.trim())))?;

    if annotation.url.is_empty() {
        return Err(annotation_error("url must not be empty".to_string()));
    }
    if !annotation.url.starts_with('/') {
        return Err(annotation_error(format!("url '{}' must start with '/'", annotation.url)));
    }
    let restricted_method = if annotation.method.is_empty() {
        None
    } else {
        let verb = annotation.method.to_ascii_uppercase();
        http::Method::from_bytes(verb.as_bytes())
            .map_err(|_| annotation_error(format!("'{}' is not an HTTP method", annotation.method)))?;
        Some(verb)
    };

    let receiver_type = match (&method.receiver, method.has_self_receiver) {
        (Some(receiver), true) => receiver.clone(),
        _ => return Err(shape_error("must be a method taking self")),
    };
    let (passes_context, params) = match method.params.as_slice() {
        [params] => (false, params),
        [_ctx, params] => (true, params),
        [] => return Err(shape_error("has no parameter struct")),
        _ => return Err(shape_error("takes more than a context and a parameter struct")),
    };
    let params_type = params
        .type_name
        .clone()
        .ok_or_else(|| shape_error("must take its parameter struct by value"))?;
    if source.find_struct(&params_type).is_none() {
        return Err(GenError::SourceShape {
            method: qualified.clone(),
            reason: format!("uses parameter type {} which is not declared in this file", params_type),
        });
    }

    Ok(HandlerSpec {
        url: annotation.url,
        auth_required: annotation.auth,
        restricted_method,
        receiver_type,
        business_method_name: method.name.clone(),
        params_type,
        passes_context,
        generated_handler_name: handler_name(&method.name),
    })
}
