use super::context::{RequestContext, RequestId, REQUEST_ID_HEADER};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::collections::HashMap;
use tracing::debug;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Incoming request as seen by generated handlers
///
/// Parameters are a flat name/value map built from the query string and, for
/// urlencoded bodies, the form body. A missing parameter reads as `""`.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    params: HashMap<String, String>,
    context: RequestContext,
}

impl ApiRequest {
    /// Create a request with no headers and no parameters
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            params: HashMap::new(),
            context: RequestContext::default(),
        }
    }

    /// Add a header; names or values that are not valid HTTP are dropped
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.append(name, value);
            }
            _ => debug!(header = name, "dropping invalid header"),
        }
        self
    }

    /// Set a parameter, replacing any previous value
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Build from an `http` request
    ///
    /// Parameters come from the query string and, when the content type is
    /// `application/x-www-form-urlencoded`, from the body. Body values take
    /// precedence over query values; within one source the first value wins.
    pub fn from_http(req: http::Request<Vec<u8>>) -> Self {
        let (parts, body) = req.into_parts();
        let mut params: HashMap<String, String> = HashMap::new();

        let is_form = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.trim_start().starts_with(FORM_CONTENT_TYPE));
        if is_form {
            for (k, v) in url::form_urlencoded::parse(&body) {
                params.entry(k.into_owned()).or_insert_with(|| v.into_owned());
            }
        }
        if let Some(query) = parts.uri.query() {
            for (k, v) in url::form_urlencoded::parse(query.as_bytes()) {
                params.entry(k.into_owned()).or_insert_with(|| v.into_owned());
            }
        }

        let request_id = RequestId::from_header(
            parts
                .headers
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
        );

        Self {
            method: parts.method,
            path: parts.uri.path().to_string(),
            headers: parts.headers,
            params,
            context: RequestContext { request_id },
        }
    }

    /// HTTP verb
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path without the query string
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of a header, or `""` when absent or not visible ASCII
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    /// Value of a parameter, or `""` when absent
    pub fn param(&self, name: &str) -> &str {
        self.params.get(name).map(String::as_str).unwrap_or("")
    }

    /// Value of a parameter, or `default` when absent or empty
    pub fn param_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.param(name) {
            "" => default,
            value => value,
        }
    }

    /// Context passed to business methods
    pub fn context(&self) -> &RequestContext {
        &self.context
    }
}
