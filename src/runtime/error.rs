use std::fmt;

/// Error reported by a business method
///
/// The message becomes the envelope's `error`; `status` picks the HTTP status.
/// Errors without a status are answered with 500.
pub trait HandlerError: fmt::Display {
    /// Explicit HTTP status for this error, if it carries one
    fn status(&self) -> Option<u16> {
        None
    }
}

/// Structured business error carrying an optional HTTP status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Status to answer with; `None` means 500
    pub http_status: Option<u16>,
    /// Message placed in the envelope
    pub message: String,
}

impl ApiError {
    /// Error without an explicit status
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            http_status: None,
            message: message.into(),
        }
    }

    /// Error answered with `status`
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            http_status: Some(status),
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

impl HandlerError for ApiError {
    fn status(&self) -> Option<u16> {
        self.http_status
    }
}

/// A parameter failed to bind or validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindError {
    message: String,
}

impl BindError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for BindError {}

impl HandlerError for BindError {
    fn status(&self) -> Option<u16> {
        Some(400)
    }
}

impl HandlerError for anyhow::Error {}
impl HandlerError for std::io::Error {}
impl HandlerError for String {}
impl HandlerError for &str {}
impl HandlerError for Box<dyn std::error::Error> {}
impl HandlerError for Box<dyn std::error::Error + Send + Sync> {}
