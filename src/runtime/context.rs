use std::fmt;

/// Header a caller may use to pass its own request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request identifier; ULIDs sort by creation time so log lines stay ordered
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct RequestId(ulid::Ulid);

impl RequestId {
    pub fn generate() -> Self {
        Self(ulid::Ulid::new())
    }

    /// Reuse the caller's id when `value` is a valid ULID, else generate one
    pub fn from_header(value: Option<&str>) -> Self {
        value
            .and_then(|v| ulid::Ulid::from_string(v.trim()).ok())
            .map(Self)
            .unwrap_or_else(Self::generate)
    }

    pub fn ulid(&self) -> ulid::Ulid {
        self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Per-request context handed to business methods that ask for it
///
/// A business method opts in by taking `&RequestContext` before its parameter
/// struct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Id used to correlate log lines of one request
    pub request_id: RequestId,
}
