//! # Runtime Module
//!
//! Types the generated code is written against. A generated companion module
//! imports them from `apigen::runtime` (configurable through
//! `GeneratorConfig::runtime_path`).
//!
//! - [`ApiRequest`] - method, path, headers and the flat parameter map
//! - [`ApiResponse`] / [`Envelope`] - status plus `{"error": .., "response": ..}`
//! - [`Bind`] - implemented by generated code for every parameter struct
//! - [`Service`] - implemented by generated code for every receiver type
//! - [`HandlerError`] / [`ApiError`] - how business errors choose a status
//!
//! Generated handlers only touch their arguments, so a `Service` can be shared
//! across threads and called concurrently whenever the receiver itself allows it.

mod context;
mod error;
mod request;
mod response;

pub use context::{RequestContext, RequestId, REQUEST_ID_HEADER};
pub use error::{ApiError, BindError, HandlerError};
pub use request::ApiRequest;
pub use response::{ApiResponse, Envelope};

use tracing::debug;

/// Populate a parameter struct from a request, failing on the first violated rule
pub trait Bind {
    /// Read and validate every tagged field in declaration order
    fn bind(&mut self, req: &ApiRequest) -> Result<(), BindError>;
}

/// Route a request to the generated handler registered for its path
pub trait Service {
    /// Dispatch on `req.path()`; unknown paths answer 404
    fn serve(&self, req: &ApiRequest) -> ApiResponse;
}

/// Serve an `http` request end to end
pub fn serve_http<S: Service + ?Sized>(
    service: &S,
    req: http::Request<Vec<u8>>,
) -> http::Response<Vec<u8>> {
    let req = ApiRequest::from_http(req);
    let resp = service.serve(&req);
    debug!(
        request_id = %req.context().request_id,
        method = %req.method(),
        path = req.path(),
        status = resp.status(),
        "request served"
    );
    resp.into_http()
}
