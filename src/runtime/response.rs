use super::error::HandlerError;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON body of every generated response
///
/// `error` is always present (empty on success); `response` is omitted when
/// the request failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Failure message, empty on success
    #[serde(default)]
    pub error: String,
    /// Business result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

/// Status code plus envelope returned by generated handlers
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    envelope: Envelope,
}

impl ApiResponse {
    /// Failed request with `message` in the envelope
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            envelope: Envelope {
                error: message.into(),
                response: None,
            },
        }
    }

    /// 200 with the serialized result; a result that can't be serialized yields 500
    pub fn success<T: Serialize + ?Sized>(result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self {
                status: 200,
                envelope: Envelope {
                    error: String::new(),
                    response: Some(value),
                },
            },
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize handler result");
                Self::error(500, err.to_string())
            }
        }
    }

    /// Business error: the error's own status if it is a valid HTTP status, else 500
    pub fn failure<E: HandlerError + ?Sized>(err: &E) -> Self {
        let status = err
            .status()
            .filter(|s| StatusCode::from_u16(*s).is_ok())
            .unwrap_or(500);
        Self::error(status, err.to_string())
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Envelope as a JSON value
    pub fn body(&self) -> Value {
        let mut map = Map::new();
        map.insert("error".to_string(), Value::String(self.envelope.error.clone()));
        if let Some(response) = &self.envelope.response {
            map.insert("response".to_string(), response.clone());
        }
        Value::Object(map)
    }

    /// Convert into an `http` response with a JSON body
    pub fn into_http(self) -> http::Response<Vec<u8>> {
        let bytes = self.body().to_string().into_bytes();
        let mut resp = http::Response::new(bytes);
        *resp.status_mut() =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        resp.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        resp
    }
}
