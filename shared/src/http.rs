//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::models::ErrorResponse;
use crate::Error;

/// CORS headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

fn with_cors(status: u16) -> lambda_http::http::response::Builder {
    CORS_HEADERS
        .iter()
        .fold(Response::builder().status(status), |builder, (name, value)| {
            builder.header(*name, *value)
        })
}

/// Create an empty response with the given status code.
pub fn empty_response(status: u16) -> Result<Response<Body>, lambda_http::Error> {
    Ok(with_cors(status).body(Body::Empty).map_err(Box::new)?)
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    Ok(with_cors(status)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(data)?))
        .map_err(Box::new)?)
}

/// Create an error response with the given status code and message.
pub fn error_response(status: u16, message: impl Into<String>) -> Result<Response<Body>, lambda_http::Error> {
    json_response(status, &ErrorResponse::new(message))
}

/// Parse and validate the request body, returning a 400 response on failure.
///
/// Returns `Ok(Ok(T))` on success, `Ok(Err(Response))` when the body is malformed
/// or fails validation, or `Err(lambda_http::Error)` on serialization failure.
pub fn parse_json_body<T>(body: &Body) -> Result<Result<T, Response<Body>>, lambda_http::Error>
where
    T: DeserializeOwned + Validate,
{
    match decode_body(body) {
        Ok(parsed) => Ok(Ok(parsed)),
        Err(e) => Ok(Err(error_response(e.status_code(), e.to_string())?)),
    }
}

fn decode_body<T>(body: &Body) -> crate::Result<T>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T =
        serde_json::from_slice(body.as_ref()).map_err(|e| Error::Validation(e.to_string()))?;
    parsed
        .validate()
        .map_err(|e| Error::Validation(e.to_string()))?;
    Ok(parsed)
}

/// Macro to parse request body, returning early with 400 on parse error.
///
/// Usage:
/// ```ignore
/// let request: MyRequest = parse_body!(event.body());
/// ```
#[macro_export]
macro_rules! parse_body {
    ($body:expr) => {
        match $crate::http::parse_json_body($body)? {
            Ok(parsed) => parsed,
            Err(response) => return Ok(response),
        }
    };
}
