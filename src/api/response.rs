// API response utility functions module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::error::ApiError;
use crate::http::response::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN};
use crate::logger;

/// Build a JSON response, attaching the CORS headers when enabled
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    enable_cors: bool,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return fallback_error_response();
        }
    };

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN)
            .header("Access-Control-Allow-Methods", CORS_ALLOW_METHODS)
            .header("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS);
    }

    builder
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            fallback_error_response()
        })
}

/// Render an `ApiError` as `{"error": message}` with its status code
pub fn error_response(err: &ApiError, enable_cors: bool) -> Response<Full<Bytes>> {
    json_response(
        err.status(),
        &serde_json::json!({ "error": err.to_string() }),
        enable_cors,
    )
}

/// 404 for an unmatched `/api/*` route
pub fn route_not_found(enable_cors: bool) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::NOT_FOUND,
        &serde_json::json!({ "error": "unknown API route" }),
        enable_cors,
    )
}

fn fallback_error_response() -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(Bytes::from(
        r#"{"error":"internal server error"}"#,
    )));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp
}
