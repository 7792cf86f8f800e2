// API module entry
// Dispatches /api/* requests to the task CRUD handlers

mod error;
mod handlers;
mod response;

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

pub use error::ApiError;

use crate::config::AppState;
use crate::http;
use crate::logger;

const TASKS_PATH: &str = "/api/tasks";
const TASK_ID_PREFIX: &str = "/api/tasks/";

/// API route handler
///
/// Answers OPTIONS preflights directly, then reads the body once (bounded by
/// `http.max_body_size`) and dispatches on method + path. Handler errors are
/// mapped to their status code and rendered as `{"error": message}` in one
/// place.
pub async fn handle_api_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let enable_cors = state.config.http.enable_cors;

    // Preflight: empty 200, any path
    if method == Method::OPTIONS {
        logger::log_api_request(method.as_str(), &path, 200);
        return Ok(http::build_options_response(enable_cors));
    }

    // Fast reject on the declared length before reading anything
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        logger::log_api_request(method.as_str(), &path, 413);
        return Ok(resp);
    }

    let body = match read_body(req.into_body(), state.config.http.max_body_size).await {
        Ok(bytes) => bytes,
        Err(BodyReadError::TooLarge) => {
            logger::log_api_request(method.as_str(), &path, 413);
            return Ok(http::build_413_response());
        }
        Err(BodyReadError::Failed(e)) => {
            let err = ApiError::InvalidInput(format!("failed to read request body: {e}"));
            logger::log_api_request(method.as_str(), &path, err.status().as_u16());
            return Ok(response::error_response(&err, enable_cors));
        }
    };

    let resp = match dispatch(&method, &path, &body, &state).await {
        Ok(resp) => resp,
        Err(err) => response::error_response(&err, enable_cors),
    };
    logger::log_api_request(method.as_str(), &path, resp.status().as_u16());
    Ok(resp)
}

async fn dispatch(
    method: &Method,
    path: &str,
    body: &[u8],
    state: &AppState,
) -> Result<Response<Full<Bytes>>, ApiError> {
    match (method, path) {
        (&Method::GET, TASKS_PATH) => handlers::list_tasks(state).await,
        (&Method::POST, TASKS_PATH) => handlers::create_task(body, state).await,
        _ => {
            if let Some(raw_id) = path.strip_prefix(TASK_ID_PREFIX) {
                match *method {
                    Method::PUT => {
                        return handlers::update_task(parse_task_id(raw_id)?, body, state).await;
                    }
                    Method::DELETE => {
                        return handlers::delete_task(parse_task_id(raw_id)?, state).await;
                    }
                    _ => {}
                }
            }
            Ok(response::route_not_found(state.config.http.enable_cors))
        }
    }
}

/// Parse the `{id}` path segment of /api/tasks/{id}
fn parse_task_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::InvalidInput(format!("invalid task id: '{raw}'")))
}

#[derive(Debug)]
enum BodyReadError {
    TooLarge,
    Failed(String),
}

/// Collect the request body, capping the accumulated size
///
/// The cap counts bytes actually read, so chunked bodies without a
/// Content-Length header are limited too.
async fn read_body<B>(body: B, max_body_size: u64) -> Result<Bytes, BodyReadError>
where
    B: hyper::body::Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) => {
            if e.downcast_ref::<LengthLimitError>().is_some() {
                Err(BodyReadError::TooLarge)
            } else {
                Err(BodyReadError::Failed(e.to_string()))
            }
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}
