// Task CRUD handlers module
// Each handler parses its typed body, calls the store, and serializes the result

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::error::ApiError;
use super::response::json_response;
use crate::config::AppState;
use crate::store::{TaskDraft, TaskPatch};

/// GET /api/tasks
pub async fn list_tasks(state: &AppState) -> Result<Response<Full<Bytes>>, ApiError> {
    let tasks = state.store.load().await?;
    Ok(json_response(
        StatusCode::OK,
        &tasks,
        state.config.http.enable_cors,
    ))
}

/// POST /api/tasks
pub async fn create_task(body: &[u8], state: &AppState) -> Result<Response<Full<Bytes>>, ApiError> {
    let draft: TaskDraft = parse_body(body)?;
    draft.validate().map_err(ApiError::InvalidInput)?;
    let task = state.store.create(draft).await?;
    Ok(json_response(
        StatusCode::CREATED,
        &task,
        state.config.http.enable_cors,
    ))
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    id: i64,
    body: &[u8],
    state: &AppState,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let patch: TaskPatch = parse_body(body)?;
    patch.validate().map_err(ApiError::InvalidInput)?;
    let task = state.store.update(id, patch).await?;
    Ok(json_response(
        StatusCode::OK,
        &task,
        state.config.http.enable_cors,
    ))
}

/// DELETE /api/tasks/{id}
///
/// Deleting an absent id still reports success; the operation is idempotent.
pub async fn delete_task(id: i64, state: &AppState) -> Result<Response<Full<Bytes>>, ApiError> {
    state.store.delete(id).await?;
    Ok(json_response(
        StatusCode::OK,
        &serde_json::json!({ "success": true }),
        state.config.http.enable_cors,
    ))
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidInput(format!("invalid JSON body: {e}")))
}
