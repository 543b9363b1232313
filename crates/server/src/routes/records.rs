use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use service::{errors::ServiceError, record::Record};
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(get, path = "/records", tag = "records", responses((status = 200, description = "All records", body = [crate::openapi::RecordDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Record>>, ApiError> {
    let all = state.records.list().await?;
    info!(count = all.len(), "list records");
    Ok(Json(all))
}

#[utoipa::path(
    get,
    path = "/records/{id}",
    tag = "records",
    params(("id" = i64, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record found", body = crate::openapi::RecordDoc),
        (status = 404, description = "No record with this id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Record>, ApiError> {
    let Path(id) = id?;
    match state.records.get_by_id(id).await? {
        Some(rec) => Ok(Json(rec)),
        None => Err(ServiceError::not_found("record", id).into()),
    }
}

#[utoipa::path(
    post,
    path = "/records",
    tag = "records",
    request_body = crate::openapi::RecordDoc,
    responses(
        (status = 200, description = "Created; id assigned by storage", body = crate::openapi::RecordDoc),
        (status = 400, description = "Invalid input or email already registered", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Record>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Json(candidate) = payload?;
    let created = state.records.create(candidate).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put,
    path = "/records/{id}",
    tag = "records",
    params(("id" = i64, Path, description = "Record id")),
    request_body = crate::openapi::RecordDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::RecordDoc),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No record with this id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Record>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Path(id) = id?;
    let Json(candidate) = payload?;
    let updated = state.records.update(id, candidate).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/records/{id}",
    tag = "records",
    params(("id" = i64, Path, description = "Record id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No record with this id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.records.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
