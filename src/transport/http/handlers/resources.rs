//! Generic list/detail/write handlers, parameterized by resource-type key.
//!
//! The router registers these once per resource type under its pluralized
//! path, passing the singular key through a closure. No per-type handler
//! code exists.

use crate::app::query::{self, ListParams};
use crate::transport::http::types::{AppState, NotFoundResponse, ReadOnlyResponse};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{Map, Value as JsonValue};

#[utoipa::path(
    get,
    path = "/{resources}",
    params(
        ("resources" = String, Path, description = "Pluralized resource type (e.g. products)"),
        ListParams
    ),
    responses(
        (status = 200, description = "Projected records matching the filters", body = Vec<Object>)
    )
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    resource_type: String,
) -> impl IntoResponse {
    let records = state.cache.get_all(&resource_type);
    Json(query::query(records, &params))
}

#[utoipa::path(
    get,
    path = "/{resources}/{id}",
    params(
        ("resources" = String, Path, description = "Pluralized resource type (e.g. products)"),
        ("id" = i64, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Full record, wrapped under a key named after the resource type", body = Object),
        (status = 404, description = "No record with that id", body = NotFoundResponse)
    )
)]
pub async fn detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    resource_type: String,
) -> impl IntoResponse {
    // An unparseable id cannot match any record; report it back verbatim.
    let record = id
        .parse::<i64>()
        .ok()
        .and_then(|item_id| state.cache.get_by_id(&resource_type, item_id));

    match record {
        Some(record) => {
            let mut body = Map::new();
            body.insert("success".to_string(), JsonValue::Bool(true));
            body.insert(resource_type, record.clone());
            (StatusCode::OK, Json(JsonValue::Object(body))).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(NotFoundResponse::for_id(&resource_type, &id)),
        )
            .into_response(),
    }
}

// Rejected before any body inspection, whatever the payload.
fn read_only_rejection() -> (StatusCode, Json<ReadOnlyResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ReadOnlyResponse::method_not_supported()),
    )
}

#[utoipa::path(
    post,
    path = "/{resources}",
    params(
        ("resources" = String, Path, description = "Pluralized resource type (e.g. products)")
    ),
    responses(
        (status = 405, description = "Writes are disabled in read-only mode", body = ReadOnlyResponse)
    )
)]
pub async fn create_rejected_handler() -> impl IntoResponse {
    read_only_rejection()
}

#[utoipa::path(
    put,
    path = "/{resources}/{id}",
    params(
        ("resources" = String, Path, description = "Pluralized resource type (e.g. products)"),
        ("id" = i64, Path, description = "Record identifier")
    ),
    responses(
        (status = 405, description = "Writes are disabled in read-only mode", body = ReadOnlyResponse)
    )
)]
pub async fn update_rejected_handler() -> impl IntoResponse {
    read_only_rejection()
}

#[utoipa::path(
    delete,
    path = "/{resources}/{id}",
    params(
        ("resources" = String, Path, description = "Pluralized resource type (e.g. products)"),
        ("id" = i64, Path, description = "Record identifier")
    ),
    responses(
        (status = 405, description = "Writes are disabled in read-only mode", body = ReadOnlyResponse)
    )
)]
pub async fn delete_rejected_handler() -> impl IntoResponse {
    read_only_rejection()
}
