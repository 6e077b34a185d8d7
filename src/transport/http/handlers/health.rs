use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{Map, Value as JsonValue};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (cache loaded)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let counts: Map<String, JsonValue> = state
        .registry
        .resource_types()
        .map(|resource_type| {
            (
                resource_type.to_string(),
                JsonValue::from(state.cache.get_all(resource_type).len()),
            )
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(serde_json::json!({
                "status": "ok",
                "resource_types": counts,
            })),
            error: None,
        }),
    )
}
