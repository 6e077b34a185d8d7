use crate::app::cache::ResourceCache;
use crate::domain::schema::SchemaRegistry;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared state handed to every handler.
///
/// Both members are fully built before the router exists and never mutated
/// afterwards, so they are shared without locks.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ResourceCache>,
    pub registry: Arc<SchemaRegistry>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of a 404 detail response.
#[derive(Serialize, Debug, ToSchema)]
pub struct NotFoundResponse {
    pub success: bool,
    pub message: String,
}

impl NotFoundResponse {
    pub fn for_id(resource_type: &str, id: &str) -> Self {
        Self {
            success: false,
            message: format!("{resource_type} with id '{id}' not found."),
        }
    }
}

/// Body of every rejected write attempt (405).
#[derive(Serialize, Debug, ToSchema)]
pub struct ReadOnlyResponse {
    pub error: String,
    pub message: String,
}

impl ReadOnlyResponse {
    pub fn method_not_supported() -> Self {
        Self {
            error: "Method not supported".to_string(),
            message: "The API is running in read-only mode; create, update and delete are disabled."
                .to_string(),
        }
    }
}
