use crate::app::query::ListParams;
use crate::transport::http::handlers::{health, resources};
use crate::transport::http::types::{ApiResponse, AppState, NotFoundResponse, ReadOnlyResponse};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        resources::list_handler,
        resources::detail_handler,
        resources::create_rejected_handler,
        resources::update_rejected_handler,
        resources::delete_rejected_handler
    ),
    components(schemas(ApiResponse, NotFoundResponse, ReadOnlyResponse))
)]
#[allow(dead_code)]
pub struct ApiDoc;

/// Plural URL segment for a resource-type key.
///
/// Suffix rules only, no dictionary: trailing "y" becomes "ies", sibilant
/// endings (s, x, z, ch, sh) take "es", everything else takes "s". Irregular
/// nouns come out wrong by design of the public URL surface and are kept
/// as-is.
pub fn pluralize(singular: &str) -> String {
    if let Some(stem) = singular.strip_suffix('y') {
        return format!("{stem}ies");
    }
    if singular.ends_with('s')
        || singular.ends_with('x')
        || singular.ends_with('z')
        || singular.ends_with("ch")
        || singular.ends_with("sh")
    {
        return format!("{singular}es");
    }
    format!("{singular}s")
}

/// Builds the router: `/health` plus, for every registered resource type,
/// list and detail reads and the three unconditionally rejected writes.
pub fn create_router(app_state: AppState) -> Router {
    let mut router = Router::new().route("/health", get(health::healthcheck_handler));

    for resource_type in app_state.registry.resource_types() {
        let plural = pluralize(resource_type);
        let collection_path = format!("/{plural}");
        let item_path = format!("/{plural}/:id");

        let list_type = resource_type.to_string();
        let detail_type = resource_type.to_string();

        router = router
            .route(
                &collection_path,
                get(move |state: State<AppState>, params: Query<ListParams>| {
                    resources::list_handler(state, params, list_type.clone())
                })
                .post(resources::create_rejected_handler),
            )
            .route(
                &item_path,
                get(move |state: State<AppState>, id: Path<String>| {
                    resources::detail_handler(state, id, detail_type.clone())
                })
                .put(resources::update_rejected_handler)
                .delete(resources::delete_rejected_handler),
            );
    }

    router.with_state(app_state)
}
