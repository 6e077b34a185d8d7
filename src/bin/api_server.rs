// src/bin/api_server.rs

use catalog_api::domain::schema::catalog;
use catalog_api::infra::config;
use catalog_api::pluralize;
use catalog_api::transport;
use catalog_api::ResourceCache;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // --- Schema Registry Initialization ---
    println!("> Initializing schema registry...");
    let registry = Arc::new(catalog::catalog_registry());

    // --- Cache Initialization (all types must load, or we do not start) ---
    let data_dir = config::data_dir();
    println!("> Loading data files from {}...", data_dir.display());
    let cache = match ResourceCache::load_all(&registry, &data_dir).await {
        Ok(cache) => Arc::new(cache),
        Err(e) => {
            eprintln!("> {e:#}");
            eprintln!("> The server was not started because of the errors above.");
            std::process::exit(1);
        }
    };

    let app_state = transport::http::AppState {
        cache,
        registry: registry.clone(),
    };

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let port = config::port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    println!("> Available endpoints (READ-ONLY):");
    for resource_type in registry.resource_types() {
        let plural = pluralize(resource_type);
        println!("   - GET /{plural} (list {resource_type})");
        println!("   - GET /{plural}/:id ({resource_type} detail)");
    }
    println!("> API server listening on http://0.0.0.0:{port}");
    println!("> Swagger UI available at http://localhost:{port}/swagger-ui");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C). Bye.");
        }
    }

    Ok(())
}
