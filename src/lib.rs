pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::cache::ResourceCache;
pub use app::query::{query, ListParams};
pub use domain::schema::{FieldError, FieldSpec, FieldType, ResourceSchema, SchemaRegistry};
pub use transport::http::router::pluralize;
