//! Schema definitions for the catalog deployment.

use super::{FieldSpec, FieldType, ResourceSchema, SchemaRegistry};

/// Schema for the `product` resource type.
///
/// `id`, `createdAt` and `updatedAt` are system-managed: optional at
/// validation time but expected to be present in curated data.
/// `serialNumber` is read-only and must never be taken from client input.
pub fn product_schema() -> ResourceSchema {
    ResourceSchema::new(
        [
            ("id", FieldSpec::optional(FieldType::Number)),
            ("createdAt", FieldSpec::optional(FieldType::String)),
            ("updatedAt", FieldSpec::optional(FieldType::String)),
            ("title", FieldSpec::required(FieldType::String)),
            ("category", FieldSpec::required(FieldType::String)),
            ("cpu", FieldSpec::optional(FieldType::String)),
            ("speedCpu", FieldSpec::optional(FieldType::Number)),
            ("ram", FieldSpec::optional(FieldType::Number)),
            ("hardDriveType", FieldSpec::optional(FieldType::String)),
            ("storage", FieldSpec::optional(FieldType::Number)),
            ("gpu", FieldSpec::optional(FieldType::String)),
            ("gpuRam", FieldSpec::optional(FieldType::Number)),
            ("displayPanel", FieldSpec::optional(FieldType::String)),
            ("screenInch", FieldSpec::optional(FieldType::Number)),
            ("refreshRate", FieldSpec::optional(FieldType::Number)),
            ("price", FieldSpec::required(FieldType::Number)),
            ("brand", FieldSpec::optional(FieldType::String)),
            ("releaseYear", FieldSpec::optional(FieldType::Number)),
            ("image", FieldSpec::required(FieldType::String)),
            ("serialNumber", FieldSpec::optional(FieldType::String)),
        ],
        &["serialNumber"],
    )
}

/// The full registry served by this deployment.
pub fn catalog_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry.register("product", product_schema());
    registry
}
