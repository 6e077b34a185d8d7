//! SchemaRegistry for mapping resource-type keys to their schemas.

use crate::domain::schema::ResourceSchema;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A registry that maps resource-type keys (e.g. "product") to their schemas.
///
/// Iteration order is the sorted key order, so route registration and startup
/// logging are deterministic.
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Arc<ResourceSchema>>,
}

impl SchemaRegistry {
    /// Creates a new empty SchemaRegistry.
    pub fn new() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// Registers a schema under the given resource-type key.
    pub fn register(&mut self, resource_type: impl Into<String>, schema: ResourceSchema) {
        self.schemas.insert(resource_type.into(), Arc::new(schema));
    }

    /// Retrieves a schema by resource-type key.
    /// Returns None if the type is not registered.
    pub fn get(&self, resource_type: &str) -> Option<Arc<ResourceSchema>> {
        self.schemas.get(resource_type).cloned()
    }

    /// Returns all registered resource-type keys.
    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Iterates over `(resource_type, schema)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<ResourceSchema>)> {
        self.schemas.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
