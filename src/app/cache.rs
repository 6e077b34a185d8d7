//! In-memory resource cache, populated once at startup from JSON data files.
//!
//! One file per resource type under the data directory. The cache is never
//! written to after `load_all` returns; handlers share it behind a plain
//! `Arc` with no locking.

use crate::domain::schema::{ResourceSchema, SchemaRegistry};
use anyhow::{bail, Context};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug)]
pub struct ResourceCache {
    records: BTreeMap<String, Vec<JsonValue>>,
}

impl ResourceCache {
    /// Loads every resource type in the registry from `<data_dir>/<type>.json`.
    ///
    /// A missing or blank file yields an empty sequence for that type. A file
    /// whose content is not a JSON array of objects is a startup error: the
    /// returned error must abort initialization before any port is bound.
    pub async fn load_all(registry: &SchemaRegistry, data_dir: &Path) -> anyhow::Result<Self> {
        let mut records = BTreeMap::new();
        for (resource_type, schema) in registry.iter() {
            let loaded = load_type(resource_type, schema, data_dir).await?;
            records.insert(resource_type.to_string(), loaded);
        }
        Ok(Self { records })
    }

    /// Returns the full ordered sequence for a resource type.
    ///
    /// Order is the insertion order of the source file. Unknown types yield
    /// an empty slice.
    pub fn get_all(&self, resource_type: &str) -> &[JsonValue] {
        self.records
            .get(resource_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Finds the first record whose `id` equals the given identifier.
    pub fn get_by_id(&self, resource_type: &str, id: i64) -> Option<&JsonValue> {
        self.get_all(resource_type)
            .iter()
            .find(|record| record.get("id").and_then(JsonValue::as_i64) == Some(id))
    }
}

async fn load_type(
    resource_type: &str,
    schema: &ResourceSchema,
    data_dir: &Path,
) -> anyhow::Result<Vec<JsonValue>> {
    let data_file = data_dir.join(format!("{resource_type}.json"));

    let raw = match tokio::fs::read_to_string(&data_file).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("> File {resource_type}.json not found, cache left empty.");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", data_file.display()))
        }
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: JsonValue = serde_json::from_str(&raw).with_context(|| {
        format!("structural error in {resource_type}.json: the file is not valid JSON")
    })?;
    let entries = match parsed {
        JsonValue::Array(entries) => entries,
        other => bail!(
            "structural error in {resource_type}.json: the file must contain an array, got {}",
            match other {
                JsonValue::Object(_) => "an object",
                JsonValue::String(_) => "a string",
                JsonValue::Number(_) => "a number",
                JsonValue::Bool(_) => "a boolean",
                _ => "null",
            }
        ),
    };

    let mut validated = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            bail!("structural error in {resource_type}.json: entry {index} is not an object");
        }
        match schema.validate(&entry) {
            Ok(record) => validated.push(record),
            Err(errors) => {
                let details: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                eprintln!(
                    "> Skipping invalid {resource_type} entry {index}: {}",
                    details.join(", ")
                );
            }
        }
    }

    println!("> Loaded {} records for {resource_type}", validated.len());
    Ok(validated)
}
