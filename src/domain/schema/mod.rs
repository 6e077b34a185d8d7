//! Declarative schemas for the resource types served by the catalog.
//!
//! A schema names every recognized field of a resource type, its expected
//! primitive type and whether it is required. Validation is strict: a
//! candidate carrying any undeclared field is rejected whole, never trimmed.

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

pub mod catalog;
pub mod registry;

pub use registry::SchemaRegistry;

/// Primitive JSON types a schema field may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
        }
    }

    fn matches(self, value: &JsonValue) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
        }
    }
}

/// Declaration of a single field within a resource schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
        }
    }

    pub const fn optional(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
        }
    }
}

/// A structured validation error, one per offending field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Field rules for one resource type.
pub struct ResourceSchema {
    fields: BTreeMap<&'static str, FieldSpec>,
    readonly_fields: &'static [&'static str],
}

impl ResourceSchema {
    pub fn new<I>(fields: I, readonly_fields: &'static [&'static str]) -> Self
    where
        I: IntoIterator<Item = (&'static str, FieldSpec)>,
    {
        Self {
            fields: fields.into_iter().collect(),
            readonly_fields,
        }
    }

    /// Fields that must never be accepted from client input on a write path.
    /// They may still appear in stored data (the loader validates them like
    /// any other optional field).
    pub fn readonly_fields(&self) -> &'static [&'static str] {
        self.readonly_fields
    }

    /// Validates a candidate record against this schema.
    ///
    /// Returns the normalized record on success, or every field error found.
    /// Pure over its inputs; nothing is coerced and nothing is dropped.
    pub fn validate(&self, candidate: &JsonValue) -> Result<JsonValue, Vec<FieldError>> {
        let obj = match candidate.as_object() {
            Some(obj) => obj,
            None => {
                return Err(vec![FieldError {
                    field: "<record>".to_string(),
                    message: format!("Expected object, got {}", json_type_name(candidate)),
                }])
            }
        };

        let mut errors = Vec::new();

        for (name, spec) in &self.fields {
            match obj.get(*name) {
                None if spec.required => errors.push(FieldError {
                    field: name.to_string(),
                    message: format!("{} is required", capitalize(name)),
                }),
                Some(value) if !spec.field_type.matches(value) => errors.push(FieldError {
                    field: name.to_string(),
                    message: format!(
                        "Expected {}, got {}",
                        spec.field_type.name(),
                        json_type_name(value)
                    ),
                }),
                _ => {}
            }
        }

        // Strict mode: any key outside the declared field set rejects the record.
        for key in obj.keys() {
            if !self.fields.contains_key(key.as_str()) {
                errors.push(FieldError {
                    field: key.clone(),
                    message: format!("Unrecognized field '{}'", key),
                });
            }
        }

        if errors.is_empty() {
            Ok(candidate.clone())
        } else {
            Err(errors)
        }
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
