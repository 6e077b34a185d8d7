//! List-view filtering and projection over a resource type's records.

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use utoipa::IntoParams;

/// The fields a list response is reduced to; everything else is detail-only.
const LIST_FIELDS: [&str; 6] = ["id", "createdAt", "updatedAt", "title", "category", "image"];

/// Optional list filters, taken from the request query string.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListParams {
    /// Case-insensitive substring match against `title`.
    pub search: Option<String>,
    /// Case-insensitive exact match against `category`.
    pub category: Option<String>,
}

/// Applies both filters (ANDed; an absent filter passes everything) and
/// projects each match down to the list fields. Absent fields are omitted
/// from the projection rather than serialized as null. Input order is
/// preserved.
pub fn query(records: &[JsonValue], params: &ListParams) -> Vec<JsonValue> {
    records
        .iter()
        .filter(|record| matches_category(record, params.category.as_deref()))
        .filter(|record| matches_search(record, params.search.as_deref()))
        .map(project)
        .collect()
}

// A record without the filtered field never matches; it is not an error.
fn matches_category(record: &JsonValue, category: Option<&str>) -> bool {
    let Some(category) = category else { return true };
    record
        .get("category")
        .and_then(JsonValue::as_str)
        .map(|value| value.to_lowercase() == category.to_lowercase())
        .unwrap_or(false)
}

fn matches_search(record: &JsonValue, search: Option<&str>) -> bool {
    let Some(search) = search else { return true };
    record
        .get("title")
        .and_then(JsonValue::as_str)
        .map(|title| title.to_lowercase().contains(&search.to_lowercase()))
        .unwrap_or(false)
}

fn project(record: &JsonValue) -> JsonValue {
    let mut projected = Map::new();
    if let Some(obj) = record.as_object() {
        for field in LIST_FIELDS {
            if let Some(value) = obj.get(field) {
                projected.insert(field.to_string(), value.clone());
            }
        }
    }
    JsonValue::Object(projected)
}
