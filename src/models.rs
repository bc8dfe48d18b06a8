//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-assigned item identifier.
///
/// Any JSON value is accepted and kept verbatim so it can be echoed back
/// unchanged in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub(crate) Value);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

/// Body of `POST /api/items`
#[derive(Debug, Serialize)]
pub struct NewItem<'a> {
    pub name: &'a str,
}

/// Body of `PUT /api/items/{id}`
#[derive(Debug, Serialize)]
pub struct ItemUpdate<'a> {
    pub name: &'a str,
}

/// Trim a user-entered name, rejecting it when nothing is left.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_with_numeric_id() {
        let item: Item = serde_json::from_value(json!({ "id": 7, "name": "Milk" })).unwrap();
        assert_eq!(item.id, ItemId(json!(7)));
        assert_eq!(item.name, "Milk");
        assert_eq!(item.id.to_string(), "7");
    }

    #[test]
    fn test_item_with_string_id() {
        let items: Vec<Item> = serde_json::from_value(json!([
            { "id": "65f0c2a1", "name": "Eggs" },
            { "id": 3, "name": "Bread", "createdAt": "ignored" },
        ]))
        .unwrap();
        assert_eq!(items[0].id.to_string(), "65f0c2a1");
        assert_eq!(items[1].id, ItemId(json!(3)));
    }

    #[test]
    fn test_large_and_float_ids() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[
                { "id": 18446744073709551615, "name": "big" },
                { "id": 1.5, "name": "float" },
                { "id": null, "name": "none" }
            ]"#,
        )
        .unwrap();
        assert_eq!(items[0].id.to_string(), "18446744073709551615");
        assert_eq!(items[1].id.to_string(), "1.5");
        assert_eq!(items[2].id.to_string(), "null");
    }

    #[test]
    fn test_id_serializes_in_original_form() {
        let numeric: ItemId = serde_json::from_value(json!(12)).unwrap();
        let text: ItemId = serde_json::from_value(json!("a")).unwrap();
        assert_eq!(serde_json::to_value(numeric).unwrap(), json!(12));
        assert_eq!(serde_json::to_value(text).unwrap(), json!("a"));
    }

    #[test]
    fn test_request_bodies() {
        assert_eq!(serde_json::to_value(NewItem { name: "Tea" }).unwrap(), json!({ "name": "Tea" }));
        assert_eq!(serde_json::to_value(ItemUpdate { name: "Coffee" }).unwrap(), json!({ "name": "Coffee" }));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Apples "), Some("Apples".to_string()));
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name(" \t\n"), None);
    }
}
