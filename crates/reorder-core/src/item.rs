//! Item Model
//!
//! List entries and the helpers that keep their positions dense.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ReorderError, ReorderResult};

/// Stable item identifier
pub type ItemId = u32;

/// A reorderable entry (a staff member in the demo page)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// 1-based rank, equal to index + 1 once the list is settled
    pub position: usize,
    /// Display-only image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, position: usize) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            image: None,
        }
    }
}

/// Save payload element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub id: ItemId,
    pub position: usize,
}

impl From<&Item> for PositionUpdate {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            position: item.position,
        }
    }
}

/// Rewrite every position as index + 1
pub fn renumber(items: &mut [Item]) {
    for (idx, item) in items.iter_mut().enumerate() {
        item.position = idx + 1;
    }
}

/// Settle an externally supplied sequence: keep its order, drop repeated ids,
/// renumber positions.
pub fn normalize(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    let mut settled: Vec<Item> = items
        .into_iter()
        .filter(|item| {
            let fresh = seen.insert(item.id);
            if !fresh {
                log::warn!("[LOAD] dropping duplicate item id {}", item.id);
            }
            fresh
        })
        .collect();
    renumber(&mut settled);
    settled
}

/// Parse a JSON value into a settled item list
pub fn parse_items(value: serde_json::Value) -> ReorderResult<Vec<Item>> {
    if !value.is_array() {
        return Err(ReorderError::MalformedInput("expected an array of items".to_string()));
    }
    serde_json::from_value::<Vec<Item>>(value)
        .map(normalize)
        .map_err(|e| ReorderError::MalformedInput(e.to_string()))
}

/// Parse items, falling back to an empty list when the input is malformed
pub fn load_items(value: serde_json::Value) -> Vec<Item> {
    match parse_items(value) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("[LOAD] {}; starting with an empty list", e);
            Vec::new()
        }
    }
}

/// Demo data: `{label}1 ..= {label}{count}`
pub fn sample_items(label: &str, count: u32) -> Vec<Item> {
    (1..=count)
        .map(|i| Item::new(i, format!("{}{}", label, i), i as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_renumbers_in_given_order() {
        let items = vec![Item::new(7, "a", 5), Item::new(3, "b", 1)];
        let settled = normalize(items);
        assert_eq!(settled[0].id, 7);
        assert_eq!(settled[0].position, 1);
        assert_eq!(settled[1].id, 3);
        assert_eq!(settled[1].position, 2);
    }

    #[test]
    fn test_normalize_drops_duplicate_ids() {
        let items = vec![Item::new(1, "a", 1), Item::new(1, "dup", 2), Item::new(2, "b", 3)];
        let settled = normalize(items);
        assert_eq!(settled.len(), 2);
        assert_eq!(settled[0].name, "a");
        assert_eq!(settled[1].position, 2);
    }

    #[test]
    fn test_load_items_accepts_optional_image() {
        let value = json!([
            { "id": 1, "name": "佐藤 健太", "position": 1, "image": "sato.png" },
            { "id": 2, "name": "鈴木 美咲", "position": 2 }
        ]);
        let items = load_items(value);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].image.as_deref(), Some("sato.png"));
        assert!(items[1].image.is_none());
    }

    #[test]
    fn test_load_items_falls_back_to_empty() {
        assert!(load_items(json!({ "id": 1 })).is_empty());
        assert!(load_items(json!("staff")).is_empty());
        assert!(load_items(json!([{ "id": "x" }])).is_empty());
    }

    #[test]
    fn test_parse_items_reports_malformed_input() {
        let err = parse_items(json!(42)).unwrap_err();
        assert!(matches!(err, ReorderError::MalformedInput(_)));
    }

    #[test]
    fn test_sample_items() {
        let items = sample_items("スタッフ", 100);
        assert_eq!(items.len(), 100);
        assert_eq!(items[99].name, "スタッフ100");
        assert_eq!(items[99].position, 100);
    }
}
