//! Host Input
//!
//! The embedding page may define `window.reorderConfig` and
//! `window.staffResults`. Both are optional.

use reorder_core::{load_items, sample_items, Item, ReorderConfig};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "reorderConfig";
const ITEMS_GLOBAL: &str = "staffResults";

fn read_global(name: &str) -> Option<JsValue> {
    let win = web_sys::window()?;
    let value = js_sys::Reflect::get(&win, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// Accepts either a JSON string or a plain object
fn to_json(value: JsValue) -> serde_json::Value {
    if let Some(raw) = value.as_string() {
        return serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null);
    }
    serde_wasm_bindgen::from_value(value).unwrap_or(serde_json::Value::Null)
}

pub fn load_config() -> ReorderConfig {
    match read_global(CONFIG_GLOBAL) {
        Some(value) => ReorderConfig::from_value(to_json(value)),
        None => ReorderConfig::default(),
    }
}

pub fn load_initial_items(config: &ReorderConfig) -> Vec<Item> {
    resolve_items(read_global(ITEMS_GLOBAL).map(to_json), config)
}

/// Nothing supplied: demo list. Supplied but malformed: empty list.
fn resolve_items(supplied: Option<serde_json::Value>, config: &ReorderConfig) -> Vec<Item> {
    match supplied {
        Some(value) => load_items(value),
        None => sample_items(&config.item_label, config.sample_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_items_use_demo_list() {
        let config = ReorderConfig::default();
        let items = resolve_items(None, &config);
        assert_eq!(items.len(), 100);
        assert_eq!(items[0].name, "スタッフ1");
    }

    #[test]
    fn test_malformed_items_give_empty_list() {
        let config = ReorderConfig::default();
        assert!(resolve_items(Some(json!({ "staff": [] })), &config).is_empty());
        assert!(resolve_items(Some(serde_json::Value::Null), &config).is_empty());
    }

    #[test]
    fn test_supplied_items() {
        let config = ReorderConfig::default();
        let items = resolve_items(
            Some(json!([{ "id": 3, "name": "田中 裕子", "position": 1 }])),
            &config,
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 3);
    }
}
