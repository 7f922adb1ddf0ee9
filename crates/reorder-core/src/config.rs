//! Page Configuration
//!
//! Every field has a default so a partial (or absent) config is fine.

use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReorderConfig {
    /// Noun shown in the header and search placeholder
    pub item_label: String,
    /// Delay between confirming a manual position and applying it
    pub apply_delay_ms: u32,
    /// Maximum undo entries
    pub history_limit: usize,
    /// Hold time that turns a press into selection mode
    pub long_press_ms: u32,
    /// Count of demo items when the host supplies none
    pub sample_size: u32,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            item_label: "スタッフ".to_string(),
            apply_delay_ms: 300,
            history_limit: DEFAULT_HISTORY_LIMIT,
            long_press_ms: 500,
            sample_size: 100,
            log_level: "info".to_string(),
        }
    }
}

impl ReorderConfig {
    /// Parse, keeping defaults for anything missing or malformed
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                log::warn!("[CONFIG] ignoring invalid config: {}", e);
                Self::default()
            }
        }
    }

    /// Same as `from_json` for an already-decoded value
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            log::warn!("[CONFIG] ignoring invalid config: {}", e);
            Self::default()
        })
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ReorderConfig::from_json(r#"{ "itemLabel": "商品", "applyDelayMs": 0 }"#);
        assert_eq!(config.item_label, "商品");
        assert_eq!(config.apply_delay_ms, 0);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.long_press_ms, 500);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        assert_eq!(ReorderConfig::from_json("[1, 2]"), ReorderConfig::default());
        assert_eq!(ReorderConfig::from_json("{oops"), ReorderConfig::default());
    }

    #[test]
    fn test_config_from_object_value() {
        let config = ReorderConfig::from_value(serde_json::json!({ "itemLabel": "商品", "sampleSize": 5 }));
        assert_eq!(config.item_label, "商品");
        assert_eq!(config.sample_size, 5);
        assert_eq!(ReorderConfig::from_value(serde_json::json!(7)), ReorderConfig::default());
    }

    #[test]
    fn test_level_filter() {
        let mut config = ReorderConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
