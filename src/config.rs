//! Application Config
//!
//! Display settings and log level, read from an optional JSON block in the host page.

use serde::{Deserialize, Serialize};

use crate::error::{TodoError, TodoResult};

/// Element id of the `<script type="application/json">` config block
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub title: String,
    pub add_placeholder: String,
    pub edit_placeholder: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "What's the plan for today?".to_string(),
            add_placeholder: "Add a todo".to_string(),
            edit_placeholder: "Update your item".to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> TodoResult<Self> {
        serde_json::from_str(raw).map_err(|e| TodoError::Config(e.to_string()))
    }

    /// Load from the host page, falling back to defaults
    pub fn load() -> Self {
        let raw = leptos::prelude::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                // Logger is not up yet
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "title": "Groceries", "logLevel": "DEBUG" }"#).unwrap();

        assert_eq!(config.title, "Groceries");
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.add_placeholder, AppConfig::default().add_placeholder);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(AppConfig::from_json("{ title"), Err(TodoError::Config(_))));
    }
}
