//! View Configuration
//!
//! Read once at startup from `window.SHOPPING_LIST_CONFIG` (optional).
//! Every field has a default, so a page without the global just works.

use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the optional global config object
pub const CONFIG_GLOBAL: &str = "SHOPPING_LIST_CONFIG";

/// Shortest poll interval we accept
const MIN_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not read window.SHOPPING_LIST_CONFIG")]
    Unreadable,
    #[error("invalid window.SHOPPING_LIST_CONFIG: {0}")]
    Invalid(String),
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListViewConfig {
    /// Server origin; the page origin when unset
    pub base_url: Option<String>,
    pub list_path: String,
    pub updated_path: String,
    pub poll_interval_ms: u64,
    pub log_level: String,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            list_path: "/api/list".to_string(),
            updated_path: "/api/updated".to_string(),
            poll_interval_ms: 500,
            log_level: "info".to_string(),
        }
    }
}

impl ListViewConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Absolute URL of the list endpoint
    pub fn list_url(&self, origin: &str) -> String {
        join_url(self.base_url.as_deref().unwrap_or(origin), &self.list_path)
    }

    /// Absolute URL of the timestamp endpoint
    pub fn updated_url(&self, origin: &str) -> String {
        join_url(self.base_url.as_deref().unwrap_or(origin), &self.updated_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Origin of the hosting page, e.g. `http://localhost:4300`
pub fn page_origin() -> Result<String, ConfigError> {
    let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
    window.location().origin().map_err(|_| ConfigError::NoWindow)
}

/// Load config from the page. A missing global yields defaults.
pub fn load() -> Result<ListViewConfig, ConfigError> {
    let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|_| ConfigError::Unreadable)?;
    if value.is_undefined() || value.is_null() {
        return Ok(ListViewConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
}
