//! Frontend Configuration
//!
//! Compile-time defaults, optionally overridden by deployment metadata in
//! `index.html`.

use stock_client::normalize_base_url;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_FILTER: &str = "info,stock_client=debug";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

/// `<meta name="stock-api-url" content="https://...">`
const API_URL_META: &str = "stock-api-url";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the inventory REST API, without trailing slash
    pub api_base_url: String,
    /// `EnvFilter` directives for the console logger
    pub log_filter: String,
    /// How long a notification stays on screen
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: normalize_base_url(option_env!("STOCK_API_URL").unwrap_or(DEFAULT_API_URL)),
            log_filter: option_env!("STOCK_LOG").unwrap_or(DEFAULT_LOG_FILTER).to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Build-time values plus the runtime API URL override, if the page has one.
    pub fn load() -> Self {
        let config = Self::default();
        match meta_content(API_URL_META) {
            Some(url) => config.with_api_base_url(&url),
            None => config,
        }
    }

    /// Replace the API base URL; blank values are ignored.
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        let url = normalize_base_url(url);
        if !url.is_empty() {
            self.api_base_url = url;
        }
        self
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!(r#"meta[name="{name}"]"#);
    let element = document.query_selector(&selector).ok().flatten()?;
    element.get_attribute("content").filter(|content| !content.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_is_normalized() {
        let config = AppConfig::default().with_api_base_url(" https://stock.example.org/api/ ");
        assert_eq!(config.api_base_url, "https://stock.example.org/api");
    }

    #[test]
    fn test_blank_override_keeps_default() {
        let default = AppConfig::default();
        let config = default.clone().with_api_base_url("  / ");
        assert_eq!(config, default);
        assert!(!config.api_base_url.ends_with('/'));
    }
}
