//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;
use stock_client::HttpArticleApi;

use crate::config::AppConfig;
use crate::notify::Notifier;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Toast notifications
    pub notifier: Notifier,
}

impl AppContext {
    pub fn new(config: AppConfig, notifier: Notifier) -> Self {
        Self {
            config: StoredValue::new(config),
            notifier,
        }
    }

    /// HTTP client for the configured backend
    pub fn api(&self) -> HttpArticleApi {
        self.config.with_value(|config| HttpArticleApi::new(&config.api_base_url))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
