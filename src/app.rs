//! Stock Dashboard App
//!
//! Root component: provides configuration, notifications and the dashboard
//! store, then renders the home page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{HomePage, Toaster};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::notify::Notifier;
use crate::store::DashboardState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let notifier = Notifier::new(config.toast_duration_ms);

    // Provide context to all children
    provide_context(AppContext::new(config, notifier));
    provide_context(Store::new(DashboardState::default()));

    view! {
        <Toaster />
        <HomePage />
    }
}
