//! Low Stock Banner
//!
//! Summary of every article below its minimum, read from the
//! `/articles/lowAmount` endpoint independently of the table's filters.

use leptos::prelude::*;
use leptos::task::spawn_local;
use stock_client::{ops, Article};
use tracing::warn;

use crate::context::use_app_context;
use crate::store::{use_dashboard_store, DashboardActions};

pub fn low_stock_summary(count: usize) -> String {
    match count {
        1 => "1 article is below its minimum amount".to_string(),
        n => format!("{n} articles are below their minimum amount"),
    }
}

/// `revision` changes whenever the list mutated rows itself (delete, amount change).
#[component]
pub fn LowStockBanner(#[prop(into)] revision: Signal<u32>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let low = RwSignal::new(Vec::<Article>::new());
    let (expanded, set_expanded) = signal(false);
    let refresh = store.refresh_counter();

    Effect::new(move |_| {
        let _ = refresh.get();
        let _ = revision.get();
        let api = ctx.api();
        spawn_local(async move {
            match ops::low_stock_articles(&api).await {
                Ok(articles) => low.set(articles),
                // The table is the primary view; the banner just keeps its last state.
                Err(e) => warn!(error = %e, "low-stock summary unavailable"),
            }
        });
    });

    view! {
        {move || {
            let count = low.with(|articles| articles.len());
            (count > 0).then(|| view! {
                <div class="low-stock-banner">
                    <button class="banner-toggle" on:click=move |_| set_expanded.update(|open| *open = !*open)>
                        {low_stock_summary(count)}
                        {move || if expanded.get() { " ▴" } else { " ▾" }}
                    </button>
                    {move || expanded.get().then(|| view! {
                        <ul class="low-stock-list">
                            {low.get()
                                .into_iter()
                                .map(|article| view! {
                                    <li>
                                        {format!(
                                            "{}: {} of {} {}",
                                            article.name,
                                            article.amount,
                                            article.minimum_amount,
                                            article.unit.label().to_lowercase(),
                                        )}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    })}
                </div>
            })
        }}
    }
}
