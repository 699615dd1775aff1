//! Article List View Component
//!
//! Owns the list query (page, search, category, low-stock filter, sort) and
//! the page currently on screen. Every parameter change refetches right away
//! with the current values of all other parameters. Responses are tagged
//! with a fetch ticket; a response that is no longer the latest is dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use stock_client::{ops, AmountChange, Article, ArticleId, Category, SortField};
use tracing::{debug, info};

use crate::components::amount_editor::{AmountEditor, PopupAnchor};
use crate::components::{ArticleRow, FilterBar, LowStockBanner, Pagination, SortHeader};
use crate::context::use_app_context;
use crate::list_state::{ArticleListState, FetchOutcome};
use crate::notify::describe_failure;
use crate::store::{use_dashboard_store, DashboardActions};

/// Sortable columns in display order
const SORTABLE_COLUMNS: &[(&str, SortField)] = &[
    ("Name", SortField::Name),
    ("Amount", SortField::Amount),
    ("Minimum", SortField::MinimumAmount),
    ("Unit", SortField::Unit),
    ("Category", SortField::Category),
];

#[component]
pub fn ArticleListView(
    #[prop(into)] on_show_create: Callback<()>,
    #[prop(into)] on_show_update: Callback<Article>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let notifier = ctx.notifier;

    let state = RwSignal::new(ArticleListState::default());
    let query = Memo::new(move |_| state.with(|s| s.query.clone()));
    let page = Memo::new(move |_| state.with(|s| s.page.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let editor = Memo::new(move |_| state.with(|s| s.editor.clone()));
    let (stock_revision, set_stock_revision) = signal(0u32);

    // Fetch the current query. A page past the end is clamped and fetched again.
    let load = move || {
        let Some((mut ticket, mut q)) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            loop {
                let result = ops::fetch_articles(&api, &q).await;
                match state.try_update(|s| s.apply_fetch(ticket, result)) {
                    Some(FetchOutcome::Clamped { from, to }) => {
                        info!(from, to, "requested page no longer exists");
                        notifier.info(format!("Page {} no longer exists, showing page {}", from + 1, to + 1));
                        match state.try_update(|s| s.begin_fetch()) {
                            Some((next_ticket, next_query)) => {
                                ticket = next_ticket;
                                q = next_query;
                            }
                            None => return,
                        }
                    }
                    Some(FetchOutcome::Failed(e)) => {
                        notifier.error(describe_failure("Could not load articles", &e));
                        return;
                    }
                    Some(FetchOutcome::Superseded) => {
                        debug!(?ticket, "discarding superseded article list response");
                        return;
                    }
                    Some(FetchOutcome::Applied) | None => return,
                }
            }
        });
    };

    // Initial load, and again whenever a form saved something.
    let refresh = store.refresh_counter();
    Effect::new(move |_| {
        let trigger = refresh.get();
        debug!(trigger, "refreshing article list");
        load();
    });

    let on_sort = Callback::new(move |field: SortField| {
        state.update(|s| s.change_sort(field));
        load();
    });

    let on_page = Callback::new(move |index: u32| {
        state.update(|s| s.change_page(index));
        load();
    });

    let on_category = Callback::new(move |category: Option<Category>| {
        state.update(|s| s.change_category(category));
        load();
    });

    let on_toggle_low_stock = Callback::new(move |_: ()| {
        state.update(|s| s.toggle_low_stock_only());
        load();
    });

    let on_search = Callback::new(move |text: String| {
        state.update(|s| s.change_search(text));
        load();
    });

    let on_delete = Callback::new(move |id: ArticleId| {
        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = ops::delete_article(&api, id).await {
                notifier.error(describe_failure("Could not delete the article", &e));
                return;
            }
            notifier.success("Article deleted");
            set_stock_revision.update(|r| *r += 1);

            let Some((ticket, q)) = state.try_update(|s| s.begin_fetch()) else {
                return;
            };
            let rows_on_page = state.with_untracked(|s| s.rows_on_page());
            let result = ops::resync_after_delete(&api, &q, rows_on_page).await;
            if let Ok((next, _)) = &result {
                if next.page != q.page {
                    info!(from = q.page, to = next.page, "page no longer exists, moved back");
                }
            }
            match state.try_update(|s| s.apply_resync(ticket, result)) {
                Some(FetchOutcome::Failed(e)) => notifier.error(describe_failure("Could not reload articles", &e)),
                Some(FetchOutcome::Superseded) => debug!(?ticket, "discarding superseded resync after delete"),
                _ => {}
            }
        });
    });

    let on_adjust = Callback::new(move |(id, delta, change): (ArticleId, i64, AmountChange)| {
        let api = ctx.api();
        spawn_local(async move {
            match ops::adjust_amount(&api, id, delta, change).await {
                Ok(()) => {
                    notifier.success("Amount updated");
                    state.update(|s| s.close_editor());
                    set_stock_revision.update(|r| *r += 1);
                    load();
                }
                Err(e) => notifier.error(describe_failure("Could not change the amount", &e)),
            }
        });
    });

    let on_open_editor = Callback::new(move |(article, anchor): (Article, PopupAnchor)| {
        state.update(|s| s.open_editor(article, anchor));
    });

    let close_editor = Callback::new(move |_: ()| state.update(|s| s.close_editor()));

    let sort = Signal::derive(move || query.with(|q| q.sort));

    view! {
        <section class="article-list">
            <header class="list-header">
                <h2>"Inventory Management"</h2>
                <div class="list-actions">
                    <button class="primary-btn" on:click=move |_| on_show_create.run(())>"Add Article"</button>
                    <button class="secondary-btn" on:click=move |_| load()>"Refresh Articles"</button>
                </div>
            </header>

            <LowStockBanner revision=stock_revision />

            <FilterBar
                query=query
                on_search=on_search
                on_category=on_category
                on_toggle_low_stock=on_toggle_low_stock
            />

            <div class="list-summary">
                <span>{move || format!("Total articles: {}", page.with(|p| p.total_items))}</span>
                <Show when=move || loading.get()>
                    <span class="loading">"Loading articles..."</span>
                </Show>
            </div>

            <table class="article-table">
                <thead>
                    <tr>
                        {SORTABLE_COLUMNS
                            .iter()
                            .map(|(label, field)| view! {
                                <SortHeader label=*label field=*field sort=sort on_sort=on_sort />
                            })
                            .collect_view()}
                        <th>"Status"</th>
                        <SortHeader label="Updated" field=SortField::UpdatedAt sort=sort on_sort=on_sort />
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || page
                        .with(|p| p.content.clone())
                        .into_iter()
                        .map(|article| view! {
                            <ArticleRow
                                article=article
                                on_edit=on_show_update
                                on_delete=on_delete
                                on_open_editor=on_open_editor
                            />
                        })
                        .collect_view()}
                </tbody>
            </table>

            <Show when=move || !loading.get() && page.with(|p| p.is_empty())>
                <p class="empty-list">"No articles found."</p>
            </Show>

            <Pagination
                current=Signal::derive(move || query.with(|q| q.page))
                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                on_change=on_page
            />

            {move || editor.get().map(|open| view! {
                <AmountEditor state=open on_close=close_editor on_submit=on_adjust />
            })}
        </section>
    }
}
