//! Filter Bar
//!
//! Search box, category filter and the low-stock toggle above the table.

use leptos::prelude::*;
use stock_client::{ArticleQuery, Category};

#[component]
pub fn FilterBar(
    #[prop(into)] query: Signal<ArticleQuery>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] on_category: Callback<Option<Category>>,
    #[prop(into)] on_toggle_low_stock: Callback<()>,
) -> impl IntoView {
    let (search_text, set_search_text) = signal(String::new());

    let submit_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(search_text.get_untracked());
    };

    view! {
        <div class="filter-bar">
            <form class="search-form" on:submit=submit_search>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search articles..."
                    prop:value=move || search_text.get()
                    on:input=move |ev| set_search_text.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
                {move || (!query.with(|q| q.search.is_empty())).then(|| view! {
                    <button
                        type="button"
                        class="clear-search-btn"
                        on:click=move |_| {
                            set_search_text.set(String::new());
                            on_search.run(String::new());
                        }
                    >
                        "Clear"
                    </button>
                })}
            </form>

            <select
                class="category-filter"
                prop:value=move || query.with(|q| q.category.map(|c| c.as_str()).unwrap_or_default().to_string())
                on:change=move |ev| on_category.run(Category::parse(&event_target_value(&ev)))
            >
                <option value="">"All categories"</option>
                {Category::ALL
                    .iter()
                    .map(|category| view! { <option value=category.as_str()>{category.label()}</option> })
                    .collect_view()}
            </select>

            <label class="low-stock-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || query.with(|q| q.low_stock_only)
                    on:change=move |_| on_toggle_low_stock.run(())
                />
                " Low stock only"
            </label>
        </div>
    }
}
