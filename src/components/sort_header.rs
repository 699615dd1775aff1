//! Sortable column header.

use leptos::prelude::*;
use stock_client::{Sort, SortDirection, SortField};

pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    }
}

#[component]
pub fn SortHeader(
    label: &'static str,
    field: SortField,
    #[prop(into)] sort: Signal<Sort>,
    #[prop(into)] on_sort: Callback<SortField>,
) -> impl IntoView {
    view! {
        <th
            class="sortable"
            class:sorted=move || sort.get().field == field
            title=format!("Sort by {}", label.to_lowercase())
            on:click=move |_| on_sort.run(field)
        >
            {label}
            {move || sort_indicator(sort.get().direction_for(field))}
        </th>
    }
}
