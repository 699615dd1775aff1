//! Pagination Bar
//!
//! Previous/next plus numbered pages. Page indices are 0-based, labels 1-based.

use leptos::prelude::*;

/// Pages on each side of the current one before collapsing into a gap
const WINDOW: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    Page(u32),
    Gap,
}

/// First, last and the pages around `current`, with gaps in between.
pub fn pager_items(current: u32, total_pages: u32) -> Vec<PagerItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    let last = total_pages - 1;
    if total_pages <= 2 * WINDOW + 3 {
        return (0..total_pages).map(PagerItem::Page).collect();
    }

    let current = current.min(last);
    let start = current.saturating_sub(WINDOW).max(1);
    let end = (current + WINDOW).min(last - 1);

    let mut items = vec![PagerItem::Page(0)];
    if start > 1 {
        items.push(PagerItem::Gap);
    }
    items.extend((start..=end).map(PagerItem::Page));
    if end < last - 1 {
        items.push(PagerItem::Gap);
    }
    items.push(PagerItem::Page(last));
    items
}

/// Shown with more than one page, and also when the current page lies past
/// the end so there is always a way back.
pub fn pager_visible(current: u32, total_pages: u32) -> bool {
    total_pages > 1 || (current > 0 && current >= total_pages)
}

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || pager_visible(current.get(), total_pages.get())>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=move || current.get() == 0
                    on:click=move |_| on_change.run(current.get_untracked().saturating_sub(1))
                >
                    "‹ Prev"
                </button>
                {move || pager_items(current.get(), total_pages.get())
                    .into_iter()
                    .map(|item| match item {
                        PagerItem::Page(index) => view! {
                            <button
                                class="page-btn"
                                class:active=move || current.get() == index
                                on:click=move |_| on_change.run(index)
                            >
                                {index + 1}
                            </button>
                        }.into_any(),
                        PagerItem::Gap => view! { <span class="page-gap">"…"</span> }.into_any(),
                    })
                    .collect_view()}
                <button
                    class="page-btn"
                    disabled=move || current.get() + 1 >= total_pages.get()
                    on:click=move |_| on_change.run(current.get_untracked() + 1)
                >
                    "Next ›"
                </button>
            </nav>
        </Show>
    }
}
