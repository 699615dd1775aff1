//! Inline Amount Editor
//!
//! Popup anchored below the clicked amount cell for adding to or
//! subtracting from an article's amount.

use leptos::prelude::*;
use stock_client::{AmountChange, Article, ArticleId};
use wasm_bindgen::JsCast;

/// Gap between the cell and the popup
const POPUP_OFFSET_PX: f64 = 4.0;

/// Document coordinates of the popup's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopupAnchor {
    pub top: f64,
    pub left: f64,
}

impl PopupAnchor {
    /// Anchor below the table cell that received the click.
    pub fn below_cell(ev: &web_sys::MouseEvent) -> Self {
        let cell = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest("td").ok().flatten());
        let (scroll_x, scroll_y) = web_sys::window()
            .map(|window| (window.scroll_x().unwrap_or(0.0), window.scroll_y().unwrap_or(0.0)))
            .unwrap_or_default();
        match cell {
            Some(cell) => {
                let rect = cell.get_bounding_client_rect();
                Self::from_viewport_rect(rect.left(), rect.bottom(), scroll_x, scroll_y)
            }
            None => Self {
                top: f64::from(ev.page_y()) + POPUP_OFFSET_PX,
                left: f64::from(ev.page_x()),
            },
        }
    }

    pub fn from_viewport_rect(left: f64, bottom: f64, scroll_x: f64, scroll_y: f64) -> Self {
        Self {
            top: bottom + scroll_y + POPUP_OFFSET_PX,
            left: left + scroll_x,
        }
    }

    pub fn style(&self) -> String {
        format!("top: {:.0}px; left: {:.0}px;", self.top, self.left)
    }
}

/// The open popup: which article and where
#[derive(Debug, Clone, PartialEq)]
pub struct AmountEditorState {
    pub article: Article,
    pub anchor: PopupAnchor,
}

/// Empty or unparsable input counts as zero, which is rejected before sending.
pub fn parse_delta(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
pub fn AmountEditor(
    state: AmountEditorState,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<(ArticleId, i64, AmountChange)>,
) -> impl IntoView {
    let (delta, set_delta) = signal(String::new());
    let id = state.article.id;
    let submit = move |change: AmountChange| {
        on_submit.run((id, parse_delta(&delta.get_untracked()), change));
    };
    let heading = format!(
        "{}: {} {}",
        state.article.name,
        state.article.amount,
        state.article.unit.label()
    );

    view! {
        <div class="amount-editor" style=state.anchor.style() on:click=|ev| ev.stop_propagation()>
            <div class="amount-editor-header">
                <span class="amount-editor-title">{heading}</span>
                <button class="close-btn" title="Close" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            <input
                type="number"
                class="amount-editor-input"
                placeholder="Amount"
                prop:value=move || delta.get()
                on:input=move |ev| set_delta.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        on_close.run(());
                    }
                }
            />
            <div class="amount-editor-actions">
                <button class="add-btn" on:click=move |_| submit(AmountChange::Add)>"+ Add"</button>
                <button class="subtract-btn" on:click=move |_| submit(AmountChange::Subtract)>"− Subtract"</button>
            </div>
        </div>
    }
}
