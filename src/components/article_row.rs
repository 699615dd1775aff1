//! One table row of the article list.

use leptos::prelude::*;
use stock_client::{Article, ArticleId};

use crate::components::amount_editor::PopupAnchor;
use crate::components::DeleteConfirmButton;

/// Status text for a row. `low_stock` comes from the backend as-is.
pub fn stock_status(article: &Article) -> &'static str {
    if article.low_stock {
        "Low stock"
    } else {
        "In stock"
    }
}

#[component]
pub fn ArticleRow(
    article: Article,
    #[prop(into)] on_edit: Callback<Article>,
    #[prop(into)] on_delete: Callback<ArticleId>,
    #[prop(into)] on_open_editor: Callback<(Article, PopupAnchor)>,
) -> impl IntoView {
    let id = article.id;
    let low_stock = article.low_stock;
    let status = stock_status(&article);
    let category = article.category.map(|c| c.label()).unwrap_or("—");
    let updated = article
        .updated_at
        .or(article.created_at)
        .map(|ts| ts.to_string())
        .unwrap_or_default();
    let amount = article.amount;
    let minimum_amount = article.minimum_amount;
    let unit = article.unit.label();
    let name = article.name.clone();
    let edit_target = article.clone();
    let (row_class, flag_class) = if low_stock {
        ("article-row low-stock", " low-stock-text")
    } else {
        ("article-row", "")
    };

    view! {
        <tr class=row_class>
            <td class="name-cell">{name}</td>
            <td
                class=format!("amount-cell{flag_class}")
                title="Click to change the amount"
                on:click=move |ev: web_sys::MouseEvent| {
                    on_open_editor.run((article.clone(), PopupAnchor::below_cell(&ev)));
                }
            >
                {amount}
            </td>
            <td>{minimum_amount}</td>
            <td>{unit}</td>
            <td>{category}</td>
            <td class=format!("status-cell{flag_class}")>{status}</td>
            <td class="date-cell">{updated}</td>
            <td class="actions-cell">
                <button class="edit-btn" on:click=move |_| on_edit.run(edit_target.clone())>"Edit"</button>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=move |_: ()| on_delete.run(id) />
            </td>
        </tr>
    }
}
