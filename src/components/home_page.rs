//! Home Page Container
//!
//! Wires the forms and the list together through the dashboard store.
//! Makes no network calls of its own.

use leptos::prelude::*;
use stock_client::Article;

use crate::components::{ArticleListView, CreateArticleForm, UpdateArticleForm};
use crate::store::{use_dashboard_store, DashboardActions, DashboardStateStoreFields, FormPanel};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_dashboard_store();

    let create_visible = Signal::derive(move || store.panel().get() == FormPanel::Create);
    let update_visible = Signal::derive(move || store.panel().get() == FormPanel::Update);
    let selected_article = Signal::derive(move || store.selected_article().get());

    let toggle_create = Callback::new(move |_: ()| store.toggle_create_form());
    let show_update = Callback::new(move |article: Article| store.show_update_form(article));

    let container_class = move || {
        if store.panel().get().is_open() {
            "container form-active"
        } else {
            "container"
        }
    };

    view! {
        <div class=container_class>
            <CreateArticleForm
                visible=create_visible
                on_created=move |_: ()| store.article_created()
                on_close=toggle_create
            />
            <UpdateArticleForm
                article=selected_article
                visible=update_visible
                on_updated=move |_: ()| store.article_updated()
                on_close=show_update
            />
            <ArticleListView
                on_show_create=toggle_create
                on_show_update=show_update
            />
        </div>
    }
}
