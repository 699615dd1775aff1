//! Update Article Form Component
//!
//! Re-initialized from the selected article whenever the selection or
//! visibility changes; a newly selected article replaces unsaved edits.

use leptos::prelude::*;
use leptos::task::spawn_local;
use stock_client::{ops, Article, ArticleDraft};
use tracing::debug;

use crate::components::article_fields::{ArticleFields, FormErrors};
use crate::context::use_app_context;
use crate::notify::describe_failure;

#[component]
pub fn UpdateArticleForm(
    #[prop(into)] article: Signal<Option<Article>>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_updated: Callback<()>,
    /// Receives the edited article so the parent can decide to hide or toggle
    #[prop(into)] on_close: Callback<Article>,
) -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(ArticleDraft::default());
    let errors = RwSignal::new(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let _ = visible.get();
        if let Some(selected) = article.get() {
            debug!(id = selected.id, "loading article into update form");
            draft.set(ArticleDraft::from_article(&selected));
            errors.set(Vec::new());
        }
    });

    let update_article = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(target) = article.get_untracked() else {
            return;
        };
        let values = draft.get_untracked();
        let api = ctx.api();
        set_submitting.set(true);
        errors.set(Vec::new());

        spawn_local(async move {
            match ops::update_article(&api, target.id, &values).await {
                Ok(()) => {
                    ctx.notifier.success("Successfully updated the article!");
                    on_updated.run(());
                }
                Err(e) => {
                    errors.set(e.details().to_vec());
                    ctx.notifier.error(describe_failure("Error updating the article", &e));
                }
            }
            set_submitting.set(false);
        });
    };

    let close = move |_: web_sys::MouseEvent| {
        if let Some(current) = article.get_untracked() {
            on_close.run(current);
        }
    };

    view! {
        <div
            class="article-form-container"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <button class="close-form-btn" title="Close" on:click=close>"×"</button>
            <h2>"Update Article Form"</h2>
            <p class="form-subtitle">
                {move || article.with(|a| a.as_ref().map(|a| format!("Editing #{} {}", a.id, a.name)).unwrap_or_default())}
            </p>
            <form class="article-form" on:submit=update_article>
                <ArticleFields draft=draft />
                <FormErrors errors=errors />
                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Updating article..." } else { "Update Article" }}
                </button>
            </form>
        </div>
    }
}
