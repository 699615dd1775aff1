//! Create Article Form Component
//!
//! Hidden with CSS rather than unmounted, so typed values survive
//! hide/show until a successful submit clears them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use stock_client::{ops, ArticleDraft};

use crate::components::article_fields::{ArticleFields, FormErrors};
use crate::context::use_app_context;
use crate::notify::describe_failure;

#[component]
pub fn CreateArticleForm(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_created: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(ArticleDraft::default());
    let errors = RwSignal::new(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    let create_article = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let values = draft.get_untracked();
        let api = ctx.api();
        set_submitting.set(true);
        errors.set(Vec::new());

        spawn_local(async move {
            match ops::create_article(&api, &values).await {
                Ok(()) => {
                    draft.set(ArticleDraft::default());
                    ctx.notifier.success("Successfully created the article!");
                    on_created.run(());
                }
                Err(e) => {
                    errors.set(e.details().to_vec());
                    ctx.notifier.error(describe_failure("Error creating the article", &e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div
            class="article-form-container"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <button class="close-form-btn" title="Close" on:click=move |_| on_close.run(())>"×"</button>
            <h2>"Article Creation Form"</h2>
            <form class="article-form" on:submit=create_article>
                <ArticleFields draft=draft />
                <FormErrors errors=errors />
                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating article..." } else { "Create Article" }}
                </button>
            </form>
        </div>
    }
}
