//! Toast container, rendered once at the top of the app.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::notify::Toast;

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_app_context().notifier;

    view! {
        <div class="toast-container">
            <For
                each=move || notifier.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="status" on:click=move |_| notifier.dismiss(id)>
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-close" title="Dismiss">"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
