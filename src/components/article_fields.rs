//! Article Form Fields
//!
//! Inputs shared by the create and update forms, bound to an `ArticleDraft`.
//! Only HTML input constraints apply; the backend validates.

use leptos::prelude::*;
use stock_client::{ArticleDraft, Category, Unit};

#[component]
pub fn ArticleFields(draft: RwSignal<ArticleDraft>) -> impl IntoView {
    view! {
        <div class="fields">
            <label>
                <p class="input-text">"Name"</p>
                <input
                    class="input-field"
                    type="text"
                    name="name"
                    placeholder="Enter name of article"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>
            <label>
                <p class="input-text">"Amount"</p>
                <input
                    class="input-field"
                    type="number"
                    name="amount"
                    min="0"
                    step="1"
                    placeholder="Enter positive integer"
                    prop:value=move || draft.with(|d| d.amount.clone())
                    on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                />
            </label>
            <label>
                <p class="input-text">"Minimum Amount"</p>
                <input
                    class="input-field"
                    type="number"
                    name="minimumAmount"
                    min="0"
                    step="1"
                    placeholder="Enter positive integer"
                    prop:value=move || draft.with(|d| d.minimum_amount.clone())
                    on:input=move |ev| draft.update(|d| d.minimum_amount = event_target_value(&ev))
                />
            </label>
            <label>
                <p class="input-text">"Unit"</p>
                <select
                    class="input-field"
                    name="unit"
                    prop:value=move || draft.with(|d| d.unit.clone())
                    on:change=move |ev| draft.update(|d| d.unit = event_target_value(&ev))
                >
                    <option value="">"Unit"</option>
                    {Unit::ALL
                        .iter()
                        .map(|unit| view! { <option value=unit.as_str()>{unit.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                <p class="input-text">"Category"</p>
                <select
                    class="input-field"
                    name="category"
                    prop:value=move || draft.with(|d| d.category.clone())
                    on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                >
                    <option value="">"Category"</option>
                    {Category::ALL
                        .iter()
                        .map(|category| view! { <option value=category.as_str()>{category.label()}</option> })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}

/// Backend validation messages, shown as one list for the whole form.
#[component]
pub fn FormErrors(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        {move || {
            let messages = errors.get();
            (!messages.is_empty()).then(|| view! {
                <ul class="form-errors">
                    {messages.into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
                </ul>
            })
        }}
    }
}
