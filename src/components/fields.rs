//! Form Field Components
//!
//! Inputs and drop-downs bound to the dashboard state, plus the submit
//! button that runs a form action.

use leptos::prelude::*;

use crate::context::use_app;
use crate::forms::FormField;
use crate::mutation::FormAction;
use crate::selector::SelectorId;

/// Drop-down backed by one of the shared selectors
#[component]
pub fn SelectorField(id: SelectorId) -> impl IntoView {
    let state = use_app().state();

    view! {
        <select
            class="selector"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s| s.select(id, &value));
            }
        >
            {move || {
                let selector = state.with(|s| s.selectors.get(id).cloned().unwrap_or_default());
                selector.options.into_iter().map(|option| {
                    let selected = option.value == selector.selected;
                    view! {
                        <option value=option.value prop:selected=selected>
                            {option.label}
                        </option>
                    }
                }).collect_view()
            }}
        </select>
    }
}

#[component]
pub fn TextField(field: FormField) -> impl IntoView {
    let state = use_app().state();
    let input_type = if field.is_numeric() { "number" } else { "text" };

    view! {
        <input
            type=input_type
            placeholder=field.placeholder()
            prop:value=move || state.with(|s| s.forms.get(field).to_string())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s| s.forms.set(field, value));
            }
        />
    }
}

#[component]
pub fn ActionButton(
    action: FormAction,
    #[prop(into)] label: String,
    #[prop(optional, into)] variant: String,
) -> impl IntoView {
    let ctx = use_app();

    view! {
        <button
            type="button"
            class=format!("action-btn {}", variant)
            on:click=move |_| ctx.run(action)
        >
            {label}
        </button>
    }
}
