//! Auth Components
//!
//! Sign-in button or signed-in user, and the device-code modal shown
//! while a login is pending.

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn AuthBar() -> impl IntoView {
    let ctx = use_app();
    let state = ctx.state();
    let authenticated = move || state.with(|s| s.session.authenticated);
    let logging_in = move || state.with(|s| s.login.is_some());

    view! {
        <div class="auth-bar">
            <Show
                when=authenticated
                fallback=move || view! {
                    <button
                        class="btn-login"
                        disabled=logging_in
                        on:click=move |_| ctx.login()
                    >
                        "🔑 Sign in"
                    </button>
                }
            >
                <span class="user-info">
                    "👤 "
                    {move || state.with(|s| s.session.user.clone().unwrap_or_else(|| "Signed in".to_string()))}
                </span>
            </Show>
        </div>
    }
}

#[component]
pub fn LoginModal() -> impl IntoView {
    let state = use_app().state();

    move || {
        state.with(|s| s.login.clone()).map(|flow| {
            let uri = flow.verification_uri.unwrap_or_default();
            let href = uri.clone();
            view! {
                <div class="modal-overlay"></div>
                <div class="auth-modal">
                    <h3>"Sign in to the planning service"</h3>
                    <p>"Open the page below and enter the code:"</p>
                    <code class="auth-code">{flow.user_code}</code>
                    <a href=href target="_blank" rel="noopener">{uri}</a>
                    <p class="hint">"Waiting for confirmation..."</p>
                </div>
            }
        })
    }
}
