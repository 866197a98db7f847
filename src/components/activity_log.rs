//! Activity Log Component
//!
//! Timestamped feed of everything the dashboard did, newest at the bottom.

use leptos::html::Div;
use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let state = use_app().state();
    let log_ref = NodeRef::<Div>::new();

    // Keep the newest entry in view
    Effect::new(move |_| {
        state.with(|s| s.log.len());
        if let Some(el) = log_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <section class="card activity">
            <h2>"Activity"</h2>
            <div class="activity-log" node_ref=log_ref>
                <Show
                    when=move || !state.with(|s| s.log.is_empty())
                    fallback=|| view! { <div class="log-empty">"No activity yet"</div> }
                >
                    {move || state.with(|s| s.log.entries().to_vec()).into_iter().map(|entry| view! {
                        <div class="log-entry">
                            <span class="log-time">{format!("[{}]", entry.time)}</span>
                            " "
                            <span class=entry.level.css_class()>{entry.message}</span>
                        </div>
                    }).collect_view()}
                </Show>
            </div>
        </section>
    }
}
