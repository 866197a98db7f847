//! Flat Tables Component
//!
//! Plain listings of the three REST collections, straight from the cache.

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn FlatTables() -> impl IntoView {
    let ctx = use_app();
    let state = ctx.state();

    view! {
        <section class="card flat-tables">
            <div class="summary-header">
                <h2>"Collections"</h2>
                <button class="btn-secondary" on:click=move |_| ctx.refresh_lists()>
                    "🔄 Reload lists"
                </button>
            </div>

            <div class="flat-grid">
                <table>
                    <thead><tr><th>"id"</th><th>"name"</th></tr></thead>
                    <tbody>
                        {move || state.with(|s| s.cache.plans.clone()).into_iter().map(|plan| view! {
                            <tr><td>{plan.id}</td><td>{plan.name}</td></tr>
                        }).collect_view()}
                    </tbody>
                </table>

                <table>
                    <thead><tr><th>"id"</th><th>"name"</th><th>"plan_id"</th></tr></thead>
                    <tbody>
                        {move || state.with(|s| s.cache.buckets.clone()).into_iter().map(|bucket| view! {
                            <tr><td>{bucket.id}</td><td>{bucket.name}</td><td>{bucket.plan_id}</td></tr>
                        }).collect_view()}
                    </tbody>
                </table>

                <table>
                    <thead>
                        <tr>
                            <th>"id"</th><th>"title"</th><th>"percent_complete"</th>
                            <th>"bucket_id"</th><th>"plan_id"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.cache.tasks.clone()).into_iter().map(|task| view! {
                            <tr>
                                <td>{task.id}</td>
                                <td>{task.title}</td>
                                <td>{task.percent_complete}</td>
                                <td>{task.bucket_id}</td>
                                <td>{task.plan_id}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
