//! Summary Panel Component
//!
//! Aggregate hierarchy from the query endpoint, shown three ways:
//! raw JSON, an indented tree and a filterable master table.

use leptos::prelude::*;

use super::ProgressPill;
use crate::context::use_app;
use crate::hierarchy::{tree, TreeBranch};
use crate::state::DashboardState;

#[component]
pub fn SummaryPanel() -> impl IntoView {
    view! {
        <section class="card summary-panel">
            <div class="summary-header">
                <h2>"Summary"</h2>
                <RefreshButton />
            </div>
            <div class="summary-grid">
                <RawView />
                <TreeView />
            </div>
            <MasterTable />
        </section>
    }
}

/// Reloads the summary and every flat list; disabled while loading
#[component]
fn RefreshButton() -> impl IntoView {
    let ctx = use_app();
    let state = ctx.state();
    let loading = move || state.with(|s| s.summary.loading);

    view! {
        <button
            class="btn-primary"
            disabled=loading
            on:click=move |_| ctx.refresh_all()
        >
            {move || if loading() { "⏳ Loading..." } else { "🔄 Refresh" }}
        </button>
    }
}

#[component]
fn RawView() -> impl IntoView {
    let state = use_app().state();

    view! {
        <pre class="summary-raw">
            {move || state.with(|s| s.summary.raw.clone())}
        </pre>
    }
}

#[component]
fn TreeView() -> impl IntoView {
    let state = use_app().state();

    view! {
        <ul class="tree-list">
            {move || {
                state
                    .with(|s| tree(&s.summary.plans))
                    .into_iter()
                    .map(|branch| view! { <Branch branch=branch /> })
                    .collect_view()
            }}
        </ul>
    }
}

/// One tree node; recursive, so children are type-erased
#[component]
fn Branch(branch: TreeBranch) -> impl IntoView {
    let has_child_list = branch.has_child_list();
    let TreeBranch { kind, id, label, percent_complete, children } = branch;

    view! {
        <li>
            <span class=kind.css_class()>
                {kind.icon()} " " <strong>{label}</strong> " "
                {match percent_complete {
                    Some(percent) => view! { <ProgressPill percent=percent /> }.into_any(),
                    None => view! { <small>{format!("#{}", id)}</small> }.into_any(),
                }}
            </span>
            {has_child_list.then(|| view! {
                <ul>
                    {children
                        .into_iter()
                        .map(|child| view! { <Branch branch=child /> }.into_any())
                        .collect_view()}
                </ul>
            })}
        </li>
    }
}

/// One row per task, filtered by the search box
#[component]
fn MasterTable() -> impl IntoView {
    let state = use_app().state();

    view! {
        <div class="master-table">
            <input
                type="search"
                class="table-filter"
                placeholder="Filter by plan, bucket, task or task ID..."
                prop:value=move || state.with(|s| s.filter.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.filter = value);
                }
            />
            <table>
                <thead>
                    <tr>
                        <th>"Plan"</th>
                        <th>"Bucket"</th>
                        <th>"Task"</th>
                        <th>"Progress"</th>
                        <th>"IDs"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state.with(DashboardState::visible_rows).into_iter().map(|row| view! {
                            <tr>
                                <td><strong>{row.plan_name}</strong></td>
                                <td>{row.bucket_name}</td>
                                <td>{row.task_title}</td>
                                <td><ProgressPill percent=row.percent_complete /></td>
                                <td class="ids">
                                    {format!("P{} · B{} · T{}", row.plan_id, row.bucket_id, row.task_id)}
                                </td>
                            </tr>
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
