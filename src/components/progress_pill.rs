//! Progress Pill Component
//!
//! Completion badge colored by the binary progress rule.

use leptos::prelude::*;

use crate::hierarchy::Progress;

/// Colored completion badge
#[component]
pub fn ProgressPill(percent: i64) -> impl IntoView {
    let color = Progress::from_percent(percent).color();

    view! {
        <span class="progress-pill" style=format!("background: {};", color)>
            {format!("{}%", percent)}
        </span>
    }
}
