//! Planner Dashboard App
//!
//! Root component: builds the controller, provides it, kicks off startup.

use leptos::prelude::*;

use crate::api::HttpTransport;
use crate::components::{
    ActivityLog, AuthBar, BucketPanel, FlatTables, LoginModal, PlanPanel, SummaryPanel, TaskPanel,
};
use crate::config::{ApiConfig, LOCAL_BACKEND_URL};
use crate::context::AppContext;
use crate::dashboard::Dashboard;
use crate::state::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());

    let config = ApiConfig::from_window().unwrap_or_else(|e| {
        log::error!("[APP] could not read page location ({}), using {}", e, LOCAL_BACKEND_URL);
        ApiConfig::resolve("localhost", LOCAL_BACKEND_URL)
    });
    log::info!("[APP] backend at {}", config.base_url);
    let poll_interval_ms = config.auth_poll_interval_ms;

    let ctx = AppContext::new(Dashboard::new(HttpTransport::new(config), state, poll_interval_ms));
    provide_context(ctx);

    // Session check + full refresh on mount
    Effect::new(move |_| ctx.startup());

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Planner Dashboard"</h1>
                <AuthBar />
            </header>

            <LoginModal />

            <SummaryPanel />

            <section class="crud-grid">
                <PlanPanel />
                <BucketPanel />
                <TaskPanel />
            </section>

            <FlatTables />

            <ActivityLog />
        </div>
    }
}
