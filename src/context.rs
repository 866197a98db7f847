//! Application Context
//!
//! The dashboard controller, provided to every component via the Leptos
//! Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTransport;
use crate::cache::Collection;
use crate::dashboard::Dashboard;
use crate::mutation::FormAction;
use crate::state::DashboardState;

pub type AppDashboard = Dashboard<HttpTransport, RwSignal<DashboardState>>;

/// Copyable handle: the controller lives in arena storage
#[derive(Clone, Copy)]
pub struct AppContext {
    dashboard: StoredValue<AppDashboard>,
    state: RwSignal<DashboardState>,
}

impl AppContext {
    pub fn new(dashboard: AppDashboard) -> Self {
        let state = *dashboard.state();
        Self {
            dashboard: StoredValue::new(dashboard),
            state,
        }
    }

    pub fn state(&self) -> RwSignal<DashboardState> {
        self.state
    }

    fn dashboard(&self) -> AppDashboard {
        self.dashboard.get_value()
    }

    pub fn startup(&self) {
        let dashboard = self.dashboard();
        spawn_local(async move { dashboard.startup().await });
    }

    /// Summary plus every flat collection
    pub fn refresh_all(&self) {
        let dashboard = self.dashboard();
        spawn_local(async move { dashboard.refresh_all().await });
    }

    /// Flat collections only, each on its own
    pub fn refresh_lists(&self) {
        for collection in Collection::ALL {
            let dashboard = self.dashboard();
            spawn_local(async move { dashboard.refresh(collection).await });
        }
    }

    /// Validate, ask for consent on deletes, then submit in the background
    pub fn run(&self, action: FormAction) {
        let Some(mutation) = self.dashboard.with_value(|d| d.prepare(action)) else {
            return;
        };
        if let Some(prompt) = mutation.confirmation_prompt() {
            if !confirm(prompt) {
                return;
            }
        }
        let dashboard = self.dashboard();
        spawn_local(async move {
            dashboard.submit(mutation).await;
        });
    }

    /// Device-code sign-in; polls until the backend reports an outcome
    pub fn login(&self) {
        let dashboard = self.dashboard();
        spawn_local(async move {
            if let Some(flow) = dashboard.start_login().await {
                dashboard.finish_login(flow, TimeoutFuture::new).await;
            }
        });
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Blocking yes/no prompt
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
