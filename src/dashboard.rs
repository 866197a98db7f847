//! Dashboard Controller
//!
//! Every operation the UI can trigger. Each catches its own failures and
//! records them in the activity log; nothing here returns an error.

use std::future::Future;

use crate::api::{self, LoginPoll, Transport};
use crate::cache::{Collection, Listing};
use crate::models::DeviceFlow;
use crate::mutation::{FormAction, Mutation};
use crate::state::StateHandle;

#[derive(Clone)]
pub struct Dashboard<T, S> {
    transport: T,
    state: S,
    poll_interval_ms: u32,
}

impl<T: Transport, S: StateHandle> Dashboard<T, S> {
    pub fn new(transport: T, state: S, poll_interval_ms: u32) -> Self {
        Self { transport, state, poll_interval_ms }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Startup sequence: session check, then a full refresh
    pub async fn startup(&self) {
        self.state.update_state(|s| s.log.info("Dashboard initializing..."));
        let authenticated = self.check_session().await;
        self.refresh_all().await;
        self.state.update_state(|s| {
            if authenticated {
                s.log.success("Connection to the planning service established");
            } else {
                s.log.info("Local mode (not connected to the planning service)");
            }
        });
    }

    /// Aggregate summary plus every flat collection, issued concurrently.
    /// Each result lands as soon as its own response does.
    pub async fn refresh_all(&self) {
        self.state.update_state(|s| s.log.info("Refreshing all data..."));
        futures::join!(
            self.load_summary(),
            self.refresh(Collection::Plans),
            self.refresh(Collection::Buckets),
            self.refresh(Collection::Tasks),
        );
    }

    pub async fn load_summary(&self) {
        self.state.update_state(|s| s.summary.loading = true);
        let result = api::fetch_summary(&self.transport).await;
        self.state.update_state(|s| {
            s.apply_summary(result);
            s.summary.loading = false;
        });
    }

    /// Re-fetch one flat collection. No cancellation: overlapping calls
    /// each apply their own response, so the last to arrive wins.
    pub async fn refresh(&self, collection: Collection) {
        let result = match collection {
            Collection::Plans => api::list_plans(&self.transport).await.map(Listing::Plans),
            Collection::Buckets => api::list_buckets(&self.transport).await.map(Listing::Buckets),
            Collection::Tasks => api::list_tasks(&self.transport).await.map(Listing::Tasks),
        };
        if let Err(e) = &result {
            log::warn!("[SYNC] {} failed: {}", collection.path(), e);
        }
        self.state.update_state(|s| s.apply_listing(collection, result));
    }

    /// Validate the form behind `action`; a failure is logged and no
    /// request is made.
    pub fn prepare(&self, action: FormAction) -> Option<Mutation> {
        self.state
            .update_state(|s| match action.build(&s.forms, &s.selectors) {
                Ok(mutation) => Some(mutation),
                Err(e) => {
                    s.log.error(e.to_string());
                    None
                }
            })
            .flatten()
    }

    /// Send a validated mutation, then re-fetch the collections it affects.
    /// The summary is left alone until the next full refresh.
    pub async fn submit(&self, mutation: Mutation) -> bool {
        match mutation.send(&self.transport).await {
            Ok(_) => {
                self.state
                    .update_state(|s| s.log.success(mutation.success_message()));
                for collection in mutation.affected_collections() {
                    self.refresh(*collection).await;
                }
                true
            }
            Err(e) => {
                self.state.update_state(|s| s.log.error(format!("Error: {}", e)));
                false
            }
        }
    }

    pub async fn check_session(&self) -> bool {
        match api::auth_status(&self.transport).await {
            Ok(status) => {
                let authenticated = status.authenticated;
                self.state.update_state(|s| s.apply_session(status));
                authenticated
            }
            Err(e) => {
                log::error!("[AUTH] status check failed: {}", e);
                false
            }
        }
    }

    /// Ask the backend for a device-code flow and show it
    pub async fn start_login(&self) -> Option<DeviceFlow> {
        self.state
            .update_state(|s| s.log.info("Starting authentication flow..."));
        match api::begin_login(&self.transport).await {
            Ok(flow) => {
                let shown = flow.clone();
                self.state.update_state(|s| s.login = Some(shown));
                Some(flow)
            }
            Err(e) => {
                self.state
                    .update_state(|s| s.log.error(format!("Error signing in: {}", e)));
                None
            }
        }
    }

    /// One completion attempt; transport trouble counts as still pending
    pub async fn poll_login_once(&self, flow: &DeviceFlow) -> LoginPoll {
        match api::complete_login(&self.transport, flow).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("[AUTH] poll failed, retrying: {}", e);
                LoginPoll::Pending
            }
        }
    }

    /// Poll `/auth/complete` every interval until it succeeds or reports a
    /// non-pending error. There is no attempt limit.
    pub async fn finish_login<F, Fut>(&self, flow: DeviceFlow, mut sleep: F)
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = ()>,
    {
        loop {
            sleep(self.poll_interval_ms).await;
            match self.poll_login_once(&flow).await {
                LoginPoll::Pending => continue,
                LoginPoll::Succeeded(user) => {
                    self.state.update_state(|s| {
                        s.login = None;
                        s.log.success(format!(
                            "Welcome, {}!",
                            user.as_deref().unwrap_or("planner user")
                        ));
                    });
                    self.check_session().await;
                    self.refresh_all().await;
                    return;
                }
                LoginPoll::Failed(detail) => {
                    self.state.update_state(|s| {
                        s.login = None;
                        s.log.error(format!("Authentication error: {}", detail));
                    });
                    return;
                }
            }
        }
    }
}
