//! Dashboard State
//!
//! The single owned container every view reads and every operation
//! writes. Results are applied here synchronously once a call resolves.

use leptos::prelude::*;

use crate::activity::ActivityLog;
use crate::api::Summary;
use crate::cache::{Collection, EntityCache, Listing};
use crate::error::{DashboardError, Result};
use crate::forms::{FormField, Forms};
use crate::hierarchy::{filter_rows, flatten, pretty, SummaryRow};
use crate::models::{AuthStatus, DeviceFlow, PlanNode};
use crate::selector::{SelectorId, Selectors};

/// Last aggregate query outcome
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryState {
    /// Plans of the last successful query (tree and table source)
    pub plans: Vec<PlanNode>,
    /// Raw view text: last `data`, or the whole body when the query failed
    pub raw: String,
    pub loading: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub cache: EntityCache,
    pub selectors: Selectors,
    pub summary: SummaryState,
    /// Master table filter text
    pub filter: String,
    pub forms: Forms,
    pub session: SessionState,
    /// Device flow being completed; the login modal shows while set
    pub login: Option<DeviceFlow>,
    pub log: ActivityLog,
}

impl DashboardState {
    /// Apply a list result: replace the collection and rebuild selectors on
    /// success, keep everything as it was on failure.
    pub fn apply_listing(&mut self, collection: Collection, result: Result<Listing>) {
        match result {
            Ok(listing) => {
                let count = listing.len();
                self.cache.replace(listing);
                self.selectors.populate_all(&self.cache);
                self.log.info(format!("{} listed ({})", collection.label(), count));
            }
            Err(e) => {
                self.log
                    .error(format!("Error listing {}: {}", collection.label().to_lowercase(), e));
            }
        }
    }

    pub fn apply_summary(&mut self, result: Result<Summary>) {
        match result {
            Ok(summary) => {
                self.summary.raw = pretty(&summary.data);
                self.summary.plans = summary.plans;
                self.log.success("Summary synced");
            }
            Err(DashboardError::PartialQuery { messages, payload }) => {
                self.summary.raw = pretty(&payload);
                self.log.error(format!("Query errors: {}", messages.join("; ")));
            }
            Err(e) => {
                self.log.error(format!("Failed to load summary: {}", e));
            }
        }
    }

    pub fn apply_session(&mut self, status: AuthStatus) {
        if status.authenticated {
            self.log.success("Session active on the planning service");
        }
        self.session = SessionState {
            authenticated: status.authenticated,
            user: status.user,
        };
    }

    /// Master table rows after the current filter
    pub fn visible_rows(&self) -> Vec<SummaryRow> {
        filter_rows(flatten(&self.summary.plans), &self.filter)
    }

    /// Change a selector and pre-fill whatever form depends on it
    pub fn select(&mut self, id: SelectorId, value: &str) {
        self.selectors.select(id, value);
        let value = self.selectors.value(id).unwrap_or("").to_string();

        match id {
            SelectorId::ManagePlan => {
                if let Some(plan) = self.cache.plan(&value) {
                    self.forms.set(FormField::PlanEditName, plan.name.clone());
                }
            }
            SelectorId::ManageBucket => {
                if let Some(bucket) = self.cache.bucket(&value) {
                    self.forms.set(FormField::BucketEditName, bucket.name.clone());
                    self.selectors
                        .select(SelectorId::BucketEditPlan, &bucket.plan_id.to_string());
                }
            }
            SelectorId::TaskEdit => {
                if let Some(task) = self.cache.task(&value).cloned() {
                    self.forms.set(FormField::TaskEditTitle, task.title);
                    self.forms
                        .set(FormField::TaskEditPercent, task.percent_complete.to_string());
                    self.selectors
                        .select(SelectorId::TaskEditPlan, &task.plan_id.to_string());
                    self.selectors.narrow_buckets(
                        SelectorId::TaskEditPlan,
                        SelectorId::TaskEditBucket,
                        &self.cache.buckets,
                    );
                    self.selectors
                        .select(SelectorId::TaskEditBucket, &task.bucket_id.to_string());
                }
            }
            _ => {}
        }

        if let Some(bucket_selector) = id.governs() {
            self.selectors
                .narrow_buckets(id, bucket_selector, &self.cache.buckets);
        }
    }
}

/// Access to the dashboard state from async operations
pub trait StateHandle: Clone + 'static {
    /// `None` once the state has been disposed
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R>;

    fn update_state<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R>;
}

impl StateHandle for RwSignal<DashboardState> {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        self.try_with(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        self.try_update(f)
    }
}
