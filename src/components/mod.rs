//! UI Components
//!
//! Leptos components for the dashboard panels.

mod activity_log;
mod auth_bar;
mod bucket_panel;
mod fields;
mod flat_tables;
mod plan_panel;
mod progress_pill;
mod summary_panel;
mod task_panel;

pub use activity_log::ActivityLog;
pub use auth_bar::{AuthBar, LoginModal};
pub use bucket_panel::BucketPanel;
pub use fields::{ActionButton, SelectorField, TextField};
pub use flat_tables::FlatTables;
pub use plan_panel::PlanPanel;
pub use progress_pill::ProgressPill;
pub use summary_panel::SummaryPanel;
pub use task_panel::TaskPanel;
