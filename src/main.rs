//! Planner Dashboard Frontend Entry Point

mod activity;
mod api;
mod app;
mod cache;
mod components;
mod config;
mod context;
mod dashboard;
mod error;
mod forms;
mod hierarchy;
mod models;
mod mutation;
mod selector;
mod state;

#[cfg(test)]
mod test_support;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Already initialized only if the page re-runs main
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
