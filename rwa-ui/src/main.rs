//! RWA investment dashboard.
//!
//! Client-side rendered Leptos app compiled to WebAssembly. Every number on
//! screen is computed by `rwa-core`; this crate only lays it out.

use leptos::*;

mod app;
mod browser;
mod state;

pub mod components {
    pub mod action_card;
    pub mod activity_feed;
    pub mod allocation;
    pub mod fallback;
    pub mod header;
    pub mod modal;
    pub mod performance_chart;
    pub mod progress;
    pub mod select;
    pub mod sidebar;
    pub mod stat_card;
    pub mod stepper;
}

pub mod pages {
    pub mod asset_details;
    pub mod dashboard;
    pub mod governance;
    pub mod institutions_tokenizer;
    pub mod marketplace;
    pub mod monitoring;
    pub mod not_found;
    pub mod placeholder;
    pub mod transactions;
    pub mod vault;
    pub mod yield_vaults;
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    mount_to_body(|| view! { <app::App /> });
}
