//! Context shared by the whole view tree.
//!
//! `App` provides each value once; components read them back with the
//! `use_*` helpers, which panic with the missing type's name when called
//! outside the provider.

use std::rc::Rc;
use std::time::Duration;

use leptos::*;
use rwa_core::boundary::BoundaryState;
use rwa_core::store::UiStore;
use rwa_core::{Catalog, DashboardConfig};

pub fn provide_store(config: &DashboardConfig) -> RwSignal<UiStore> {
    let store = create_rw_signal(UiStore::from_config(config));
    provide_context(store);
    store
}

pub fn use_store() -> RwSignal<UiStore> {
    expect_context::<RwSignal<UiStore>>()
}

pub fn provide_boundary() -> RwSignal<BoundaryState> {
    let boundary = create_rw_signal(BoundaryState::default());
    provide_context(boundary);
    boundary
}

pub fn use_boundary() -> RwSignal<BoundaryState> {
    expect_context::<RwSignal<BoundaryState>>()
}

pub fn use_catalog() -> Rc<Catalog> {
    expect_context::<Rc<Catalog>>()
}

pub fn use_config() -> Rc<DashboardConfig> {
    expect_context::<Rc<DashboardConfig>>()
}

/// Run `done` after the configured simulated latency, or right away when
/// latency is disabled.
pub fn after_latency(config: &DashboardConfig, done: impl FnOnce() + 'static) {
    match config.simulated_latency_ms {
        Some(ms) => set_timeout(done, Duration::from_millis(ms)),
        None => done(),
    }
}
