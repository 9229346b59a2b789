use leptos::*;
use leptos_router::use_location;
use rwa_core::route::Route;

use crate::state::use_store;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let location = use_location();
    let title = move || Route::parse(&location.pathname.get()).title();

    view! {
      <header class="header">
        <button
          class="icon-button"
          title="Toggle sidebar"
          on:click=move |_| store.update(|s| s.toggle_sidebar())
        >
          "☰"
        </button>
        <h1>{title}</h1>
        <div class="header-actions">
          <button
            class="icon-button"
            title="Toggle theme"
            on:click=move |_| store.update(|s| s.toggle_theme())
          >
            {move || if store.with(|s| s.is_dark()) { "☀" } else { "☾" }}
          </button>
          <div class="wallet">
            <span class="dot ok"></span>
            "0x742d...4e8f"
          </div>
        </div>
      </header>
    }
}
