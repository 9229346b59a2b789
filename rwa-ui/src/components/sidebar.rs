use leptos::*;
use leptos_router::use_location;
use rwa_core::route::{Route, MENU};

use crate::state::use_store;

fn icon(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "◧",
        Route::RwaVault => "▣",
        Route::YieldVaults => "%",
        Route::AssetsMonitoring => "◉",
        Route::RwaMarket => "⇄",
        Route::OnftMarketplace => "◆",
        Route::TransactionHistory => "≡",
        Route::CusdManagement => "$",
        Route::AiServices => "✦",
        Route::Governance => "⚖",
        Route::ProtocolAnalytics => "▤",
        Route::InstitutionsTokenizer => "⌂",
        Route::Settings => "⚙",
        Route::Asset(_) | Route::NotFound => "·",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_store();
    let location = use_location();
    let current = create_memo(move |_| Route::parse(&location.pathname.get()));
    let collapsed = move || store.with(|s| s.is_collapsed());

    view! {
      <aside class="sidebar" class:collapsed=collapsed>
        <div class="brand">
          <span class="logo">"R"</span>
          <span class="brand-name" class:hidden=collapsed>"RWA Protocol"</span>
        </div>
        <nav>
          {MENU
            .into_iter()
            .map(move |route| {
              view! {
                <a
                  href=route.path()
                  class="nav-item"
                  class:active=move || route.is_active(&current.get())
                  title=route.title()
                >
                  <span class="nav-icon">{icon(route)}</span>
                  <span class="nav-label" class:hidden=collapsed>{route.title()}</span>
                </a>
              }
            })
            .collect_view()}
        </nav>
        <button class="collapse" on:click=move |_| store.update(|s| s.toggle_sidebar())>
          {move || if collapsed() { "»" } else { "«" }}
        </button>
      </aside>
    }
}
