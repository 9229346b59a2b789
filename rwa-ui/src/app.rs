use std::rc::Rc;

use leptos::*;
use leptos_router::{Route, Router, Routes};
use rwa_core::route;
use rwa_core::{Catalog, DashboardConfig, DashboardError};

use crate::browser;
use crate::components::fallback::Fallback;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::pages::asset_details::AssetDetailsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::governance::GovernancePage;
use crate::pages::institutions_tokenizer::InstitutionsTokenizerPage;
use crate::pages::marketplace::MarketplacePage;
use crate::pages::monitoring::MonitoringPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::placeholder::Placeholder;
use crate::pages::transactions::TransactionsPage;
use crate::pages::vault::VaultPage;
use crate::pages::yield_vaults::YieldVaultsPage;
use crate::state;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::load();
    let store = state::provide_store(&config);
    let boundary = state::provide_boundary();
    provide_context(Rc::new(config));

    create_effect(move |_| browser::apply_theme(store.with(|s| s.theme())));

    view! {
      <Show
        when=move || boundary.with(|b| b.renders_children())
        fallback=|| view! { <Fallback /> }
      >
        <ErrorBoundary fallback=move |errors| capture(boundary, errors)>
          {load_shell()}
        </ErrorBoundary>
      </Show>
    }
}

/// Hand the first error of the subtree to the boundary. Once it is failed
/// the `<Show>` above swaps the whole subtree for the fallback.
fn capture(boundary: RwSignal<rwa_core::boundary::BoundaryState>, errors: RwSignal<Errors>) {
    create_effect(move |_| {
        let first = errors.with(|errs| errs.iter().next().map(|(_, err)| err.to_string()));
        if let Some(message) = first {
            boundary.update(|b| {
                b.capture(message);
            });
        }
    });
}

fn load_shell() -> Result<View, DashboardError> {
    let catalog = Catalog::load()?;
    tracing::info!(
        offerings = catalog.offerings.len(),
        listings = catalog.listings.len(),
        transactions = catalog.transactions.len(),
        "catalog loaded"
    );
    provide_context(Rc::new(catalog));
    Ok(view! { <Shell /> }.into_view())
}

#[component]
fn Shell() -> impl IntoView {
    let store = state::use_store();

    view! {
      <Router>
        <div class="app">
          <Sidebar />
          <div class=move || format!("content {}", store.with(|s| s.content_offset()))>
            <Header />
            <main class="page">
              <Routes>
                <Route path=route::Route::Dashboard.path() view=DashboardPage />
                <Route path=route::Route::RwaVault.path() view=VaultPage />
                <Route path=route::Route::YieldVaults.path() view=YieldVaultsPage />
                <Route path=route::Route::AssetsMonitoring.path() view=MonitoringPage />
                <Route path=route::Route::OnftMarketplace.path() view=MarketplacePage />
                <Route path=route::Route::TransactionHistory.path() view=TransactionsPage />
                <Route path=route::Route::Governance.path() view=GovernancePage />
                <Route
                  path=route::Route::InstitutionsTokenizer.path()
                  view=InstitutionsTokenizerPage
                />
                <Route
                  path=route::Route::RwaMarket.path()
                  view=|| view! { <Placeholder route=route::Route::RwaMarket /> }
                />
                <Route
                  path=route::Route::CusdManagement.path()
                  view=|| view! { <Placeholder route=route::Route::CusdManagement /> }
                />
                <Route
                  path=route::Route::AiServices.path()
                  view=|| view! { <Placeholder route=route::Route::AiServices /> }
                />
                <Route
                  path=route::Route::ProtocolAnalytics.path()
                  view=|| view! { <Placeholder route=route::Route::ProtocolAnalytics /> }
                />
                <Route
                  path=route::Route::Settings.path()
                  view=|| view! { <Placeholder route=route::Route::Settings /> }
                />
                <Route path="/asset/:id" view=AssetDetailsPage />
                <Route path="/*any" view=NotFoundPage />
              </Routes>
            </main>
          </div>
        </div>
      </Router>
    }
}
