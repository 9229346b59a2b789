use leptos::*;
use rwa_core::pages::dashboard::RingSize;
use rwa_core::route::Route;

use crate::components::action_card::ActionCard;
use crate::components::activity_feed::ActivityFeed;
use crate::components::allocation::AssetAllocation;
use crate::components::performance_chart::PerformanceChart;
use crate::components::progress::ProgressIndicator;
use crate::components::stat_card::StatCard;
use crate::state::use_catalog;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let catalog = use_catalog();
    let data = &catalog.dashboard;

    let stats = data
        .stats
        .iter()
        .map(|tile| {
            view! {
              <StatCard
                title=tile.title.clone()
                value=tile.value.clone()
                change=tile.change
                trend=tile.trend
              />
            }
        })
        .collect_view();

    let gauges = data
        .health
        .iter()
        .map(|gauge| {
            view! {
              <div class="card gauge">
                <h4>{gauge.title.clone()}</h4>
                <ProgressIndicator value=gauge.value size=RingSize::Small color=gauge.color.stroke() />
                <div>{gauge.caption.clone()}</div>
                <div class="meta">{gauge.detail.clone()}</div>
              </div>
            }
        })
        .collect_view();

    view! {
      <div class="stack">
        <div class="grid four">{stats}</div>

        <div class="grid two-one">
          <PerformanceChart tne=data.tne.clone() tvl=data.tvl.clone() />
          <AssetAllocation slices=data.allocation.clone() />
        </div>

        <section>
          <h3>"Protocol Health"</h3>
          <div class="grid four">{gauges}</div>
        </section>

        <div class="grid three">
          <ActionCard
            title="Buy RWA Tokens"
            description="Fractional ownership of GPU clusters, real estate and energy assets."
            href=Route::RwaVault.path()
            cta="Open Vault"
          />
          <ActionCard
            title="Stake in Yield Vaults"
            description="Earn protocol yield with optional lock-up bonuses."
            href=Route::YieldVaults.path()
            cta="View Vaults"
          />
          <ActionCard
            title="Trade oNFTs"
            description="Buy and sell ownership NFTs on the secondary market."
            href=Route::OnftMarketplace.path()
            cta="Open Marketplace"
          />
        </div>

        <ActivityFeed activities=data.activities.clone() />
      </div>
    }
}
