use std::rc::Rc;

use leptos::*;
use rwa_core::format::{compact_usd, grouped, percent_fixed};
use rwa_core::model::YieldVault;
use rwa_core::pages::yield_vaults::{StakeDraft, StakePortfolio, AVAILABLE_BALANCE};

use crate::components::stat_card::StatCard;
use crate::state::use_catalog;

fn stake_panel(draft: RwSignal<StakeDraft>, notice: RwSignal<Option<String>>, vault: Rc<YieldVault>) -> impl IntoView {
    let periods = vault.lock_periods.clone();
    let projection = {
        let vault = vault.clone();
        move || draft.with(|d| d.projection(&vault))
    };
    let effective = {
        let vault = vault.clone();
        move || draft.with(|d| d.effective_apy(&vault))
    };
    let submit = move |_| match draft.try_update(|d| d.submit(&vault)) {
        Some(Ok(amount)) => notice.set(Some(format!(
            "Staked ${} in {}",
            grouped(amount),
            vault.name
        ))),
        Some(Err(err)) => notice.set(Some(err.to_string())),
        None => {}
    };

    view! {
      <div class="stake-panel">
        <label class="meta">"Amount (USD)"</label>
        <div class="row">
          <input
            type="text"
            placeholder="0.00"
            prop:value=move || draft.with(|d| d.amount.clone())
            on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
          />
          <button class="button secondary" on:click=move |_| draft.update(|d| d.fill_max())>"Max"</button>
        </div>
        <div class="meta">{format!("Available: ${}", grouped(AVAILABLE_BALANCE))}</div>

        <label class="meta">"Lock Period"</label>
        <div class="row">
          {periods
            .into_iter()
            .map(|lock| view! {
              <button
                class:selected=move || draft.with(|d| d.lock_days == lock.days)
                on:click=move |_| draft.update(|d| d.lock_days = lock.days)
              >
                {format!("{}d", lock.days)}
                {(lock.bonus > 0.0).then(|| format!(" +{:.1}%", lock.bonus))}
              </button>
            })
            .collect_view()}
        </div>

        <div class="row">
          <span>"Effective APY"</span>
          <b class="ok">{move || percent_fixed(effective(), 2)}</b>
        </div>
        <div class="row">
          <span>"Projected Yield"</span>
          {move || match projection() {
            Ok(amount) => view! { <b>{format!("${}", grouped((amount * 100.0).round() / 100.0))}</b> }.into_view(),
            Err(err) => view! { <span class="meta">{err.to_string()}</span> }.into_view(),
          }}
        </div>
        <button class="button" on:click=submit>"Stake"</button>
      </div>
    }
}

fn vault_card(draft: RwSignal<StakeDraft>, notice: RwSignal<Option<String>>, vault: YieldVault) -> impl IntoView {
    let id = vault.id;
    let vault = Rc::new(vault);
    let panel_vault = vault.clone();

    view! {
      <div class="card vault">
        <div class="row">
          <h3>{vault.name.clone()}</h3>
          {vault.tier.map(|t| view! { <span class=format!("badge {}", t.as_str())>{t.as_str()}</span> })}
        </div>
        <p class="meta">{vault.description.clone()}</p>
        <div class="grid three">
          <div><div class="meta">"APY"</div><b class="ok">{percent_fixed(vault.apy, 1)}</b></div>
          <div><div class="meta">"TVL"</div><b>{compact_usd(vault.tvl)}</b></div>
          <div>
            <div class="meta">"Risk"</div>
            <b class=format!("risk {}", vault.risk.as_str())>{vault.risk.as_str()}</b>
          </div>
        </div>
        <div class="row">
          <span class="meta">"Your Stake"</span>
          <b>{format!("${}", grouped(vault.user_stake))}</b>
        </div>
        <div class="tags">
          {vault.yield_sources.iter().map(|s| view! { <span class="tag">{s.clone()}</span> }).collect_view()}
        </div>
        <button class="button" on:click=move |_| draft.update(|d| d.toggle(id))>
          {move || if draft.with(|d| d.selected == Some(id)) { "Cancel" } else { "Stake" }}
        </button>
        <Show when=move || draft.with(|d| d.selected == Some(id)) fallback=|| ()>
          {stake_panel(draft, notice, panel_vault.clone())}
        </Show>
      </div>
    }
}

#[component]
pub fn YieldVaultsPage() -> impl IntoView {
    let catalog = use_catalog();
    let draft = create_rw_signal(StakeDraft::default());
    let notice = create_rw_signal(None::<String>);
    let portfolio = StakePortfolio::of(&catalog.yield_vaults);

    view! {
      <div class="stack">
        <div class="grid four">
          <StatCard title="Total Staked" value=format!("${}", grouped(portfolio.total_staked)) />
          <StatCard title="Weighted APY" value=percent_fixed(portfolio.weighted_apy, 2) />
          <StatCard title="Monthly Yield" value=format!("${}", grouped((portfolio.monthly_yield * 100.0).round() / 100.0)) />
          <StatCard title="Available Balance" value=format!("${}", grouped(AVAILABLE_BALANCE)) />
        </div>

        {move || notice.get().map(|n| view! {
          <div class="notice" on:click=move |_| notice.set(None)>{n}</div>
        })}

        <div class="grid three">
          {catalog
            .yield_vaults
            .iter()
            .cloned()
            .map(|v| vault_card(draft, notice, v))
            .collect_view()}
        </div>
      </div>
    }
}
