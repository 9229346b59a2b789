use std::rc::Rc;

use leptos::*;
use leptos_router::use_params_map;
use rwa_core::format::{compact_usd, grouped, percent_fixed};
use rwa_core::model::{AssetProfile, DetailEntry};
use rwa_core::pages::asset_details::{AssetDetailsPage as Page, AssetLookup, AssetMode, DetailTab};
use rwa_core::route::Route;
use rwa_core::stepper::PurchaseBounds;
use rwa_core::DashboardError;

use crate::components::modal::Modal;
use crate::components::stat_card::StatCard;
use crate::components::stepper::{report_step, QuantityStepper};
use crate::pages::not_found::AssetNotFound;
use crate::state::use_catalog;

fn entries(rows: Vec<DetailEntry>) -> impl IntoView {
    view! {
      <dl class="details">
        {rows
          .into_iter()
          .map(|d| view! { <dt>{d.label}</dt><dd>{d.value}</dd> })
          .collect_view()}
      </dl>
    }
}

fn entry(label: &str, value: String) -> DetailEntry {
    DetailEntry {
        label: label.to_string(),
        value,
    }
}

fn tab_body(tab: DetailTab, profile: &AssetProfile) -> View {
    let o = &profile.offering;
    match tab {
        DetailTab::Details => entries(profile.specifications.clone()).into_view(),
        DetailTab::Financials => entries(vec![
            entry("Asset Value", compact_usd(o.total_value)),
            entry("Current Price", format!("${}", grouped(profile.current_price))),
            entry("Total Return", percent_fixed(profile.total_return, 1)),
            entry("Expected Income", format!("${}/yr", grouped(profile.expected_income))),
            entry("APY", percent_fixed(o.apy, 1)),
        ])
        .into_view(),
        DetailTab::Blockchain => entries(vec![
            entry("Token", profile.ticker.clone()),
            entry("Total Supply", grouped(o.total_supply as f64)),
            entry("Holders", grouped(profile.investors as f64)),
            entry("Market", profile.market_link.clone()),
        ])
        .into_view(),
        DetailTab::Offering => {
            let mut rows = vec![
                entry("Token Price", format!("${}", grouped(o.unit_price))),
                entry("Available", format!("{} ({})", grouped(o.available as f64), percent_fixed(o.availability_pct(), 1))),
                entry("Purchase Range", format!("{} - {}", o.min_purchase, o.max_purchase)),
                entry("Per Token", format!("{:.4}%", o.unit_ownership_pct())),
            ];
            rows.extend(o.details.iter().cloned());
            entries(rows).into_view()
        }
        DetailTab::Trading => view! {
          <div class="empty meta">
            "No secondary-market trades yet. "
            <a href=Route::OnftMarketplace.path()>"Browse the marketplace"</a>
          </div>
        }
        .into_view(),
    }
}

fn purchase_modal(page: RwSignal<Page>, profile: Rc<AssetProfile>) -> Result<View, DashboardError> {
    let bounds = PurchaseBounds::for_offering(&profile.offering)?;
    let quote = {
        let profile = profile.clone();
        create_memo(move |_| page.with(|p| p.quote(&profile).ok()))
    };
    let quantity = Signal::derive(move || quote.get().map_or(bounds.min(), |q| q.quantity));
    let (p1, p2, p3) = (profile.clone(), profile.clone(), profile.clone());
    let title = format!("Buy {}", profile.offering.name);

    Ok(view! {
      <Modal title=title on_close=move |_| page.update(|p| p.close())>
        <QuantityStepper
          quantity=quantity
          bounds=bounds
          on_decrement=move |_| page.update(|p| report_step(p.step_down(&p1)))
          on_increment=move |_| page.update(|p| report_step(p.step_up(&p2)))
          on_enter=move |raw: String| page.update(|p| report_step(p.enter(&p3, &raw)))
        />
        <div class="quote">
          <div class="row">
            <span>"Total Cost"</span>
            <b>{move || quote.get().map(|q| format!("${}", grouped(q.total_cost))).unwrap_or_default()}</b>
          </div>
          <div class="row">
            <span>"Ownership"</span>
            <b>{move || quote.get().map(|q| format!("{}%", q.ownership_display())).unwrap_or_default()}</b>
          </div>
        </div>
        <button
          class="button"
          on:click=move |_| {
            let quote = quote.get_untracked();
            if let Some(q) = quote {
              tracing::info!(id = profile.id(), quantity = q.quantity, "asset purchase confirmed");
            }
            page.update(|p| p.close());
          }
        >
          "Confirm Purchase"
        </button>
      </Modal>
    }
    .into_view())
}

#[component]
fn AssetProfileView(profile: AssetProfile) -> impl IntoView {
    let page = create_rw_signal(Page::default());
    let profile = Rc::new(profile);
    let sold_out = profile.offering.is_sold_out();
    let paragraphs: Vec<String> = profile.paragraphs().map(str::to_string).collect();

    let buy = {
        let profile = profile.clone();
        move |_| {
            if let Some(Err(err)) = page.try_update(|p| p.open_purchase(&profile)) {
                tracing::debug!(%err, "purchase not opened");
            }
        }
    };
    let body = {
        let profile = profile.clone();
        move || tab_body(page.with(|p| p.tab), &profile)
    };
    let modal = {
        let profile = profile.clone();
        move || (page.with(|p| p.mode) == AssetMode::Purchase).then(|| purchase_modal(page, profile.clone()))
    };
    let o = &profile.offering;

    view! {
      <div class="stack">
        <a class="link" href=Route::RwaVault.path()>"← Back to RWA Vault"</a>
        <div class="row">
          <div>
            <div class="row">
              <span class="badge">{o.category.badge()}</span>
              <span class=format!("badge {}", o.status.as_str())>{o.status.label()}</span>
            </div>
            <h2>{o.name.clone()}</h2>
            <div class="meta">{format!("{} · {}", o.location, profile.ticker)}</div>
          </div>
          <button class="button" disabled=sold_out on:click=buy>
            {if sold_out { "Sold Out" } else { "Buy Tokens" }}
          </button>
        </div>

        <div class="grid four">
          <StatCard title="Current Price" value=format!("${}", grouped(profile.current_price)) />
          <StatCard title="Total Return" value=percent_fixed(profile.total_return, 1) />
          <StatCard title="Expected Income" value=format!("${}", grouped(profile.expected_income)) />
          <StatCard title="Investors" value=grouped(profile.investors as f64) />
        </div>

        <div class="grid two">
          <section class="card">
            <h3>"About"</h3>
            {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
          </section>
          <section class="card">
            <h3>"Liquidity"</h3>
            <div class="stat-value">{compact_usd(profile.total_liquidity)}</div>
            <div class="row meta">
              <span>{format!("Primary {}", percent_fixed(profile.liquidity.primary, 2))}</span>
              <span>{format!("Secondary {}", percent_fixed(profile.liquidity.secondary, 2))}</span>
            </div>
            <div class="bar"><div style=format!("width: {:.2}%", profile.liquidity.primary)></div></div>
          </section>
        </div>

        <section class="card">
          <div class="tabs">
            {DetailTab::ALL
              .into_iter()
              .map(|tab| view! {
                <button
                  class:selected=move || page.with(|p| p.tab == tab)
                  on:click=move |_| page.update(|p| p.tab = tab)
                >
                  {tab.label()}
                </button>
              })
              .collect_view()}
          </div>
          {body}
        </section>

        {modal}
      </div>
    }
}

#[component]
pub fn AssetDetailsPage() -> impl IntoView {
    let catalog = use_catalog();
    let params = use_params_map();
    let segment = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    move || match AssetLookup::resolve(&catalog, &segment()) {
        AssetLookup::Found(profile) => view! { <AssetProfileView profile=profile.clone() /> }.into_view(),
        AssetLookup::NotFound(id) => view! { <AssetNotFound id=id /> }.into_view(),
    }
}
