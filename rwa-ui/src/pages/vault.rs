use std::rc::Rc;

use leptos::*;
use rwa_core::format::{compact_usd, grouped, percent_fixed};
use rwa_core::model::Offering;
use rwa_core::pages::vault::{category_tabs, VaultMode, VaultPage as Page, VaultSummary};
use rwa_core::route::Route;
use rwa_core::stepper::PurchaseBounds;
use rwa_core::DashboardError;

use crate::components::modal::Modal;
use crate::components::stat_card::StatCard;
use crate::components::stepper::{report_step, QuantityStepper};
use crate::state::use_catalog;

fn offering_card(page: RwSignal<Page>, notice: RwSignal<Option<String>>, offering: Offering) -> impl IntoView {
    let id = offering.id;
    let sold_out = offering.is_sold_out();
    let offering = Rc::new(offering);
    let details = offering.details.clone();

    let buy = {
        let offering = offering.clone();
        move |_| {
            if let Some(Err(err)) = page.try_update(|p| p.open_purchase(&offering)) {
                notice.set(Some(err.to_string()));
            }
        }
    };
    let open_details = {
        let offering = offering.clone();
        move |_| page.update(|p| p.open_details(&offering))
    };

    view! {
      <div class="card offering">
        <div class="row">
          <span class="badge">{offering.category.badge()}</span>
          <span class=format!("badge {}", offering.status.as_str())>{offering.status.label()}</span>
        </div>
        <h3>{offering.name.clone()}</h3>
        <div class="meta">{offering.location.clone()}</div>
        <div class="grid two">
          <div><div class="meta">"Token Price"</div><b>{format!("${}", grouped(offering.unit_price))}</b></div>
          <div><div class="meta">"APY"</div><b class="ok">{percent_fixed(offering.apy, 1)}</b></div>
          <div><div class="meta">"Asset Value"</div><b>{compact_usd(offering.total_value)}</b></div>
          <div><div class="meta">"Per Token"</div><b>{format!("{:.4}%", offering.unit_ownership_pct())}</b></div>
        </div>
        <div class="row meta">
          <span>{format!("{} / {} available", grouped(offering.available as f64), grouped(offering.total_supply as f64))}</span>
          <span>{percent_fixed(offering.availability_pct(), 1)}</span>
        </div>
        <div class="bar"><div style=format!("width: {:.1}%", offering.availability_pct())></div></div>

        <button class="link" on:click=move |_| page.update(|p| p.toggle_expanded(id))>
          {move || if page.with(|p| p.expanded == Some(id)) { "Hide details" } else { "Show details" }}
        </button>
        <Show when=move || page.with(|p| p.expanded == Some(id)) fallback=|| ()>
          <dl class="details">
            {details
              .iter()
              .map(|d| view! { <dt>{d.label.clone()}</dt><dd>{d.value.clone()}</dd> })
              .collect_view()}
          </dl>
        </Show>

        <div class="row">
          <button class="button" disabled=sold_out on:click=buy>
            {if sold_out { "Sold Out" } else { "Buy Tokens" }}
          </button>
          <button class="button secondary" on:click=open_details>"Details"</button>
        </div>
      </div>
    }
}

fn purchase_modal(
    page: RwSignal<Page>,
    notice: RwSignal<Option<String>>,
    offering: Offering,
) -> Result<View, DashboardError> {
    let bounds = PurchaseBounds::for_offering(&offering)?;
    let offering = Rc::new(offering);
    let quote = {
        let offering = offering.clone();
        create_memo(move |_| page.with(|p| p.quote(&offering).ok()))
    };
    let quantity = Signal::derive(move || quote.get().map_or(bounds.min(), |q| q.quantity));

    let (down, up, enter, confirm) = {
        let (o1, o2, o3, o4) = (offering.clone(), offering.clone(), offering.clone(), offering.clone());
        (
            move |_| page.update(|p| report_step(p.step_down(&o1))),
            move |_| page.update(|p| report_step(p.step_up(&o2))),
            move |raw: String| page.update(|p| report_step(p.enter(&o3, &raw))),
            move |_| match page.try_update(|p| p.confirm(&o4)) {
                Some(Ok(q)) => notice.set(Some(format!(
                    "Purchased {} tokens of {} for ${}",
                    q.quantity,
                    o4.name,
                    grouped(q.total_cost)
                ))),
                Some(Err(err)) => notice.set(Some(err.to_string())),
                None => {}
            },
        )
    };

    let title = format!("Buy {}", offering.name);
    Ok(view! {
      <Modal title=title on_close=move |_| page.update(|p| p.close())>
        <div class="meta">{format!("${} per token", grouped(offering.unit_price))}</div>
        <QuantityStepper
          quantity=quantity
          bounds=bounds
          on_decrement=down
          on_increment=up
          on_enter=enter
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
          <div class="row">
            <span>"Expected Annual Yield"</span>
            <b>
              {move || quote
                .get()
                .map(|q| format!("${}", grouped(q.total_cost * offering.apy / 100.0)))
                .unwrap_or_default()}
            </b>
          </div>
        </div>
        <button class="button" on:click=confirm>"Confirm Purchase"</button>
      </Modal>
    }
    .into_view())
}

fn details_modal(page: RwSignal<Page>, offering: Offering) -> View {
    let title = offering.name.clone();
    view! {
      <Modal title=title on_close=move |_| page.update(|p| p.close())>
        <div class="meta">{offering.location.clone()}</div>
        <dl class="details">
          <dt>"Total Supply"</dt><dd>{grouped(offering.total_supply as f64)}</dd>
          <dt>"Available"</dt><dd>{grouped(offering.available as f64)}</dd>
          <dt>"Purchase Range"</dt><dd>{format!("{} - {}", offering.min_purchase, offering.max_purchase)}</dd>
          {offering
            .details
            .iter()
            .map(|d| view! { <dt>{d.label.clone()}</dt><dd>{d.value.clone()}</dd> })
            .collect_view()}
        </dl>
        <a class="button" href=Route::Asset(offering.id).path()>"Open Asset Page"</a>
      </Modal>
    }
    .into_view()
}

#[component]
pub fn VaultPage() -> impl IntoView {
    let catalog = use_catalog();
    let page = create_rw_signal(Page::default());
    let notice = create_rw_signal(None::<String>);
    let summary = VaultSummary::of(&catalog.offerings);
    let tabs = category_tabs(&catalog.offerings);

    let cards = {
        let catalog = catalog.clone();
        move || {
            page.with(|p| p.visible(&catalog.offerings).into_iter().cloned().collect::<Vec<_>>())
        }
    };
    let modal = move || match page.with(|p| p.mode) {
        VaultMode::Closed => None,
        VaultMode::Purchase(id) => catalog
            .offering(id)
            .cloned()
            .map(|o| purchase_modal(page, notice, o).into_view()),
        VaultMode::Details(id) => catalog.offering(id).cloned().map(|o| details_modal(page, o)),
    };

    view! {
      <div class="stack">
        <div class="grid three">
          <StatCard title="Available Tokens" value=grouped(summary.total_available as f64) />
          <StatCard title="Total Asset Value" value=compact_usd(summary.total_value) />
          <StatCard title="Average APY" value=percent_fixed(summary.avg_apy, 1) />
        </div>

        <div class="tabs">
          {tabs
            .into_iter()
            .map(|tab| {
              let choice = tab.choice.clone();
              let selected = tab.choice.clone();
              view! {
                <button
                  class:selected=move || page.with(|p| p.filter == selected)
                  on:click=move |_| page.update(|p| p.select_tab(choice.clone()))
                >
                  {tab.label} " (" {tab.count} ")"
                </button>
              }
            })
            .collect_view()}
        </div>

        {move || notice.get().map(|n| view! {
          <div class="notice" on:click=move |_| notice.set(None)>{n}</div>
        })}

        <div class="grid three">
          <For
            each=cards
            key=|o| o.id
            children=move |o| offering_card(page, notice, o)
          />
        </div>

        {modal}
      </div>
    }
}
