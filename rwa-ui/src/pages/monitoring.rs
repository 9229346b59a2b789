use leptos::*;
use rwa_core::format::{grouped, percent_fixed};
use rwa_core::model::{AssetStatus, Category, MonitoredAsset};
use rwa_core::pages::monitoring::{MonitoringFilters, MonitoringTab, Overview};
use rwa_query::Choice;

use crate::components::select::ChoiceSelect;
use crate::components::stat_card::StatCard;
use crate::state::use_catalog;

/// Owned copy of a `MonitoringView`, so it can live in a memo.
#[derive(Clone, Debug, PartialEq)]
struct Shown {
    groups: Vec<(Category, Vec<MonitoredAsset>)>,
    alerting: Vec<MonitoredAsset>,
    overview: Overview,
}

fn live_metrics(asset: &MonitoredAsset) -> impl IntoView {
    let extra = asset
        .temperature
        .map(|t| format!("Temp {t:.0}°C"))
        .or_else(|| asset.occupancy.map(|o| format!("Occupancy {o:.0}%")))
        .or_else(|| asset.generation.map(|g| format!("Output {g:.1} MW")));
    view! {
      <div class="metrics">
        <div>
          <span class="meta">"Utilization"</span>
          <b>{percent_fixed(asset.utilization, 0)}</b>
        </div>
        <div class="bar"><div style=format!("width: {:.0}%", asset.utilization)></div></div>
        <div>
          <span class="meta">"24h Revenue"</span>
          <b>{format!("${}", grouped(asset.revenue_24h))}</b>
        </div>
        {extra.map(|e| view! { <div class="meta">{e}</div> })}
      </div>
    }
}

fn progress_metrics(label: &'static str, value: Option<f64>, note: Option<String>) -> impl IntoView {
    let value = value.unwrap_or(0.0);
    view! {
      <div class="metrics">
        <div>
          <span class="meta">{label}</span>
          <b>{percent_fixed(value, 0)}</b>
        </div>
        <div class="bar"><div style=format!("width: {value:.0}%")></div></div>
        {note.map(|n| view! { <div class="meta">{n}</div> })}
      </div>
    }
}

fn asset_card(tab: MonitoringTab, asset: MonitoredAsset) -> impl IntoView {
    let metrics = match tab {
        MonitoringTab::Live => live_metrics(&asset).into_view(),
        MonitoringTab::Progress => progress_metrics(
            "Setup Progress",
            asset.setup_progress,
            asset.estimated_completion.clone().map(|d| format!("Est. completion {d}")),
        )
        .into_view(),
        MonitoringTab::Presale => {
            progress_metrics("Sold", asset.sale_progress, None).into_view()
        }
    };
    view! {
      <div class="card asset">
        <div class="row">
          <b>{asset.name.clone()}</b>
          <span class=format!("badge {}", asset.status.as_str())>{asset.status.label()}</span>
        </div>
        <div class="meta">{asset.location.clone()}</div>
        {metrics}
        <div class="row meta">
          <span>{asset.trend.arrow()} " " {asset.trend.as_str()}</span>
          <span>{asset.last_update.clone()}</span>
        </div>
        {(!asset.alerts.is_empty()).then(|| view! {
          <ul class="alerts">
            {asset.alerts.iter().map(|a| view! { <li class="warn">{a.clone()}</li> }).collect_view()}
          </ul>
        })}
      </div>
    }
}

#[component]
pub fn MonitoringPage() -> impl IntoView {
    let catalog = use_catalog();
    let filters = create_rw_signal(MonitoringFilters::default());
    let tab = create_memo(move |_| filters.with(|f| f.tab));

    let tab_counts: Vec<(MonitoringTab, usize)> = MonitoringTab::ALL
        .into_iter()
        .map(|t| (t, catalog.monitoring.iter().filter(|a| t.admits(a.status)).count()))
        .collect();

    let shown = create_memo(move |_| {
        filters.with(|f| {
            let view = f.view(&catalog.monitoring);
            Shown {
                groups: view
                    .by_category
                    .iter()
                    .map(|(c, rows)| (*c, rows.iter().map(|&a| a.clone()).collect()))
                    .collect(),
                alerting: view.alerting().into_iter().cloned().collect(),
                overview: view.overview,
            }
        })
    });
    let overview = move || shown.with(|s| s.overview.clone());

    view! {
      <div class="stack">
        <div class="tabs">
          {tab_counts
            .into_iter()
            .map(|(t, count)| view! {
              <button
                class:selected=move || tab.get() == t
                on:click=move |_| filters.update(|f| f.select_tab(t))
              >
                {t.label()} " (" {count} ")"
              </button>
            })
            .collect_view()}
        </div>
        <p class="meta">{move || tab.get().description()}</p>

        <div class="row filters">
          <ChoiceSelect
            all_label="All Types"
            options=Category::ALL.iter().map(|&c| (c, c.label())).collect()
            value=Signal::derive(move || filters.with(|f| f.category.clone()))
            on_change={move |c: Choice<Category>| filters.update(|f| f.category = c)}
          />
          <Show when=move || tab.get().has_status_filter() fallback=|| ()>
            <ChoiceSelect
              all_label="All Status"
              options=AssetStatus::LIVE.iter().map(|&s| (s, s.label())).collect()
              value=Signal::derive(move || filters.with(|f| f.status.clone()))
              on_change={move |s: Choice<AssetStatus>| filters.update(|f| f.status = s)}
            />
          </Show>
        </div>

        <div class="grid four">
          {move || {
            let o = overview();
            let t = tab.get();
            let (avg_title, avg) = o.average_card(t);
            view! {
              <StatCard title="Total Assets" value=o.headline(t) />
              <StatCard title=avg_title value=percent_fixed(avg, 1) />
              {(t == MonitoringTab::Live).then(|| view! {
                <StatCard title="24h Revenue" value=format!("${}", grouped(o.revenue_24h)) />
                <StatCard title="Health" value=percent_fixed(o.health_pct, 0) />
              })}
              <StatCard title="Alerts" value=o.alerting.to_string() />
            }
          }}
        </div>

        <Show when=move || shown.with(|s| !s.alerting.is_empty()) fallback=|| ()>
          <section class="card warn">
            <h3>"Active Alerts"</h3>
            <ul>
              {move || shown.with(|s| {
                s.alerting
                  .iter()
                  .flat_map(|a| a.alerts.iter().map(move |msg| (a.name.clone(), msg.clone())))
                  .map(|(name, msg)| view! { <li><b>{name}</b> ": " {msg}</li> })
                  .collect_view()
              })}
            </ul>
          </section>
        </Show>

        <Show
          when=move || shown.with(|s| !s.groups.is_empty())
          fallback=|| view! { <div class="card empty">"No assets match the selected filters."</div> }
        >
          {move || {
            let t = tab.get();
            shown.with(|s| {
              s.groups
                .iter()
                .map(|(category, rows)| view! {
                  <section>
                    <h3>{category.label()} " (" {rows.len()} ")"</h3>
                    <div class="grid three">
                      {rows.iter().cloned().map(|a| asset_card(t, a)).collect_view()}
                    </div>
                  </section>
                })
                .collect_view()
            })
          }}
        </Show>
      </div>
    }
}
