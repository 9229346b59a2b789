use std::str::FromStr;

use leptos::*;
use rwa_core::format::{compact_usd, percent_fixed};
use rwa_core::model::PerformancePoint;
use rwa_core::pages::dashboard::{ChartKind, ChartSummary, Period};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 200.0;

/// SVG polyline coordinates, scaled to the window's own min and max.
fn polyline(points: &[PerformancePoint]) -> String {
    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });
    let span = if hi > lo { hi - lo } else { 1.0 };
    let step = if points.len() > 1 {
        WIDTH / (points.len() - 1) as f64
    } else {
        0.0
    };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = i as f64 * step;
            let y = HEIGHT - (p.value - lo) / span * HEIGHT;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn signed(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{}", percent_fixed(value, 1))
}

#[component]
pub fn PerformanceChart(tne: Vec<PerformancePoint>, tvl: Vec<PerformancePoint>) -> impl IntoView {
    let kind = create_rw_signal(ChartKind::default());
    let period = create_rw_signal(Period::default());
    let window = create_memo(move |_| {
        let series = match kind.get() {
            ChartKind::Tne => &tne,
            ChartKind::Tvl => &tvl,
        };
        period.get().window(series).to_vec()
    });
    let summary = create_memo(move |_| window.with(|w| ChartSummary::from_points(w)));

    view! {
      <section class="card chart">
        <div class="row">
          <div>
            <h3>{move || kind.get().label()}</h3>
            <div class="meta">{move || kind.get().description()}</div>
          </div>
          <div class="row">
            {ChartKind::ALL
              .into_iter()
              .map(|k| view! {
                <button class:selected=move || kind.get() == k on:click=move |_| kind.set(k)>
                  {k.label()}
                </button>
              })
              .collect_view()}
            <select on:change=move |ev| {
              if let Ok(p) = Period::from_str(&event_target_value(&ev)) {
                period.set(p);
              }
            }>
              {Period::ALL
                .into_iter()
                .map(|p| view! {
                  <option value=p.label() selected=move || period.get() == p>{p.label()}</option>
                })
                .collect_view()}
            </select>
          </div>
        </div>

        <div class="chart-head">
          <span class="stat-value">{move || compact_usd(summary.get().current)}</span>
          <span class={move || if summary.get().total_growth >= 0.0 { "trend up" } else { "trend down" }}>
            {move || signed(summary.get().total_growth)}
          </span>
        </div>

        <svg class="line" viewBox=format!("0 0 {WIDTH} {HEIGHT}") preserveAspectRatio="none">
          <polyline fill="none" stroke="#3b82f6" stroke-width="3" points=move || window.with(|w| polyline(w)) />
        </svg>
        <div class="row meta">
          {move || window.with(|w| w.iter().map(|p| view! { <span>{p.name.clone()}</span> }).collect_view())}
        </div>

        <div class="row meta">
          <span>"Avg monthly: " {move || signed(summary.get().avg_monthly_growth)}</span>
          <span>
            "Best: "
            {move || summary.get().best_month.map(|(m, g)| format!("{m} ({})", signed(g))).unwrap_or_else(|| "-".into())}
          </span>
          <span>
            "Worst: "
            {move || summary.get().worst_month.map(|(m, g)| format!("{m} ({})", signed(g))).unwrap_or_else(|| "-".into())}
          </span>
        </div>
      </section>
    }
}
