use leptos::*;
use rwa_core::model::Trend;

fn change_label(change: f64) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{sign}{change:.1}%")
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(optional)] change: Option<f64>,
    #[prop(optional)] trend: Trend,
    #[prop(optional, into)] caption: Option<String>,
) -> impl IntoView {
    view! {
      <div class="card stat">
        <div class="meta">{title}</div>
        <div class="stat-value">{value}</div>
        {change.map(|change| {
          view! {
            <div class=format!("trend {}", trend.as_str())>
              {trend.arrow()} " " {change_label(change)}
            </div>
          }
        })}
        {caption.map(|caption| view! { <div class="meta">{caption}</div> })}
      </div>
    }
}
