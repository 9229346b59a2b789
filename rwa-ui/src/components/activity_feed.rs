use leptos::*;
use rwa_core::model::{Activity, ActivityKind};

fn glyph(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Staking => "⛁",
        ActivityKind::Yield => "%",
        ActivityKind::Asset => "▣",
        ActivityKind::Governance => "⚖",
    }
}

#[component]
pub fn ActivityFeed(activities: Vec<Activity>) -> impl IntoView {
    view! {
      <section class="card">
        <h3>"Recent Activity"</h3>
        <ul class="feed">
          <For
            each=move || activities.clone()
            key=|a| a.id
            children=move |a| view! {
              <li class=format!("feed-item {}", a.kind.as_str())>
                <span class="feed-icon">{glyph(a.kind)}</span>
                <div>
                  <div><b>{a.title}</b></div>
                  <div class="meta">{a.description}</div>
                </div>
                <div class="feed-side">
                  {a.amount.map(|amount| view! { <div class="amount">{amount}</div> })}
                  <div class="meta">{a.time}</div>
                </div>
              </li>
            }
          />
        </ul>
      </section>
    }
}
