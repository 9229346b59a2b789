use leptos::*;
use rwa_core::pages::dashboard::{RingGeometry, RingSize};

/// Circular gauge. `value` is a percentage and is clamped to 0..=100.
#[component]
pub fn ProgressIndicator(
    value: f64,
    #[prop(optional)] size: RingSize,
    #[prop(into)] color: String,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let ring = RingGeometry::new(value, size);
    let side = ring.center * 2.0;

    view! {
      <div class="ring">
        <svg width=side height=side viewBox=format!("0 0 {side} {side}")>
          <circle
            cx=ring.center
            cy=ring.center
            r=ring.radius
            fill="none"
            stroke="currentColor"
            stroke-opacity="0.15"
            stroke-width="10"
          />
          <circle
            cx=ring.center
            cy=ring.center
            r=ring.radius
            fill="none"
            stroke=color
            stroke-width="10"
            stroke-linecap="round"
            stroke-dasharray=ring.circumference
            stroke-dashoffset=ring.dash_offset
            transform=format!("rotate(-90 {c} {c})", c = ring.center)
          />
          <text x="50%" y="50%" text-anchor="middle" dominant-baseline="central">
            {format!("{:.0}%", ring.value)}
          </text>
        </svg>
        {label.map(|label| view! { <div class="meta">{label}</div> })}
      </div>
    }
}
