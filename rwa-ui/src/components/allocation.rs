use leptos::*;
use rwa_core::format::{compact_usd, percent_fixed};
use rwa_core::model::AllocationSlice;
use rwa_core::pages::dashboard::allocation_shares;

#[component]
pub fn AssetAllocation(slices: Vec<AllocationSlice>) -> impl IntoView {
    let rows = allocation_shares(&slices)
        .into_iter()
        .map(|(slice, share)| {
            view! {
              <li class="allocation-row">
                <span class="swatch" style=format!("background: {}", slice.color)></span>
                <span class="grow">{slice.name.clone()}</span>
                <span class="meta">{compact_usd(slice.value)}</span>
                <b>{percent_fixed(share, 1)}</b>
                <div class="bar">
                  <div style=format!("width: {share:.1}%; background: {}", slice.color)></div>
                </div>
              </li>
            }
        })
        .collect_view();

    view! {
      <section class="card">
        <h3>"Asset Allocation"</h3>
        <ul class="allocation">{rows}</ul>
      </section>
    }
}
