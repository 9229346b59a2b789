use std::str::FromStr;

use leptos::*;
use rwa_core::format::{compact_usd, grouped, percent_fixed};
use rwa_core::model::{AssetStatus, Category, Listing, ListingType, MarketActivity};
use rwa_core::pages::marketplace::{
    collection_stats, Bounds, MarketFilters, MarketMode, MarketPage as Page, MarketSort, MarketSummary,
    APY_CEILING, OWNERSHIP_CEILING, PRICE_CEILING,
};
use rwa_query::Choice;

use crate::components::modal::Modal;
use crate::components::select::ChoiceSelect;
use crate::components::stat_card::StatCard;
use crate::state::use_catalog;

#[derive(Clone, Copy)]
enum RangeField {
    Price,
    Apy,
    Ownership,
}

impl RangeField {
    fn label(self) -> &'static str {
        match self {
            RangeField::Price => "Price (cUSD)",
            RangeField::Apy => "APY (%)",
            RangeField::Ownership => "Ownership (%)",
        }
    }

    fn ceiling(self) -> f64 {
        match self {
            RangeField::Price => PRICE_CEILING,
            RangeField::Apy => APY_CEILING,
            RangeField::Ownership => OWNERSHIP_CEILING,
        }
    }

    fn get(self, f: &MarketFilters) -> Bounds {
        match self {
            RangeField::Price => f.price,
            RangeField::Apy => f.apy,
            RangeField::Ownership => f.ownership,
        }
    }

    fn get_mut(self, f: &mut MarketFilters) -> &mut Bounds {
        match self {
            RangeField::Price => &mut f.price,
            RangeField::Apy => &mut f.apy,
            RangeField::Ownership => &mut f.ownership,
        }
    }
}

fn range_inputs(page: RwSignal<Page>, field: RangeField) -> impl IntoView {
    let current = move || page.with(|p| field.get(&p.filters));
    view! {
      <div class="range">
        <label class="meta">{field.label()}</label>
        <div class="row">
          <input
            type="number"
            placeholder="Min"
            prop:value=move || current().min.to_string()
            on:change=move |ev| page.update(|p| field.get_mut(&mut p.filters).set_min(&event_target_value(&ev)))
          />
          <input
            type="number"
            placeholder="Max"
            prop:value=move || current().max.to_string()
            on:change=move |ev| {
              page.update(|p| field.get_mut(&mut p.filters).set_max(&event_target_value(&ev), field.ceiling()))
            }
          />
        </div>
      </div>
    }
}

fn listing_card(page: RwSignal<Page>, listing: Listing) -> impl IntoView {
    let id = listing.id;
    view! {
      <div class="card listing" on:click=move |_| page.update(|p| p.open(id))>
        <div class="row">
          <span class="badge">{listing.collection.badge()}</span>
          <button
            class="icon-button"
            class:favorite=move || page.with(|p| p.is_favorite(id))
            on:click=move |ev| {
              ev.stop_propagation();
              page.update(|p| p.toggle_favorite(id));
            }
          >
            {move || if page.with(|p| p.is_favorite(id)) { "♥" } else { "♡" }}
          </button>
        </div>
        <h3>
          {listing.name.clone()}
          {listing.verified.then(|| view! { <span class="verified" title="Verified">" ✓"</span> })}
        </h3>
        <div class="meta">{listing.location.clone()}</div>
        <div class="meta">{listing.specs.clone()}</div>
        <div class="grid two">
          <div>
            <div class="meta">"Price"</div>
            <b>{format!("{} cUSD", grouped(listing.price))}</b>
            <div class="meta">{format!("${}", grouped(listing.usd_price))}</div>
          </div>
          <div><div class="meta">"APY"</div><b class="ok">{percent_fixed(listing.apy, 1)}</b></div>
          <div><div class="meta">"Ownership"</div><b>{percent_fixed(listing.ownership, 2)}</b></div>
          <div>
            <div class="meta">"Risk"</div>
            <b class=format!("risk {}", listing.risk().as_str())>{listing.risk().as_str()}</b>
          </div>
        </div>
        <div class="row meta">
          <span>{listing.trend.arrow()} " " {listing.status.label()}</span>
          {listing.last_sale.map(|s| view! { <span>{format!("Last sale {} cUSD", grouped(s))}</span> })}
        </div>
        {listing.auction_ends.clone().map(|t| view! { <div class="meta">{format!("Auction ends in {t}")}</div> })}
        <button class="button">{listing.listing_type.action()}</button>
      </div>
    }
}

fn details_modal(page: RwSignal<Page>, listing: Listing) -> impl IntoView {
    let title = listing.name.clone();
    view! {
      <Modal title=title on_close=move |_| page.update(|p| p.close())>
        <dl class="details">
          <dt>"Collection"</dt><dd>{listing.collection.label()}</dd>
          <dt>"Owner"</dt><dd>{listing.owner.clone()}</dd>
          <dt>"Location"</dt><dd>{listing.location.clone()}</dd>
          <dt>"Specs"</dt><dd>{listing.specs.clone()}</dd>
          <dt>"Price"</dt><dd>{format!("{} cUSD (${})", grouped(listing.price), grouped(listing.usd_price))}</dd>
          <dt>"Underlying Value"</dt><dd>{compact_usd(listing.asset_value)}</dd>
          <dt>"Ownership"</dt><dd>{percent_fixed(listing.ownership, 2)}</dd>
          <dt>"APY"</dt><dd>{percent_fixed(listing.apy, 1)}</dd>
          <dt>"Offers"</dt><dd>{if listing.has_offers { "Open offers" } else { "None" }}</dd>
        </dl>
        <div class="row">
          <button class="button">{listing.listing_type.action()}</button>
          {(listing.listing_type == ListingType::BuyNow)
            .then(|| view! { <button class="button secondary">"Make Offer"</button> })}
        </div>
      </Modal>
    }
}

fn activity_row(event: MarketActivity) -> impl IntoView {
    let (verb, preposition) = event.event.phrase();
    view! {
      <li class="feed-item">
        <div>
          <b>{verb}</b> " " {event.asset} " " {preposition} " " {format!("{} cUSD", grouped(event.price))}
          <div class="meta">
            {event.from}
            {event.to.map(|to| format!(" → {to}"))}
          </div>
        </div>
        <span class="meta">{event.time}</span>
      </li>
    }
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let catalog = use_catalog();
    let page = create_rw_signal(Page::new(&catalog.listings));
    let collections = catalog.collections.clone();
    let activity = catalog.market_activity.clone();

    let outcome = {
        let catalog = catalog.clone();
        create_memo(move |_| {
            page.with(|p| {
                let (rows, summary) = p.run(&catalog.listings);
                (rows.into_iter().cloned().collect::<Vec<_>>(), summary)
            })
        })
    };
    let summary = move || outcome.with(|(_, s)| s.clone());
    let stats = {
        let collections = collections.clone();
        move || page.with(|p| collection_stats(&collections, &p.filters.category))
    };
    let modal = move || match page.with(|p| p.mode) {
        MarketMode::Closed => None,
        MarketMode::Details(id) => catalog.listing(id).cloned().map(|l| details_modal(page, l)),
    };

    view! {
      <div class="stack">
        <div class="grid four">
          {move || {
            let MarketSummary { count, total_value, avg_apy } = summary();
            let stats = stats();
            view! {
              <StatCard title="Listed oNFTs" value=count.to_string() />
              <StatCard title="Total Value" value=format!("{} cUSD", grouped(total_value)) />
              <StatCard title="Average APY" value=percent_fixed(avg_apy, 1) />
              <StatCard
                title="24h Volume"
                value=compact_usd(stats.volume_24h)
                caption=format!("Floor {} cUSD", grouped(stats.floor))
              />
            }
          }}
        </div>

        <div class="row">
          <button class="link" on:click=move |_| page.update(|p| p.show_collections = !p.show_collections)>
            {move || if page.with(|p| p.show_collections) { "Hide collections" } else { "Show collections" }}
          </button>
          <button class="link" on:click=move |_| page.update(|p| p.show_filters = !p.show_filters)>
            {move || if page.with(|p| p.show_filters) { "Hide filters" } else { "Show filters" }}
          </button>
        </div>

        <Show when=move || page.with(|p| p.show_collections) fallback=|| ()>
          <div class="grid three">
            {collections
              .iter()
              .map(|c| {
                let category = c.category;
                view! {
                  <div
                    class="card collection"
                    class:selected=move || page.with(|p| p.filters.category.selected() == Some(&category))
                    on:click=move |_| page.update(|p| p.filters.toggle_category(category))
                  >
                    <h4>{c.name.clone()}</h4>
                    <div class="row meta">
                      <span>{format!("Floor {} cUSD", grouped(c.floor_price))}</span>
                      <span>{format!("24h {}", compact_usd(c.volume_24h))}</span>
                    </div>
                    <div class="row meta">
                      <span>{format!("{} items", c.items)}</span>
                      <span>{format!("{} owners", c.owners)}</span>
                    </div>
                  </div>
                }
              })
              .collect_view()}
          </div>
        </Show>

        <div class="row filters">
          <input
            type="search"
            placeholder="Search by name or location"
            prop:value=move || page.with(|p| p.filters.search.clone())
            on:input=move |ev| page.update(|p| p.filters.search = event_target_value(&ev))
          />
          <select on:change=move |ev| {
            if let Ok(sort) = MarketSort::from_str(&event_target_value(&ev)) {
              page.update(|p| p.filters.sort = sort);
            }
          }>
            {MarketSort::ALL
              .into_iter()
              .map(|s| view! {
                <option value=s.as_str() selected=move || page.with(|p| p.filters.sort == s)>{s.label()}</option>
              })
              .collect_view()}
          </select>
        </div>

        <Show when=move || page.with(|p| p.show_filters) fallback=|| ()>
          <div class="card filters">
            <div class="row">
              <ChoiceSelect
                all_label="All Categories"
                options=Category::ALL.iter().map(|&c| (c, c.label())).collect()
                value=Signal::derive(move || page.with(|p| p.filters.category.clone()))
                on_change={move |c: Choice<Category>| page.update(|p| p.filters.category = c)}
              />
              <ChoiceSelect
                all_label="All Status"
                options=AssetStatus::ALL.iter().map(|&s| (s, s.label())).collect()
                value=Signal::derive(move || page.with(|p| p.filters.status.clone()))
                on_change={move |s: Choice<AssetStatus>| page.update(|p| p.filters.status = s)}
              />
            </div>
            <div class="grid three">
              {range_inputs(page, RangeField::Price)}
              {range_inputs(page, RangeField::Apy)}
              {range_inputs(page, RangeField::Ownership)}
            </div>
            <button class="button secondary" on:click=move |_| page.update(|p| p.filters.clear())>
              "Clear Filters"
            </button>
          </div>
        </Show>

        <Show
          when=move || outcome.with(|(rows, _)| !rows.is_empty())
          fallback=|| view! { <div class="card empty">"No oNFTs match your filters."</div> }
        >
          <div class="grid three">
            <For
              each=move || outcome.with(|(rows, _)| rows.clone())
              key=|l| l.id
              children=move |l| listing_card(page, l)
            />
          </div>
        </Show>

        <section class="card">
          <h3>"Recent Activity"</h3>
          <ul class="feed">
            {activity.into_iter().map(activity_row).collect_view()}
          </ul>
        </section>

        {modal}
      </div>
    }
}
