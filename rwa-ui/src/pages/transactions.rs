use std::str::FromStr;

use leptos::*;
use rwa_core::format::{grouped, percent_fixed, signed_amount, truncate_hash};
use rwa_core::model::{Transaction, TxCategory, TxKind, TxStatus};
use rwa_core::pages::transactions::{DateRange, PageWindow, QuickFilter, TxMode, TxPage, TxSummary};
use rwa_query::Choice;

use crate::components::modal::Modal;
use crate::components::select::ChoiceSelect;
use crate::components::stat_card::StatCard;
use crate::state::{use_catalog, use_config};

/// Owned copy of a `TxView` for the memo.
#[derive(Clone, Debug, PartialEq)]
struct Shown {
    page_rows: Vec<Transaction>,
    summary: TxSummary,
    window: PageWindow,
}

fn amount_class(tx: &Transaction) -> &'static str {
    if tx.is_inflow() {
        "amount ok"
    } else {
        "amount warn"
    }
}

fn tx_row(page: RwSignal<TxPage>, tx: Transaction) -> impl IntoView {
    let id = tx.id;
    view! {
      <tr on:click=move |_| page.update(|p| p.open(id))>
        <td on:click=|ev| ev.stop_propagation()>
          <input
            type="checkbox"
            prop:checked=move || page.with(|p| p.selected.contains(&id))
            on:change=move |_| page.update(|p| p.toggle_selected(id))
          />
        </td>
        <td>
          <div>{tx.date_label()}</div>
          <div class="meta">{tx.time_label()}</div>
        </td>
        <td><span class=format!("badge {}", tx.kind.as_str())>{tx.kind.label()}</span></td>
        <td>
          <div>{tx.description.clone()}</div>
          <div class="meta">{tx.asset.clone()}</div>
        </td>
        <td>{tx.category.label()}</td>
        <td class=amount_class(&tx)>{signed_amount(tx.amount, &tx.currency)}</td>
        <td><span class=format!("badge {}", tx.status.as_str())>{tx.status.as_str()}</span></td>
        <td class="mono">{truncate_hash(&tx.hash)}</td>
      </tr>
    }
}

fn details_modal(page: RwSignal<TxPage>, tx: Transaction) -> impl IntoView {
    view! {
      <Modal title="Transaction Details" on_close=move |_| page.update(|p| p.close())>
        <dl class="details">
          <dt>"Type"</dt><dd>{tx.kind.label()}</dd>
          <dt>"Description"</dt><dd>{tx.description.clone()}</dd>
          <dt>"Details"</dt><dd>{tx.details.clone()}</dd>
          <dt>"Asset"</dt><dd>{tx.asset.clone()}</dd>
          <dt>"Category"</dt><dd>{tx.category.label()}</dd>
          <dt>"Amount"</dt><dd class=amount_class(&tx)>{signed_amount(tx.amount, &tx.currency)}</dd>
          {tx.exchange_rate.clone().map(|r| view! { <dt>"Exchange Rate"</dt><dd>{r}</dd> })}
          <dt>"Status"</dt><dd>{tx.status.as_str()}</dd>
          <dt>"Date"</dt><dd>{format!("{} {}", tx.date_label(), tx.time_label())}</dd>
          <dt>"Hash"</dt><dd class="mono">{tx.hash.clone()}</dd>
          {tx.block_number.map(|b| view! { <dt>"Block"</dt><dd>{grouped(b as f64)}</dd> })}
          {tx.gas_used.clone().map(|g| view! { <dt>"Gas Used"</dt><dd>{g}</dd> })}
        </dl>
      </Modal>
    }
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let catalog = use_catalog();
    let config = use_config();
    let as_of = config.as_of;
    let page = create_rw_signal(TxPage::new(config.page_size));

    let shown = {
        let catalog = catalog.clone();
        create_memo(move |_| {
            page.with(|p| {
                let view = p.view(&catalog.transactions, as_of);
                Shown {
                    page_rows: view.page_rows().iter().map(|&tx| tx.clone()).collect(),
                    summary: view.summary,
                    window: view.window,
                }
            })
        })
    };
    let all_checked = move || {
        shown.with(|s| !s.page_rows.is_empty())
            && page.with(|p| shown.with(|s| s.page_rows.iter().all(|tx| p.selected.contains(&tx.id))))
    };
    let toggle_all = move |_| {
        let rows = shown.with(|s| s.page_rows.clone());
        let refs: Vec<&Transaction> = rows.iter().collect();
        page.update(|p| p.toggle_all(&refs));
    };
    let modal = move || match page.with(|p| p.mode) {
        TxMode::Closed => None,
        TxMode::Details(id) => catalog.transaction(id).cloned().map(|tx| details_modal(page, tx)),
    };

    view! {
      <div class="stack">
        <div class="grid four">
          {move || {
            let s = shown.with(|s| s.summary.clone());
            let flow_sign = if s.net_flow > 0.0 { "+" } else if s.net_flow < 0.0 { "-" } else { "" };
            view! {
              <StatCard title="Total Volume" value=format!("${}", grouped(s.total_volume)) caption=format!("{} transactions", s.count) />
              <StatCard
                title="Success Rate"
                value=percent_fixed(s.success_rate, 1)
                caption=format!("{} completed", s.completed)
              />
              <StatCard title="Net Flow" value=format!("{flow_sign}${}", grouped(s.net_flow.abs())) />
              <StatCard
                title="Most Active"
                value=s.most_active.map_or("-", |c| c.label())
              />
            }
          }}
        </div>

        <div class="card filters">
          <div class="row">
            <input
              type="search"
              placeholder="Search description, asset or hash"
              prop:value=move || page.with(|p| p.filters.search.clone())
              on:input=move |ev| {
                let term = event_target_value(&ev);
                page.update(|p| p.update_filters(|f| f.search = term));
              }
            />
            <select on:change=move |ev| {
              if let Ok(range) = DateRange::from_str(&event_target_value(&ev)) {
                page.update(|p| p.update_filters(|f| f.date_range = range));
              }
            }>
              {DateRange::ALL
                .into_iter()
                .map(|r| view! {
                  <option value=r.as_str() selected=move || page.with(|p| p.filters.date_range == r)>
                    {r.label()}
                  </option>
                })
                .collect_view()}
            </select>
            <ChoiceSelect
              all_label="All Types"
              options=TxKind::ALL.iter().map(|&k| (k, k.label())).collect()
              value=Signal::derive(move || page.with(|p| p.filters.kind.clone()))
              on_change={move |k: Choice<TxKind>| page.update(|p| p.update_filters(|f| f.kind = k))}
            />
            <ChoiceSelect
              all_label="All Categories"
              options=TxCategory::ALL.iter().map(|&c| (c, c.label())).collect()
              value=Signal::derive(move || page.with(|p| p.filters.category.clone()))
              on_change={move |c: Choice<TxCategory>| page.update(|p| p.update_filters(|f| f.category = c))}
            />
            <ChoiceSelect
              all_label="All Status"
              options=TxStatus::ALL.iter().map(|&s| (s, s.as_str())).collect()
              value=Signal::derive(move || page.with(|p| p.filters.status.clone()))
              on_change={move |s: Choice<TxStatus>| page.update(|p| p.update_filters(|f| f.status = s))}
            />
          </div>
          <div class="row chips">
            {QuickFilter::ALL
              .into_iter()
              .map(|chip| view! {
                <button
                  class="chip"
                  class:selected=move || page.with(|p| p.filters.quick.contains(&chip))
                  on:click=move |_| page.update(|p| p.update_filters(|f| f.toggle_quick(chip)))
                >
                  {chip.label()}
                </button>
              })
              .collect_view()}
          </div>
        </div>

        <div class="row meta">
          <span>{move || format!("{} selected", page.with(|p| p.selected.len()))}</span>
          <button
            class="link"
            disabled=move || page.with(|p| p.selected.is_empty())
            on:click=move |_| page.update(|p| p.selected.clear())
          >
            "Clear selection"
          </button>
        </div>

        <Show
          when=move || shown.with(|s| !s.page_rows.is_empty())
          fallback=|| view! { <div class="card empty">"No transactions match your filters."</div> }
        >
          <table class="card table">
            <thead>
              <tr>
                <th><input type="checkbox" prop:checked=all_checked on:change=toggle_all /></th>
                <th>"Date"</th>
                <th>"Type"</th>
                <th>"Description"</th>
                <th>"Category"</th>
                <th>"Amount"</th>
                <th>"Status"</th>
                <th>"Hash"</th>
              </tr>
            </thead>
            <tbody>
              <For
                each=move || shown.with(|s| s.page_rows.clone())
                key=|tx| tx.id
                children=move |tx| tx_row(page, tx)
              />
            </tbody>
          </table>
        </Show>

        <div class="row pager">
          <span class="meta">{move || shown.with(|s| s.window.caption())}</span>
          <div class="row">
            <button
              disabled=move || !shown.with(|s| s.window.has_previous())
              on:click=move |_| page.update(|p| p.previous_page())
            >
              "Previous"
            </button>
            <span>
              {move || {
                let size = page.with(|p| p.page_size.max(1));
                shown.with(|s| format!("Page {} of {}", s.window.start / size + 1, s.window.pages))
              }}
            </span>
            <button
              disabled=move || !shown.with(|s| s.window.has_next())
              on:click=move |_| {
                let window = shown.with(|s| s.window);
                page.update(|p| p.next_page(&window));
              }
            >
              "Next"
            </button>
          </div>
        </div>

        {modal}
      </div>
    }
}
