use leptos::*;
use rwa_core::format::{grouped, millions, percent_fixed};
use rwa_core::model::{Proposal, ProposalStatus, VoteChoice};
use rwa_core::pages::governance::{
    status_tabs, voting_power_display, GovernancePage as Page, Participation, VoteBreakdown,
};
use rwa_query::Choice;

use crate::components::stat_card::StatCard;
use crate::state::{use_catalog, use_config};

const CHOICES: [(VoteChoice, &str); 3] = [
    (VoteChoice::For, "For"),
    (VoteChoice::Against, "Against"),
    (VoteChoice::Abstain, "Abstain"),
];

fn share_bar(label: &'static str, class: &'static str, tally: u64, pct: f64) -> impl IntoView {
    view! {
      <div class="share">
        <div class="row meta">
          <span>{label}</span>
          <span>{format!("{} ({})", millions(tally as f64, 2), percent_fixed(pct, 1))}</span>
        </div>
        <div class="bar"><div class=class style=format!("width: {pct:.1}%")></div></div>
      </div>
    }
}

fn proposal_card(
    proposals: RwSignal<Vec<Proposal>>,
    page: RwSignal<Page>,
    weight: u64,
    proposal: Proposal,
) -> impl IntoView {
    let id = proposal.id;
    let open = proposal.is_open();
    let shares = VoteBreakdown::of(&proposal);
    let ballot_open = move || page.with(|p| p.draft.proposal == Some(id));

    let cast = move |_| {
        let mut draft = page.with_untracked(|p| p.draft);
        let cast = proposals
            .try_update(|ps| ps.iter_mut().find(|p| p.id == id).and_then(|p| draft.cast(p, weight)))
            .flatten();
        if cast.is_some() {
            page.update(|p| p.draft = draft);
        }
    };

    view! {
      <div class="card proposal">
        <div class="row">
          <div class="row">
            <span class="badge">{proposal.kind.as_str()}</span>
            <span class=format!("badge {}", proposal.status.as_str())>{proposal.status.as_str()}</span>
            <span class=format!("badge impact {}", proposal.impact.as_str())>{proposal.impact.as_str()}</span>
          </div>
          <span class="meta">{proposal.end_time.clone()}</span>
        </div>
        <h3>{proposal.title.clone()}</h3>
        <p class="meta">{proposal.description.clone()}</p>
        <div class="meta">{format!("Proposed by {}", proposal.proposer)}</div>

        {share_bar("For", "ok", proposal.votes_for, shares.for_pct)}
        {share_bar("Against", "warn", proposal.votes_against, shares.against_pct)}
        {share_bar("Abstain", "muted", proposal.abstain, shares.abstain_pct)}

        <div class="share">
          <div class="row meta">
            <span>"Quorum"</span>
            <span>
              {format!("{} / {}", millions(shares.total as f64, 2), millions(proposal.quorum as f64, 2))}
              {shares.quorum_reached().then_some(" ✓ reached")}
            </span>
          </div>
          <div class="bar"><div style=format!("width: {:.1}%", shares.quorum_bar())></div></div>
        </div>

        {proposal.user_vote.map(|v| view! { <div class="ok">{format!("You voted {v}")}</div> })}

        <Show when=move || open fallback=|| ()>
          <button class="button" on:click=move |_| page.update(|p| p.draft.toggle(id))>
            {move || if ballot_open() { "Cancel" } else { "Vote" }}
          </button>
        </Show>
        <Show when=ballot_open fallback=|| ()>
          <div class="ballot row">
            {CHOICES
              .into_iter()
              .map(|(choice, label)| view! {
                <button
                  class:selected=move || page.with(|p| p.draft.choice == Some(choice))
                  on:click=move |_| page.update(|p| p.draft.pick(choice))
                >
                  {label}
                </button>
              })
              .collect_view()}
            <button
              class="button"
              disabled=move || page.with(|p| p.draft.choice.is_none())
              on:click=cast
            >
              "Submit Vote"
            </button>
          </div>
        </Show>
      </div>
    }
}

#[component]
pub fn GovernancePage() -> impl IntoView {
    let catalog = use_catalog();
    let config = use_config();
    let weight = config.user_voting_power;
    let proposals = create_rw_signal(catalog.proposals.clone());
    let page = create_rw_signal(Page::default());

    let outcome = create_memo(move |_| {
        proposals.with(|ps| {
            page.with(|p| {
                let (rows, participation) = p.run(ps);
                (rows.into_iter().cloned().collect::<Vec<_>>(), participation)
            })
        })
    });
    let tabs = move || proposals.with(|ps| status_tabs(ps));

    view! {
      <div class="stack">
        <div class="grid four">
          {move || {
            let Participation { votes_cast, avg_quorum_pct, pass_rate } = outcome.with(|(_, s)| s.clone());
            view! {
              <StatCard title="Votes Cast" value=millions(votes_cast as f64, 2) />
              <StatCard title="Avg Quorum" value=percent_fixed(avg_quorum_pct, 1) />
              <StatCard title="Pass Rate" value=percent_fixed(pass_rate, 0) />
            }
          }}
          <StatCard
            title="Your Voting Power"
            value=format!("{}%", voting_power_display(weight, config.governance_token_supply))
            caption=format!("{} tokens", grouped(weight as f64))
          />
        </div>

        <div class="tabs">
          {move || tabs()
            .into_iter()
            .map(|tab| {
              let label = tab.label();
              let choice = tab.choice.clone();
              let current = tab.choice.clone();
              view! {
                <button
                  class:selected=move || page.with(|p| p.filter == current)
                  on:click=move |_| page.update(|p| p.filter = choice.clone())
                >
                  {label} " (" {tab.count} ")"
                </button>
              }
            })
            .collect_view()}
        </div>

        <Show
          when=move || outcome.with(|(rows, _)| !rows.is_empty())
          fallback=move || view! {
            <div class="card empty">
              {move || match page.with(|p| p.filter.clone()) {
                Choice::Only(ProposalStatus::Pending) => "No pending proposals.",
                _ => "No proposals found.",
              }}
            </div>
          }
        >
          <For
            each=move || outcome.with(|(rows, _)| rows.clone())
            key=|p| (p.id, p.total_votes())
            children=move |p| proposal_card(proposals, page, weight, p)
          />
        </Show>
      </div>
    }
}
