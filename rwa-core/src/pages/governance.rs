//! Governance: proposal list, vote breakdowns and the ballot.

use rwa_query::aggregate::{count_where, mean_by, percent};
use rwa_query::{Choice, Pipeline};

use crate::model::{Proposal, ProposalStatus, VoteChoice};

/// Vote shares of one proposal. Every share is a tally over the total, so
/// the three shares add up to 100 (or are all 0 with no votes).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VoteBreakdown {
    pub total: u64,
    pub for_pct: f64,
    pub against_pct: f64,
    pub abstain_pct: f64,
    /// Total votes over the quorum. May exceed 100.
    pub quorum_pct: f64,
}

impl VoteBreakdown {
    pub fn of(proposal: &Proposal) -> Self {
        let total = proposal.total_votes();
        let share = |tally: u64| percent(tally as f64, total as f64);
        Self {
            total,
            for_pct: share(proposal.votes_for),
            against_pct: share(proposal.votes_against),
            abstain_pct: share(proposal.abstain),
            quorum_pct: percent(total as f64, proposal.quorum as f64),
        }
    }

    pub fn quorum_reached(&self) -> bool {
        self.quorum_pct >= 100.0
    }

    /// Width of the quorum progress bar.
    pub fn quorum_bar(&self) -> f64 {
        self.quorum_pct.min(100.0)
    }
}

/// Share of the token supply the user controls, in percent.
pub fn voting_power_pct(power: u64, supply: u64) -> f64 {
    percent(power as f64, supply as f64)
}

/// `0.0250`
pub fn voting_power_display(power: u64, supply: u64) -> String {
    format!("{:.4}", voting_power_pct(power, supply))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusTab {
    pub choice: Choice<ProposalStatus>,
    pub count: usize,
}

impl StatusTab {
    pub fn label(&self) -> &'static str {
        match self.choice {
            Choice::Any => "All",
            Choice::Only(ProposalStatus::Active) => "Active",
            Choice::Only(ProposalStatus::Passed) => "Passed",
            Choice::Only(ProposalStatus::Failed) => "Failed",
            Choice::Only(ProposalStatus::Pending) => "Pending",
        }
    }
}

pub fn status_tabs(proposals: &[Proposal]) -> Vec<StatusTab> {
    let rows: Vec<&Proposal> = proposals.iter().collect();
    std::iter::once(StatusTab {
        choice: Choice::Any,
        count: rows.len(),
    })
    .chain(ProposalStatus::ALL.iter().map(|&status| StatusTab {
        choice: Choice::Only(status),
        count: count_where(&rows, |p| p.status == status),
    }))
    .collect()
}

/// Totals across the proposals shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Participation {
    pub votes_cast: u64,
    pub avg_quorum_pct: f64,
    /// Passed over decided proposals, percent.
    pub pass_rate: f64,
}

impl Participation {
    fn of(rows: &[&Proposal]) -> Self {
        let decided = count_where(rows, |p| p.status.is_decided());
        let passed = count_where(rows, |p| p.status == ProposalStatus::Passed);
        Self {
            votes_cast: rows.iter().map(|p| p.total_votes()).sum(),
            avg_quorum_pct: mean_by(rows, |p| VoteBreakdown::of(p).quorum_pct),
            pass_rate: percent(passed as f64, decided as f64),
        }
    }
}

/// The proposal being voted on and the option picked so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoteDraft {
    pub proposal: Option<u32>,
    pub choice: Option<VoteChoice>,
}

impl VoteDraft {
    /// Open the ballot for `id`, or close it if it is already open.
    pub fn toggle(&mut self, id: u32) {
        *self = if self.proposal == Some(id) {
            Self::default()
        } else {
            Self {
                proposal: Some(id),
                choice: None,
            }
        };
    }

    pub fn pick(&mut self, choice: VoteChoice) {
        if self.proposal.is_some() {
            self.choice = Some(choice);
        }
    }

    /// Record the picked option on `proposal` with the user's voting
    /// `weight`. Only open proposals accept a vote, and only once.
    pub fn cast(&mut self, proposal: &mut Proposal, weight: u64) -> Option<VoteChoice> {
        if self.proposal != Some(proposal.id) || !proposal.is_open() {
            return None;
        }
        let choice = self.choice?;
        match choice {
            VoteChoice::For => proposal.votes_for += weight,
            VoteChoice::Against => proposal.votes_against += weight,
            VoteChoice::Abstain => proposal.abstain += weight,
        }
        proposal.user_vote = Some(choice);
        tracing::info!(proposal = proposal.id, vote = %choice, weight, "vote cast");
        *self = Self::default();
        Some(choice)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GovernancePage {
    pub filter: Choice<ProposalStatus>,
    pub draft: VoteDraft,
}

impl GovernancePage {
    pub fn run<'a>(&self, proposals: &'a [Proposal]) -> (Vec<&'a Proposal>, Participation) {
        let outcome = Pipeline::<Proposal>::new()
            .choice("status", self.filter.clone(), |p| p.status)
            .run(proposals, Participation::of);
        (outcome.rows, outcome.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn breakdown_of_first_proposal() {
        let catalog = Catalog::load().unwrap();
        let b = VoteBreakdown::of(catalog.proposal(1).unwrap());
        assert_eq!(b.total, 15_750_000);
        assert!((b.for_pct - 79.37).abs() < 0.01);
        assert!((b.for_pct + b.against_pct + b.abstain_pct - 100.0).abs() < 0.01);
        assert!(b.quorum_reached());
        assert_eq!(b.quorum_bar(), 100.0);
    }

    #[test]
    fn zero_votes_zero_shares() {
        let catalog = Catalog::load().unwrap();
        let mut p = catalog.proposal(1).unwrap().clone();
        p.votes_for = 0;
        p.votes_against = 0;
        p.abstain = 0;
        let b = VoteBreakdown::of(&p);
        assert_eq!((b.for_pct, b.against_pct, b.abstain_pct, b.quorum_pct), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn voting_power_four_decimals() {
        assert_eq!(voting_power_display(25_000, 100_000_000), "0.0250");
        assert_eq!(voting_power_pct(1, 0), 0.0);
    }

    #[test]
    fn tabs_and_participation() {
        let catalog = Catalog::load().unwrap();
        let counts: Vec<usize> = status_tabs(&catalog.proposals).iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![4, 2, 1, 1, 0]);

        let (rows, summary) = GovernancePage::default().run(&catalog.proposals);
        assert_eq!(rows.len(), 4);
        assert_eq!(summary.votes_cast, 73_550_000);
        assert_eq!(summary.pass_rate, 50.0);

        let page = GovernancePage {
            filter: Choice::Only(ProposalStatus::Pending),
            ..Default::default()
        };
        let (rows, summary) = page.run(&catalog.proposals);
        assert!(rows.is_empty());
        assert_eq!(summary, Participation::default());
    }

    #[test]
    fn ballot_only_counts_once() {
        let catalog = Catalog::load().unwrap();
        let mut proposal = catalog.proposal(1).unwrap().clone();
        let mut draft = VoteDraft::default();
        draft.pick(VoteChoice::For);
        assert_eq!(draft.choice, None);

        draft.toggle(1);
        draft.pick(VoteChoice::Against);
        assert_eq!(draft.cast(&mut proposal, 25_000), Some(VoteChoice::Against));
        assert_eq!(proposal.votes_against, 2_825_000);
        assert!(!proposal.is_open());

        draft.toggle(1);
        draft.pick(VoteChoice::For);
        assert_eq!(draft.cast(&mut proposal, 25_000), None);
    }
}
