use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProposalKind {
    Parameter,
    Upgrade,
    Treasury,
    Governance,
}

tags!(ProposalKind {
    Parameter => "parameter",
    Upgrade => "upgrade",
    Treasury => "treasury",
    Governance => "governance",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProposalStatus {
    Active,
    Passed,
    Failed,
    Pending,
}

tags!(ProposalStatus {
    Active => "active",
    Passed => "passed",
    Failed => "failed",
    Pending => "pending",
});

impl ProposalStatus {
    pub fn is_decided(self) -> bool {
        matches!(self, ProposalStatus::Passed | ProposalStatus::Failed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Impact {
    Low,
    Medium,
    High,
    Critical,
}

tags!(Impact {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoteChoice {
    For,
    Against,
    Abstain,
}

tags!(VoteChoice {
    For => "for",
    Against => "against",
    Abstain => "abstain",
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: ProposalKind,
    pub status: ProposalStatus,
    pub votes_for: u64,
    pub votes_against: u64,
    pub abstain: u64,
    /// Total vote weight needed for the result to count.
    pub quorum: u64,
    pub end_time: String,
    pub impact: Impact,
    pub proposer: String,
    #[serde(default)]
    pub user_vote: Option<VoteChoice>,
}

impl Proposal {
    /// Every cast vote, abstentions included.
    pub fn total_votes(&self) -> u64 {
        self.votes_for + self.votes_against + self.abstain
    }

    pub fn is_open(&self) -> bool {
        self.status == ProposalStatus::Active && self.user_vote.is_none()
    }
}
