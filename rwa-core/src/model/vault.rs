use serde::{Deserialize, Serialize};

use super::RiskTier;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

tags!(Tier {
    Bronze => "bronze",
    Silver => "silver",
    Gold => "gold",
    Platinum => "platinum",
});

/// Extra APY, in percentage points, for locking a stake for `days`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LockPeriod {
    pub days: u32,
    pub bonus: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YieldVault {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub apy: f64,
    /// Total value locked, USD.
    pub tvl: f64,
    pub risk: RiskTier,
    /// The current user's stake, USD.
    pub user_stake: f64,
    pub yield_sources: Vec<String>,
    pub lock_periods: Vec<LockPeriod>,
    #[serde(default)]
    pub tier: Option<Tier>,
}

impl YieldVault {
    pub fn lock_period(&self, days: u32) -> Option<&LockPeriod> {
        self.lock_periods.iter().find(|p| p.days == days)
    }

    /// Base APY plus the lock bonus; an unknown period adds nothing.
    pub fn effective_apy(&self, days: u32) -> f64 {
        self.apy + self.lock_period(days).map_or(0.0, |p| p.bonus)
    }
}
