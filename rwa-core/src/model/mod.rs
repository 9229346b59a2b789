//! Read-only records the dashboard renders.
//!
//! Every record is decoded from an embedded fixture and never mutated.
//! Closed enumerations serialize as the kebab-case tags used in the
//! fixtures and in select-box values.

/// Implements `as_str`, `ALL`, `FromStr` and `Display` for a fieldless enum
/// from its tag table. Tags must match the serde renames.
macro_rules! tags {
    ($name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err(format!("unknown {} '{}'", stringify!($name), other)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod asset;
mod listing;
mod offering;
mod overview;
mod proposal;
mod transaction;
mod vault;

use serde::{Deserialize, Serialize};

pub use asset::{AssetStatus, Category, MonitoredAsset, Trend};
pub use listing::{Collection, ListingType, Listing, MarketActivity, MarketEvent, RiskTier};
pub use offering::{AssetProfile, LiquiditySplit, Offering};
pub use overview::{
    Activity, ActivityKind, AllocationSlice, GaugeColor, HealthGauge, PerformancePoint, StatTile,
};
pub use proposal::{Impact, Proposal, ProposalKind, ProposalStatus, VoteChoice};
pub use transaction::{Transaction, TxCategory, TxKind, TxStatus};
pub use vault::{LockPeriod, Tier, YieldVault};

/// A labelled value shown in a details table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailEntry {
    pub label: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_serde_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(category.as_str().parse::<Category>(), Ok(*category));
        }
        for kind in TxKind::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "crypto".parse::<Category>().unwrap_err();
        assert_eq!(err, "unknown Category 'crypto'");
    }
}
