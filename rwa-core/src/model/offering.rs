use rwa_query::aggregate::percent;
use serde::{Deserialize, Serialize};

use super::{AssetStatus, Category, DetailEntry};

/// A tokenized asset offered for fractional purchase in the vault.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub location: String,
    pub total_supply: u64,
    pub available: u64,
    pub unit_price: f64,
    pub min_purchase: u64,
    pub max_purchase: u64,
    pub apy: f64,
    /// USD.
    pub total_value: f64,
    pub status: AssetStatus,
    #[serde(default)]
    pub details: Vec<DetailEntry>,
}

impl Offering {
    /// Largest quantity a single purchase may take.
    pub fn purchase_cap(&self) -> u64 {
        self.max_purchase.min(self.available)
    }

    /// True when not even the minimum purchase can be filled.
    pub fn is_sold_out(&self) -> bool {
        self.purchase_cap() < self.min_purchase
    }

    pub fn availability_pct(&self) -> f64 {
        percent(self.available as f64, self.total_supply as f64)
    }

    /// Ownership share of a single token, in percent.
    pub fn unit_ownership_pct(&self) -> f64 {
        percent(1.0, self.total_supply as f64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiquiditySplit {
    pub primary: f64,
    pub secondary: f64,
}

/// The full record behind `/asset/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetProfile {
    #[serde(flatten)]
    pub offering: Offering,
    pub current_price: f64,
    pub total_return: f64,
    pub expected_income: f64,
    pub investors: u32,
    pub total_liquidity: f64,
    pub liquidity: LiquiditySplit,
    pub ticker: String,
    pub market_link: String,
    pub about: String,
    pub specifications: Vec<DetailEntry>,
}

impl AssetProfile {
    pub fn id(&self) -> u32 {
        self.offering.id
    }

    /// `about` split on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.about.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
    }
}
