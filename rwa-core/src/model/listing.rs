use rwa_query::Searchable;
use serde::{Deserialize, Serialize};

use super::{AssetStatus, Category, Trend};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingType {
    BuyNow,
    Auction,
}

tags!(ListingType {
    BuyNow => "buy-now",
    Auction => "auction",
});

impl ListingType {
    pub fn action(self) -> &'static str {
        match self {
            ListingType::BuyNow => "Buy Now",
            ListingType::Auction => "Place Bid",
        }
    }
}

/// Risk band derived from APY.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

tags!(RiskTier {
    Low => "low",
    Medium => "medium",
    High => "high",
});

impl RiskTier {
    /// Below 8% is low, below 15% is medium, anything else is high.
    pub fn from_apy(apy: f64) -> Self {
        if apy < 8.0 {
            RiskTier::Low
        } else if apy < 15.0 {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }
}

/// An oNFT listed on the secondary marketplace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Searchable)]
#[search(name, location)]
pub struct Listing {
    pub id: u32,
    pub name: String,
    pub collection: Category,
    /// cUSD.
    pub price: f64,
    pub usd_price: f64,
    pub apy: f64,
    /// Share of the underlying asset, in percent.
    pub ownership: f64,
    pub asset_value: f64,
    pub status: AssetStatus,
    pub trend: Trend,
    pub owner: String,
    pub location: String,
    pub specs: String,
    #[serde(default)]
    pub favorite: bool,
    pub verified: bool,
    pub has_offers: bool,
    #[serde(default)]
    pub last_sale: Option<f64>,
    pub listing_type: ListingType,
    #[serde(default)]
    pub auction_ends: Option<String>,
}

impl Listing {
    pub fn risk(&self) -> RiskTier {
        RiskTier::from_apy(self.apy)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub floor_price: f64,
    pub volume_24h: f64,
    pub items: u32,
    pub owners: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketEvent {
    Sale,
    Listing,
    Offer,
}

tags!(MarketEvent {
    Sale => "sale",
    Listing => "listing",
    Offer => "offer",
});

impl MarketEvent {
    /// Verb and preposition placed before the price.
    pub fn phrase(self) -> (&'static str, &'static str) {
        match self {
            MarketEvent::Sale => ("Sold", "for"),
            MarketEvent::Listing => ("Listed", "for"),
            MarketEvent::Offer => ("Offer", "of"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketActivity {
    pub id: u32,
    pub event: MarketEvent,
    pub asset: String,
    pub price: f64,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_bands() {
        assert_eq!(RiskTier::from_apy(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_apy(7.99), RiskTier::Low);
        assert_eq!(RiskTier::from_apy(8.0), RiskTier::Medium);
        assert_eq!(RiskTier::from_apy(14.99), RiskTier::Medium);
        assert_eq!(RiskTier::from_apy(15.0), RiskTier::High);
        assert_eq!(RiskTier::from_apy(28.5), RiskTier::High);
    }

    #[test]
    fn listing_type_tags() {
        assert_eq!("buy-now".parse::<ListingType>(), Ok(ListingType::BuyNow));
        assert_eq!(ListingType::Auction.action(), "Place Bid");
    }
}
