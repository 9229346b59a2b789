//! Fixture datasets embedded at build time.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{DashboardError, Result};
use crate::model::{
    Activity, AllocationSlice, AssetProfile, Collection, HealthGauge, Listing, MarketActivity,
    MonitoredAsset, Offering, PerformancePoint, Proposal, StatTile, Transaction, YieldVault,
};

const MONITORING: &str = include_str!("../fixtures/monitoring.json");
const OFFERINGS: &str = include_str!("../fixtures/offerings.json");
const PROFILES: &str = include_str!("../fixtures/profiles.json");
const MARKET: &str = include_str!("../fixtures/market.json");
const PROPOSALS: &str = include_str!("../fixtures/proposals.json");
const TRANSACTIONS: &str = include_str!("../fixtures/transactions.json");
const YIELD_VAULTS: &str = include_str!("../fixtures/yield_vaults.json");
const DASHBOARD: &str = include_str!("../fixtures/dashboard.json");

/// Data behind the landing page.
#[derive(Clone, Debug, Deserialize)]
pub struct DashboardData {
    pub tne: Vec<PerformancePoint>,
    pub tvl: Vec<PerformancePoint>,
    pub allocation: Vec<AllocationSlice>,
    pub activities: Vec<Activity>,
    pub stats: Vec<StatTile>,
    pub health: Vec<HealthGauge>,
}

#[derive(Deserialize)]
struct MarketData {
    listings: Vec<Listing>,
    collections: Vec<Collection>,
    activity: Vec<MarketActivity>,
}

/// Every dataset the dashboard renders.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub monitoring: Vec<MonitoredAsset>,
    pub offerings: Vec<Offering>,
    pub profiles: Vec<AssetProfile>,
    pub listings: Vec<Listing>,
    pub collections: Vec<Collection>,
    pub market_activity: Vec<MarketActivity>,
    pub proposals: Vec<Proposal>,
    pub transactions: Vec<Transaction>,
    pub yield_vaults: Vec<YieldVault>,
    pub dashboard: DashboardData,
}

fn decode<T: DeserializeOwned>(dataset: &'static str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| {
        tracing::error!(dataset, error = %source, "fixture did not decode");
        DashboardError::Fixture { dataset, source }
    })
}

impl Catalog {
    pub fn load() -> Result<Self> {
        let market: MarketData = decode("market", MARKET)?;
        let catalog = Self {
            monitoring: decode("monitoring", MONITORING)?,
            offerings: decode("offerings", OFFERINGS)?,
            profiles: decode("profiles", PROFILES)?,
            listings: market.listings,
            collections: market.collections,
            market_activity: market.activity,
            proposals: decode("proposals", PROPOSALS)?,
            transactions: decode("transactions", TRANSACTIONS)?,
            yield_vaults: decode("yield_vaults", YIELD_VAULTS)?,
            dashboard: decode("dashboard", DASHBOARD)?,
        };
        tracing::debug!(
            assets = catalog.monitoring.len(),
            offerings = catalog.offerings.len(),
            listings = catalog.listings.len(),
            transactions = catalog.transactions.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn offering(&self, id: u32) -> Option<&Offering> {
        self.offerings.iter().find(|o| o.id == id)
    }

    pub fn profile(&self, id: u32) -> Option<&AssetProfile> {
        self.profiles.iter().find(|p| p.id() == id)
    }

    pub fn listing(&self, id: u32) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn proposal(&self, id: u32) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.id == id)
    }

    pub fn transaction(&self, id: u32) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn yield_vault(&self, id: u32) -> Option<&YieldVault> {
        self.yield_vaults.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_decodes() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.monitoring.len(), 12);
        assert_eq!(catalog.offerings.len(), 6);
        assert_eq!(catalog.profiles.len(), 7);
        assert_eq!(catalog.listings.len(), 4);
        assert_eq!(catalog.collections.len(), 3);
        assert_eq!(catalog.market_activity.len(), 3);
        assert_eq!(catalog.proposals.len(), 4);
        assert_eq!(catalog.transactions.len(), 7);
        assert_eq!(catalog.yield_vaults.len(), 4);
        assert_eq!(catalog.dashboard.tne.len(), 12);
        assert_eq!(catalog.dashboard.tvl.len(), 12);
    }

    #[test]
    fn lookups_by_id() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.profile(1).map(|p| p.ticker.as_str()), Some("1 NTBM"));
        assert!(catalog.profile(99).is_none());
        assert!(catalog.offering(4).is_some_and(|o| o.is_sold_out()));
        assert_eq!(catalog.proposal(1).map(|p| p.total_votes()), Some(15_750_000));
    }

    #[test]
    fn malformed_fixture_names_the_dataset() {
        let err = decode::<Vec<Proposal>>("proposals", "[{").unwrap_err();
        assert!(matches!(err, DashboardError::Fixture { dataset: "proposals", .. }));
    }
}
