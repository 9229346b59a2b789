//! oNFT marketplace: collections, the filter sidebar and the listing grid.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::str::FromStr;

use rwa_query::aggregate::{mean_by, sum_by};
use rwa_query::{Choice, Pipeline};

use crate::model::{AssetStatus, Category, Collection, Listing};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Replace the lower bound from a text field; junk falls back to 0.
    pub fn set_min(&mut self, raw: &str) {
        self.min = parse_bound(raw).unwrap_or(0.0);
    }

    /// Replace the upper bound from a text field; junk falls back to `default`.
    pub fn set_max(&mut self, raw: &str, default: f64) {
        self.max = parse_bound(raw).unwrap_or(default);
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub const PRICE_CEILING: f64 = 1_000_000.0;
pub const APY_CEILING: f64 = 50.0;
pub const OWNERSHIP_CEILING: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarketSort {
    #[default]
    PriceLow,
    PriceHigh,
    ApyHigh,
    /// Catalog order.
    Recent,
}

impl MarketSort {
    pub const ALL: [MarketSort; 4] = [
        MarketSort::PriceLow,
        MarketSort::PriceHigh,
        MarketSort::ApyHigh,
        MarketSort::Recent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MarketSort::PriceLow => "price-low",
            MarketSort::PriceHigh => "price-high",
            MarketSort::ApyHigh => "apy-high",
            MarketSort::Recent => "recent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarketSort::PriceLow => "Price: Low to High",
            MarketSort::PriceHigh => "Price: High to Low",
            MarketSort::ApyHigh => "APY: High to Low",
            MarketSort::Recent => "Recently Listed",
        }
    }

    fn compare(self) -> Option<fn(&Listing, &Listing) -> Ordering> {
        fn price_low(a: &Listing, b: &Listing) -> Ordering {
            a.price.total_cmp(&b.price)
        }
        fn price_high(a: &Listing, b: &Listing) -> Ordering {
            b.price.total_cmp(&a.price)
        }
        fn apy_high(a: &Listing, b: &Listing) -> Ordering {
            b.apy.total_cmp(&a.apy)
        }
        let cmp: fn(&Listing, &Listing) -> Ordering = match self {
            MarketSort::PriceLow => price_low,
            MarketSort::PriceHigh => price_high,
            MarketSort::ApyHigh => apy_high,
            MarketSort::Recent => return None,
        };
        Some(cmp)
    }
}

impl FromStr for MarketSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarketSort::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| format!("unknown MarketSort '{s}'"))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketFilters {
    pub category: Choice<Category>,
    pub status: Choice<AssetStatus>,
    pub price: Bounds,
    pub apy: Bounds,
    pub ownership: Bounds,
    pub search: String,
    pub sort: MarketSort,
}

impl Default for MarketFilters {
    fn default() -> Self {
        Self {
            category: Choice::Any,
            status: Choice::Any,
            price: Bounds::new(0.0, PRICE_CEILING),
            apy: Bounds::new(0.0, APY_CEILING),
            ownership: Bounds::new(0.0, OWNERSHIP_CEILING),
            search: String::new(),
            sort: MarketSort::default(),
        }
    }
}

impl MarketFilters {
    pub fn pipeline(&self) -> Pipeline<Listing> {
        let pipeline = Pipeline::<Listing>::new()
            .choice("category", self.category.clone(), |l| l.collection)
            .choice("status", self.status.clone(), |l| l.status)
            .range("price", self.price.min, self.price.max, |l| l.price)
            .range("apy", self.apy.min, self.apy.max, |l| l.apy)
            .range("ownership", self.ownership.min, self.ownership.max, |l| l.ownership)
            .search(&self.search);
        match self.sort.compare() {
            Some(cmp) => pipeline.sort_by(cmp),
            None => pipeline,
        }
    }

    /// Category cards act as toggles over the category select.
    pub fn toggle_category(&mut self, category: Category) {
        self.category = std::mem::take(&mut self.category).toggled(category);
    }

    pub fn clear(&mut self) {
        *self = Self {
            sort: self.sort,
            ..Self::default()
        };
    }
}

/// Numbers above the grid, over the listings currently shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketSummary {
    pub count: usize,
    /// Sum of listing prices, cUSD.
    pub total_value: f64,
    pub avg_apy: f64,
}

impl MarketSummary {
    fn of(rows: &[&Listing]) -> Self {
        Self {
            count: rows.len(),
            total_value: sum_by(rows, |l| l.price),
            avg_apy: mean_by(rows, |l| l.apy),
        }
    }
}

/// Collection cards matching the category selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionStats {
    pub volume_24h: f64,
    /// Lowest floor among the shown collections, 0 when none are shown.
    pub floor: f64,
}

pub fn collection_stats(collections: &[Collection], category: &Choice<Category>) -> CollectionStats {
    let rows = Pipeline::<Collection>::new()
        .choice("category", category.clone(), |c| c.category)
        .apply(collections);
    CollectionStats {
        volume_24h: sum_by(&rows, |c| c.volume_24h),
        floor: rows
            .iter()
            .map(|c| c.floor_price)
            .min_by(f64::total_cmp)
            .unwrap_or(0.0),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarketMode {
    #[default]
    Closed,
    Details(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketPage {
    pub filters: MarketFilters,
    pub favorites: BTreeSet<u32>,
    pub mode: MarketMode,
    pub show_filters: bool,
    pub show_collections: bool,
}

impl MarketPage {
    /// Favorites start from the listings flagged in the catalog.
    pub fn new(listings: &[Listing]) -> Self {
        Self {
            filters: MarketFilters::default(),
            favorites: listings.iter().filter(|l| l.favorite).map(|l| l.id).collect(),
            mode: MarketMode::Closed,
            show_filters: true,
            show_collections: true,
        }
    }

    pub fn run<'a>(&self, listings: &'a [Listing]) -> (Vec<&'a Listing>, MarketSummary) {
        let outcome = self.filters.pipeline().run(listings, MarketSummary::of);
        tracing::debug!(rows = outcome.rows.len(), sort = self.filters.sort.as_str(), "market view");
        (outcome.rows, outcome.summary)
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    pub fn toggle_favorite(&mut self, id: u32) {
        if !self.favorites.remove(&id) {
            self.favorites.insert(id);
        }
    }

    pub fn open(&mut self, id: u32) {
        self.mode = MarketMode::Details(id);
    }

    pub fn close(&mut self) {
        self.mode = MarketMode::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(rows: &[&Listing]) -> Vec<u32> {
        rows.iter().map(|l| l.id).collect()
    }

    #[test]
    fn default_sort_is_price_ascending() {
        let catalog = Catalog::load().unwrap();
        let page = MarketPage::new(&catalog.listings);
        let (rows, summary) = page.run(&catalog.listings);
        assert_eq!(ids(&rows), vec![3, 1, 4, 2]);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.total_value, 895_000.0);
    }

    #[test]
    fn other_sorts() {
        let catalog = Catalog::load().unwrap();
        let mut page = MarketPage::new(&catalog.listings);
        page.filters.sort = MarketSort::ApyHigh;
        assert_eq!(ids(&page.run(&catalog.listings).0), vec![4, 1, 3, 2]);
        page.filters.sort = MarketSort::Recent;
        assert_eq!(ids(&page.run(&catalog.listings).0), vec![1, 2, 3, 4]);
    }

    #[test]
    fn every_dimension_narrows() {
        let catalog = Catalog::load().unwrap();
        let mut page = MarketPage::new(&catalog.listings);
        page.filters.toggle_category(Category::Gpu);
        assert_eq!(ids(&page.run(&catalog.listings).0), vec![1, 4]);
        page.filters.apy.set_max("25", APY_CEILING);
        assert_eq!(ids(&page.run(&catalog.listings).0), vec![1]);
        page.filters.search = "nevada".to_string();
        let (rows, summary) = page.run(&catalog.listings);
        assert!(rows.is_empty());
        assert_eq!(summary, MarketSummary::default());

        page.filters.clear();
        page.filters.toggle_category(Category::Gpu);
        page.filters.toggle_category(Category::Gpu);
        assert!(page.filters.category.is_any());
    }

    #[test]
    fn bounds_fall_back_on_junk() {
        let mut bounds = Bounds::new(10.0, 20.0);
        bounds.set_min("abc");
        bounds.set_max("", PRICE_CEILING);
        assert_eq!(bounds, Bounds::new(0.0, PRICE_CEILING));
    }

    #[test]
    fn favorites_seeded_and_toggled() {
        let catalog = Catalog::load().unwrap();
        let mut page = MarketPage::new(&catalog.listings);
        assert!(page.is_favorite(2) && page.is_favorite(4));
        page.toggle_favorite(2);
        page.toggle_favorite(1);
        assert_eq!(page.favorites.iter().copied().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn collection_volume_follows_category() {
        let catalog = Catalog::load().unwrap();
        let all = collection_stats(&catalog.collections, &Choice::Any);
        assert_eq!(all.volume_24h, 9_520_000.0);
        assert_eq!(all.floor, 35_000.0);
        let none = collection_stats(&catalog.collections, &Choice::Only(Category::Financial));
        assert_eq!(none, CollectionStats::default());
    }
}
