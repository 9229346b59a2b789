//! `/asset/:id`: one asset's profile and its purchase modal.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::AssetProfile;
use crate::route::{parse_asset_id, Route};
use crate::stepper::{PurchaseBounds, QuantityBook, Quote};

/// Result of resolving the `:id` path segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AssetLookup<'a> {
    Found(&'a AssetProfile),
    /// Carries the raw segment's id, or `None` when it was not an integer.
    NotFound(Option<u32>),
}

impl<'a> AssetLookup<'a> {
    pub fn resolve(catalog: &'a Catalog, segment: &str) -> Self {
        let id = parse_asset_id(segment);
        match id.and_then(|id| catalog.profile(id)) {
            Some(profile) => AssetLookup::Found(profile),
            None => {
                tracing::debug!(segment, "asset not found");
                AssetLookup::NotFound(id)
            }
        }
    }

    /// Where the not-found view sends the user.
    pub fn escape_route() -> Route {
        Route::RwaVault
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Details,
    Financials,
    Blockchain,
    Offering,
    Trading,
}

impl DetailTab {
    pub const ALL: [DetailTab; 5] = [
        DetailTab::Details,
        DetailTab::Financials,
        DetailTab::Blockchain,
        DetailTab::Offering,
        DetailTab::Trading,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Details => "Details",
            DetailTab::Financials => "Financials",
            DetailTab::Blockchain => "Blockchain",
            DetailTab::Offering => "Offering",
            DetailTab::Trading => "Trading History",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetMode {
    #[default]
    Closed,
    Purchase,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetDetailsPage {
    pub tab: DetailTab,
    pub mode: AssetMode,
    pub quantities: QuantityBook,
}

impl AssetDetailsPage {
    pub fn open_purchase(&mut self, profile: &AssetProfile) -> Result<()> {
        let bounds = PurchaseBounds::for_offering(&profile.offering)?;
        self.quantities.ensure(profile.id(), &bounds);
        self.mode = AssetMode::Purchase;
        Ok(())
    }

    pub fn close(&mut self) {
        self.mode = AssetMode::Closed;
    }

    pub fn set_quantity(&mut self, profile: &AssetProfile, quantity: i64) -> Result<u64> {
        let bounds = PurchaseBounds::for_offering(&profile.offering)?;
        Ok(self.quantities.set(profile.id(), &bounds, quantity))
    }

    pub fn enter(&mut self, profile: &AssetProfile, raw: &str) -> Result<u64> {
        let bounds = PurchaseBounds::for_offering(&profile.offering)?;
        Ok(self.quantities.enter(profile.id(), &bounds, raw))
    }

    pub fn step_up(&mut self, profile: &AssetProfile) -> Result<u64> {
        let bounds = PurchaseBounds::for_offering(&profile.offering)?;
        Ok(self.quantities.increment(profile.id(), &bounds))
    }

    pub fn step_down(&mut self, profile: &AssetProfile) -> Result<u64> {
        let bounds = PurchaseBounds::for_offering(&profile.offering)?;
        Ok(self.quantities.decrement(profile.id(), &bounds))
    }

    pub fn quote(&self, profile: &AssetProfile) -> Result<Quote> {
        let bounds = PurchaseBounds::for_offering(&profile.offering)?;
        let quantity = self.quantities.get(profile.id(), &bounds);
        Ok(Quote::for_offering(&profile.offering, quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_found_and_missing() {
        let catalog = Catalog::load().unwrap();
        assert!(matches!(
            AssetLookup::resolve(&catalog, "2"),
            AssetLookup::Found(p) if p.id() == 2
        ));
        assert_eq!(AssetLookup::resolve(&catalog, "999"), AssetLookup::NotFound(Some(999)));
        assert_eq!(AssetLookup::resolve(&catalog, "abc"), AssetLookup::NotFound(None));
        assert_eq!(AssetLookup::escape_route().path(), "/rwa-vault");
    }

    #[test]
    fn purchase_stays_in_bounds() {
        let catalog = Catalog::load().unwrap();
        let profile = catalog.profile(2).unwrap();
        let bounds = PurchaseBounds::for_offering(&profile.offering).unwrap();
        let mut page = AssetDetailsPage::default();
        page.open_purchase(profile).unwrap();
        assert_eq!(page.quote(profile).unwrap().quantity, bounds.min());
        assert_eq!(page.set_quantity(profile, 1_000_000).unwrap(), bounds.upper());
        assert_eq!(page.step_up(profile).unwrap(), bounds.upper());
        assert_eq!(page.enter(profile, "-4").unwrap(), bounds.min());
        page.close();
        assert_eq!(page.mode, AssetMode::Closed);
    }
}
