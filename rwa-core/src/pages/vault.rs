//! RWA vault: category tabs, offering cards and the purchase modal.

use rwa_query::aggregate::{count_where, mean_by, sum_by};
use rwa_query::{Choice, Pipeline};

use crate::error::{DashboardError, Result};
use crate::model::{Category, Offering};
use crate::stepper::{PurchaseBounds, QuantityBook, Quote};

/// One entry of the tab strip, with the number of offerings it shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTab {
    pub choice: Choice<Category>,
    pub label: &'static str,
    pub count: usize,
}

pub fn category_tabs(offerings: &[Offering]) -> Vec<CategoryTab> {
    let all: Vec<&Offering> = offerings.iter().collect();
    let mut tabs = vec![CategoryTab {
        choice: Choice::Any,
        label: "All Assets",
        count: all.len(),
    }];
    tabs.extend(Category::ALL.iter().map(|&category| CategoryTab {
        choice: Choice::Only(category),
        label: category.label(),
        count: count_where(&all, |o| o.category == category),
    }));
    tabs
}

/// Header cards. Always over the whole vault, not the selected tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VaultSummary {
    pub total_available: u64,
    pub total_value: f64,
    pub avg_apy: f64,
}

impl VaultSummary {
    pub fn of(offerings: &[Offering]) -> Self {
        let rows: Vec<&Offering> = offerings.iter().collect();
        Self {
            total_available: offerings.iter().map(|o| o.available).sum(),
            total_value: sum_by(&rows, |o| o.total_value),
            avg_apy: mean_by(&rows, |o| o.apy),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VaultMode {
    #[default]
    Closed,
    Purchase(u32),
    Details(u32),
}

/// Page state for the vault.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VaultPage {
    pub filter: Choice<Category>,
    /// Card whose details are expanded.
    pub expanded: Option<u32>,
    pub mode: VaultMode,
    pub quantities: QuantityBook,
}

impl VaultPage {
    pub fn visible<'a>(&self, offerings: &'a [Offering]) -> Vec<&'a Offering> {
        Pipeline::<Offering>::new()
            .choice("category", self.filter.clone(), |o| o.category)
            .apply(offerings)
    }

    pub fn select_tab(&mut self, choice: Choice<Category>) {
        self.filter = choice;
    }

    pub fn toggle_expanded(&mut self, id: u32) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    /// Open the purchase modal, seeding the quantity with the minimum.
    pub fn open_purchase(&mut self, offering: &Offering) -> Result<()> {
        let bounds = PurchaseBounds::for_offering(offering)?;
        self.quantities.ensure(offering.id, &bounds);
        self.mode = VaultMode::Purchase(offering.id);
        Ok(())
    }

    pub fn open_details(&mut self, offering: &Offering) {
        self.mode = VaultMode::Details(offering.id);
    }

    pub fn close(&mut self) {
        self.mode = VaultMode::Closed;
    }

    pub fn quantity(&self, offering: &Offering) -> Result<u64> {
        let bounds = PurchaseBounds::for_offering(offering)?;
        Ok(self.quantities.get(offering.id, &bounds))
    }

    pub fn quote(&self, offering: &Offering) -> Result<Quote> {
        Ok(Quote::for_offering(offering, self.quantity(offering)?))
    }

    pub fn step_up(&mut self, offering: &Offering) -> Result<u64> {
        let bounds = PurchaseBounds::for_offering(offering)?;
        Ok(self.quantities.increment(offering.id, &bounds))
    }

    pub fn step_down(&mut self, offering: &Offering) -> Result<u64> {
        let bounds = PurchaseBounds::for_offering(offering)?;
        Ok(self.quantities.decrement(offering.id, &bounds))
    }

    /// Slider or number field input.
    pub fn enter(&mut self, offering: &Offering, raw: &str) -> Result<u64> {
        let bounds = PurchaseBounds::for_offering(offering)?;
        Ok(self.quantities.enter(offering.id, &bounds, raw))
    }

    /// Confirm the purchase currently shown in the modal.
    ///
    /// No settlement happens; the quote is returned and the modal closes.
    pub fn confirm(&mut self, offering: &Offering) -> Result<Quote> {
        if self.mode != VaultMode::Purchase(offering.id) {
            return Err(DashboardError::UnknownAsset(offering.id));
        }
        let bounds = PurchaseBounds::for_offering(offering)?;
        let quantity = bounds.validate(self.quantities.get(offering.id, &bounds))?;
        let quote = Quote::for_offering(offering, quantity);
        tracing::info!(
            id = offering.id,
            quantity,
            total = quote.total_cost,
            "purchase confirmed"
        );
        self.close();
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn tabs_count_each_category() {
        let catalog = Catalog::load().unwrap();
        let tabs = category_tabs(&catalog.offerings);
        let counts: Vec<usize> = tabs.iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![6, 2, 2, 2, 0]);
    }

    #[test]
    fn summary_over_whole_vault() {
        let catalog = Catalog::load().unwrap();
        let summary = VaultSummary::of(&catalog.offerings);
        assert_eq!(summary.total_available, 48_000);
        assert_eq!(summary.total_value, 27_590_000.0);
        assert!((summary.avg_apy - 13.466_666).abs() < 1e-4);
        assert_eq!(VaultSummary::of(&[]), VaultSummary::default());
    }

    #[test]
    fn sold_out_offering_never_opens() {
        let catalog = Catalog::load().unwrap();
        let sold_out = catalog.offering(4).unwrap();
        let mut page = VaultPage::default();
        assert!(matches!(
            page.open_purchase(sold_out),
            Err(DashboardError::SoldOut { id: 4 })
        ));
        assert_eq!(page.mode, VaultMode::Closed);
    }

    #[test]
    fn purchase_flow() {
        let catalog = Catalog::load().unwrap();
        let gpu = catalog.offering(1).unwrap();
        let mut page = VaultPage::default();
        page.open_purchase(gpu).unwrap();
        assert_eq!(page.mode, VaultMode::Purchase(1));
        assert_eq!(page.quantity(gpu).unwrap(), 10);

        assert_eq!(page.enter(gpu, "100").unwrap(), 100);
        let quote = page.quote(gpu).unwrap();
        assert_eq!(quote.total_cost, 2500.0);
        assert_eq!(quote.ownership_display(), "1.000");

        page.confirm(gpu).unwrap();
        assert_eq!(page.mode, VaultMode::Closed);
        assert!(page.confirm(gpu).is_err());
    }

    #[test]
    fn filter_and_expand() {
        let catalog = Catalog::load().unwrap();
        let mut page = VaultPage::default();
        page.select_tab(Choice::Only(Category::Energy));
        let ids: Vec<u32> = page.visible(&catalog.offerings).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 6]);
        page.toggle_expanded(3);
        assert_eq!(page.expanded, Some(3));
        page.toggle_expanded(3);
        assert_eq!(page.expanded, None);
    }
}
