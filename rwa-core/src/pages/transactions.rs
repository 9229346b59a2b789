//! Transaction history: filters, summary cards, selection and paging.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use rwa_query::aggregate::{count_where, group_by, percent, sum_by};
use rwa_query::{Choice, Pipeline, Where};

use crate::model::{Transaction, TxCategory, TxKind, TxStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateRange {
    Last7Days,
    #[default]
    Last30Days,
    Last3Months,
    LastYear,
    All,
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::Last3Months,
        DateRange::LastYear,
        DateRange::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DateRange::Last7Days => "last-7-days",
            DateRange::Last30Days => "last-30-days",
            DateRange::Last3Months => "last-3-months",
            DateRange::LastYear => "last-year",
            DateRange::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::Last3Months => "Last 3 months",
            DateRange::LastYear => "Last year",
            DateRange::All => "All time",
        }
    }

    fn days(self) -> Option<i64> {
        match self {
            DateRange::Last7Days => Some(7),
            DateRange::Last30Days => Some(30),
            DateRange::Last3Months => Some(90),
            DateRange::LastYear => Some(365),
            DateRange::All => None,
        }
    }

    /// Does `date` fall in the `days`-long window ending at `as_of`, inclusive?
    /// Future dates never do.
    pub fn contains(self, date: NaiveDate, as_of: NaiveDate) -> bool {
        match self.days() {
            Some(days) => date <= as_of && date > as_of - Duration::days(days),
            None => true,
        }
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRange::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown DateRange '{s}'"))
    }
}

/// One-click chips above the table. Active chips are ANDed with the
/// select boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuickFilter {
    ThisWeek,
    YieldPayments,
    Trades,
    VaultOperations,
    Large,
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 5] = [
        QuickFilter::ThisWeek,
        QuickFilter::YieldPayments,
        QuickFilter::Trades,
        QuickFilter::VaultOperations,
        QuickFilter::Large,
    ];

    /// Absolute amount above which a transaction counts as large.
    pub const LARGE_AMOUNT: f64 = 1000.0;

    pub fn label(self) -> &'static str {
        match self {
            QuickFilter::ThisWeek => "This Week",
            QuickFilter::YieldPayments => "Yield Payments",
            QuickFilter::Trades => "oNFT Trades",
            QuickFilter::VaultOperations => "Vault Operations",
            QuickFilter::Large => "Large Transactions (>$1000)",
        }
    }

    pub fn admits(self, tx: &Transaction, as_of: NaiveDate) -> bool {
        match self {
            QuickFilter::ThisWeek => DateRange::Last7Days.contains(tx.date, as_of),
            QuickFilter::YieldPayments => tx.kind == TxKind::Yield,
            QuickFilter::Trades => tx.kind.is_trade(),
            QuickFilter::VaultOperations => tx.category == TxCategory::Vault,
            QuickFilter::Large => tx.amount.abs() > Self::LARGE_AMOUNT,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxFilters {
    pub search: String,
    pub date_range: DateRange,
    pub kind: Choice<TxKind>,
    pub category: Choice<TxCategory>,
    pub status: Choice<TxStatus>,
    pub quick: BTreeSet<QuickFilter>,
}

impl TxFilters {
    pub fn pipeline(&self, as_of: NaiveDate) -> Pipeline<Transaction> {
        let range = self.date_range;
        let mut pipeline = Pipeline::<Transaction>::new()
            .search(&self.search)
            .filter(Where::new(range.as_str(), move |tx: &Transaction| {
                range.contains(tx.date, as_of)
            }))
            .choice("kind", self.kind.clone(), |tx| tx.kind)
            .choice("category", self.category.clone(), |tx| tx.category)
            .choice("status", self.status.clone(), |tx| tx.status);
        for &chip in &self.quick {
            pipeline = pipeline.filter(Where::new(chip.label(), move |tx: &Transaction| {
                chip.admits(tx, as_of)
            }));
        }
        pipeline
    }

    pub fn toggle_quick(&mut self, chip: QuickFilter) {
        if !self.quick.remove(&chip) {
            self.quick.insert(chip);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TxSummary {
    pub count: usize,
    /// Sum of absolute amounts.
    pub total_volume: f64,
    pub completed: usize,
    pub success_rate: f64,
    /// Sum of signed amounts.
    pub net_flow: f64,
    /// Category with the most rows; ties go to the earlier category.
    pub most_active: Option<TxCategory>,
}

impl TxSummary {
    fn of(rows: &[&Transaction]) -> Self {
        let completed = count_where(rows, |tx| tx.status == TxStatus::Completed);
        let most_active = group_by(rows, |tx| tx.category)
            .into_iter()
            .max_by(|a, b| a.1.len().cmp(&b.1.len()).then(b.0.cmp(&a.0)))
            .map(|(category, _)| category);
        Self {
            count: rows.len(),
            total_volume: sum_by(rows, |tx| tx.amount.abs()),
            completed,
            success_rate: percent(completed as f64, rows.len() as f64),
            net_flow: sum_by(rows, |tx| tx.amount),
            most_active,
        }
    }
}

/// One page of the table, as half-open row indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub total: usize,
    pub pages: usize,
}

impl PageWindow {
    /// `page` is zero-based and clamped to the last page.
    pub fn new(total: usize, page: usize, size: usize) -> Self {
        let size = size.max(1);
        let pages = total.div_ceil(size).max(1);
        let page = page.min(pages - 1);
        let start = (page * size).min(total);
        Self {
            start,
            end: (start + size).min(total),
            total,
            pages,
        }
    }

    /// `Showing 1-25 of 40 transactions`
    pub fn caption(&self) -> String {
        let first = if self.total == 0 { 0 } else { self.start + 1 };
        format!("Showing {first}-{} of {} transactions", self.end, self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.start > 0
    }

    pub fn has_next(&self) -> bool {
        self.end < self.total
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TxMode {
    #[default]
    Closed,
    Details(u32),
}

#[derive(Debug)]
pub struct TxView<'a> {
    pub rows: Vec<&'a Transaction>,
    pub summary: TxSummary,
    pub window: PageWindow,
}

impl<'a> TxView<'a> {
    pub fn page_rows(&self) -> &[&'a Transaction] {
        &self.rows[self.window.start..self.window.end]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxPage {
    pub filters: TxFilters,
    pub selected: BTreeSet<u32>,
    pub page: usize,
    pub page_size: usize,
    pub mode: TxMode,
}

impl TxPage {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: TxFilters::default(),
            selected: BTreeSet::new(),
            page: 0,
            page_size,
            mode: TxMode::Closed,
        }
    }

    pub fn view<'a>(&self, transactions: &'a [Transaction], as_of: NaiveDate) -> TxView<'a> {
        let outcome = self.filters.pipeline(as_of).run(transactions, TxSummary::of);
        let window = PageWindow::new(outcome.rows.len(), self.page, self.page_size);
        tracing::debug!(
            rows = outcome.rows.len(),
            volume = outcome.summary.total_volume,
            "transaction view"
        );
        TxView {
            rows: outcome.rows,
            summary: outcome.summary,
            window,
        }
    }

    /// Any filter change starts again from the first page.
    pub fn update_filters(&mut self, change: impl FnOnce(&mut TxFilters)) {
        change(&mut self.filters);
        self.page = 0;
    }

    pub fn next_page(&mut self, window: &PageWindow) {
        if window.has_next() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn toggle_selected(&mut self, id: u32) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Header checkbox: select every shown row, or clear if all are selected.
    pub fn toggle_all(&mut self, rows: &[&Transaction]) {
        let all_selected = !rows.is_empty() && rows.iter().all(|tx| self.selected.contains(&tx.id));
        if all_selected {
            for tx in rows {
                self.selected.remove(&tx.id);
            }
        } else {
            self.selected.extend(rows.iter().map(|tx| tx.id));
        }
    }

    pub fn open(&mut self, id: u32) {
        self.mode = TxMode::Details(id);
    }

    pub fn close(&mut self) {
        self.mode = TxMode::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::DashboardConfig;

    fn as_of() -> NaiveDate {
        DashboardConfig::default().as_of
    }

    #[test]
    fn full_history_summary() {
        let catalog = Catalog::load().unwrap();
        let mut page = TxPage::new(25);
        page.filters.date_range = DateRange::All;
        let view = page.view(&catalog.transactions, as_of());
        let s = &view.summary;
        assert_eq!(s.count, 7);
        assert!((s.total_volume - 89_191.3).abs() < 1e-6);
        assert_eq!(s.completed, 5);
        assert!((s.success_rate - 500.0 / 7.0).abs() < 1e-9);
        assert!((s.net_flow + 10_808.7).abs() < 1e-6);
        assert_eq!(s.most_active, Some(TxCategory::RealEstate));
    }

    #[test]
    fn date_windows_end_at_as_of() {
        let as_of = as_of();
        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        assert!(DateRange::Last7Days.contains(day(9), as_of));
        assert!(!DateRange::Last7Days.contains(day(8), as_of));
        assert!(!DateRange::Last30Days.contains(day(16), as_of));
        assert!(DateRange::All.contains(day(16), as_of));
    }

    #[test]
    fn quick_filters_and_selects_combine() {
        let catalog = Catalog::load().unwrap();
        let mut page = TxPage::new(25);
        page.update_filters(|f| f.toggle_quick(QuickFilter::Large));
        assert_eq!(page.view(&catalog.transactions, as_of()).rows.len(), 5);
        page.update_filters(|f| f.toggle_quick(QuickFilter::Trades));
        let ids: Vec<u32> = page
            .view(&catalog.transactions, as_of())
            .rows
            .iter()
            .map(|tx| tx.id)
            .collect();
        assert_eq!(ids, vec![2, 5]);
        page.update_filters(|f| f.status = Choice::Only(TxStatus::Pending));
        assert!(page.view(&catalog.transactions, as_of()).rows.is_empty());
    }

    #[test]
    fn search_matches_hash_and_asset() {
        let catalog = Catalog::load().unwrap();
        let hash = catalog.transaction(3).unwrap().hash.to_uppercase();
        let mut page = TxPage::new(25);
        page.filters.search = hash[..10].to_string();
        let view = page.view(&catalog.transactions, as_of());
        assert!(view.rows.iter().any(|tx| tx.id == 3));
    }

    #[test]
    fn paging_window() {
        let w = PageWindow::new(40, 1, 25);
        assert_eq!((w.start, w.end, w.pages), (25, 40, 2));
        assert_eq!(w.caption(), "Showing 26-40 of 40 transactions");
        assert!(!w.has_next());
        assert_eq!(PageWindow::new(40, 9, 25).start, 25);
        assert_eq!(PageWindow::new(0, 0, 25).caption(), "Showing 0-0 of 0 transactions");
    }

    #[test]
    fn header_checkbox_toggles_visible_rows() {
        let catalog = Catalog::load().unwrap();
        let mut page = TxPage::new(25);
        let rows: Vec<&Transaction> = catalog.transactions.iter().take(3).collect();
        page.toggle_selected(1);
        page.toggle_all(&rows);
        assert_eq!(page.selected.len(), 3);
        page.toggle_all(&rows);
        assert!(page.selected.is_empty());
    }
}
