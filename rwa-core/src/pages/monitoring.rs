//! Asset monitoring: lifecycle tabs, type/status filters and fleet health.

use std::collections::BTreeMap;

use rwa_query::aggregate::{count_where, group_by, mean_by, percent, round_half_up, sum_by};
use rwa_query::{Choice, Pipeline, Where};

use crate::model::{AssetStatus, Category, MonitoredAsset};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonitoringTab {
    #[default]
    Live,
    Progress,
    Presale,
}

impl MonitoringTab {
    pub const ALL: [MonitoringTab; 3] = [
        MonitoringTab::Live,
        MonitoringTab::Progress,
        MonitoringTab::Presale,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MonitoringTab::Live => "Live Assets",
            MonitoringTab::Progress => "In Progress",
            MonitoringTab::Presale => "Presale",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MonitoringTab::Live => "Assets currently generating revenue",
            MonitoringTab::Progress => "Assets being prepared for operation",
            MonitoringTab::Presale => "Assets open for early investment",
        }
    }

    /// Which lifecycle statuses belong to the tab.
    pub fn admits(self, status: AssetStatus) -> bool {
        match self {
            MonitoringTab::Live => status.is_live(),
            MonitoringTab::Progress => status == AssetStatus::Preparation,
            MonitoringTab::Presale => status == AssetStatus::Presale,
        }
    }

    /// Only the live tab offers a status select.
    pub fn has_status_filter(self) -> bool {
        self == MonitoringTab::Live
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitoringFilters {
    pub tab: MonitoringTab,
    pub category: Choice<Category>,
    pub status: Choice<AssetStatus>,
}

/// Summary cards, computed over the rows currently shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overview {
    pub total: usize,
    pub active: usize,
    pub avg_utilization: f64,
    /// Zero outside the live tab.
    pub revenue_24h: f64,
    /// Share of shown assets whose status is `active`, percent.
    pub health_pct: f64,
    /// Rounded half up, percent.
    pub avg_setup_progress: f64,
    /// Rounded half up, percent.
    pub avg_sale_progress: f64,
    pub alerting: usize,
}

impl Overview {
    fn summarise(tab: MonitoringTab, rows: &[&MonitoredAsset]) -> Self {
        let total = rows.len();
        let active = count_where(rows, |a| a.status == AssetStatus::Active);
        let denom = total.max(1) as f64;
        Self {
            total,
            active,
            avg_utilization: mean_by(rows, |a| a.utilization),
            revenue_24h: if tab == MonitoringTab::Live {
                sum_by(rows, |a| a.revenue_24h)
            } else {
                0.0
            },
            health_pct: percent(active as f64, total as f64),
            avg_setup_progress: round_half_up(
                sum_by(rows, |a| a.setup_progress.unwrap_or(0.0)) / denom,
            ),
            avg_sale_progress: round_half_up(
                sum_by(rows, |a| a.sale_progress.unwrap_or(0.0)) / denom,
            ),
            alerting: count_where(rows, MonitoredAsset::has_alerts),
        }
    }

    /// The count card: `active/total` on the live tab, plain total elsewhere.
    pub fn headline(&self, tab: MonitoringTab) -> String {
        match tab {
            MonitoringTab::Live => format!("{}/{}", self.active, self.total),
            _ => self.total.to_string(),
        }
    }

    /// The second card's title and value for `tab`.
    pub fn average_card(&self, tab: MonitoringTab) -> (&'static str, f64) {
        match tab {
            MonitoringTab::Live => ("Avg Utilization", self.avg_utilization),
            MonitoringTab::Progress => ("Avg Progress", self.avg_setup_progress),
            MonitoringTab::Presale => ("Avg Sales", self.avg_sale_progress),
        }
    }
}

#[derive(Debug)]
pub struct MonitoringView<'a> {
    pub rows: Vec<&'a MonitoredAsset>,
    /// Shown rows per category; categories with no rows are absent.
    pub by_category: BTreeMap<Category, Vec<&'a MonitoredAsset>>,
    pub overview: Overview,
}

impl<'a> MonitoringView<'a> {
    pub fn alerting(&self) -> Vec<&'a MonitoredAsset> {
        self.rows.iter().copied().filter(|a| a.has_alerts()).collect()
    }
}

impl MonitoringFilters {
    /// Switch tabs. The status select belongs to the live tab, so leaving
    /// it clears that selection.
    pub fn select_tab(&mut self, tab: MonitoringTab) {
        self.tab = tab;
        if !tab.has_status_filter() {
            self.status = Choice::Any;
        }
    }

    pub fn pipeline(&self) -> Pipeline<MonitoredAsset> {
        let tab = self.tab;
        Pipeline::<MonitoredAsset>::new()
            .filter(Where::new("tab", move |a: &MonitoredAsset| tab.admits(a.status)))
            .choice("category", self.category.clone(), |a| a.category)
            .choice("status", self.status.clone(), |a| a.status)
    }

    pub fn view<'a>(&self, assets: &'a [MonitoredAsset]) -> MonitoringView<'a> {
        let tab = self.tab;
        let outcome = self
            .pipeline()
            .run(assets, |rows| Overview::summarise(tab, rows));
        let by_category = group_by(&outcome.rows, |a| a.category);
        tracing::debug!(
            tab = ?tab,
            rows = outcome.rows.len(),
            groups = by_category.len(),
            "monitoring view"
        );
        MonitoringView {
            rows: outcome.rows,
            by_category,
            overview: outcome.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn tabs_partition_lifecycle() {
        let catalog = Catalog::load().unwrap();
        let counts: Vec<usize> = MonitoringTab::ALL
            .iter()
            .map(|&tab| {
                MonitoringFilters {
                    tab,
                    ..Default::default()
                }
                .view(&catalog.monitoring)
                .rows
                .len()
            })
            .collect();
        assert_eq!(counts, vec![5, 3, 4]);
    }

    #[test]
    fn live_overview() {
        let catalog = Catalog::load().unwrap();
        let view = MonitoringFilters::default().view(&catalog.monitoring);
        let o = &view.overview;
        assert_eq!(o.headline(MonitoringTab::Live), "3/5");
        assert!((o.health_pct - 60.0).abs() < 1e-9);
        assert!((o.revenue_24h - 2880.8).abs() < 1e-9);
        assert_eq!(o.alerting, 2);
    }

    #[test]
    fn revenue_only_counts_on_live_tab() {
        let catalog = Catalog::load().unwrap();
        let filters = MonitoringFilters {
            tab: MonitoringTab::Presale,
            ..Default::default()
        };
        let view = filters.view(&catalog.monitoring);
        assert_eq!(view.overview.revenue_24h, 0.0);
        assert_eq!(view.overview.avg_sale_progress, 56.0);
    }

    #[test]
    fn empty_filter_is_all_zero() {
        let catalog = Catalog::load().unwrap();
        let filters = MonitoringFilters {
            tab: MonitoringTab::Progress,
            category: Choice::Only(Category::Financial),
            ..Default::default()
        };
        let view = filters.view(&catalog.monitoring);
        assert!(view.rows.is_empty());
        assert!(view.by_category.is_empty());
        assert_eq!(view.overview, Overview::default());
    }

    #[test]
    fn leaving_live_clears_status() {
        let mut filters = MonitoringFilters {
            status: Choice::Only(AssetStatus::Degraded),
            ..Default::default()
        };
        filters.select_tab(MonitoringTab::Presale);
        assert!(filters.status.is_any());
    }
}
