use rwa_core::boundary::{BoundaryState, Capture};
use rwa_core::model::{AssetStatus, Category, TxCategory, TxKind, TxStatus};
use rwa_core::pages::governance::VoteBreakdown;
use rwa_core::pages::marketplace::{Bounds, MarketFilters, MarketPage, MarketSort};
use rwa_core::pages::monitoring::{MonitoringFilters, MonitoringTab, Overview};
use rwa_core::pages::transactions::{DateRange, TxPage};
use rwa_core::stepper::{PurchaseBounds, Quote};
use rwa_core::{Catalog, DashboardConfig};
use rwa_query::Choice;

#[test]
fn clamp_stays_in_bounds_and_is_idempotent() {
    let catalog = Catalog::load().unwrap();
    for offering in catalog.offerings.iter().filter(|o| !o.is_sold_out()) {
        let bounds = PurchaseBounds::for_offering(offering).unwrap();
        let upper = offering.max_purchase.min(offering.available);
        for q in [i64::MIN, -1, 0, 1, 7, 20, 499, 500, 1_000, 1_999, 2_000, 50_000, i64::MAX] {
            let once = bounds.clamp(q);
            assert!(once >= offering.min_purchase && once <= upper, "{q} -> {once}");
            assert_eq!(bounds.clamp(once as i64), once);
        }
    }
}

#[test]
fn market_rows_are_exactly_those_meeting_every_criterion() {
    let catalog = Catalog::load().unwrap();
    let categories = [Choice::Any, Choice::Only(Category::Gpu), Choice::Only(Category::Energy)];
    let searches = ["", "miami", "cluster", "zzz"];
    for category in &categories {
        for search in searches {
            for apy_max in [10.0, 25.0, 50.0] {
                let filters = MarketFilters {
                    category: category.clone(),
                    search: search.to_string(),
                    apy: Bounds::new(0.0, apy_max),
                    sort: MarketSort::Recent,
                    ..MarketFilters::default()
                };
                let page = MarketPage {
                    filters,
                    ..MarketPage::new(&catalog.listings)
                };
                let (rows, _) = page.run(&catalog.listings);
                let expected: Vec<u32> = catalog
                    .listings
                    .iter()
                    .filter(|l| {
                        category.admits(&l.collection)
                            && l.apy <= apy_max
                            && (search.is_empty()
                                || l.name.to_lowercase().contains(search)
                                || l.location.to_lowercase().contains(search))
                    })
                    .map(|l| l.id)
                    .collect();
                let got: Vec<u32> = rows.iter().map(|l| l.id).collect();
                assert_eq!(got, expected, "{category:?} {search:?} {apy_max}");
            }
        }
    }
}

#[test]
fn transaction_rows_are_exactly_those_meeting_every_criterion() {
    let catalog = Catalog::load().unwrap();
    let as_of = DashboardConfig::default().as_of;
    let kinds = [Choice::Any, Choice::Only(TxKind::Buy), Choice::Only(TxKind::Yield)];
    let statuses = [Choice::Any, Choice::Only(TxStatus::Completed), Choice::Only(TxStatus::Failed)];
    let categories = [Choice::Any, Choice::Only(TxCategory::Bridge)];
    for kind in &kinds {
        for status in &statuses {
            for category in &categories {
                let mut page = TxPage::new(25);
                page.filters.kind = kind.clone();
                page.filters.status = status.clone();
                page.filters.category = category.clone();
                let view = page.view(&catalog.transactions, as_of);
                for tx in &catalog.transactions {
                    let expected = kind.admits(&tx.kind)
                        && status.admits(&tx.status)
                        && category.admits(&tx.category)
                        && DateRange::Last30Days.contains(tx.date, as_of);
                    assert_eq!(view.rows.iter().any(|r| r.id == tx.id), expected);
                }
            }
        }
    }
}

#[test]
fn empty_views_report_zero_not_nan() {
    let catalog = Catalog::load().unwrap();

    let monitoring = MonitoringFilters {
        tab: MonitoringTab::Live,
        category: Choice::Only(Category::Financial),
        status: Choice::Only(AssetStatus::Active),
    }
    .view(&catalog.monitoring);
    assert!(monitoring.rows.is_empty());
    assert_eq!(monitoring.overview, Overview::default());
    assert_eq!(monitoring.overview.avg_utilization, 0.0);

    let mut market = MarketPage::new(&catalog.listings);
    market.filters.search = "no such asset".to_string();
    let (rows, summary) = market.run(&catalog.listings);
    assert!(rows.is_empty());
    assert_eq!(summary.avg_apy, 0.0);
    assert_eq!(summary.total_value, 0.0);
}

#[test]
fn first_proposal_vote_shares() {
    let catalog = Catalog::load().unwrap();
    let proposal = catalog.proposal(1).unwrap();
    assert_eq!(proposal.votes_for, 12_500_000);
    assert_eq!(proposal.votes_against, 2_800_000);
    assert_eq!(proposal.abstain, 450_000);
    let shares = VoteBreakdown::of(proposal);
    assert_eq!(shares.total, 15_750_000);
    assert!((shares.for_pct - 12_500_000.0 / 15_750_000.0 * 100.0).abs() < 0.01);
    assert!((shares.for_pct - 79.37).abs() < 0.01);
    assert!((shares.for_pct + shares.against_pct + shares.abstain_pct - 100.0).abs() < 0.01);
}

#[test]
fn every_proposal_shares_sum_to_one_hundred() {
    let catalog = Catalog::load().unwrap();
    for proposal in &catalog.proposals {
        let s = VoteBreakdown::of(proposal);
        assert!((s.for_pct + s.against_pct + s.abstain_pct - 100.0).abs() < 0.01);
    }
}

#[test]
fn hundred_of_ten_thousand_is_one_percent() {
    assert_eq!(Quote::new(100, 25.0, 10_000).ownership_display(), "1.000");
}

#[test]
fn boundary_renders_fallback_once_per_failure() {
    let mut boundary = BoundaryState::default();
    let mut child_renders = 0;
    let mut fallback_renders = 0;

    for frame in 0..5 {
        if boundary.renders_children() {
            child_renders += 1;
            if frame == 1 {
                assert_eq!(boundary.capture("widget exploded"), Capture::Entered);
            }
        } else if boundary.fallback_renders() == 0 {
            assert_eq!(boundary.render_fallback().as_deref(), Some("widget exploded"));
            fallback_renders += 1;
        }
        if boundary.is_failed() {
            assert_eq!(boundary.capture("again"), Capture::AlreadyFailed);
        }
    }

    assert_eq!(child_renders, 2);
    assert_eq!(fallback_renders, 1);
    assert_eq!(boundary.fallback_renders(), 1);

    boundary.reset();
    assert!(boundary.renders_children());
}

#[test]
fn progress_tab_average() {
    let catalog = Catalog::load().unwrap();
    let view = MonitoringFilters {
        tab: MonitoringTab::Progress,
        ..MonitoringFilters::default()
    }
    .view(&catalog.monitoring);
    let mut progress: Vec<f64> = view.rows.iter().filter_map(|a| a.setup_progress).collect();
    progress.sort_by(|a, b| b.total_cmp(a));
    assert_eq!(progress, vec![75.0, 45.0, 30.0]);
    assert_eq!(view.overview.avg_setup_progress, 50.0);
    assert_eq!(view.overview.average_card(MonitoringTab::Progress), ("Avg Progress", 50.0));
}

#[test]
fn empty_transaction_search() {
    let catalog = Catalog::load().unwrap();
    let mut page = TxPage::new(25);
    page.filters.date_range = DateRange::All;
    page.filters.search = "no-such-transaction".to_string();
    let view = page.view(&catalog.transactions, DashboardConfig::default().as_of);
    assert!(view.rows.is_empty());
    assert!(view.page_rows().is_empty());
    assert_eq!(view.summary.total_volume, 0.0);
    assert_eq!(view.summary.success_rate, 0.0);
    assert_eq!(view.summary.most_active, None);
}
