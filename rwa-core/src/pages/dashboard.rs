//! Landing page: performance chart, allocation and health rings.

use std::f64::consts::PI;

use rwa_query::aggregate::{mean_by, percent, sum_by};

use crate::model::{AllocationSlice, PerformancePoint};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
    /// Total network earnings.
    #[default]
    Tne,
    /// Total value locked.
    Tvl,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Tne, ChartKind::Tvl];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Tne => "TNE",
            ChartKind::Tvl => "TVL",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ChartKind::Tne => "Total network earnings growth over time",
            ChartKind::Tvl => "Total value locked in the protocol",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    Last7Days,
    Last30Days,
    Last3Months,
    Last6Months,
    #[default]
    Last12Months,
    AllTime,
}

impl Period {
    pub const ALL: [Period; 6] = [
        Period::Last7Days,
        Period::Last30Days,
        Period::Last3Months,
        Period::Last6Months,
        Period::Last12Months,
        Period::AllTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Period::Last7Days => "Last 7 days",
            Period::Last30Days => "Last 30 days",
            Period::Last3Months => "Last 3 months",
            Period::Last6Months => "Last 6 months",
            Period::Last12Months => "Last 12 months",
            Period::AllTime => "All time",
        }
    }

    /// Number of trailing monthly samples shown. Short windows still draw a
    /// segment, so they keep two points.
    fn samples(self) -> Option<usize> {
        match self {
            Period::Last7Days | Period::Last30Days => Some(2),
            Period::Last3Months => Some(3),
            Period::Last6Months => Some(6),
            Period::Last12Months => Some(12),
            Period::AllTime => None,
        }
    }

    /// The trailing part of `series` this period covers.
    pub fn window(self, series: &[PerformancePoint]) -> &[PerformancePoint] {
        match self.samples() {
            Some(n) if n < series.len() => &series[series.len() - n..],
            _ => series,
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| format!("unknown Period '{s}'"))
    }
}

/// Headline numbers above the chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSummary {
    pub current: f64,
    pub total_growth: f64,
    /// Mean month-over-month growth, leaving out the first sample.
    pub avg_monthly_growth: f64,
    pub best_month: Option<(String, f64)>,
    pub worst_month: Option<(String, f64)>,
}

impl ChartSummary {
    pub fn from_points(points: &[PerformancePoint]) -> Self {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Self::default();
        };
        let moves: Vec<&PerformancePoint> = points.iter().skip(1).collect();
        let pick = |better: fn(f64, f64) -> bool| {
            moves
                .iter()
                .copied()
                .fold(None::<&PerformancePoint>, |acc, p| match acc {
                    Some(a) if !better(p.growth, a.growth) => Some(a),
                    _ => Some(p),
                })
                .map(|p| (p.name.clone(), p.growth))
        };
        Self {
            current: last.value,
            total_growth: percent(last.value - first.value, first.value),
            avg_monthly_growth: mean_by(&moves, |p| p.growth),
            best_month: pick(|a, b| a > b),
            worst_month: pick(|a, b| a < b),
        }
    }
}

/// Each slice's share of the allocation total, in percent.
pub fn allocation_shares(slices: &[AllocationSlice]) -> Vec<(&AllocationSlice, f64)> {
    let refs: Vec<&AllocationSlice> = slices.iter().collect();
    let total = sum_by(&refs, |s| s.value);
    refs.into_iter()
        .map(|s| (s, percent(s.value, total)))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RingSize {
    #[default]
    Large,
    Small,
}

impl RingSize {
    pub fn radius(self) -> f64 {
        match self {
            RingSize::Large => 60.0,
            RingSize::Small => 36.0,
        }
    }

    pub fn center(self) -> f64 {
        match self {
            RingSize::Large => 80.0,
            RingSize::Small => 48.0,
        }
    }
}

/// SVG stroke parameters for a circular progress ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub value: f64,
    pub radius: f64,
    pub center: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl RingGeometry {
    pub fn new(value: f64, size: RingSize) -> Self {
        let value = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
        let radius = size.radius();
        let circumference = 2.0 * PI * radius;
        Self {
            value,
            radius,
            center: size.center(),
            circumference,
            dash_offset: circumference - value / 100.0 * circumference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(f64, f64)]) -> Vec<PerformancePoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &(value, growth))| PerformancePoint {
                name: format!("M{i}"),
                value,
                growth,
            })
            .collect()
    }

    #[test]
    fn windows_take_trailing_samples() {
        let points = series(&[(1.0, 0.0), (2.0, 1.0), (3.0, 2.0), (4.0, 3.0)]);
        assert_eq!(Period::Last7Days.window(&points).len(), 2);
        assert_eq!(Period::Last3Months.window(&points)[0].value, 2.0);
        assert_eq!(Period::Last12Months.window(&points).len(), 4);
        assert_eq!(Period::AllTime.window(&[]).len(), 0);
    }

    #[test]
    fn summary_of_series() {
        let points = series(&[(100.0, 0.0), (150.0, 50.0), (120.0, -20.0), (200.0, 66.0)]);
        let summary = ChartSummary::from_points(&points);
        assert_eq!(summary.current, 200.0);
        assert_eq!(summary.total_growth, 100.0);
        assert!((summary.avg_monthly_growth - 32.0).abs() < 1e-9);
        assert_eq!(summary.best_month, Some(("M3".to_string(), 66.0)));
        assert_eq!(summary.worst_month, Some(("M2".to_string(), -20.0)));
    }

    #[test]
    fn empty_and_single_sample_series_report_zero() {
        assert_eq!(ChartSummary::from_points(&[]), ChartSummary::default());
        let one = ChartSummary::from_points(&series(&[(0.0, 0.0)]));
        assert_eq!(one.total_growth, 0.0);
        assert_eq!(one.avg_monthly_growth, 0.0);
        assert_eq!(one.best_month, None);
    }

    #[test]
    fn ring_is_clamped() {
        let full = RingGeometry::new(140.0, RingSize::Large);
        assert_eq!(full.value, 100.0);
        assert!(full.dash_offset.abs() < 1e-9);
        let empty = RingGeometry::new(f64::NAN, RingSize::Small);
        assert_eq!(empty.dash_offset, empty.circumference);
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let slices: Vec<AllocationSlice> = [35.0, 25.0, 40.0]
            .iter()
            .map(|&value| AllocationSlice {
                name: String::new(),
                value,
                color: String::new(),
            })
            .collect();
        let total: f64 = allocation_shares(&slices).iter().map(|(_, pct)| pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!(allocation_shares(&[]).is_empty());
    }
}
