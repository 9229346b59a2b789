use serde::{Deserialize, Serialize};

use super::Trend;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Staking,
    Yield,
    Asset,
    Governance,
}

tags!(ActivityKind {
    Staking => "staking",
    Yield => "yield",
    Asset => "asset",
    Governance => "governance",
});

/// One entry of the dashboard's recent-activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub time: String,
    #[serde(default)]
    pub amount: Option<String>,
}

/// A monthly sample of a performance series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub name: String,
    pub value: f64,
    /// Month-over-month growth, percent.
    pub growth: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatTile {
    pub title: String,
    pub value: String,
    pub change: f64,
    pub trend: Trend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GaugeColor {
    Green,
    Blue,
    Yellow,
    Red,
}

tags!(GaugeColor {
    Green => "green",
    Blue => "blue",
    Yellow => "yellow",
    Red => "red",
});

impl GaugeColor {
    pub fn stroke(self) -> &'static str {
        match self {
            GaugeColor::Green => "#10b981",
            GaugeColor::Blue => "#3b82f6",
            GaugeColor::Yellow => "#f59e0b",
            GaugeColor::Red => "#ef4444",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthGauge {
    pub title: String,
    pub value: f64,
    pub color: GaugeColor,
    pub caption: String,
    pub detail: String,
}
