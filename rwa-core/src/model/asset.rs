use rwa_query::Searchable;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Gpu,
    RealEstate,
    Energy,
    Financial,
}

tags!(Category {
    Gpu => "gpu",
    RealEstate => "real-estate",
    Energy => "energy",
    Financial => "financial",
});

impl Category {
    /// Plural heading used for tabs and grouped sections.
    pub fn label(self) -> &'static str {
        match self {
            Category::Gpu => "GPU Clusters",
            Category::RealEstate => "Real Estate",
            Category::Energy => "Energy Assets",
            Category::Financial => "Financial Assets",
        }
    }

    /// Upper-case badge text, e.g. `REAL ESTATE`.
    pub fn badge(self) -> String {
        self.as_str().replace('-', " ").to_uppercase()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetStatus {
    Active,
    Maintenance,
    Offline,
    Degraded,
    Preparation,
    Presale,
}

tags!(AssetStatus {
    Active => "active",
    Maintenance => "maintenance",
    Offline => "offline",
    Degraded => "degraded",
    Preparation => "preparation",
    Presale => "presale",
});

impl AssetStatus {
    /// Statuses of assets that are already operating.
    pub const LIVE: [AssetStatus; 4] = [
        AssetStatus::Active,
        AssetStatus::Maintenance,
        AssetStatus::Offline,
        AssetStatus::Degraded,
    ];

    pub fn is_live(self) -> bool {
        Self::LIVE.contains(&self)
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::Offline => "Offline",
            AssetStatus::Degraded => "Degraded",
            AssetStatus::Preparation => "Preparation",
            AssetStatus::Presale => "Presale",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

tags!(Trend {
    Up => "up",
    Down => "down",
    Stable => "stable",
});

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
            Trend::Stable => "→",
        }
    }
}

/// An asset on the monitoring page, in any lifecycle phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Searchable)]
#[search(name, location)]
pub struct MonitoredAsset {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub location: String,
    pub status: AssetStatus,
    /// Percent, 0..=100.
    pub utilization: f64,
    /// USD earned over the last day.
    pub revenue_24h: f64,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub occupancy: Option<f64>,
    /// Megawatts.
    #[serde(default)]
    pub generation: Option<f64>,
    pub trend: Trend,
    pub last_update: String,
    #[serde(default)]
    pub alerts: Vec<String>,
    #[serde(default)]
    pub setup_progress: Option<f64>,
    #[serde(default)]
    pub estimated_completion: Option<String>,
    #[serde(default)]
    pub sale_progress: Option<f64>,
}

impl MonitoredAsset {
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}
