use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Build-time variable holding a JSON config document.
pub const CONFIG_ENV: &str = "RWA_DASHBOARD_CONFIG";

/// Dashboard settings. Every field has a default, so `{}` is a valid document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dark_theme: bool,
    pub sidebar_collapsed: bool,
    /// Rows per page in the transaction history.
    pub page_size: usize,
    /// The "today" that date-range filters count back from.
    pub as_of: NaiveDate,
    /// Delay for simulated submits. `None` completes them immediately.
    pub simulated_latency_ms: Option<u64>,
    pub user_voting_power: u64,
    pub governance_token_supply: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dark_theme: true,
            sidebar_collapsed: false,
            page_size: 25,
            as_of: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default(),
            simulated_latency_ms: Some(1500),
            user_voting_power: 25_000,
            governance_token_supply: 100_000_000,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.normalized())
    }

    /// Read the config baked in at build time, or the defaults.
    pub fn load() -> Self {
        match option_env!("RWA_DASHBOARD_CONFIG") {
            None => Self::default(),
            Some(raw) => Self::from_json(raw).unwrap_or_else(|err| {
                tracing::warn!(env = CONFIG_ENV, error = %err, "ignoring config, using defaults");
                Self::default()
            }),
        }
    }

    fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = Self::default().page_size;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.as_of.to_string(), "2024-03-15");
    }

    #[test]
    fn overrides_are_applied() {
        let config = DashboardConfig::from_json(
            r#"{"dark_theme": false, "simulated_latency_ms": null, "as_of": "2024-03-10"}"#,
        )
        .unwrap();
        assert!(!config.dark_theme);
        assert_eq!(config.simulated_latency_ms, None);
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn zero_page_size_falls_back() {
        let config = DashboardConfig::from_json(r#"{"page_size": 0}"#).unwrap();
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn malformed_document_is_a_config_error() {
        let err = DashboardConfig::from_json("{ nope").unwrap_err();
        assert!(err.to_string().starts_with("invalid dashboard config"));
    }
}
