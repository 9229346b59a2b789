//! Client-side routes.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    RwaVault,
    YieldVaults,
    AssetsMonitoring,
    RwaMarket,
    OnftMarketplace,
    TransactionHistory,
    CusdManagement,
    AiServices,
    Governance,
    ProtocolAnalytics,
    InstitutionsTokenizer,
    Settings,
    /// `/asset/:id`. The id is resolved against the catalog by the page.
    Asset(u32),
    NotFound,
}

/// Sidebar order.
pub const MENU: [Route; 13] = [
    Route::Dashboard,
    Route::RwaVault,
    Route::YieldVaults,
    Route::AssetsMonitoring,
    Route::RwaMarket,
    Route::OnftMarketplace,
    Route::TransactionHistory,
    Route::CusdManagement,
    Route::AiServices,
    Route::Governance,
    Route::ProtocolAnalytics,
    Route::InstitutionsTokenizer,
    Route::Settings,
];

/// Integer id from the `:id` segment. Signs, blanks and overflow are rejected.
pub fn parse_asset_id(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };

        if let Some(id) = trimmed.strip_prefix("/asset/") {
            return parse_asset_id(id).map_or(Route::NotFound, Route::Asset);
        }

        MENU.into_iter()
            .find(|route| route.path() == trimmed)
            .unwrap_or(Route::NotFound)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Asset(id) => format!("/asset/{id}"),
            other => other.static_path().to_string(),
        }
    }

    fn static_path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::RwaVault => "/rwa-vault",
            Route::YieldVaults => "/yield-vaults",
            Route::AssetsMonitoring => "/assets-monitoring",
            Route::RwaMarket => "/rwa-market",
            Route::OnftMarketplace => "/onft-marketplace",
            Route::TransactionHistory => "/transaction-history",
            Route::CusdManagement => "/cusd-management",
            Route::AiServices => "/ai-services",
            Route::Governance => "/governance",
            Route::ProtocolAnalytics => "/protocol-analytics",
            Route::InstitutionsTokenizer => "/institutions-tokenizer",
            Route::Settings => "/settings",
            Route::Asset(_) => "/asset",
            Route::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::RwaVault => "RWA Vault",
            Route::YieldVaults => "Yield Vaults",
            Route::AssetsMonitoring => "Assets Monitoring",
            Route::RwaMarket => "RWA Market",
            Route::OnftMarketplace => "oNFT Marketplace",
            Route::TransactionHistory => "Transaction History",
            Route::CusdManagement => "cUSD Management",
            Route::AiServices => "AI Services",
            Route::Governance => "Governance",
            Route::ProtocolAnalytics => "Protocol Analytics",
            Route::InstitutionsTokenizer => "Institutions Tokenizer",
            Route::Settings => "Settings",
            Route::Asset(_) => "Asset Details",
            Route::NotFound => "Not Found",
        }
    }

    /// Routes that only render a "coming soon" card.
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            Route::RwaMarket
                | Route::CusdManagement
                | Route::AiServices
                | Route::ProtocolAnalytics
                | Route::Settings
        )
    }

    /// Whether the sidebar entry for `self` is highlighted at `current`.
    pub fn is_active(&self, current: &Route) -> bool {
        self == current
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_path_round_trips() {
        for route in MENU {
            assert_eq!(Route::parse(&route.path()), route, "{route}");
        }
    }

    #[test]
    fn asset_ids_are_plain_integers() {
        assert_eq!(Route::parse("/asset/3"), Route::Asset(3));
        assert_eq!(Route::parse("/asset/3/"), Route::Asset(3));
        assert_eq!(Route::parse("/asset/abc"), Route::NotFound);
        assert_eq!(Route::parse("/asset/-1"), Route::NotFound);
        assert_eq!(Route::parse("/asset/+1"), Route::NotFound);
        assert_eq!(Route::parse("/asset/"), Route::NotFound);
        assert_eq!(Route::parse("/asset/99999999999"), Route::NotFound);
    }

    #[test]
    fn unknown_paths_and_query_strings() {
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/governance?tab=active"), Route::Governance);
        assert_eq!(Route::parse("/nowhere"), Route::NotFound);
        assert!(Route::Settings.is_placeholder());
        assert!(!Route::Governance.is_placeholder());
    }
}
