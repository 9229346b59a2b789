use chrono::{NaiveDate, NaiveTime};
use rwa_query::Searchable;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TxKind {
    Deposit,
    Withdraw,
    AssetsReturn,
    StakeReturn,
    Buy,
    Sell,
    Yield,
    Bridge,
}

tags!(TxKind {
    Deposit => "deposit",
    Withdraw => "withdraw",
    AssetsReturn => "assets-return",
    StakeReturn => "stake-return",
    Buy => "buy",
    Sell => "sell",
    Yield => "yield",
    Bridge => "bridge",
});

impl TxKind {
    pub fn label(self) -> &'static str {
        match self {
            TxKind::Deposit => "Deposit",
            TxKind::Withdraw => "Withdraw",
            TxKind::AssetsReturn => "Assets Return",
            TxKind::StakeReturn => "Stake Return",
            TxKind::Buy => "Buy",
            TxKind::Sell => "Sell",
            TxKind::Yield => "Yield",
            TxKind::Bridge => "Bridge",
        }
    }

    pub fn is_trade(self) -> bool {
        matches!(self, TxKind::Buy | TxKind::Sell)
    }
}

/// What a transaction touched. Wider than [`super::Category`]: vault and
/// bridge operations are not assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TxCategory {
    Gpu,
    RealEstate,
    Energy,
    Financial,
    Vault,
    Bridge,
}

tags!(TxCategory {
    Gpu => "gpu",
    RealEstate => "real-estate",
    Energy => "energy",
    Financial => "financial",
    Vault => "vault",
    Bridge => "bridge",
});

impl TxCategory {
    pub fn label(self) -> &'static str {
        match self {
            TxCategory::Gpu => "GPU Clusters",
            TxCategory::RealEstate => "Real Estate",
            TxCategory::Energy => "Energy",
            TxCategory::Financial => "Financial Assets",
            TxCategory::Vault => "Vaults",
            TxCategory::Bridge => "Bridge",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TxStatus {
    Completed,
    Pending,
    Failed,
    Processing,
}

tags!(TxStatus {
    Completed => "completed",
    Pending => "pending",
    Failed => "failed",
    Processing => "processing",
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Searchable)]
#[search(description, asset, hash)]
pub struct Transaction {
    pub id: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: TxKind,
    pub description: String,
    pub details: String,
    pub asset: String,
    pub category: TxCategory,
    /// Signed: negative amounts leave the account.
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub exchange_rate: Option<String>,
    pub status: TxStatus,
    pub hash: String,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub gas_used: Option<String>,
}

impl Transaction {
    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }

    /// `Mar 15, 2024`
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    /// `2:34 PM`
    pub fn time_label(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}
