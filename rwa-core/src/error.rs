use thiserror::Error;

/// Errors raised by the dashboard core.
///
/// Field-level input problems are not errors; see [`crate::inquiry::InquiryErrors`].
#[derive(Debug, Error)]
pub enum DashboardError {
    /// An embedded fixture document did not decode.
    #[error("fixture '{dataset}' is malformed: {source}")]
    Fixture {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid dashboard config: {0}")]
    Config(#[from] serde_json::Error),

    /// The offering has fewer tokens left than its minimum purchase.
    #[error("offering {id} is sold out")]
    SoldOut { id: u32 },

    #[error("quantity {quantity} is outside {min}..={max}")]
    InvalidQuantity { quantity: u64, min: u64, max: u64 },

    #[error("no asset with id {0}")]
    UnknownAsset(u32),

    #[error("invalid stake: {0}")]
    InvalidStake(String),
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
