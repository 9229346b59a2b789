//! Per-page state and the values each page derives from the catalog.
//!
//! Each page keeps its transient UI state (tabs, selects, open modal,
//! quantities) in one struct, and modal visibility in one enum so that two
//! modals can never be open at once. List pages build a
//! [`rwa_query::Pipeline`] from their filters and summarise its rows.

pub mod asset_details;
pub mod dashboard;
pub mod governance;
pub mod marketplace;
pub mod monitoring;
pub mod transactions;
pub mod vault;
pub mod yield_vaults;
