//! Domain core of the RWA investment dashboard.
//!
//! Everything here is plain data and pure functions so that it can be
//! tested on the host; `rwa-ui` only renders what these modules compute.

pub mod boundary;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod inquiry;
pub mod model;
pub mod pages;
pub mod route;
pub mod stepper;
pub mod store;

pub use catalog::Catalog;
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
