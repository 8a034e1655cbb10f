//! Shop Pulse Analytics - Dashboard data layer.
//!
//! Builds a synthetic store dataset and derives every dashboard view from it.
//!
//! # Architecture
//!
//! Data flows one way: [`generate`] builds the base collections once, the
//! pure functions in [`derive`] turn them into chart and KPI series, and
//! [`table`] sorts and filters rows for display. Nothing is mutated after
//! generation.
//!
//! # Modules
//!
//! - [`config`] - Dataset settings loaded from the environment
//! - [`weighted`] - Cumulative-weight sampling
//! - [`models`] - Record types for each collection
//! - [`generate`] - Seeded synthetic data generators
//! - [`derive`] - Counts, percentages, rankings, cohorts, ROI and revenue targets
//! - [`table`] - Column sorting, order filters and table layout

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod derive;
pub mod error;
pub mod generate;
pub mod models;
pub mod table;
pub mod weighted;

pub use config::{ConfigError, DashboardConfig};
pub use derive::Segment;
pub use error::{AnalyticsError, Result};
pub use generate::Dataset;
pub use table::{OrderFilter, SortDirection, SortState, Sortable, sort_rows};
pub use weighted::WeightedTable;
