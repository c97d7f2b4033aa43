//! # mitigate-insights
//!
//! Correlation queries and chart data for the Mitigate dashboard.
//!
//! Every query follows the same shape: index citizens by their normalized
//! identifier, reduce the filtering collections to membership sets, walk the
//! driving collection, and emit one row per record whose citizen passes every
//! membership check and the optional dimension filter. Queries are pure
//! functions over already-loaded records; the caller decides where the
//! records come from.
//!
//! `charts` turns grouped counts into Plotly figure JSON.

pub mod charts;
pub mod error;
pub mod membership;
pub mod queries;
pub mod random;
pub mod table;

#[cfg(test)]
mod test_support;

pub use error::InsightError;
pub use random::{OsRandom, RandomSource};
pub use table::{DimensionFilter, InsightRow, InsightTable};
