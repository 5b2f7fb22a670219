//! Aggregation of scoped collections into chart-ready summaries.

mod chart;
mod model;

pub use chart::{ChartShape, ChartSpec, SINGLE_SERIES_NAME, Series, Slice, render};
pub use model::{AggregateViewModel, Category, CategorySource, aggregate};
