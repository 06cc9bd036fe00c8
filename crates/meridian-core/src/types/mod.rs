//! Core types for portfolio risk analytics.

mod series;
mod spec;

pub use series::{PricePoint, PriceSeries};
pub use spec::{AnalysisRequest, Holding, PortfolioSpec, MAX_HOLDINGS};
