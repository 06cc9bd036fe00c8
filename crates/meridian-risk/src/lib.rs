//! # Meridian Risk
//!
//! Portfolio risk and performance metrics from historical price series.
//!
//! The crate implements a deterministic pipeline: per-ticker price series
//! are aligned onto a common trading calendar, converted to daily simple
//! returns, composed into a weighted portfolio series, and fanned out into
//! independent estimators.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all inputs explicit, no I/O, no caching, no global
//!   state; identical inputs produce identical outputs
//! - **Hard vs. soft failure**: bad input aborts the request with a typed
//!   error; an inapplicable metric degrades to null/absence while the rest
//!   of the result is still produced
//! - **Config-driven constants**: annualization, base value, window lengths
//!   and bin counts come from [`EngineConfig`], never inline literals
//!
//! ## Pipeline
//!
//! - [`align`] - trading-day inner join across tickers and benchmark
//! - [`returns`] - daily simple returns per column
//! - [`portfolio`] - weighted composition and value compounding
//! - [`stats`] - volatility, Sharpe, VaR, drawdown, beta
//! - [`correlation`] - pairwise Pearson matrix
//! - [`rolling`] - trailing-window annualized volatility
//! - [`distribution`] - return histogram
//! - [`stress`] - historical crisis-window replay
//! - [`engine`] - the [`RiskEngine`] orchestrating all of the above
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meridian_risk::prelude::*;
//!
//! let request = AnalysisRequest::new(tickers, weights, start, end);
//! let engine = RiskEngine::new();
//! let result = engine.analyze(&request, &price_series, Some(&spy))?;
//!
//! println!("sharpe: {:?}", result.metrics.sharpe_ratio);
//! println!("95% daily VaR: {}", result.metrics.var.daily.historical_95);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: rayon-based parallel processing of per-ticker columns

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod align;
pub mod correlation;
pub mod distribution;
pub mod engine;
pub mod parallel;
pub mod portfolio;
pub mod result;
pub mod returns;
pub mod rolling;
pub mod stats;
pub mod stress;

// Re-export error and core types at crate root
pub use meridian_core::{
    AnalysisRequest, EngineConfig, Holding, PortfolioSpec, PricePoint, PriceSeries, RiskError,
    RiskResult,
};

// Re-export the pipeline surface
pub use align::{align as align_prices, AlignedMatrix};
pub use correlation::{correlation_matrix, pearson, CorrelationMatrix};
pub use distribution::{return_distribution, ReturnBin};
pub use engine::RiskEngine;
pub use parallel::{maybe_parallel_filter_map, maybe_parallel_map};
pub use portfolio::{portfolio_returns, value_series};
pub use result::{DrawdownPoint, Metrics, MetricsResult, ValuePoint};
pub use returns::{compute_returns, simple_returns, ReturnMatrix};
pub use rolling::{rolling_volatility, RollingVolatilityPoint};
pub use stats::{
    annual_return, annual_volatility, beta, daily_volatility, drawdown_series, historical_var,
    max_drawdown, parametric_var, sharpe_ratio, DrawdownExtreme, VarEstimates, VarLevels,
};
pub use stress::{
    run_stress_windows, standard as stress_windows, worst_day_overall, StressPeriodResult,
    StressWindow, WorstDay,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use meridian_risk::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use meridian_core::{RiskError, RiskResult};

    // Core types
    pub use meridian_core::{AnalysisRequest, EngineConfig, PortfolioSpec, PricePoint, PriceSeries};

    // Engine and result
    pub use crate::engine::RiskEngine;
    pub use crate::result::{DrawdownPoint, Metrics, MetricsResult, ValuePoint};

    // Estimators
    pub use crate::stats::{
        annual_return, annual_volatility, beta, historical_var, max_drawdown, parametric_var,
        sharpe_ratio, VarEstimates,
    };

    // Stress replay
    pub use crate::stress::{run_stress_windows, StressPeriodResult, StressWindow, WorstDay};

    // Re-export commonly used types from dependencies
    pub use chrono::NaiveDate;
}
