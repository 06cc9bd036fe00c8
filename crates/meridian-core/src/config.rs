//! Configuration for risk metrics computation.
//!
//! Every policy constant the engine uses lives here so behavior is
//! documented and test-overridable, rather than scattered through the
//! estimators as literals.

use serde::{Deserialize, Serialize};

/// Configuration for risk metrics computation.
///
/// The defaults reproduce the standard daily-equity conventions: 252 trading
/// days per year, a 100,000-unit base portfolio value, a 30-day rolling
/// volatility window, and a 40-bin return histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Trading days per year used for annualization.
    ///
    /// Volatility-type quantities scale by `sqrt(trading_days_per_year)`,
    /// mean-return-type quantities by `trading_days_per_year`.
    pub trading_days_per_year: f64,

    /// Starting value for the compounded portfolio value series.
    pub base_portfolio_value: f64,

    /// Number of trailing returns in the rolling volatility window.
    pub rolling_window: usize,

    /// Number of equal-width bins in the return distribution histogram.
    pub distribution_bins: usize,

    /// Tolerance on the request weight sum, in percentage points
    /// (weights must sum to 100 within this tolerance).
    pub weight_sum_tolerance: f64,

    /// Minimum number of aligned closes required to compute anything.
    /// Two closes produce one return.
    pub min_aligned_days: usize,

    /// Enable parallel processing (requires the 'parallel' feature).
    pub parallel: bool,

    /// Minimum ticker count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trading_days_per_year: 252.0,
            base_portfolio_value: 100_000.0,
            rolling_window: 30,
            distribution_bins: 40,
            weight_sum_tolerance: 0.1,
            min_aligned_days: 2,
            parallel: true,
            parallel_threshold: 4,
        }
    }
}

impl EngineConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the annualization factor.
    #[must_use]
    pub fn with_trading_days_per_year(mut self, days: f64) -> Self {
        self.trading_days_per_year = days;
        self
    }

    /// Sets the base portfolio value.
    #[must_use]
    pub fn with_base_portfolio_value(mut self, base: f64) -> Self {
        self.base_portfolio_value = base;
        self
    }

    /// Sets the rolling volatility window length.
    #[must_use]
    pub fn with_rolling_window(mut self, window: usize) -> Self {
        self.rolling_window = window;
        self
    }

    /// Sets the histogram bin count.
    #[must_use]
    pub fn with_distribution_bins(mut self, bins: usize) -> Self {
        self.distribution_bins = bins;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Annualization factor for volatility-type quantities.
    #[must_use]
    pub fn annualization_sqrt(&self) -> f64 {
        self.trading_days_per_year.sqrt()
    }

    /// Returns true if parallel processing should be used for the given count.
    ///
    /// This is configuration policy only; whether a parallel runtime is
    /// compiled in at all is decided by the engine crate's `parallel`
    /// feature.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        self.parallel && count >= self.parallel_threshold
    }
}
