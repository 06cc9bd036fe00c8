//! Statistical estimators over the portfolio return series.
//!
//! - [`performance`] - volatility, annualized return, Sharpe ratio
//! - [`var`] - historical and parametric Value-at-Risk
//! - [`drawdown`] - running-peak drawdown analysis
//! - [`beta`] - OLS market sensitivity

pub mod beta;
pub mod drawdown;
pub mod performance;
pub mod var;

pub use beta::beta;
pub use drawdown::{drawdown_series, max_drawdown, DrawdownExtreme};
pub use performance::{annual_return, annual_volatility, daily_volatility, sharpe_ratio};
pub use var::{historical_var, parametric_var, VarEstimates, VarLevels};

/// Arithmetic mean; 0.0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (n−1 denominator), matching the pandas `std()` the
/// consumer contract was built against.
///
/// Fewer than two observations carry no dispersion information; by
/// convention the variance is 0.0 there, which downstream code treats as
/// the zero-volatility soft condition.
#[must_use]
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64
}

/// Sample standard deviation (n−1 denominator).
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}
