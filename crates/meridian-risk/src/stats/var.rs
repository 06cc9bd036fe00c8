//! Value-at-Risk estimators.
//!
//! Both estimators report VaR as a signed daily return: losses are
//! negative, and the 99% figure is at least as negative as the 95% one.
//! Annualized variants scale the volatility term by √(trading days).

use super::{mean, sample_std};
use meridian_core::EngineConfig;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// Confidence levels the contract reports.
const CONFIDENCE_95: f64 = 0.95;
const CONFIDENCE_99: f64 = 0.99;

/// VaR figures at both confidence levels for one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarLevels {
    /// Empirical-quantile VaR at 95% confidence.
    pub historical_95: f64,

    /// Empirical-quantile VaR at 99% confidence.
    pub historical_99: f64,

    /// Normal-assumption VaR at 95% confidence.
    pub parametric_95: f64,

    /// Normal-assumption VaR at 99% confidence.
    pub parametric_99: f64,
}

/// Daily and annualized VaR estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarEstimates {
    /// One-day horizon.
    pub daily: VarLevels,

    /// Annualized by square-root-of-time scaling.
    pub annual: VarLevels,
}

impl VarEstimates {
    /// Computes all eight VaR figures from the daily return series.
    #[must_use]
    pub fn calculate(returns: &[f64], config: &EngineConfig) -> Self {
        let sqrt_days = config.annualization_sqrt();
        let days = config.trading_days_per_year;

        let mu = mean(returns);
        let sigma = sample_std(returns);
        let z_95 = standard_normal_quantile(CONFIDENCE_95);
        let z_99 = standard_normal_quantile(CONFIDENCE_99);

        let daily = VarLevels {
            historical_95: historical_var(returns, CONFIDENCE_95),
            historical_99: historical_var(returns, CONFIDENCE_99),
            parametric_95: mu - z_95 * sigma,
            parametric_99: mu - z_99 * sigma,
        };

        let annual = VarLevels {
            historical_95: daily.historical_95 * sqrt_days,
            historical_99: daily.historical_99 * sqrt_days,
            parametric_95: mu * days - z_95 * sigma * sqrt_days,
            parametric_99: mu * days - z_99 * sigma * sqrt_days,
        };

        Self { daily, annual }
    }
}

/// Historical VaR at the given confidence: the `(1 - c)`-quantile of the
/// empirical daily return distribution, with linear interpolation between
/// the two nearest order statistics.
///
/// An empty series yields 0.0; the aligner guarantees at least one return
/// upstream.
#[must_use]
pub fn historical_var(returns: &[f64], confidence: f64) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = (1.0 - confidence) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }

    let fraction = rank - lo as f64;
    sorted[lo] + fraction * (sorted[hi] - sorted[lo])
}

/// Parametric VaR at the given confidence: `mean - z_c · std` under a
/// normal assumption.
///
/// On a zero-variance series the volatility term vanishes and the estimate
/// degrades to the mean.
#[must_use]
pub fn parametric_var(returns: &[f64], confidence: f64) -> f64 {
    mean(returns) - standard_normal_quantile(confidence) * sample_std(returns)
}

/// Standard-normal quantile for the confidence level (≈1.645 for 95%).
fn standard_normal_quantile(confidence: f64) -> f64 {
    match Normal::new(0.0, 1.0) {
        Ok(normal) => normal.inverse_cdf(confidence),
        Err(_) => f64::NAN,
    }
}
