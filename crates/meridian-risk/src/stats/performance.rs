//! Volatility and risk-adjusted return.

use super::{mean, sample_std};
use meridian_core::EngineConfig;

/// Unannualized standard deviation of daily returns.
#[must_use]
pub fn daily_volatility(returns: &[f64]) -> f64 {
    sample_std(returns)
}

/// Annualized volatility: daily sample std × √(trading days per year).
#[must_use]
pub fn annual_volatility(returns: &[f64], config: &EngineConfig) -> f64 {
    daily_volatility(returns) * config.annualization_sqrt()
}

/// Annualized mean return: mean daily return × trading days per year.
#[must_use]
pub fn annual_return(returns: &[f64], config: &EngineConfig) -> f64 {
    mean(returns) * config.trading_days_per_year
}

/// Sharpe ratio with a zero risk-free rate: annualized mean return over
/// annualized volatility.
///
/// Undefined when volatility is exactly zero; reported as `None` rather
/// than an error so a flat portfolio still produces a result.
#[must_use]
pub fn sharpe_ratio(returns: &[f64], config: &EngineConfig) -> Option<f64> {
    let vol = annual_volatility(returns, config);
    if vol == 0.0 {
        return None;
    }
    Some(annual_return(returns, config) / vol)
}
