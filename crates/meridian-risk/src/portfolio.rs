//! Weighted portfolio composition.
//!
//! Collapses per-ticker return columns into one portfolio return series and
//! compounds it into a value series from a fixed starting capital.

use crate::returns::ReturnMatrix;
use meridian_core::{PortfolioSpec, RiskError, RiskResult};
use std::collections::HashMap;

/// Composes the weighted daily portfolio return series.
///
/// `R_p[t] = Σ_i w_i · R_i[t]`, with weights as fractions from the
/// validated spec.
///
/// # Errors
///
/// Returns [`RiskError::Validation`] if a matrix ticker has no weight in
/// the portfolio spec; the engine builds both from the same request so
/// this only fires on misuse of the library API.
pub fn portfolio_returns(returns: &ReturnMatrix, spec: &PortfolioSpec) -> RiskResult<Vec<f64>> {
    let weights: HashMap<&str, f64> = spec
        .holdings()
        .iter()
        .map(|h| (h.ticker.as_str(), h.weight))
        .collect();

    let mut column_weights = Vec::with_capacity(returns.tickers().len());
    for ticker in returns.tickers() {
        let weight = weights.get(ticker.as_str()).ok_or_else(|| {
            RiskError::validation(format!("ticker '{ticker}' has no weight in the portfolio spec"))
        })?;
        column_weights.push(*weight);
    }

    let mut series = vec![0.0; returns.len()];
    for (column, weight) in returns.columns().iter().zip(&column_weights) {
        for (acc, r) in series.iter_mut().zip(column) {
            *acc += weight * r;
        }
    }

    Ok(series)
}

/// Compounds daily returns into a value series starting at `base`.
///
/// `value[0] = base`, `value[t] = value[t-1] · (1 + r[t])`. The output has
/// one more point than the input: the base value on the first aligned date.
#[must_use]
pub fn value_series(returns: &[f64], base: f64) -> Vec<f64> {
    let mut values = Vec::with_capacity(returns.len() + 1);
    let mut value = base;
    values.push(value);
    for r in returns {
        value *= 1.0 + r;
        values.push(value);
    }
    values
}
