//! Trailing-window annualized volatility.

use crate::stats::sample_std;
use chrono::NaiveDate;
use meridian_core::EngineConfig;
use serde::{Deserialize, Serialize};

/// One point of the rolling volatility series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingVolatilityPoint {
    /// Date of the last return in the window.
    pub date: NaiveDate,

    /// Annualized standard deviation over the trailing window.
    pub volatility: f64,
}

/// Computes the trailing-window annualized volatility series.
///
/// For each date with at least `config.rolling_window` returns available
/// (the date's own return included), the sample std of that window scaled
/// by √(trading days). The output is `window − 1` points shorter than the
/// return series; fewer returns than one full window produce an empty
/// series, which consumers treat as "insufficient history".
#[must_use]
pub fn rolling_volatility(
    returns: &[f64],
    dates: &[NaiveDate],
    config: &EngineConfig,
) -> Vec<RollingVolatilityPoint> {
    let window = config.rolling_window;
    if window == 0 || returns.len() < window || returns.len() != dates.len() {
        return Vec::new();
    }

    let factor = config.annualization_sqrt();
    returns
        .windows(window)
        .zip(dates.iter().skip(window - 1))
        .map(|(slice, &date)| RollingVolatilityPoint {
            date,
            volatility: sample_std(slice) * factor,
        })
        .collect()
}
