//! Price series types.

use crate::error::{RiskError, RiskResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observation in a price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date.
    pub date: NaiveDate,

    /// Adjusted close.
    pub close: f64,
}

impl PricePoint {
    /// Creates a price point.
    #[must_use]
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// An ordered-by-date series of adjusted closes for one ticker.
///
/// The constructor enforces the ordering invariant: dates are strictly
/// increasing, so there are no duplicates. Positivity of closes is checked
/// later, at return-computation time, so a series can be constructed from
/// raw provider data without a second pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    ticker: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series from dated closes.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::Validation`] if dates are not strictly
    /// increasing.
    pub fn new(ticker: impl Into<String>, points: Vec<PricePoint>) -> RiskResult<Self> {
        let ticker = ticker.into();

        for window in points.windows(2) {
            if window[1].date <= window[0].date {
                return Err(RiskError::validation(format!(
                    "price series for '{ticker}' must have strictly increasing dates ({} then {})",
                    window[0].date, window[1].date
                )));
            }
        }

        Ok(Self { ticker, points })
    }

    /// Convenience constructor from `(date, close)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`PriceSeries::new`].
    pub fn from_pairs(
        ticker: impl Into<String>,
        pairs: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> RiskResult<Self> {
        let points = pairs
            .into_iter()
            .map(|(date, close)| PricePoint::new(date, close))
            .collect();
        Self::new(ticker, points)
    }

    /// The ticker this series belongs to.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// The ordered observations.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the observations within `[start, end]` (inclusive).
    pub fn in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &PricePoint> + '_ {
        self.points
            .iter()
            .filter(move |p| p.date >= start && p.date <= end)
    }
}
