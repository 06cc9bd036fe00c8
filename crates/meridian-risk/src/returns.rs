//! Daily simple returns over aligned price columns.
//!
//! Simple returns, not log returns: downstream consumers compound portfolio
//! value and report VaR in percentage-of-value terms, both of which are
//! linear in currency.

use crate::align::AlignedMatrix;
use crate::parallel::maybe_parallel_map;
use chrono::NaiveDate;
use meridian_core::{EngineConfig, RiskError, RiskResult};

/// Per-ticker daily return columns over a shared (shortened) date axis.
///
/// The axis holds the date each return lands on, so it is one element
/// shorter than the aligned price axis.
#[derive(Debug, Clone)]
pub struct ReturnMatrix {
    dates: Vec<NaiveDate>,
    tickers: Vec<String>,
    columns: Vec<Vec<f64>>,
    benchmark: Option<Vec<f64>>,
}

impl ReturnMatrix {
    /// Return dates, ascending; one per return.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Tickers in request order.
    #[must_use]
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Return columns, parallel to [`ReturnMatrix::tickers`].
    #[must_use]
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// Benchmark returns, when a benchmark column was aligned.
    #[must_use]
    pub fn benchmark(&self) -> Option<&[f64]> {
        self.benchmark.as_deref()
    }

    /// Number of returns per column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when there are no returns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Computes `(price[t] - price[t-1]) / price[t-1]` over one close column.
///
/// # Errors
///
/// Returns [`RiskError::InvalidPrice`] on the first non-positive close.
/// The contract rejects undefined input explicitly instead of letting
/// NaN/Inf propagate through every estimator downstream.
pub fn simple_returns(
    ticker: &str,
    dates: &[NaiveDate],
    closes: &[f64],
) -> RiskResult<Vec<f64>> {
    for (date, &close) in dates.iter().zip(closes) {
        if close <= 0.0 || !close.is_finite() {
            return Err(RiskError::invalid_price(ticker, *date, close));
        }
    }

    Ok(closes.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect())
}

/// Converts an [`AlignedMatrix`] into per-ticker daily returns.
///
/// # Errors
///
/// Returns [`RiskError::InvalidPrice`] if any column contains a
/// non-positive close.
pub fn compute_returns(matrix: &AlignedMatrix, config: &EngineConfig) -> RiskResult<ReturnMatrix> {
    let indices: Vec<usize> = (0..matrix.tickers().len()).collect();
    let columns: Vec<RiskResult<Vec<f64>>> = maybe_parallel_map(&indices, config, |&i| {
        simple_returns(&matrix.tickers()[i], matrix.dates(), &matrix.columns()[i])
    });
    let columns = columns.into_iter().collect::<RiskResult<Vec<_>>>()?;

    let benchmark = match (matrix.benchmark_ticker(), matrix.benchmark()) {
        (Some(ticker), Some(closes)) => Some(simple_returns(ticker, matrix.dates(), closes)?),
        _ => None,
    };

    Ok(ReturnMatrix {
        dates: matrix.dates().iter().skip(1).copied().collect(),
        tickers: matrix.tickers().to_vec(),
        columns,
        benchmark,
    })
}
