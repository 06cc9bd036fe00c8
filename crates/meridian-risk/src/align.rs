//! Price alignment onto a common trading-day calendar.
//!
//! Merges per-ticker price series by inner join on trading dates: a date
//! missing from any one requested ticker is excluded for all of them. The
//! benchmark participates in the join as a soft member - it can only shrink
//! the axis while the result stays viable, never sink the request.

use chrono::NaiveDate;
use meridian_core::{EngineConfig, PriceSeries, RiskError, RiskResult};
use std::collections::HashMap;

/// Price series aligned onto a shared date axis.
///
/// Invariant: every column has exactly one close per axis date, in axis
/// order. Columns are stored per ticker in request order; the benchmark
/// column, when present, shares the same axis.
#[derive(Debug, Clone)]
pub struct AlignedMatrix {
    dates: Vec<NaiveDate>,
    tickers: Vec<String>,
    columns: Vec<Vec<f64>>,
    benchmark_ticker: Option<String>,
    benchmark: Option<Vec<f64>>,
}

impl AlignedMatrix {
    /// The shared date axis, ascending.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Tickers in request order.
    #[must_use]
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Close columns, parallel to [`AlignedMatrix::tickers`].
    #[must_use]
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// The benchmark close column, if the benchmark survived alignment.
    #[must_use]
    pub fn benchmark(&self) -> Option<&[f64]> {
        self.benchmark.as_deref()
    }

    /// The benchmark ticker, if the benchmark survived alignment.
    #[must_use]
    pub fn benchmark_ticker(&self) -> Option<&str> {
        self.benchmark_ticker.as_deref()
    }

    /// Number of aligned trading days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when the axis is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Aligns per-ticker series (and an optional benchmark) onto the common
/// trading dates within `[start, end]`.
///
/// # Errors
///
/// - [`RiskError::InsufficientData`] when a ticker has no observations in
///   range, or when fewer than `config.min_aligned_days` dates remain after
///   the intersection. In the latter case the ticker with the fewest
///   in-range observations is the one named.
/// - [`RiskError::Validation`] when no series are supplied at all.
///
/// A benchmark with no usable overlap is dropped rather than reported as an
/// error; beta then degrades to null downstream.
pub fn align(
    series: &[PriceSeries],
    benchmark: Option<&PriceSeries>,
    start: NaiveDate,
    end: NaiveDate,
    config: &EngineConfig,
) -> RiskResult<AlignedMatrix> {
    if series.is_empty() {
        return Err(RiskError::validation("no price series to align"));
    }

    // Per-ticker date -> close lookup, restricted to the requested range.
    let mut lookups: Vec<(usize, HashMap<NaiveDate, f64>)> = Vec::with_capacity(series.len());
    for (idx, s) in series.iter().enumerate() {
        let map: HashMap<NaiveDate, f64> =
            s.in_range(start, end).map(|p| (p.date, p.close)).collect();
        if map.is_empty() {
            return Err(RiskError::insufficient_data(
                s.ticker(),
                format!("no price history between {start} and {end}"),
            ));
        }
        lookups.push((idx, map));
    }

    // Probe with the sparsest ticker: it bounds the intersection and is the
    // one named when too little survives.
    let probe_idx = lookups
        .iter()
        .min_by_key(|(_, map)| map.len())
        .map(|(idx, _)| *idx)
        .unwrap_or(0);

    let mut dates: Vec<NaiveDate> = series[probe_idx]
        .in_range(start, end)
        .map(|p| p.date)
        .filter(|date| {
            lookups
                .iter()
                .all(|(idx, map)| *idx == probe_idx || map.contains_key(date))
        })
        .collect();

    if dates.len() < config.min_aligned_days {
        return Err(RiskError::insufficient_data(
            series[probe_idx].ticker(),
            format!(
                "only {} aligned trading days, need at least {}",
                dates.len(),
                config.min_aligned_days
            ),
        ));
    }

    // The benchmark joins softly: keep it only if the shrunken axis is
    // still viable, otherwise drop it and leave beta to degrade.
    let mut benchmark_lookup = None;
    if let Some(bench) = benchmark {
        let map: HashMap<NaiveDate, f64> = bench
            .in_range(start, end)
            .map(|p| (p.date, p.close))
            .collect();
        let joined: Vec<NaiveDate> = dates
            .iter()
            .copied()
            .filter(|date| map.contains_key(date))
            .collect();

        if joined.len() >= config.min_aligned_days {
            dates = joined;
            benchmark_lookup = Some((bench.ticker().to_string(), map));
        }
    }

    let columns: Vec<Vec<f64>> = lookups
        .iter()
        .map(|(_, map)| dates.iter().map(|date| map[date]).collect())
        .collect();

    let (benchmark_ticker, benchmark) = match benchmark_lookup {
        Some((ticker, map)) => {
            let column = dates.iter().map(|date| map[date]).collect();
            (Some(ticker), Some(column))
        }
        None => (None, None),
    };

    Ok(AlignedMatrix {
        dates,
        tickers: series.iter().map(|s| s.ticker().to_string()).collect(),
        columns,
        benchmark_ticker,
        benchmark,
    })
}
