//! Pairwise return correlation across tickers.

use crate::parallel::maybe_parallel_map;
use crate::returns::ReturnMatrix;
use crate::stats::mean;
use meridian_core::EngineConfig;
use std::collections::BTreeMap;

/// Square, symmetric correlation mapping keyed by ticker pairs.
///
/// `BTreeMap` keeps serialization order deterministic for consumers that
/// diff responses.
pub type CorrelationMatrix = BTreeMap<String, BTreeMap<String, f64>>;

/// Builds the pairwise Pearson correlation matrix over ticker returns.
///
/// The diagonal is exactly 1.0 by construction and the matrix is symmetric.
/// Requires at least two tickers: with one, correlation carries no
/// information and `None` is returned so the field can be omitted from the
/// result.
#[must_use]
pub fn correlation_matrix(returns: &ReturnMatrix, config: &EngineConfig) -> Option<CorrelationMatrix> {
    let tickers = returns.tickers();
    if tickers.len() < 2 {
        return None;
    }

    let indices: Vec<usize> = (0..tickers.len()).collect();
    let rows: Vec<(String, BTreeMap<String, f64>)> = maybe_parallel_map(&indices, config, |&i| {
        let mut row = BTreeMap::new();
        for (j, other) in tickers.iter().enumerate() {
            let coefficient = if i == j {
                1.0
            } else {
                pearson(&returns.columns()[i], &returns.columns()[j])
            };
            row.insert(other.clone(), coefficient);
        }
        (tickers[i].clone(), row)
    });

    Some(rows.into_iter().collect())
}

/// Pearson correlation coefficient of two equal-length series.
///
/// Defined as 0.0 when either series has zero variance: the coefficient
/// does not exist there, and 0.0 keeps the matrix complete and free of
/// NaN for serialization.
#[must_use]
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let a_mean = mean(a);
    let b_mean = mean(b);

    let mut cross = 0.0;
    let mut a_sq = 0.0;
    let mut b_sq = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - a_mean;
        let dy = y - b_mean;
        cross += dx * dy;
        a_sq += dx * dx;
        b_sq += dy * dy;
    }

    if a_sq == 0.0 || b_sq == 0.0 {
        return 0.0;
    }

    cross / (a_sq * b_sq).sqrt()
}
