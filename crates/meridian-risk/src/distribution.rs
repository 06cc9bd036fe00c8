//! Return distribution histogram.
//!
//! Buckets the daily portfolio returns into equal-width bins spanning the
//! observed range, for tail visualization. Serialized field names are
//! camelCase - part of the consumer contract.

use meridian_core::EngineConfig;
use serde::{Deserialize, Serialize};

/// One histogram bin over the daily return axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnBin {
    /// Inclusive lower edge.
    #[serde(rename = "binStart")]
    pub bin_start: f64,

    /// Upper edge (inclusive for the last bin).
    #[serde(rename = "binEnd")]
    pub bin_end: f64,

    /// Midpoint, used as the plotting coordinate.
    #[serde(rename = "binMid")]
    pub bin_mid: f64,

    /// Number of observations in the bin.
    pub count: usize,
}

/// Partitions returns into `config.distribution_bins` equal-width bins over
/// `[min, max]`.
///
/// A zero-range series (all returns identical) collapses to a single bin
/// containing every observation. An empty series produces no bins.
#[must_use]
pub fn return_distribution(returns: &[f64], config: &EngineConfig) -> Vec<ReturnBin> {
    if returns.is_empty() || config.distribution_bins == 0 {
        return Vec::new();
    }

    let min = returns.iter().copied().fold(f64::INFINITY, f64::min);
    let max = returns.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![ReturnBin {
            bin_start: min,
            bin_end: max,
            bin_mid: min,
            count: returns.len(),
        }];
    }

    let bins = config.distribution_bins;
    let width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &r in returns {
        // The maximum lands exactly on the top edge; clamp it into the
        // last bin instead of a phantom one past the end.
        let index = (((r - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let bin_start = min + i as f64 * width;
            let bin_end = bin_start + width;
            ReturnBin {
                bin_start,
                bin_end,
                bin_mid: (bin_start + bin_end) / 2.0,
                count,
            }
        })
        .collect()
}
