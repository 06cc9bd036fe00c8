//! Market sensitivity (beta).

use super::mean;

/// Ordinary-least-squares slope of portfolio returns on benchmark returns:
/// `cov(portfolio, benchmark) / var(benchmark)`.
///
/// Returns `None` when the series are empty, differ in length, or the
/// benchmark has zero variance. Beta is an optional enrichment; callers
/// report absence instead of failing.
#[must_use]
pub fn beta(portfolio: &[f64], benchmark: &[f64]) -> Option<f64> {
    if portfolio.is_empty() || portfolio.len() != benchmark.len() {
        return None;
    }

    let port_mean = mean(portfolio);
    let bench_mean = mean(benchmark);

    let mut covariance = 0.0;
    let mut bench_variance = 0.0;
    for (p, b) in portfolio.iter().zip(benchmark) {
        covariance += (p - port_mean) * (b - bench_mean);
        bench_variance += (b - bench_mean) * (b - bench_mean);
    }

    if bench_variance == 0.0 {
        return None;
    }

    Some(covariance / bench_variance)
}
