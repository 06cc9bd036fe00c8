//! Property-based tests for risk metric invariants.
//!
//! These tests verify key mathematical properties that should always hold:
//! - Normalized weights sum to 1.0
//! - Drawdowns are never positive and the maximum is the series minimum
//! - VaR is monotone across confidence levels
//! - The correlation matrix is symmetric, bounded, and has a unit diagonal
//! - Compounding the portfolio returns reproduces the value series
//! - The rolling volatility series has the expected length

use chrono::NaiveDate;
use meridian_risk::prelude::*;
use meridian_risk::{
    correlation_matrix, compute_returns, drawdown_series, return_distribution, rolling_volatility,
};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 3).unwrap()
}

/// Generates a daily return in roughly ±5%.
fn synthetic_return(seed: u64, i: u64) -> f64 {
    (simple_hash(seed, i) % 10_001) as f64 / 10_000.0 * 0.10 - 0.05
}

/// Generates a price series of `n` observations with pseudo-random moves.
fn generate_series(ticker: &str, seed: u64, n: usize) -> PriceSeries {
    let mut close = 50.0 + (simple_hash(seed, 0) % 200) as f64;
    let pairs = (0..n).map(|i| {
        if i > 0 {
            close *= 1.0 + synthetic_return(seed, i as u64);
        }
        (start_date() + chrono::Days::new(i as u64), close)
    });
    PriceSeries::from_pairs(ticker, pairs).unwrap()
}

fn generate_returns(seed: u64, n: usize) -> Vec<f64> {
    (0..n).map(|i| synthetic_return(seed, i as u64)).collect()
}

fn full_range_request(tickers: &[&str], weights: &[f64]) -> AnalysisRequest {
    AnalysisRequest::new(
        tickers.iter().map(|t| t.to_string()).collect(),
        weights.to_vec(),
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )
}

// =============================================================================
// PROPERTY: NORMALIZED WEIGHTS SUM TO 1.0
// =============================================================================

#[test]
fn property_normalized_weights_sum_to_one() {
    let config = EngineConfig::default();

    for seed in 0..10 {
        for size in [1, 2, 5, 10] {
            // Random positive weights rescaled to sum to 100.
            let raw: Vec<f64> = (0..size)
                .map(|i| 1.0 + (simple_hash(seed, i as u64) % 1000) as f64)
                .collect();
            let total: f64 = raw.iter().sum();
            let weights: Vec<f64> = raw.iter().map(|w| w / total * 100.0).collect();
            let tickers: Vec<String> = (0..size).map(|i| format!("T{i}")).collect();
            let ticker_refs: Vec<&str> = tickers.iter().map(String::as_str).collect();

            let spec =
                PortfolioSpec::from_request(&full_range_request(&ticker_refs, &weights), &config)
                    .unwrap();

            let sum: f64 = spec.holdings().iter().map(|h| h.weight).sum();
            assert!(
                (sum - 1.0).abs() < 0.001,
                "Normalized weights should sum to 1.0, got {sum} for size={size}, seed={seed}"
            );
        }
    }
}

// =============================================================================
// PROPERTY: DRAWDOWN IS NON-POSITIVE, MAXIMUM IS THE MINIMUM
// =============================================================================

#[test]
fn property_drawdown_never_positive() {
    for seed in 0..20 {
        let returns = generate_returns(seed, 120);
        let values = meridian_risk::value_series(&returns, 100_000.0);
        let series = drawdown_series(&values);

        assert!(
            series.iter().all(|&d| d <= 1e-12),
            "Drawdown must be <= 0 everywhere, seed={seed}"
        );

        let extreme = max_drawdown(&values).unwrap();
        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        assert!(
            (extreme.drawdown - min).abs() < 1e-12,
            "Max drawdown should equal the series minimum, seed={seed}"
        );
    }
}

// =============================================================================
// PROPERTY: VAR IS MONOTONE ACROSS CONFIDENCE LEVELS
// =============================================================================

#[test]
fn property_var_monotone_in_confidence() {
    for seed in 0..20 {
        for size in [5, 30, 250] {
            let returns = generate_returns(seed, size);

            assert!(
                historical_var(&returns, 0.99) <= historical_var(&returns, 0.95) + 1e-12,
                "99% historical VaR must not be above 95%, size={size}, seed={seed}"
            );
            assert!(
                parametric_var(&returns, 0.99) <= parametric_var(&returns, 0.95) + 1e-12,
                "99% parametric VaR must not be above 95%, size={size}, seed={seed}"
            );
        }
    }
}

// =============================================================================
// PROPERTY: CORRELATION MATRIX IS SYMMETRIC AND BOUNDED
// =============================================================================

#[test]
fn property_correlation_matrix_well_formed() {
    let config = EngineConfig::default();

    for seed in 0..10 {
        let series: Vec<PriceSeries> = (0..4)
            .map(|i| generate_series(&format!("T{i}"), seed * 17 + i, 90))
            .collect();

        let matrix = meridian_risk::align_prices(
            &series,
            None,
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            &config,
        )
        .unwrap();
        let returns = compute_returns(&matrix, &config).unwrap();
        let correlations = correlation_matrix(&returns, &config).unwrap();

        for a in returns.tickers() {
            let diagonal = correlations[a][a];
            assert!(
                (diagonal - 1.0).abs() < 1e-9,
                "Diagonal must be 1.0, got {diagonal} for seed={seed}"
            );

            for b in returns.tickers() {
                let forward = correlations[a][b];
                let backward = correlations[b][a];
                assert!(
                    (forward - backward).abs() < 1e-12,
                    "Matrix must be symmetric, seed={seed}"
                );
                assert!(
                    (-1.0 - 1e-9..=1.0 + 1e-9).contains(&forward),
                    "Coefficient out of [-1, 1]: {forward}, seed={seed}"
                );
            }
        }
    }
}

// =============================================================================
// PROPERTY: VALUE SERIES ROUND TRIP
// =============================================================================

#[test]
fn property_value_series_round_trip() {
    for seed in 0..20 {
        let returns = generate_returns(seed, 100);
        let values = meridian_risk::value_series(&returns, 100_000.0);

        // Recover returns from the value series, then compound again.
        let recovered: Vec<f64> = values.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect();
        let recompounded = meridian_risk::value_series(&recovered, 100_000.0);

        assert_eq!(values.len(), recompounded.len());
        for (a, b) in values.iter().zip(&recompounded) {
            assert!(
                (a - b).abs() < 1e-6,
                "Round-tripped value series diverged: {a} vs {b}, seed={seed}"
            );
        }
    }
}

// =============================================================================
// PROPERTY: ROLLING VOLATILITY LENGTH
// =============================================================================

#[test]
fn property_rolling_volatility_length() {
    let config = EngineConfig::default();

    for seed in 0..5 {
        for size in [0, 10, 29, 30, 31, 100] {
            let returns = generate_returns(seed, size);
            let dates: Vec<NaiveDate> = (0..size)
                .map(|i| start_date() + chrono::Days::new(i as u64))
                .collect();

            let series = rolling_volatility(&returns, &dates, &config);
            let expected = size.saturating_sub(config.rolling_window - 1);
            assert_eq!(
                series.len(),
                expected,
                "Rolling series length mismatch for size={size}, seed={seed}"
            );
            assert!(series.iter().all(|p| p.volatility >= 0.0));
        }
    }
}

// =============================================================================
// PROPERTY: DISTRIBUTION COUNTS COVER EVERY OBSERVATION
// =============================================================================

#[test]
fn property_distribution_counts_total() {
    let config = EngineConfig::default();

    for seed in 0..10 {
        for size in [1, 7, 100, 500] {
            let returns = generate_returns(seed, size);
            let bins = return_distribution(&returns, &config);

            let counted: usize = bins.iter().map(|b| b.count).sum();
            assert_eq!(
                counted, size,
                "Histogram must count every observation, size={size}, seed={seed}"
            );
        }
    }
}

// =============================================================================
// PROPERTY: FULL PIPELINE IS DETERMINISTIC
// =============================================================================

#[test]
fn property_engine_deterministic() {
    let engine = RiskEngine::new();

    for seed in 0..5 {
        let prices = vec![
            generate_series("A", seed, 200),
            generate_series("B", seed + 100, 200),
        ];
        let request = full_range_request(&["A", "B"], &[70.0, 30.0]);

        let first = engine.analyze(&request, &prices, None).unwrap();
        let second = engine.analyze(&request, &prices, None).unwrap();
        assert_eq!(first, second, "Engine must be idempotent, seed={seed}");
    }
}
