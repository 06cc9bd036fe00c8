//! Request and portfolio specification types.

use crate::config::EngineConfig;
use crate::error::{RiskError, RiskResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of holdings accepted in one request.
pub const MAX_HOLDINGS: usize = 10;

/// An analysis request as submitted by the presentation layer.
///
/// Weights are on the percentage scale (0-100) and must sum to 100 within
/// the configured tolerance. The engine normalizes them to fractions when
/// building the [`PortfolioSpec`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Requested ticker symbols.
    pub tickers: Vec<String>,

    /// Portfolio weights in percent, parallel to `tickers`.
    pub weights: Vec<f64>,

    /// Start of the analysis range (inclusive).
    pub start_date: NaiveDate,

    /// End of the analysis range (inclusive).
    pub end_date: NaiveDate,
}

impl AnalysisRequest {
    /// Creates a request from parts.
    #[must_use]
    pub fn new(
        tickers: Vec<String>,
        weights: Vec<f64>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            tickers,
            weights,
            start_date,
            end_date,
        }
    }
}

/// A single validated holding: ticker plus fractional weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol.
    pub ticker: String,

    /// Weight as a fraction of the portfolio (0.0-1.0).
    pub weight: f64,
}

/// A validated, immutable portfolio specification.
///
/// Created from an [`AnalysisRequest`] exactly once; all invariants are
/// checked at construction and hold for the lifetime of the value:
///
/// - 1 to [`MAX_HOLDINGS`] holdings
/// - tickers unique and non-empty
/// - weights non-negative, summing to 1.0 within tolerance
/// - start date strictly before end date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSpec {
    holdings: Vec<Holding>,
}

impl PortfolioSpec {
    /// Validates a request and builds the normalized specification.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::Validation`] when the request is malformed:
    /// zero or too many holdings, mismatched ticker/weight lengths,
    /// duplicate or empty tickers, negative or non-finite weights, a weight
    /// sum outside `100 ± tolerance`, or a start date not before the end
    /// date.
    pub fn from_request(request: &AnalysisRequest, config: &EngineConfig) -> RiskResult<Self> {
        if request.tickers.is_empty() {
            return Err(RiskError::validation("at least one holding is required"));
        }

        if request.tickers.len() > MAX_HOLDINGS {
            return Err(RiskError::validation(format!(
                "at most {MAX_HOLDINGS} holdings are supported, got {}",
                request.tickers.len()
            )));
        }

        if request.tickers.len() != request.weights.len() {
            return Err(RiskError::validation(format!(
                "{} tickers but {} weights",
                request.tickers.len(),
                request.weights.len()
            )));
        }

        let mut seen = HashSet::new();
        for ticker in &request.tickers {
            if ticker.trim().is_empty() {
                return Err(RiskError::validation("ticker symbols must be non-empty"));
            }
            if !seen.insert(ticker.as_str()) {
                return Err(RiskError::validation(format!("duplicate ticker '{ticker}'")));
            }
        }

        for (ticker, &weight) in request.tickers.iter().zip(&request.weights) {
            if !weight.is_finite() || weight < 0.0 {
                return Err(RiskError::validation(format!(
                    "weight for '{ticker}' must be a non-negative number, got {weight}"
                )));
            }
        }

        let total: f64 = request.weights.iter().sum();
        if (total - 100.0).abs() > config.weight_sum_tolerance {
            return Err(RiskError::validation(format!(
                "weights must sum to 100% (±{}), currently sum to {total}%",
                config.weight_sum_tolerance
            )));
        }

        if request.start_date >= request.end_date {
            return Err(RiskError::validation(format!(
                "start date {} must be before end date {}",
                request.start_date, request.end_date
            )));
        }

        let holdings = request
            .tickers
            .iter()
            .zip(&request.weights)
            .map(|(ticker, &weight)| Holding {
                ticker: ticker.clone(),
                weight: weight / 100.0,
            })
            .collect();

        Ok(Self { holdings })
    }

    /// The validated holdings in request order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Number of holdings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Always false: a spec cannot be built without holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Ticker symbols in request order.
    #[must_use]
    pub fn tickers(&self) -> Vec<String> {
        self.holdings.iter().map(|h| h.ticker.clone()).collect()
    }

    /// Fractional weights in request order.
    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.holdings.iter().map(|h| h.weight).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(tickers: &[&str], weights: &[f64]) -> AnalysisRequest {
        AnalysisRequest::new(
            tickers.iter().map(|t| t.to_string()).collect(),
            weights.to_vec(),
            date(2023, 1, 1),
            date(2023, 12, 31),
        )
    }

    #[test]
    fn test_valid_spec_normalizes_weights() {
        let spec =
            PortfolioSpec::from_request(&request(&["AAPL", "MSFT"], &[60.0, 40.0]), &EngineConfig::default())
                .unwrap();

        assert_eq!(spec.len(), 2);
        assert_eq!(spec.tickers(), vec!["AAPL", "MSFT"]);

        let sum: f64 = spec.weights().iter().sum();
        assert!((sum - 1.0).abs() < 0.001);
        assert!((spec.holdings()[0].weight - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_weight_sum_tolerance() {
        let config = EngineConfig::default();

        // Within ±0.1 is accepted
        assert!(PortfolioSpec::from_request(&request(&["A", "B"], &[50.05, 50.0]), &config).is_ok());

        // Outside is rejected
        let err =
            PortfolioSpec::from_request(&request(&["A", "B"], &[60.0, 50.0]), &config).unwrap_err();
        assert!(matches!(err, RiskError::Validation { .. }));
        assert!(err.to_string().contains("sum to 100%"));
    }

    #[test]
    fn test_empty_portfolio_rejected() {
        let err = PortfolioSpec::from_request(&request(&[], &[]), &EngineConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("at least one holding"));
    }

    #[test]
    fn test_too_many_holdings_rejected() {
        let tickers: Vec<String> = (0..11).map(|i| format!("T{i}")).collect();
        let weights = vec![100.0 / 11.0; 11];
        let request = AnalysisRequest::new(tickers, weights, date(2023, 1, 1), date(2023, 6, 1));

        let err = PortfolioSpec::from_request(&request, &EngineConfig::default()).unwrap_err();
        assert!(err.to_string().contains("at most 10"));
    }

    #[test]
    fn test_duplicate_ticker_rejected() {
        let err = PortfolioSpec::from_request(
            &request(&["AAPL", "AAPL"], &[50.0, 50.0]),
            &EngineConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate ticker 'AAPL'"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = PortfolioSpec::from_request(
            &request(&["AAPL", "MSFT"], &[110.0, -10.0]),
            &EngineConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = PortfolioSpec::from_request(
            &request(&["AAPL", "MSFT"], &[100.0]),
            &EngineConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("2 tickers but 1 weights"));
    }

    #[test]
    fn test_inverted_date_range_rejected() {
        let request = AnalysisRequest::new(
            vec!["AAPL".to_string()],
            vec![100.0],
            date(2023, 6, 1),
            date(2023, 1, 1),
        );

        let err = PortfolioSpec::from_request(&request, &EngineConfig::default()).unwrap_err();
        assert!(err.to_string().contains("before end date"));
    }

    #[test]
    fn test_request_serde_round_trip() {
        let request = request(&["AAPL", "MSFT"], &[60.0, 40.0]);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"start_date\":\"2023-01-01\""));

        let parsed: AnalysisRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.tickers, request.tickers);
        assert_eq!(parsed.end_date, request.end_date);
    }
}
