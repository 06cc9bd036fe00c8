//! The analytics result returned to the presentation layer.
//!
//! The serialized shape is a compatibility contract: consumers index
//! fields by exact name and nested path (`metrics.var.daily.historical_95`,
//! `binStart`, ...). Renaming or restructuring breaks callers. Fields whose
//! computation was inapplicable are serialized as `null` (Sharpe, beta) or
//! omitted (correlation matrix, stress windows without overlap) - never as
//! a request failure.

use crate::correlation::CorrelationMatrix;
use crate::distribution::ReturnBin;
use crate::rolling::RollingVolatilityPoint;
use crate::stats::var::VarEstimates;
use crate::stress::{StressPeriodResult, WorstDay};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Portfolio value on one trading date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    /// Trading date.
    pub date: NaiveDate,

    /// Compounded portfolio value.
    pub value: f64,
}

/// Drawdown on one trading date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    /// Trading date.
    pub date: NaiveDate,

    /// Drawdown from the running peak, ≤ 0.
    pub drawdown: f64,
}

/// The full-period metrics block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Annualized mean daily return.
    pub annual_return: f64,

    /// Unannualized daily volatility.
    pub daily_volatility: f64,

    /// Annualized volatility.
    pub annual_volatility: f64,

    /// Sharpe ratio (zero risk-free rate); `null` when volatility is zero.
    pub sharpe_ratio: Option<f64>,

    /// Most negative drawdown over the period (≤ 0).
    pub max_drawdown: f64,

    /// Date on which the maximum drawdown occurs (earliest on ties).
    pub max_drawdown_date: Option<NaiveDate>,

    /// OLS beta against the benchmark; `null` when no benchmark aligned.
    pub beta: Option<f64>,

    /// Daily and annualized VaR at 95%/99%.
    pub var: VarEstimates,

    /// Compounded portfolio value per trading date.
    pub portfolio_values: Vec<ValuePoint>,

    /// Drawdown per trading date.
    pub drawdown_data: Vec<DrawdownPoint>,

    /// Trailing-window annualized volatility series.
    pub rolling_volatility: Vec<RollingVolatilityPoint>,

    /// Pairwise return correlations; omitted for single-ticker portfolios.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub correlation_matrix: Option<CorrelationMatrix>,

    /// Daily return histogram.
    pub return_distribution: Vec<ReturnBin>,
}

/// The engine's complete output for one request.
///
/// Immutable aggregate, produced once per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Tickers in request order.
    pub tickers: Vec<String>,

    /// Requested range start.
    pub start_date: NaiveDate,

    /// Requested range end.
    pub end_date: NaiveDate,

    /// Full-period metrics.
    pub metrics: Metrics,

    /// Stress replay per window key; windows without overlap are absent.
    pub stress_test_periods: BTreeMap<String, StressPeriodResult>,

    /// Worst single day across the whole range.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub worst_day_overall: Option<WorstDay>,
}
