//! The risk metrics engine.
//!
//! One pure, stateless entry point: validate the request, align prices,
//! derive returns, compose the portfolio, then fan out into the independent
//! estimators and assemble the result. Identical inputs always produce
//! identical outputs - there is no randomness and no I/O here.

use crate::align::align;
use crate::correlation::correlation_matrix;
use crate::distribution::return_distribution;
use crate::portfolio::{portfolio_returns, value_series};
use crate::result::{DrawdownPoint, Metrics, MetricsResult, ValuePoint};
use crate::returns::compute_returns;
use crate::rolling::rolling_volatility;
use crate::stats::drawdown::{drawdown_series, extreme_date, max_drawdown};
use crate::stats::var::VarEstimates;
use crate::stats::{annual_return, annual_volatility, beta, daily_volatility, sharpe_ratio};
use crate::stress::{run_stress_windows, standard, worst_day_overall};
use meridian_core::{
    AnalysisRequest, EngineConfig, PortfolioSpec, PriceSeries, RiskError, RiskResult,
};
use std::collections::HashMap;

/// Stateless calculator turning price histories into a [`MetricsResult`].
///
/// # Example
///
/// ```rust,ignore
/// use meridian_risk::prelude::*;
///
/// let engine = RiskEngine::new();
/// let result = engine.analyze(&request, &price_series, Some(&benchmark))?;
/// println!("annual vol: {:.2}%", result.metrics.annual_volatility * 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: EngineConfig,
}

impl RiskEngine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with an explicit configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs the full metrics pipeline for one request.
    ///
    /// `prices` must contain one series per requested ticker (any order);
    /// `benchmark` is optional and only feeds beta.
    ///
    /// # Errors
    ///
    /// - [`RiskError::Validation`] for a malformed request
    /// - [`RiskError::InsufficientData`] when a ticker has no usable
    ///   history in range, or too few aligned days remain
    /// - [`RiskError::InvalidPrice`] on a non-positive close
    pub fn analyze(
        &self,
        request: &AnalysisRequest,
        prices: &[PriceSeries],
        benchmark: Option<&PriceSeries>,
    ) -> RiskResult<MetricsResult> {
        let spec = PortfolioSpec::from_request(request, &self.config)?;

        tracing::debug!(
            tickers = ?request.tickers,
            start = %request.start_date,
            end = %request.end_date,
            "Calculating risk metrics"
        );

        let ordered = order_series(&spec, prices)?;
        let aligned = align(
            &ordered,
            benchmark,
            request.start_date,
            request.end_date,
            &self.config,
        )?;

        let returns = compute_returns(&aligned, &self.config)?;
        let port_returns = portfolio_returns(&returns, &spec)?;
        let values = value_series(&port_returns, self.config.base_portfolio_value);

        // Independent read-only fan-out over the finalized series.
        let var = VarEstimates::calculate(&port_returns, &self.config);
        let dd_series = drawdown_series(&values);
        let dd_extreme = max_drawdown(&values);
        let portfolio_beta = returns
            .benchmark()
            .and_then(|bench| beta(&port_returns, bench));
        let correlations = correlation_matrix(&returns, &self.config);
        let rolling = rolling_volatility(&port_returns, returns.dates(), &self.config);
        let histogram = return_distribution(&port_returns, &self.config);
        let stress = run_stress_windows(
            returns.dates(),
            &port_returns,
            &values,
            &standard::all(),
            &self.config,
        );
        let worst_day = worst_day_overall(returns.dates(), &port_returns, &values);

        let portfolio_values = aligned
            .dates()
            .iter()
            .zip(&values)
            .map(|(&date, &value)| ValuePoint { date, value })
            .collect();
        let drawdown_data = aligned
            .dates()
            .iter()
            .zip(&dd_series)
            .map(|(&date, &drawdown)| DrawdownPoint { date, drawdown })
            .collect();

        let metrics = Metrics {
            annual_return: annual_return(&port_returns, &self.config),
            daily_volatility: daily_volatility(&port_returns),
            annual_volatility: annual_volatility(&port_returns, &self.config),
            sharpe_ratio: sharpe_ratio(&port_returns, &self.config),
            max_drawdown: dd_extreme.as_ref().map_or(0.0, |e| e.drawdown),
            max_drawdown_date: dd_extreme
                .as_ref()
                .and_then(|e| extreme_date(e, aligned.dates())),
            beta: portfolio_beta,
            var,
            portfolio_values,
            drawdown_data,
            rolling_volatility: rolling,
            correlation_matrix: correlations,
            return_distribution: histogram,
        };

        tracing::debug!(
            aligned_days = aligned.len(),
            stress_windows = stress.len(),
            benchmark = aligned.benchmark_ticker().is_some(),
            "Risk metrics calculated"
        );

        Ok(MetricsResult {
            tickers: spec.tickers(),
            start_date: request.start_date,
            end_date: request.end_date,
            metrics,
            stress_test_periods: stress,
            worst_day_overall: worst_day,
        })
    }
}

/// Reorders the supplied series into spec order, one per ticker.
fn order_series(spec: &PortfolioSpec, prices: &[PriceSeries]) -> RiskResult<Vec<PriceSeries>> {
    let by_ticker: HashMap<&str, &PriceSeries> =
        prices.iter().map(|s| (s.ticker(), s)).collect();

    spec.holdings()
        .iter()
        .map(|holding| {
            by_ticker
                .get(holding.ticker.as_str())
                .map(|&s| s.clone())
                .ok_or_else(|| {
                    RiskError::insufficient_data(&holding.ticker, "no price series supplied")
                })
        })
        .collect()
}
