//! Stress window replay over the portfolio return series.
//!
//! Each window is evaluated independently against the slice of portfolio
//! history that overlaps it: compounded total return, window-scoped
//! drawdown, and the worst single day with the portfolio values around it.

use super::windows::StressWindow;
use crate::parallel::maybe_parallel_filter_map;
use crate::portfolio::value_series;
use crate::stats::drawdown::max_drawdown;
use chrono::NaiveDate;
use meridian_core::EngineConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Replay result for one stress window.
///
/// Percentages are signed: losses and drawdowns are negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressPeriodResult {
    /// Window name.
    pub name: String,

    /// Window description.
    pub description: String,

    /// Nominal window start (not clipped to the analysis range).
    pub start_date: NaiveDate,

    /// Nominal window end.
    pub end_date: NaiveDate,

    /// Compounded portfolio return across the overlap, in percent.
    pub total_return_pct: f64,

    /// Deepest running-peak drawdown within the overlap, in percent.
    pub max_drawdown_pct: f64,

    /// Worst single daily return within the overlap, in percent.
    pub worst_day_return_pct: f64,

    /// Date of the worst daily return.
    pub worst_day_date: NaiveDate,

    /// Portfolio value (full-period series) on the day before the worst day.
    pub value_before_worst_day: f64,

    /// Portfolio value at the close of the worst day.
    pub value_after_worst_day: f64,

    /// Number of daily returns in the overlap.
    pub observations: usize,
}

/// The single worst day across the whole analyzed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorstDay {
    /// Worst daily return as a fraction.
    pub worst_day_return: f64,

    /// Worst daily return in percent.
    pub worst_day_return_pct: f64,

    /// Date of the worst daily return.
    pub worst_day_date: NaiveDate,

    /// Portfolio value on the preceding day.
    pub portfolio_value_before: f64,

    /// Portfolio value at the close of the worst day.
    pub portfolio_value_after: f64,
}

/// Replays every window against the portfolio history.
///
/// `values` is the full-period compounded value series (one more point than
/// `returns`; index `t` is the value before return `t` applies). Windows
/// with no overlapping returns are omitted from the map - absence, not an
/// error. Windows share no state and may be evaluated in parallel.
#[must_use]
pub fn run_stress_windows(
    dates: &[NaiveDate],
    returns: &[f64],
    values: &[f64],
    windows: &[StressWindow],
    config: &EngineConfig,
) -> BTreeMap<String, StressPeriodResult> {
    let entries = maybe_parallel_filter_map(windows, config, |window| {
        replay_window(dates, returns, values, window)
            .map(|result| (window.key.to_string(), result))
    });

    entries.into_iter().collect()
}

fn replay_window(
    dates: &[NaiveDate],
    returns: &[f64],
    values: &[f64],
    window: &StressWindow,
) -> Option<StressPeriodResult> {
    // The date axis is ascending, so the overlap is one contiguous slice.
    let lo = dates.partition_point(|d| *d < window.start);
    let hi = dates.partition_point(|d| *d <= window.end);
    if lo >= hi {
        return None;
    }

    let slice = &returns[lo..hi];
    let total_return = slice.iter().fold(1.0, |acc, r| acc * (1.0 + r)) - 1.0;

    // Drawdown is scoped to the window: the peak resets at the window start.
    let local_values = value_series(slice, 1.0);
    let window_drawdown = max_drawdown(&local_values).map_or(0.0, |e| e.drawdown);

    let (worst_offset, worst_return) = worst_of(slice)?;
    let worst_index = lo + worst_offset;

    Some(StressPeriodResult {
        name: window.name.to_string(),
        description: window.description.to_string(),
        start_date: window.start,
        end_date: window.end,
        total_return_pct: total_return * 100.0,
        max_drawdown_pct: window_drawdown * 100.0,
        worst_day_return_pct: worst_return * 100.0,
        worst_day_date: dates[worst_index],
        value_before_worst_day: values[worst_index],
        value_after_worst_day: values[worst_index + 1],
        observations: slice.len(),
    })
}

/// Finds the single worst day over the whole series.
///
/// Returns `None` only for an empty series.
#[must_use]
pub fn worst_day_overall(
    dates: &[NaiveDate],
    returns: &[f64],
    values: &[f64],
) -> Option<WorstDay> {
    let (index, worst_return) = worst_of(returns)?;

    Some(WorstDay {
        worst_day_return: worst_return,
        worst_day_return_pct: worst_return * 100.0,
        worst_day_date: dates[index],
        portfolio_value_before: values[index],
        portfolio_value_after: values[index + 1],
    })
}

/// Index and value of the minimum return; earliest index on ties.
fn worst_of(returns: &[f64]) -> Option<(usize, f64)> {
    let mut worst: Option<(usize, f64)> = None;
    for (index, &r) in returns.iter().enumerate() {
        match worst {
            Some((_, current)) if r >= current => {}
            _ => worst = Some((index, r)),
        }
    }
    worst
}
