//! Running-peak drawdown analysis.

use chrono::NaiveDate;

/// The deepest point of a drawdown series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawdownExtreme {
    /// The most negative drawdown (≤ 0).
    pub drawdown: f64,

    /// Index into the value series where the minimum occurs.
    /// On ties, the earliest index.
    pub index: usize,
}

/// Computes the drawdown at every point of a value series.
///
/// `drawdown[t] = (value[t] - peak[t]) / peak[t]` where `peak[t]` is the
/// running maximum up to `t`. Every entry is ≤ 0; the output has the same
/// length as the input.
#[must_use]
pub fn drawdown_series(values: &[f64]) -> Vec<f64> {
    let mut peak = f64::MIN;
    values
        .iter()
        .map(|&value| {
            if value > peak {
                peak = value;
            }
            (value - peak) / peak
        })
        .collect()
}

/// Finds the maximum drawdown: the most negative entry of the drawdown
/// series, with the index of its first occurrence.
///
/// Returns `None` for an empty series.
#[must_use]
pub fn max_drawdown(values: &[f64]) -> Option<DrawdownExtreme> {
    let series = drawdown_series(values);
    let mut extreme: Option<DrawdownExtreme> = None;

    for (index, &drawdown) in series.iter().enumerate() {
        let deeper = match extreme {
            Some(ref e) => drawdown < e.drawdown,
            None => true,
        };
        if deeper {
            extreme = Some(DrawdownExtreme { drawdown, index });
        }
    }

    extreme
}

/// Looks up the date of a drawdown extreme on the value-series date axis.
#[must_use]
pub fn extreme_date(extreme: &DrawdownExtreme, dates: &[NaiveDate]) -> Option<NaiveDate> {
    dates.get(extreme.index).copied()
}
