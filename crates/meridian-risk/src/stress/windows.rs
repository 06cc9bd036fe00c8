//! Historical stress window definitions.
//!
//! Each window is a fixed, named crisis period replayed against whatever
//! portion of the portfolio history overlaps it. The set and its boundary
//! dates are policy constants: keys and dates are part of the consumer
//! contract and must only change deliberately, with the version.

use chrono::NaiveDate;

/// A named historical crisis period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressWindow {
    /// Stable key used in the result map.
    pub key: &'static str,

    /// Human-readable name.
    pub name: &'static str,

    /// One-line description for display.
    pub description: &'static str,

    /// First day of the window (inclusive).
    pub start: NaiveDate,

    /// Last day of the window (inclusive).
    pub end: NaiveDate,
}

impl StressWindow {
    /// Clamps the window to an analysis range.
    ///
    /// Returns the overlapping sub-range, or `None` when the window lies
    /// entirely outside `[start, end]`.
    #[must_use]
    pub fn overlap(&self, start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let lo = self.start.max(start);
        let hi = self.end.min(end);
        (lo <= hi).then_some((lo, hi))
    }
}

/// The standard stress windows evaluated on every request.
pub mod standard {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        // All call sites pass literal, valid calendar dates.
        NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
    }

    /// Global Financial Crisis: Lehman Brothers bankruptcy filing through
    /// the S&P 500 trough of March 9, 2009.
    #[must_use]
    pub fn gfc_2008() -> StressWindow {
        StressWindow {
            key: "gfc_2008",
            name: "Global Financial Crisis",
            description: "Credit crisis from the Lehman collapse to the March 2009 trough",
            start: ymd(2008, 9, 12),
            end: ymd(2009, 3, 9),
        }
    }

    /// COVID-19 crash: the pre-pandemic high through the March 23 bottom.
    #[must_use]
    pub fn covid_crash() -> StressWindow {
        StressWindow {
            key: "covid_crash",
            name: "COVID-19 Market Crash",
            description: "Market crash during COVID-19 pandemic onset",
            start: ymd(2020, 2, 20),
            end: ymd(2020, 3, 23),
        }
    }

    /// 2022 inflation/rate-hike downturn, January through the October low.
    #[must_use]
    pub fn downturn_2022() -> StressWindow {
        StressWindow {
            key: "2022_downturn",
            name: "2022 Market Downturn",
            description: "Market decline due to inflation and rate hikes",
            start: ymd(2022, 1, 1),
            end: ymd(2022, 10, 12),
        }
    }

    /// Returns all standard windows, oldest first.
    #[must_use]
    pub fn all() -> Vec<StressWindow> {
        vec![gfc_2008(), covid_crash(), downturn_2022()]
    }
}
