//! Twelve-month historical series with seasonal, noise and country-trend terms
//!
//! Point i: `baseline * (1 + 0.1*sin(2*pi*i/12) + noise_i + trend) * damping`
//! with `noise_i` drawn in [-0.1, 0.1) and `trend` fixed per country by GDP size.

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

use super::config::MonthLabels;
use crate::country::CountryProfile;
use crate::indicators::{SeriesPoint, TimeSeries};
use crate::random::RandomSource;

/// Points per historical series
pub const SERIES_LEN: usize = 12;

/// Amplitude of the seasonal sine term
pub const SEASONAL_AMPLITUDE: f64 = 0.1;

/// Total width of the per-point noise draw, centred on zero
pub const NOISE_WIDTH: f64 = 0.2;

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Seasonal term for point `i`
pub fn seasonal(i: usize) -> f64 {
    SEASONAL_AMPLITUDE * (2.0 * PI * i as f64 / SERIES_LEN as f64).sin()
}

/// Trend constant shared by every point of a country's series, bucketed by GDP
pub fn country_trend(profile: &CountryProfile) -> f64 {
    if profile.gdp_baseline > 10.0 {
        0.05
    } else if profile.gdp_baseline > 1.0 {
        0.02
    } else {
        -0.01
    }
}

/// Labels for the series points
pub fn month_labels(mode: MonthLabels, query_date: NaiveDate) -> Vec<&'static str> {
    match mode {
        MonthLabels::Calendar => MONTH_NAMES.to_vec(),
        MonthLabels::Trailing => {
            // month0 is 0-based; the last label is the query month
            let last = query_date.month0() as usize;
            (0..SERIES_LEN)
                .map(|i| MONTH_NAMES[(last + 1 + i) % 12])
                .collect()
        }
    }
}

/// Build one series around `baseline`
pub fn build_series<R: RandomSource + ?Sized>(
    baseline: f64,
    trend: f64,
    damping: f64,
    labels: &[&'static str],
    rng: &mut R,
) -> TimeSeries {
    let points = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let noise = rng.centered(NOISE_WIDTH);
            SeriesPoint {
                label: (*label).to_string(),
                value: baseline * (1.0 + seasonal(i) + noise + trend) * damping,
            }
        })
        .collect();

    TimeSeries::new(points)
}
