//! Snapshot generation for one (profile, date) pair
//!
//! Draw order for a call is fixed: damping (historical only), trade figures,
//! headline indicators (change then trend, GDP through unemployment),
//! population growth, then the GDP, inflation and interest series.
//! A seeded [`RandomSource`] therefore reproduces a snapshot exactly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::config::GeneratorConfig;
use super::series::{build_series, country_trend, month_labels};
use crate::country::CountryProfile;
use crate::indicators::{
    EconomicIndicator, EconomicSnapshot, HistoricalSeries, TradeIndicator, Trend, Unit,
};
use crate::random::RandomSource;

/// Lower bound of the historical damping draw
pub const DAMPING_LOW: f64 = 0.85;
/// Upper bound (exclusive) of the historical damping draw
pub const DAMPING_HIGH: f64 = 1.15;

/// Inflation baseline above which inflation trend is forced up
pub const HIGH_INFLATION: f64 = 10.0;
/// Inflation baseline above which interest-rate trend is forced up
pub const ELEVATED_INFLATION: f64 = 5.0;
/// GDP baseline above which the GDP change swing is narrowed
pub const LARGE_ECONOMY_GDP: f64 = 5.0;

/// Scale applied to every level value in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "factor", rename_all = "lowercase")]
pub enum Damping {
    /// Query date is today: values are undamped
    Live,
    /// Query date is in the past: one shared draw in [0.85, 1.15)
    Historical(f64),
}

impl Damping {
    /// Draw the damping for a call. Live calls consume no randomness.
    pub fn draw<R: RandomSource + ?Sized>(historical: bool, rng: &mut R) -> Self {
        if historical {
            Damping::Historical(rng.uniform(DAMPING_LOW, DAMPING_HIGH))
        } else {
            Damping::Live
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Damping::Live => 1.0,
            Damping::Historical(f) => *f,
        }
    }

    pub fn is_historical(&self) -> bool {
        matches!(self, Damping::Historical(_))
    }
}

/// Calendar-day comparison of the query date against the UTC day of `now`
pub fn is_historical(query_date: NaiveDate, now: DateTime<Utc>) -> bool {
    query_date != now.date_naive()
}

/// A snapshot plus the generation facts behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScenario {
    pub query_date: NaiveDate,
    pub damping: Damping,
    pub snapshot: EconomicSnapshot,
}

impl GeneratedScenario {
    pub fn is_historical(&self) -> bool {
        self.damping.is_historical()
    }
}

/// Generate a snapshot with the default configuration
pub fn generate<R: RandomSource + ?Sized>(
    profile: &CountryProfile,
    query_date: NaiveDate,
    now: DateTime<Utc>,
    rng: &mut R,
) -> EconomicSnapshot {
    generate_with(profile, query_date, now, rng, &GeneratorConfig::default()).snapshot
}

/// Generate a snapshot, returning the damping that was applied alongside it
pub fn generate_with<R: RandomSource + ?Sized>(
    profile: &CountryProfile,
    query_date: NaiveDate,
    now: DateTime<Utc>,
    rng: &mut R,
    config: &GeneratorConfig,
) -> GeneratedScenario {
    let damping = Damping::draw(is_historical(query_date, now), rng);
    let scale = damping.factor();

    let trade = draw_trade(profile, scale, rng);

    let gdp = EconomicIndicator {
        value: profile.gdp_baseline * scale,
        change: gdp_change(profile, rng),
        trend: gdp_trend(rng),
        unit: Unit::Trillion,
    };

    let inflation = EconomicIndicator {
        value: profile.inflation_baseline * scale,
        change: rng.centered(2.0),
        trend: inflation_trend(profile, rng),
        unit: Unit::Percent,
    };

    let interest_rate = EconomicIndicator {
        value: profile.interest_baseline * scale,
        change: rng.centered(1.0),
        trend: interest_trend(profile, rng),
        unit: Unit::Percent,
    };

    let unemployment = EconomicIndicator {
        value: profile.unemployment_baseline * scale,
        change: rng.centered(1.5),
        trend: unemployment_trend(rng),
        unit: Unit::Percent,
    };

    // Population is a stock: never damped, always trending up
    let population = EconomicIndicator {
        value: profile.population_baseline,
        change: population_growth(profile, rng),
        trend: Trend::Up,
        unit: Unit::Million,
    };

    let labels = month_labels(config.month_labels, query_date);
    let trend = country_trend(profile);
    let historical_data = HistoricalSeries {
        gdp: build_series(profile.gdp_baseline, trend, scale, &labels, rng),
        inflation: build_series(profile.inflation_baseline, trend, scale, &labels, rng),
        interest_rate: build_series(profile.interest_baseline, trend, scale, &labels, rng),
    };

    log::debug!(
        "generated snapshot for {} (damping {:.4}, trade balance {:.2})",
        query_date,
        scale,
        trade.balance
    );

    GeneratedScenario {
        query_date,
        damping,
        snapshot: EconomicSnapshot {
            gdp,
            inflation,
            interest_rate,
            unemployment,
            population,
            trade,
            historical_data,
        },
    }
}

/// Imports, exports and remittances, all scaled by trade volume and damping
fn draw_trade<R: RandomSource + ?Sized>(
    profile: &CountryProfile,
    scale: f64,
    rng: &mut R,
) -> TradeIndicator {
    let factor = profile.trade_scale * scale;
    let imports = rng.uniform(100.0, 500.0) * factor;
    let exports = rng.uniform(80.0, 430.0) * factor;
    let remittances = rng.uniform(5.0, 55.0) * factor;
    TradeIndicator::new(imports, exports, remittances)
}

/// ±1% for large economies, ±3% otherwise
fn gdp_change<R: RandomSource + ?Sized>(profile: &CountryProfile, rng: &mut R) -> f64 {
    let convexity = if profile.gdp_baseline > LARGE_ECONOMY_GDP { 0.5 } else { 1.5 };
    rng.centered(4.0) * convexity
}

// Trend draws below are independent of the change draws above.

fn gdp_trend<R: RandomSource + ?Sized>(rng: &mut R) -> Trend {
    if rng.next_unit() > 0.5 {
        Trend::Up
    } else {
        Trend::Down
    }
}

fn inflation_trend<R: RandomSource + ?Sized>(profile: &CountryProfile, rng: &mut R) -> Trend {
    if profile.inflation_baseline > HIGH_INFLATION {
        return Trend::Up;
    }
    if rng.next_unit() > 0.6 {
        Trend::Up
    } else {
        Trend::Down
    }
}

/// Keyed on the inflation baseline, not the interest baseline
fn interest_trend<R: RandomSource + ?Sized>(profile: &CountryProfile, rng: &mut R) -> Trend {
    if profile.inflation_baseline > ELEVATED_INFLATION {
        return Trend::Up;
    }
    if rng.next_unit() > 0.4 {
        Trend::Up
    } else {
        Trend::Down
    }
}

fn unemployment_trend<R: RandomSource + ?Sized>(rng: &mut R) -> Trend {
    if rng.next_unit() > 0.7 {
        Trend::Down
    } else {
        Trend::Up
    }
}

/// Growth rate in percent, bucketed by population size (millions)
fn population_growth<R: RandomSource + ?Sized>(profile: &CountryProfile, rng: &mut R) -> f64 {
    let population = profile.population_baseline;
    if population >= 1000.0 {
        rng.uniform(0.8, 1.2)
    } else if population >= 100.0 {
        rng.uniform(1.0, 1.8)
    } else {
        rng.uniform(1.2, 2.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{lookup, BUILTIN_PROFILES};
    use crate::random::{seeded, ScriptedSource};
    use crate::scenario::series::{SERIES_LEN, seasonal};
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 20, 14, 30, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn past() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()
    }

    #[test]
    fn test_is_historical_uses_calendar_day() {
        let late = Utc.with_ymd_and_hms(2024, 5, 20, 23, 59, 59).unwrap();
        let early = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();
        assert!(!is_historical(today(), late));
        assert!(!is_historical(today(), early));
        assert!(is_historical(past(), now()));
        assert!(is_historical(today().succ_opt().unwrap(), now()));
    }

    #[test]
    fn test_us_live_snapshot_is_undamped() {
        let mut rng = seeded(1);
        let generated =
            generate_with(lookup("US"), today(), now(), &mut rng, &GeneratorConfig::default());
        let snap = &generated.snapshot;

        assert_eq!(generated.damping, Damping::Live);
        assert_eq!(snap.gdp.value, 21.4);
        assert_eq!(snap.inflation.value, 2.1);
        assert_eq!(snap.interest_rate.value, 5.25);
        assert_eq!(snap.unemployment.value, 3.7);
        assert_eq!(snap.population.value, 331.0);
    }

    #[test]
    fn test_historical_damping_in_range() {
        let mut rng = seeded(2);
        for _ in 0..500 {
            let generated =
                generate_with(lookup("DE"), past(), now(), &mut rng, &GeneratorConfig::default());
            let f = generated.damping.factor();
            assert!(generated.is_historical());
            assert!((DAMPING_LOW..DAMPING_HIGH).contains(&f), "damping {} out of range", f);
        }
    }

    #[test]
    fn test_historical_damping_is_shared() {
        let mut rng = seeded(3);
        let profile = lookup("JP");
        let generated =
            generate_with(profile, past(), now(), &mut rng, &GeneratorConfig::default());
        let snap = &generated.snapshot;
        let f = generated.damping.factor();

        assert_relative_eq!(snap.gdp.value / profile.gdp_baseline, f, max_relative = 1e-12);
        assert_relative_eq!(
            snap.inflation.value / profile.inflation_baseline,
            f,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            snap.interest_rate.value / profile.interest_baseline,
            f,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            snap.unemployment.value / profile.unemployment_baseline,
            f,
            max_relative = 1e-12
        );

        // Population is a stock and stays at baseline
        assert_eq!(snap.population.value, profile.population_baseline);

        // Trade figures divided by their scale land inside the undamped draw ranges
        let unit = profile.trade_scale * f;
        let within = |v: f64, low: f64, high: f64| v >= low - 1e-9 && v <= high + 1e-9;
        assert!(within(snap.trade.imports / unit, 100.0, 500.0));
        assert!(within(snap.trade.exports / unit, 80.0, 430.0));
        assert!(within(snap.trade.remittances / unit, 5.0, 55.0));
    }

    #[test]
    fn test_trade_uses_same_damping_as_indicators() {
        // Damping draw 0.5 => 1.0; trade draws all 0.5 => midpoints
        let mut rng = ScriptedSource::constant(0.5);
        let profile = lookup("GB");
        let generated =
            generate_with(profile, past(), now(), &mut rng, &GeneratorConfig::default());
        let trade = generated.snapshot.trade;
        let f = generated.damping.factor();

        assert_relative_eq!(f, 1.0, max_relative = 1e-12);
        assert_relative_eq!(trade.imports, 300.0 * 0.8 * f, max_relative = 1e-12);
        assert_relative_eq!(trade.exports, 255.0 * 0.8 * f, max_relative = 1e-12);
        assert_relative_eq!(trade.remittances, 30.0 * 0.8 * f, max_relative = 1e-12);
    }

    #[test]
    fn test_trade_is_damped_with_indicators() {
        // Damping draw 0.0 => exactly 0.85; trade draws at 0.5 => midpoints
        let mut rng = ScriptedSource::new(vec![0.0, 0.5, 0.5, 0.5]);
        let profile = lookup("GB");
        let generated =
            generate_with(profile, past(), now(), &mut rng, &GeneratorConfig::default());
        let snap = &generated.snapshot;

        assert_eq!(generated.damping, Damping::Historical(0.85));
        let unit = profile.trade_scale * 0.85;
        assert_relative_eq!(snap.trade.imports, 300.0 * unit, max_relative = 1e-12);
        assert_relative_eq!(snap.trade.exports, 255.0 * unit, max_relative = 1e-12);
        assert_relative_eq!(snap.trade.remittances, 30.0 * unit, max_relative = 1e-12);
        assert_relative_eq!(snap.trade.balance, -45.0 * unit, max_relative = 1e-12);

        assert_relative_eq!(snap.gdp.value / profile.gdp_baseline, 0.85, max_relative = 1e-12);
        assert_relative_eq!(
            snap.unemployment.value / profile.unemployment_baseline,
            0.85,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_snapshot_shape_for_all_countries() {
        let mut rng = seeded(4);
        for (code, profile) in BUILTIN_PROFILES {
            for date in [today(), past()] {
                let snap = generate(profile, date, now(), &mut rng);
                assert_eq!(snap.headline().len(), 4);
                for (name, series) in snap.series() {
                    assert_eq!(series.len(), SERIES_LEN, "{} {} series", code, name);
                }
                assert_eq!(snap.trade.balance, snap.trade.exports - snap.trade.imports);
                assert!(snap.trade.imports >= 0.0 && snap.trade.exports >= 0.0);
                assert!(snap.trade.remittances >= 0.0);
                assert_eq!(snap.population.trend, Trend::Up);
            }
        }
    }

    #[test]
    fn test_series_envelope_for_all_countries() {
        let mut rng = seeded(5);
        for (_, profile) in BUILTIN_PROFILES {
            let generated =
                generate_with(profile, past(), now(), &mut rng, &GeneratorConfig::default());
            let d = generated.damping.factor();
            let t = country_trend(profile);
            let series = &generated.snapshot.historical_data;

            for (baseline, s) in [
                (profile.gdp_baseline, &series.gdp),
                (profile.inflation_baseline, &series.inflation),
                (profile.interest_baseline, &series.interest_rate),
            ] {
                let low = baseline * (1.0 + t - 0.2) * d;
                let high = baseline * (1.0 + t + 0.2) * d;
                for v in s.values() {
                    assert!(v >= low - 1e-9 && v <= high + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_live_series_has_no_damping() {
        // Noise draws at 0.5 are exactly zero
        let mut rng = ScriptedSource::constant(0.5);
        let profile = lookup("US");
        let snap = generate(profile, today(), now(), &mut rng);

        for (i, point) in snap.historical_data.gdp.iter().enumerate() {
            let expected = 21.4 * (1.0 + seasonal(i) + 0.05);
            assert_relative_eq!(point.value, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_change_ranges() {
        let mut rng = seeded(6);
        for _ in 0..500 {
            let us = generate(lookup("US"), today(), now(), &mut rng);
            assert!(us.gdp.change.abs() <= 1.0);
            assert!(us.inflation.change.abs() <= 1.0);
            assert!(us.interest_rate.change.abs() <= 0.5);
            assert!(us.unemployment.change.abs() <= 0.75);
            assert!((1.0..1.8).contains(&us.population.change));

            let fj = generate(lookup("FJ"), today(), now(), &mut rng);
            assert!(fj.gdp.change.abs() <= 3.0);
            assert!((1.2..2.2).contains(&fj.population.change));

            let cn = generate(lookup("CN"), today(), now(), &mut rng);
            assert!((0.8..1.2).contains(&cn.population.change));
        }
    }

    #[test]
    fn test_high_inflation_forces_up_trends() {
        let mut rng = seeded(7);
        for _ in 0..100 {
            // TR: inflation 64.3 forces both inflation and interest trends
            let tr = generate(lookup("TR"), today(), now(), &mut rng);
            assert_eq!(tr.inflation.trend, Trend::Up);
            assert_eq!(tr.interest_rate.trend, Trend::Up);

            // DE: inflation 6.1 forces interest only
            let de = generate(lookup("DE"), today(), now(), &mut rng);
            assert_eq!(de.interest_rate.trend, Trend::Up);
        }
    }

    #[test]
    fn test_trend_is_independent_of_change_sign() {
        // All draws at 0.9: GDP change positive, GDP trend up, unemployment trend down
        // while unemployment change is positive
        let mut rng = ScriptedSource::constant(0.9);
        let snap = generate(lookup("US"), today(), now(), &mut rng);
        assert!(snap.unemployment.change > 0.0);
        assert_eq!(snap.unemployment.trend, Trend::Down);

        // All draws at 0.1: GDP change negative and trend down, unemployment up
        let mut rng = ScriptedSource::constant(0.1);
        let snap = generate(lookup("US"), today(), now(), &mut rng);
        assert!(snap.unemployment.change < 0.0);
        assert_eq!(snap.unemployment.trend, Trend::Up);
        assert_eq!(snap.inflation.trend, Trend::Down);
        assert_eq!(snap.interest_rate.trend, Trend::Down);
    }

    #[test]
    fn test_trend_draw_thresholds() {
        // US is live and below both inflation cut-offs, so every trend is drawn
        let trends = |u: f64| {
            let mut rng = ScriptedSource::constant(u);
            let snap = generate(lookup("US"), today(), now(), &mut rng);
            (
                snap.gdp.trend,
                snap.inflation.trend,
                snap.interest_rate.trend,
                snap.unemployment.trend,
            )
        };

        // Thresholds are strict: a draw equal to the cut-off takes the else branch
        assert_eq!(trends(0.5), (Trend::Down, Trend::Down, Trend::Up, Trend::Up));

        assert_eq!(trends(0.49).0, Trend::Down);
        assert_eq!(trends(0.51).0, Trend::Up);

        assert_eq!(trends(0.59).1, Trend::Down);
        assert_eq!(trends(0.6).1, Trend::Down);
        assert_eq!(trends(0.61).1, Trend::Up);

        assert_eq!(trends(0.39).2, Trend::Down);
        assert_eq!(trends(0.4).2, Trend::Down);
        assert_eq!(trends(0.41).2, Trend::Up);

        assert_eq!(trends(0.69).3, Trend::Up);
        assert_eq!(trends(0.7).3, Trend::Up);
        assert_eq!(trends(0.71).3, Trend::Down);
    }

    #[test]
    fn test_population_bucket_edges() {
        let profile = |population: f64| CountryProfile::new(1.0, 2.0, 2.0, 4.0, population, 0.5);
        let (billion, hundred, below) = (profile(1000.0), profile(100.0), profile(99.9));

        let mut rng = seeded(11);
        for _ in 0..200 {
            let growth = generate(&billion, today(), now(), &mut rng).population.change;
            assert!((0.8..1.2).contains(&growth), "1000M growth {}", growth);
            let growth = generate(&hundred, today(), now(), &mut rng).population.change;
            assert!((1.0..1.8).contains(&growth), "100M growth {}", growth);
            let growth = generate(&below, today(), now(), &mut rng).population.change;
            assert!((1.2..2.2).contains(&growth), "99.9M growth {}", growth);
        }

        // Draw 0.0 pins each bucket's lower bound
        let mut rng = ScriptedSource::constant(0.0);
        assert_eq!(generate(&billion, today(), now(), &mut rng).population.change, 0.8);
        let mut rng = ScriptedSource::constant(0.0);
        assert_eq!(generate(&hundred, today(), now(), &mut rng).population.change, 1.0);
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        let a = generate(lookup("IN"), past(), now(), &mut seeded(42));
        let b = generate(lookup("IN"), past(), now(), &mut seeded(42));
        assert_eq!(a, b);

        let c = generate(lookup("IN"), past(), now(), &mut seeded(43));
        assert_ne!(a, c);
    }

    #[test]
    fn test_live_call_draw_count() {
        // Live US: 3 trade + 4 changes + 4 trends + 1 population + 36 series points
        let mut rng = ScriptedSource::constant(0.5);
        generate(lookup("US"), today(), now(), &mut rng);
        assert_eq!(rng.consumed(), 3 + 4 + 4 + 1 + 3 * SERIES_LEN);

        // Historical adds the single damping draw
        let mut rng = ScriptedSource::constant(0.5);
        generate(lookup("US"), past(), now(), &mut rng);
        assert_eq!(rng.consumed(), 1 + 3 + 4 + 4 + 1 + 3 * SERIES_LEN);
    }
}
