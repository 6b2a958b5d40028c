//! Synthetic equity quotes and intraday index path
//!
//! Listings come from a per-country template (sector template otherwise).
//! Historical queries apply one shared price multiplier in [0.8, 1.2).

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// Points in the intraday index path (one per hour)
pub const INTRADAY_POINTS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn listing(symbol: &'static str, name: &'static str) -> Listing {
    Listing { symbol, name }
}

const US_LISTINGS: [Listing; 5] = [
    listing("AAPL", "Apple Inc."),
    listing("GOOGL", "Alphabet Inc."),
    listing("MSFT", "Microsoft Corp."),
    listing("TSLA", "Tesla Inc."),
    listing("AMZN", "Amazon.com Inc."),
];

const GB_LISTINGS: [Listing; 5] = [
    listing("LLOY", "Lloyds Banking Group"),
    listing("BP", "BP plc"),
    listing("SHEL", "Shell plc"),
    listing("AZN", "AstraZeneca PLC"),
    listing("ULVR", "Unilever PLC"),
];

const PK_LISTINGS: [Listing; 5] = [
    listing("HBL", "Habib Bank Limited"),
    listing("OGDC", "Oil & Gas Development"),
    listing("LUCK", "Lucky Cement"),
    listing("ENGRO", "Engro Corporation"),
    listing("PSO", "Pakistan State Oil"),
];

const TR_LISTINGS: [Listing; 5] = [
    listing("THYAO", "Turkish Airlines"),
    listing("AKBNK", "Akbank"),
    listing("BIMAS", "BIM Stores"),
    listing("EREGL", "Eregli Iron & Steel"),
    listing("KCHOL", "Koc Holding"),
];

const SECTOR_LISTINGS: [Listing; 5] = [
    listing("INDEX", "Market Index"),
    listing("BANK", "Banking Sector"),
    listing("TECH", "Technology Sector"),
    listing("ENERGY", "Energy Sector"),
    listing("CONSUMER", "Consumer Goods"),
];

/// Listings tracked for a country
pub fn listings_for(country_code: &str) -> &'static [Listing] {
    match country_code.trim().to_ascii_uppercase().as_str() {
        "US" => &US_LISTINGS,
        "GB" => &GB_LISTINGS,
        "PK" => &PK_LISTINGS,
        "TR" => &TR_LISTINGS,
        _ => &SECTOR_LISTINGS,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPoint {
    /// Hour label, "0:00".."23:00"
    pub time: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    /// Last intraday index value
    pub total_value: f64,
    pub daily_change: f64,
    pub volume: f64,
}

/// Quotes for every listing of a country
pub fn generate_quotes<R: RandomSource + ?Sized>(
    country_code: &str,
    historical: bool,
    rng: &mut R,
) -> Vec<StockQuote> {
    let multiplier = if historical { rng.uniform(0.8, 1.2) } else { 1.0 };

    listings_for(country_code)
        .iter()
        .map(|l| StockQuote {
            symbol: l.symbol.to_string(),
            name: l.name.to_string(),
            price: rng.uniform(50.0, 550.0) * multiplier,
            change: rng.centered(20.0),
            change_percent: rng.centered(10.0),
        })
        .collect()
}

/// Hourly index path: base level plus noise plus a slow sine swing
pub fn generate_intraday<R: RandomSource + ?Sized>(
    historical: bool,
    rng: &mut R,
) -> Vec<MarketPoint> {
    let discount = if historical { 0.85 } else { 1.0 };
    let base = rng.uniform(3000.0, 4000.0) * discount;

    (0..INTRADAY_POINTS)
        .map(|hour| MarketPoint {
            time: format!("{}:00", hour),
            value: base + rng.centered(200.0) + (hour as f64 / 4.0).sin() * 100.0,
        })
        .collect()
}

/// Live drift applied to quotes between ticks
pub fn tick<R: RandomSource + ?Sized>(quotes: &[StockQuote], rng: &mut R) -> Vec<StockQuote> {
    quotes
        .iter()
        .map(|q| StockQuote {
            price: q.price + rng.centered(5.0),
            change: q.change + rng.centered(2.0),
            change_percent: q.change_percent + rng.centered(1.0),
            ..q.clone()
        })
        .collect()
}

pub fn summarize<R: RandomSource + ?Sized>(intraday: &[MarketPoint], rng: &mut R) -> MarketSummary {
    MarketSummary {
        total_value: intraday.last().map(|p| p.value).unwrap_or(0.0),
        daily_change: rng.uniform(-50.0, 50.0),
        volume: rng.uniform(5e8, 1.5e9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{seeded, ScriptedSource};
    use approx::assert_relative_eq;

    #[test]
    fn test_listing_templates() {
        assert_eq!(listings_for("US")[0].symbol, "AAPL");
        assert_eq!(listings_for("tr")[0].symbol, "THYAO");
        assert_eq!(listings_for("FR")[0].symbol, "INDEX");
        assert_eq!(listings_for("").len(), 5);
    }

    #[test]
    fn test_quote_ranges() {
        let mut rng = seeded(21);
        for _ in 0..200 {
            for q in generate_quotes("GB", false, &mut rng) {
                assert!((50.0..550.0).contains(&q.price));
                assert!(q.change.abs() <= 10.0);
                assert!(q.change_percent.abs() <= 5.0);
            }
            for q in generate_quotes("GB", true, &mut rng) {
                assert!(q.price >= 50.0 * 0.8 && q.price < 550.0 * 1.2);
            }
        }
    }

    #[test]
    fn test_historical_multiplier_is_shared() {
        // First draw is the multiplier (0.5 => 1.0), price draws at 0.5 => 300
        let mut rng = ScriptedSource::constant(0.5);
        let quotes = generate_quotes("PK", true, &mut rng);
        for q in &quotes {
            assert_relative_eq!(q.price, 300.0, max_relative = 1e-12);
        }
        assert_eq!(rng.consumed(), 1 + 3 * quotes.len());
    }

    #[test]
    fn test_intraday_path() {
        let mut rng = ScriptedSource::constant(0.5);
        let path = generate_intraday(false, &mut rng);
        assert_eq!(path.len(), INTRADAY_POINTS);
        assert_eq!(path[0].time, "0:00");
        assert_eq!(path[23].time, "23:00");
        assert_relative_eq!(path[0].value, 3500.0, max_relative = 1e-12);

        let mut rng = ScriptedSource::constant(0.5);
        let past = generate_intraday(true, &mut rng);
        assert_relative_eq!(past[0].value, 3500.0 * 0.85, max_relative = 1e-12);
    }

    #[test]
    fn test_tick_keeps_identity() {
        let mut rng = seeded(3);
        let quotes = generate_quotes("US", false, &mut rng);
        let next = tick(&quotes, &mut rng);
        for (a, b) in quotes.iter().zip(&next) {
            assert_eq!(a.symbol, b.symbol);
            assert!((a.price - b.price).abs() <= 2.5);
            assert!((a.change - b.change).abs() <= 1.0);
        }
    }

    #[test]
    fn test_summary_uses_last_point() {
        let mut rng = seeded(4);
        let path = generate_intraday(false, &mut rng);
        let summary = summarize(&path, &mut rng);
        assert_eq!(summary.total_value, path[23].value);
        assert!((5e8..1.5e9).contains(&summary.volume));

        assert_eq!(summarize(&[], &mut rng).total_value, 0.0);
    }
}
