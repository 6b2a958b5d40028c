//! Snapshot value types shared with rendering layers
//!
//! Field names serialize in camelCase; these shapes are the interchange format.

use serde::{Deserialize, Serialize};

/// Direction hint for an indicator.
///
/// Presentation only: it is drawn separately from `change` and may disagree
/// with its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

/// Display unit of an indicator value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Trillion,
    Percent,
    Million,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Trillion => "trillion",
            Unit::Percent => "percent",
            Unit::Million => "million",
        }
    }
}

/// One headline indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicIndicator {
    pub value: f64,

    /// Period-over-period change, percent
    pub change: f64,

    pub trend: Trend,

    pub unit: Unit,
}

/// Trade figures, billions USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeIndicator {
    pub imports: f64,
    pub exports: f64,
    /// Always `exports - imports`
    pub balance: f64,
    pub remittances: f64,
}

impl TradeIndicator {
    /// Build from the three drawn figures; `balance` is derived here and nowhere else
    pub fn new(imports: f64, exports: f64, remittances: f64) -> Self {
        Self {
            imports,
            exports,
            balance: exports - imports,
            remittances,
        }
    }

    pub fn is_surplus(&self) -> bool {
        self.balance > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Short month name ("Jan".."Dec")
    pub label: String,
    pub value: f64,
}

/// Ordered monthly points for one indicator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries {
    pub points: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn min(&self) -> Option<f64> {
        self.values().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    pub fn mean(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.values().sum::<f64>() / self.points.len() as f64)
    }
}

/// Historical series carried by a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalSeries {
    pub gdp: TimeSeries,
    pub inflation: TimeSeries,
    pub interest_rate: TimeSeries,
}

/// Full generated picture of one economy for one (country, date) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicSnapshot {
    pub gdp: EconomicIndicator,
    pub inflation: EconomicIndicator,
    pub interest_rate: EconomicIndicator,
    pub unemployment: EconomicIndicator,
    pub population: EconomicIndicator,
    pub trade: TradeIndicator,
    pub historical_data: HistoricalSeries,
}

impl EconomicSnapshot {
    /// The four damped headline indicators in fixed order: GDP, inflation, interest, unemployment
    pub fn headline(&self) -> [(&'static str, &EconomicIndicator); 4] {
        [
            ("GDP", &self.gdp),
            ("Inflation", &self.inflation),
            ("Interest Rate", &self.interest_rate),
            ("Unemployment", &self.unemployment),
        ]
    }

    /// Series in fixed order: GDP, inflation, interest
    pub fn series(&self) -> [(&'static str, &TimeSeries); 3] {
        [
            ("GDP", &self.historical_data.gdp),
            ("Inflation", &self.historical_data.inflation),
            ("Interest Rate", &self.historical_data.interest_rate),
        ]
    }
}
