//! Indicator, trade, series and snapshot value types

mod data;

pub use data::{
    EconomicIndicator, EconomicSnapshot, HistoricalSeries, SeriesPoint, TimeSeries, TradeIndicator,
    Trend, Unit,
};
