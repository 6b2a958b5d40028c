//! Synthetic stock-market view for a country

mod quotes;

pub use quotes::{
    generate_intraday, generate_quotes, listings_for, summarize, tick, Listing, MarketPoint,
    MarketSummary, StockQuote, INTRADAY_POINTS,
};
