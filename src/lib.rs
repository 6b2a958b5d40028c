//! Macro Scenario - synthetic macroeconomic scenario engine
//!
//! This library provides:
//! - Country baseline profiles with a total, default-falling-back lookup
//! - Snapshot generation (headline indicators, trade, 12-month series) with
//!   historical damping and an injected randomness source
//! - A closed-form policy-impact projector for interest, spending and tax levers
//! - A synthetic stock-market view per country

pub mod country;
pub mod error;
pub mod indicators;
pub mod market;
pub mod projection;
pub mod random;
pub mod scenario;

// Re-export commonly used types
pub use country::{lookup, CountryProfile, CountryTable};
pub use error::EngineError;
pub use indicators::{EconomicIndicator, EconomicSnapshot, TimeSeries, TradeIndicator, Trend};
pub use projection::{project, Impact, PolicyEffect, PolicyLevers};
pub use random::RandomSource;
pub use scenario::{generate, GeneratorConfig, ScenarioRunner};
