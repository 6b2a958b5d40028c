//! Scenario generation: snapshots, historical series and the batch runner

mod config;
mod generator;
mod runner;
pub mod series;

pub use config::{GeneratorConfig, MonthLabels};
pub use generator::{
    generate, generate_with, is_historical, Damping, GeneratedScenario, DAMPING_HIGH, DAMPING_LOW,
};
pub use runner::{
    earliest_query_date, parse_query_date, validate_query_date, RefreshPolicy, ScenarioRunner,
    EARLIEST_QUERY_DATE, MARKET_TICK, SNAPSHOT_REFRESH,
};
