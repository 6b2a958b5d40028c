//! Scenario runner for repeated and batch generation
//!
//! Holds a profile table and generator config once, then generates snapshots
//! for any (country, date) pair. Also carries the date helpers and refresh
//! cadence a polling caller needs.

use chrono::{DateTime, NaiveDate, Utc};
use rayon::prelude::*;
use std::path::Path;
use std::time::Duration;

use super::config::GeneratorConfig;
use super::generator::{generate_with, is_historical, GeneratedScenario};
use crate::country::CountryTable;
use crate::error::{EngineError, Result};
use crate::random::{seeded, RandomSource};

/// Earliest date callers should offer for historical queries
pub const EARLIEST_QUERY_DATE: (i32, u32, u32) = (2020, 1, 1);

/// Snapshot refresh cadence while the query date is today
pub const SNAPSHOT_REFRESH: Duration = Duration::from_secs(30);

/// Market quote tick cadence while the query date is today
pub const MARKET_TICK: Duration = Duration::from_secs(10);

pub fn earliest_query_date() -> NaiveDate {
    let (y, m, d) = EARLIEST_QUERY_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Parse an ISO calendar date (YYYY-MM-DD)
pub fn parse_query_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| EngineError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Reject dates before the earliest supported date. The generator itself accepts any date.
pub fn validate_query_date(date: NaiveDate) -> Result<NaiveDate> {
    let earliest = earliest_query_date();
    if date < earliest {
        return Err(EngineError::DateTooEarly { date, earliest });
    }
    Ok(date)
}

/// Re-generation cadence for a polling caller.
///
/// Only live queries refresh; the caller owns the timer and must drop it
/// when the (country, date) selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub snapshot: Option<Duration>,
    pub market: Option<Duration>,
}

impl RefreshPolicy {
    pub fn for_query(query_date: NaiveDate, now: DateTime<Utc>) -> Self {
        if is_historical(query_date, now) {
            Self { snapshot: None, market: None }
        } else {
            Self {
                snapshot: Some(SNAPSHOT_REFRESH),
                market: Some(MARKET_TICK),
            }
        }
    }

    pub fn is_live(&self) -> bool {
        self.snapshot.is_some()
    }
}

/// Pre-loaded runner for repeated generation
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let mut rng = seeded(7);
/// let scenario = runner.run("GB", date, Utc::now(), &mut rng);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    table: CountryTable,
    config: GeneratorConfig,
}

impl ScenarioRunner {
    /// Runner over the built-in profile table
    pub fn new() -> Self {
        Self::with_table(CountryTable::builtin())
    }

    /// Runner over profiles loaded from the default CSV location
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_table(CountryTable::from_csv()?))
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self::with_table(CountryTable::from_csv_path(path)?))
    }

    pub fn with_table(table: CountryTable) -> Self {
        Self {
            table,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate one scenario; unknown codes use the table's default profile
    pub fn run<R: RandomSource + ?Sized>(
        &self,
        country_code: &str,
        query_date: NaiveDate,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> GeneratedScenario {
        let profile = self.table.lookup(country_code);
        generate_with(profile, query_date, now, rng, &self.config)
    }

    /// Generate one scenario per code in parallel.
    ///
    /// Each code gets its own source seeded from `base_seed` and its position,
    /// so results are reproducible regardless of thread scheduling.
    pub fn run_batch(
        &self,
        country_codes: &[&str],
        query_date: NaiveDate,
        now: DateTime<Utc>,
        base_seed: u64,
    ) -> Vec<(String, GeneratedScenario)> {
        country_codes
            .par_iter()
            .enumerate()
            .map(|(i, code)| {
                let mut rng = seeded(base_seed.wrapping_add(i as u64));
                (code.to_string(), self.run(code, query_date, now, &mut rng))
            })
            .collect()
    }

    pub fn table(&self) -> &CountryTable {
        &self.table
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
