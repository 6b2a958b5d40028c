//! Country baseline profiles and the code -> profile lookup table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, Result};

/// Code whose profile answers every unknown or unsupported lookup
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// Baseline macro parameters for one economy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryProfile {
    /// Nominal GDP, trillions USD
    pub gdp_baseline: f64,

    /// Headline inflation, percent
    pub inflation_baseline: f64,

    /// Policy interest rate, percent
    pub interest_baseline: f64,

    /// Unemployment rate, percent
    pub unemployment_baseline: f64,

    /// Population, millions
    pub population_baseline: f64,

    /// Relative trade volume (1.0 = largest trading economy in the table)
    pub trade_scale: f64,
}

impl CountryProfile {
    pub const fn new(
        gdp_baseline: f64,
        inflation_baseline: f64,
        interest_baseline: f64,
        unemployment_baseline: f64,
        population_baseline: f64,
        trade_scale: f64,
    ) -> Self {
        Self {
            gdp_baseline,
            inflation_baseline,
            interest_baseline,
            unemployment_baseline,
            population_baseline,
            trade_scale,
        }
    }

    /// Check that every baseline is finite and non-negative, and population is positive
    pub fn validate(&self, code: &str) -> Result<()> {
        let fields = [
            ("gdpBaseline", self.gdp_baseline),
            ("inflationBaseline", self.inflation_baseline),
            ("interestBaseline", self.interest_baseline),
            ("unemploymentBaseline", self.unemployment_baseline),
            ("populationBaseline", self.population_baseline),
            ("tradeScale", self.trade_scale),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidProfile {
                    code: code.to_string(),
                    reason: format!("{} must be finite and >= 0, got {}", name, value),
                });
            }
        }

        if self.population_baseline <= 0.0 {
            return Err(EngineError::InvalidProfile {
                code: code.to_string(),
                reason: "populationBaseline must be > 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Built-in baselines: (code, profile)
///
/// Columns: GDP, inflation, interest, unemployment, population, trade scale
pub const BUILTIN_PROFILES: &[(&str, CountryProfile)] = &[
    ("US", CountryProfile::new(21.4, 2.1, 5.25, 3.7, 331.0, 1.0)),
    ("GB", CountryProfile::new(3.1, 4.2, 5.0, 4.2, 67.0, 0.8)),
    ("DE", CountryProfile::new(4.2, 6.1, 4.5, 5.5, 83.0, 0.9)),
    ("FR", CountryProfile::new(2.9, 5.8, 4.5, 7.3, 68.0, 0.85)),
    ("JP", CountryProfile::new(4.9, 3.0, 0.1, 2.6, 125.0, 0.95)),
    ("CN", CountryProfile::new(17.7, 2.0, 3.45, 5.2, 1412.0, 1.2)),
    ("IN", CountryProfile::new(3.7, 6.7, 6.5, 7.9, 1380.0, 0.7)),
    ("BR", CountryProfile::new(2.1, 11.9, 13.25, 9.3, 215.0, 0.6)),
    ("CA", CountryProfile::new(2.1, 3.4, 5.0, 5.2, 38.0, 0.75)),
    ("AU", CountryProfile::new(1.6, 7.8, 4.35, 3.5, 26.0, 0.65)),
    ("PK", CountryProfile::new(0.35, 12.4, 22.0, 6.9, 230.0, 0.3)),
    ("TR", CountryProfile::new(0.82, 64.3, 17.5, 10.4, 84.0, 0.4)),
    ("RU", CountryProfile::new(1.8, 5.9, 16.0, 3.5, 146.0, 0.5)),
    ("MX", CountryProfile::new(1.3, 4.7, 11.25, 3.4, 128.0, 0.55)),
    ("KR", CountryProfile::new(1.8, 3.6, 3.5, 2.9, 52.0, 0.8)),
    ("ID", CountryProfile::new(1.3, 3.2, 6.0, 5.8, 274.0, 0.45)),
    ("SA", CountryProfile::new(0.83, 2.3, 6.0, 7.4, 35.0, 0.7)),
    ("ZA", CountryProfile::new(0.42, 5.9, 8.25, 32.9, 60.0, 0.35)),
    ("NG", CountryProfile::new(0.44, 22.8, 18.75, 33.3, 218.0, 0.25)),
    ("EG", CountryProfile::new(0.47, 14.2, 19.25, 7.4, 104.0, 0.3)),
    ("AR", CountryProfile::new(0.49, 102.5, 97.0, 6.9, 46.0, 0.4)),
    ("TH", CountryProfile::new(0.54, 1.2, 2.5, 1.2, 70.0, 0.6)),
    ("MY", CountryProfile::new(0.43, 2.8, 3.0, 3.9, 33.0, 0.55)),
    ("SG", CountryProfile::new(0.40, 4.8, 3.4, 2.1, 6.0, 0.9)),
    ("PH", CountryProfile::new(0.39, 5.3, 6.5, 4.5, 111.0, 0.4)),
    ("VN", CountryProfile::new(0.41, 3.2, 4.5, 2.0, 98.0, 0.5)),
    ("BD", CountryProfile::new(0.46, 9.5, 7.25, 4.2, 166.0, 0.25)),
    ("LK", CountryProfile::new(0.08, 25.0, 15.5, 4.7, 22.0, 0.2)),
    ("IR", CountryProfile::new(0.23, 45.2, 18.0, 9.1, 85.0, 0.3)),
    ("IQ", CountryProfile::new(0.22, 5.0, 4.0, 16.5, 41.0, 0.25)),
    ("AE", CountryProfile::new(0.51, 4.8, 5.4, 2.4, 10.0, 0.8)),
    ("QA", CountryProfile::new(0.18, 4.9, 5.5, 0.1, 3.0, 0.75)),
    ("KW", CountryProfile::new(0.14, 3.4, 4.25, 2.1, 4.0, 0.7)),
    ("IL", CountryProfile::new(0.48, 4.4, 4.75, 3.4, 9.0, 0.6)),
    ("CL", CountryProfile::new(0.32, 11.6, 11.25, 8.7, 19.0, 0.5)),
    ("CO", CountryProfile::new(0.31, 13.1, 13.25, 11.2, 51.0, 0.4)),
    ("PE", CountryProfile::new(0.24, 8.8, 7.75, 7.2, 33.0, 0.35)),
    ("VE", CountryProfile::new(0.05, 156.0, 59.0, 7.7, 28.0, 0.15)),
    ("EC", CountryProfile::new(0.11, 3.5, 8.68, 4.6, 18.0, 0.3)),
    ("UY", CountryProfile::new(0.06, 9.1, 11.5, 8.3, 3.0, 0.25)),
    ("NZ", CountryProfile::new(0.25, 7.2, 5.5, 3.4, 5.0, 0.4)),
    ("FJ", CountryProfile::new(0.005, 4.3, 0.5, 4.5, 1.0, 0.1)),
];

/// Normalize a caller-supplied code: trimmed, ASCII upper-case
fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn builtin_default() -> &'static CountryProfile {
    BUILTIN_PROFILES
        .iter()
        .find(|(code, _)| *code == DEFAULT_COUNTRY_CODE)
        .map(|(_, profile)| profile)
        .unwrap_or(&BUILTIN_PROFILES[0].1)
}

/// Look up a built-in profile. Never fails: unknown codes get the default profile.
pub fn lookup(code: &str) -> &'static CountryProfile {
    let code = normalize_code(code);
    match BUILTIN_PROFILES.iter().find(|(c, _)| *c == code) {
        Some((_, profile)) => profile,
        None => {
            log::warn!("no profile for country '{}', using {}", code, DEFAULT_COUNTRY_CODE);
            builtin_default()
        }
    }
}

/// Immutable code -> profile association with a designated default entry
#[derive(Debug, Clone)]
pub struct CountryTable {
    profiles: BTreeMap<String, CountryProfile>,
    default_code: String,
}

impl CountryTable {
    /// Table over the built-in baselines, defaulting to `US`
    pub fn builtin() -> Self {
        let profiles = BUILTIN_PROFILES
            .iter()
            .map(|(code, profile)| (code.to_string(), *profile))
            .collect();

        Self {
            profiles,
            default_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }

    /// Build a table from explicit entries.
    ///
    /// Every profile is validated. If `default_code` is not among the entries,
    /// the built-in profile for it (or `US`) is inserted so lookups stay total.
    pub fn from_entries<I>(entries: I, default_code: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (String, CountryProfile)>,
    {
        let mut profiles = BTreeMap::new();
        for (code, profile) in entries {
            let code = normalize_code(&code);
            profile.validate(&code)?;
            profiles.insert(code, profile);
        }

        let default_code = normalize_code(default_code);
        if !profiles.contains_key(&default_code) {
            profiles.insert(default_code.clone(), *lookup(&default_code));
        }

        Ok(Self { profiles, default_code })
    }

    /// Look up a profile by code. Total: unknown codes get the default profile.
    pub fn lookup(&self, code: &str) -> &CountryProfile {
        let code = normalize_code(code);
        match self.profiles.get(&code) {
            Some(profile) => profile,
            None => {
                log::warn!("no profile for country '{}', using {}", code, self.default_code);
                self.default_profile()
            }
        }
    }

    /// Whether the table carries a dedicated profile for `code`
    pub fn contains(&self, code: &str) -> bool {
        self.profiles.contains_key(&normalize_code(code))
    }

    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    pub fn default_profile(&self) -> &CountryProfile {
        // from_entries and builtin both guarantee the default entry exists
        self.profiles
            .get(&self.default_code)
            .unwrap_or_else(|| builtin_default())
    }

    /// Profiled codes in sorted order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CountryProfile)> {
        self.profiles.iter().map(|(code, profile)| (code.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::builtin()
    }
}
