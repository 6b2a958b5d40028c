//! CSV-based profile loader
//!
//! Loads country baselines from data/countries/profiles.csv (or any file with
//! the same columns) so scenarios can be re-based without recompiling.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::profile::{CountryProfile, CountryTable, DEFAULT_COUNTRY_CODE};
use crate::error::{EngineError, Result};

/// Default path to the profile table
pub const DEFAULT_PROFILES_PATH: &str = "data/countries/profiles.csv";

/// Raw CSV row matching profiles.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "GDP")]
    gdp: f64,
    #[serde(rename = "Inflation")]
    inflation: f64,
    #[serde(rename = "Interest")]
    interest: f64,
    #[serde(rename = "Unemployment")]
    unemployment: f64,
    #[serde(rename = "Population")]
    population: f64,
    #[serde(rename = "TradeScale")]
    trade_scale: f64,
}

impl CsvRow {
    fn into_entry(self) -> (String, CountryProfile) {
        let profile = CountryProfile::new(
            self.gdp,
            self.inflation,
            self.interest,
            self.unemployment,
            self.population,
            self.trade_scale,
        );
        (self.code, profile)
    }
}

/// Load profile rows from any reader
pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<Vec<(String, CountryProfile)>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        entries.push(row.into_entry());
    }

    Ok(entries)
}

/// Load profile rows from a CSV file
pub fn load_profiles(path: &Path) -> Result<Vec<(String, CountryProfile)>> {
    let file = File::open(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_profiles_from_reader(file)
}

impl CountryTable {
    /// Load a table from the default location (data/countries/profiles.csv)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(DEFAULT_PROFILES_PATH))
    }

    /// Load a table from a specific CSV file, defaulting to `US`
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let entries = load_profiles(path)?;
        log::info!("loaded {} country profiles from {}", entries.len(), path.display());
        Self::from_entries(entries, DEFAULT_COUNTRY_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{lookup, BUILTIN_PROFILES};

    #[test]
    fn test_load_default_profiles() {
        let result = CountryTable::from_csv();
        assert!(result.is_ok(), "Failed to load profiles: {:?}", result.err());

        let table = result.unwrap();
        assert_eq!(table.len(), BUILTIN_PROFILES.len());

        // Shipped CSV mirrors the built-in table
        for (code, profile) in BUILTIN_PROFILES {
            assert_eq!(table.lookup(code), profile, "{} differs", code);
        }
    }

    #[test]
    fn test_load_from_reader() {
        let data = "Code,GDP,Inflation,Interest,Unemployment,Population,TradeScale\n\
                    aa,1.5,3.0,4.0,5.0,12.0,0.4\n";
        let entries = load_profiles_from_reader(data.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);

        let table = CountryTable::from_entries(entries, "US").unwrap();
        assert_eq!(table.lookup("AA").gdp_baseline, 1.5);
        assert_eq!(table.lookup("nowhere"), lookup("US"));
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let data = "Code,GDP,Inflation,Interest,Unemployment,Population,TradeScale\n\
                    AA,abc,3.0,4.0,5.0,12.0,0.4\n";
        assert!(matches!(
            load_profiles_from_reader(data.as_bytes()),
            Err(EngineError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = CountryTable::from_csv_path(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(EngineError::Io { .. })));
    }
}
