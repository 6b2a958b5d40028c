//! Country baselines, lookup table and selectable catalog

mod profile;
pub mod catalog;
pub mod loader;

pub use profile::{lookup, CountryProfile, CountryTable, BUILTIN_PROFILES, DEFAULT_COUNTRY_CODE};
pub use catalog::CountryInfo;
pub use loader::{load_profiles, load_profiles_from_reader, DEFAULT_PROFILES_PATH};
