//! Error types for the fallible edges of the engine
//!
//! Generation and projection never fail. Only loading profile tables from disk
//! and parsing caller-supplied dates can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read profile table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed profile CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid profile for {code}: {reason}")]
    InvalidProfile { code: String, reason: String },

    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("date {date} is before the earliest supported date {earliest}")]
    DateTooEarly {
        date: chrono::NaiveDate,
        earliest: chrono::NaiveDate,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
