//! Generator configuration

use serde::{Deserialize, Serialize};

/// How historical series points are labeled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthLabels {
    /// Always Jan..Dec, whatever month the query date falls in
    #[default]
    Calendar,
    /// The twelve months ending at the query date's month.
    ///
    /// Only labels move. Point `i` keeps the seasonal term for position `i`,
    /// so the first point carries the same seasonal value whatever its label.
    Trailing,
}

/// Configuration for a generation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Labeling of historical series points. Values are unaffected.
    #[serde(default)]
    pub month_labels: MonthLabels,
}

impl GeneratorConfig {
    pub fn trailing() -> Self {
        Self {
            month_labels: MonthLabels::Trailing,
        }
    }
}
