//! Linear policy-impact projector
//!
//! Responses per indicator, with `d` = interest delta, `s` = spending term,
//! `t` = tax term:
//!
//! - GDP: `current * (1 + 0.02s + 0.015t - 0.01d)`, positive iff `s + t - d > 0`
//! - Inflation: `max(0, current - 0.3d + 0.2s)`, negative iff `d < 0 && s > 0`
//! - Unemployment: `max(0, current - 0.5s - 0.3t + 0.2d)`, positive iff `s > 0 || t > 0`
//!
//! The inflation polarity flags stimulus-plus-cuts as negative; it describes the
//! direction of the inflation effect, not the economy.

use serde::{Deserialize, Serialize};

use super::levers::{LeverTerms, PolicyLevers};
use crate::indicators::EconomicSnapshot;

pub const GDP_LABEL: &str = "GDP Growth";
pub const INFLATION_LABEL: &str = "Inflation Rate";
pub const UNEMPLOYMENT_LABEL: &str = "Unemployment";

/// Qualitative direction of a projected change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    /// Legal value; the linear model never produces it
    Neutral,
}

impl Impact {
    fn from_flag(positive: bool) -> Self {
        if positive {
            Impact::Positive
        } else {
            Impact::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Positive => "positive",
            Impact::Negative => "negative",
            Impact::Neutral => "neutral",
        }
    }
}

/// Projected change to one indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyEffect {
    pub indicator_name: String,
    pub current_value: f64,
    pub projected_value: f64,
    pub impact: Impact,
}

impl PolicyEffect {
    fn new(indicator_name: &str, current_value: f64, projected_value: f64, impact: Impact) -> Self {
        Self {
            indicator_name: indicator_name.to_string(),
            current_value,
            projected_value,
            impact,
        }
    }

    /// Projected minus current
    pub fn delta(&self) -> f64 {
        self.projected_value - self.current_value
    }

    /// Relative change in percent; None when the current value is zero
    pub fn delta_pct(&self) -> Option<f64> {
        if self.current_value == 0.0 {
            None
        } else {
            Some(self.delta() / self.current_value * 100.0)
        }
    }
}

/// Project the GDP, inflation and unemployment effects of `levers` on `snapshot`.
///
/// Pure and deterministic. Lever ranges are not validated.
pub fn project(snapshot: &EconomicSnapshot, levers: &PolicyLevers) -> Vec<PolicyEffect> {
    let terms = LeverTerms::derive(snapshot, levers);
    vec![
        gdp_effect(snapshot.gdp.value, &terms),
        inflation_effect(snapshot.inflation.value, &terms),
        unemployment_effect(snapshot.unemployment.value, &terms),
    ]
}

fn gdp_effect(current: f64, terms: &LeverTerms) -> PolicyEffect {
    let LeverTerms { interest_delta: d, spending_term: s, tax_term: t } = *terms;
    let projected = current * (1.0 + 0.02 * s + 0.015 * t - 0.01 * d);
    PolicyEffect::new(GDP_LABEL, current, projected, Impact::from_flag(s + t - d > 0.0))
}

fn inflation_effect(current: f64, terms: &LeverTerms) -> PolicyEffect {
    let LeverTerms { interest_delta: d, spending_term: s, .. } = *terms;
    let projected = (current - 0.3 * d + 0.2 * s).max(0.0);
    let impact = if d < 0.0 && s > 0.0 {
        Impact::Negative
    } else {
        Impact::Positive
    };
    PolicyEffect::new(INFLATION_LABEL, current, projected, impact)
}

fn unemployment_effect(current: f64, terms: &LeverTerms) -> PolicyEffect {
    let LeverTerms { interest_delta: d, spending_term: s, tax_term: t } = *terms;
    let projected = (current - 0.5 * s - 0.3 * t + 0.2 * d).max(0.0);
    PolicyEffect::new(UNEMPLOYMENT_LABEL, current, projected, Impact::from_flag(s > 0.0 || t > 0.0))
}
