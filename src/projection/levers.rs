//! Policy levers and the derived response terms

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::indicators::EconomicSnapshot;

/// Documented range of the policy interest-rate lever, percent
pub const INTEREST_RATE_RANGE: RangeInclusive<f64> = 0.0..=10.0;
/// Documented range of the fiscal spending lever, percent of capacity
pub const FISCAL_SPENDING_RANGE: RangeInclusive<f64> = 0.0..=100.0;
/// Documented range of the tax-rate lever, percent
pub const TAX_RATE_RANGE: RangeInclusive<f64> = 10.0..=50.0;

/// Spending level at which the spending term is zero
pub const NEUTRAL_SPENDING: f64 = 50.0;
/// Tax rate at which the tax term is zero
pub const NEUTRAL_TAX_RATE: f64 = 25.0;

/// Caller-adjustable policy inputs.
///
/// The projector does not validate ranges; use [`PolicyLevers::clamped`]
/// when inputs come from untrusted sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyLevers {
    pub interest_rate: f64,
    pub fiscal_spending: f64,
    pub tax_rate: f64,
}

impl PolicyLevers {
    pub fn new(interest_rate: f64, fiscal_spending: f64, tax_rate: f64) -> Self {
        Self {
            interest_rate,
            fiscal_spending,
            tax_rate,
        }
    }

    /// Neutral levers for a snapshot: current interest rate, spending 50, tax 25
    pub fn neutral_for(snapshot: &EconomicSnapshot) -> Self {
        Self::new(snapshot.interest_rate.value, NEUTRAL_SPENDING, NEUTRAL_TAX_RATE)
    }

    /// Copy with every lever clamped into its documented range
    pub fn clamped(&self) -> Self {
        let clamp = |v: f64, r: &RangeInclusive<f64>| v.clamp(*r.start(), *r.end());
        Self {
            interest_rate: clamp(self.interest_rate, &INTEREST_RATE_RANGE),
            fiscal_spending: clamp(self.fiscal_spending, &FISCAL_SPENDING_RANGE),
            tax_rate: clamp(self.tax_rate, &TAX_RATE_RANGE),
        }
    }

    /// Whether every lever sits inside its documented range
    pub fn in_range(&self) -> bool {
        INTEREST_RATE_RANGE.contains(&self.interest_rate)
            && FISCAL_SPENDING_RANGE.contains(&self.fiscal_spending)
            && TAX_RATE_RANGE.contains(&self.tax_rate)
    }
}

/// Terms shared by every indicator response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeverTerms {
    /// Lever rate minus the snapshot's current rate
    pub interest_delta: f64,
    /// (spending - 50) / 10
    pub spending_term: f64,
    /// (25 - tax) / 10
    pub tax_term: f64,
}

impl LeverTerms {
    pub fn derive(snapshot: &EconomicSnapshot, levers: &PolicyLevers) -> Self {
        Self {
            interest_delta: levers.interest_rate - snapshot.interest_rate.value,
            spending_term: (levers.fiscal_spending - NEUTRAL_SPENDING) / 10.0,
            tax_term: (NEUTRAL_TAX_RATE - levers.tax_rate) / 10.0,
        }
    }
}
