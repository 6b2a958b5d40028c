//! Policy-impact projection from a snapshot and a set of levers

mod levers;
mod projector;

pub use levers::{
    LeverTerms, PolicyLevers, FISCAL_SPENDING_RANGE, INTEREST_RATE_RANGE, NEUTRAL_SPENDING,
    NEUTRAL_TAX_RATE, TAX_RATE_RANGE,
};
pub use projector::{project, Impact, PolicyEffect, GDP_LABEL, INFLATION_LABEL, UNEMPLOYMENT_LABEL};
