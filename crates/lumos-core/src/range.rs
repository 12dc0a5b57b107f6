use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The slider bounds offered for a numeric token.
///
/// Advisory only: values outside the range are stored and exported as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendedRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RecommendedRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
