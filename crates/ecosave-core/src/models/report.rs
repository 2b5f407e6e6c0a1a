use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Savings estimate produced by one advice request.
///
/// `potential_savings` comes from the model as-is and is not forced to equal
/// `current_annual_cost - projected_annual_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SavingsReport {
    pub current_annual_cost: f64,
    pub projected_annual_cost: f64,
    pub potential_savings: f64,
    pub tips: Vec<String>,
    /// Estimated payback period in years.
    pub roi_year: f64,
}

impl SavingsReport {
    /// Savings implied by the two cost figures.
    pub fn derived_savings(&self) -> f64 {
        self.current_annual_cost - self.projected_annual_cost
    }
}
