use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Largest household the advice form accepts.
pub const MAX_HOUSEHOLD_SIZE: u8 = 6;

/// Dwelling category selected on the customer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum PropertyType {
    Apartment,
    Terraced,
    SemiDetached,
    Detached,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Terraced => "terraced",
            PropertyType::SemiDetached => "semi-detached",
            PropertyType::Detached => "detached",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Household energy profile submitted for an advice request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EnergyUsageInput {
    /// Electricity consumption in kWh per year.
    pub electricity_kwh: f64,
    /// Gas consumption in m³ per year. Zero for all-electric homes.
    pub gas_m3: f64,
    /// Monthly advance payment in euros.
    pub monthly_cost: f64,
    pub household_size: u8,
    pub property_type: PropertyType,
}

impl EnergyUsageInput {
    /// Check the form ranges: electricity and monthly cost strictly positive,
    /// gas non-negative, household size between 1 and [`MAX_HOUSEHOLD_SIZE`].
    pub fn validate(&self) -> Result<(), CoreError> {
        require_positive("electricityKwh", self.electricity_kwh)?;
        require_non_negative("gasM3", self.gas_m3)?;
        require_positive("monthlyCost", self.monthly_cost)?;

        if !(1..=MAX_HOUSEHOLD_SIZE).contains(&self.household_size) {
            return Err(CoreError::InvalidInput {
                field: "householdSize",
                reason: format!(
                    "must be between 1 and {MAX_HOUSEHOLD_SIZE}, got {}",
                    self.household_size
                ),
            });
        }

        Ok(())
    }

    /// Yearly cost implied by the monthly advance.
    pub fn annual_cost(&self) -> f64 {
        self.monthly_cost * 12.0
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidInput {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidInput {
            field,
            reason: format!("must not be negative, got {value}"),
        })
    }
}
