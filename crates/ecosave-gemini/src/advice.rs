//! Customer savings advice.
//!
//! Sends the household profile with a strict response schema and parses the
//! reply into a [`SavingsReport`]. Any failure (transport, error status,
//! empty body, bad JSON, wrong shape) yields [`fallback_report`] instead.
//! There is no second attempt.

use ecosave_core::models::energy::EnergyUsageInput;
use ecosave_core::models::report::SavingsReport;
use serde_json::error::Category;
use tracing::{debug, info};

use crate::client::{GenerateRequest, GenerativeModel};
use crate::error::GeminiError;
use crate::outcome::Outcome;
use crate::prompt;

/// Tips returned when the model could not be reached.
pub const FALLBACK_TIPS: [&str; 3] = [
    "Controleer uw isolatie.",
    "Overweeg zonnepanelen.",
    "Zet de thermostaat een graadje lager.",
];

/// Share of the current cost assumed to remain after measures.
const FALLBACK_PROJECTED_SHARE: f64 = 0.8;
const FALLBACK_SAVINGS_SHARE: f64 = 0.2;
pub const FALLBACK_ROI_YEARS: f64 = 3.5;

/// Ask the model for a savings report for `input`.
pub async fn generate_advice<M: GenerativeModel + ?Sized>(
    model: &M,
    model_id: &str,
    input: &EnergyUsageInput,
) -> Outcome<SavingsReport> {
    info!(
        model = model_id,
        property_type = %input.property_type,
        household_size = input.household_size,
        "requesting savings advice"
    );

    let request = GenerateRequest::structured(
        model_id,
        prompt::advice_prompt(input),
        prompt::savings_report_schema(),
    );

    let result = match model.generate(&request).await {
        Ok(text) => parse_report(&text),
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            let derived = report.derived_savings();
            if (derived - report.potential_savings).abs() > 0.01 {
                debug!(
                    reported = report.potential_savings,
                    derived, "model savings differ from cost difference"
                );
            }
            info!(model = model_id, tips = report.tips.len(), "savings advice complete");
            Outcome::generated(report)
        }
        Err(e) => Outcome::fallback("advice", fallback_report(input), &e),
    }
}

/// Parse a structured reply. Values are taken verbatim.
pub fn parse_report(text: &str) -> Result<SavingsReport, GeminiError> {
    if text.trim().is_empty() {
        return Err(GeminiError::EmptyResponse);
    }

    serde_json::from_str(text).map_err(|e| match e.classify() {
        Category::Data => GeminiError::SchemaViolation(format!(
            "failed to parse SavingsReport: {e}. Response: {text}"
        )),
        _ => GeminiError::ResponseParse(format!("invalid JSON: {e}. Response: {text}")),
    })
}

/// The report shown when the model is unavailable, derived only from the
/// monthly advance.
pub fn fallback_report(input: &EnergyUsageInput) -> SavingsReport {
    let current = input.annual_cost();
    SavingsReport {
        current_annual_cost: current,
        projected_annual_cost: current * FALLBACK_PROJECTED_SHARE,
        potential_savings: current * FALLBACK_SAVINGS_SHARE,
        tips: FALLBACK_TIPS.iter().map(|t| t.to_string()).collect(),
        roi_year: FALLBACK_ROI_YEARS,
    }
}
