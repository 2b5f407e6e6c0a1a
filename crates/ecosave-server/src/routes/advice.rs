use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use ecosave_core::models::energy::EnergyUsageInput;
use ecosave_core::models::report::SavingsReport;
use ecosave_gemini::outcome::Source;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AdviceResponse {
    pub report: SavingsReport,
    pub source: Source,
}

/// Produce a savings report for the submitted household profile.
pub async fn generate_advice(
    State(state): State<AppState>,
    payload: Result<Json<EnergyUsageInput>, JsonRejection>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let Json(input) = payload?;
    input.validate()?;

    let outcome =
        ecosave_gemini::advice::generate_advice(state.model.as_ref(), &state.models.advice, &input)
            .await;

    Ok(Json(AdviceResponse {
        report: outcome.value,
        source: outcome.source,
    }))
}
