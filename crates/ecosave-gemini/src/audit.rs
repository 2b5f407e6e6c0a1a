//! Staff audit analysis: a free-form sales summary of a site audit.

use ecosave_core::models::audit::AuditRecord;
use tracing::info;

use crate::client::{GenerateRequest, GenerativeModel};
use crate::error::GeminiError;
use crate::outcome::Outcome;
use crate::prompt;

pub const EMPTY_ANALYSIS: &str = "Kon geen analyse genereren.";

pub const ANALYSIS_ERROR: &str =
    "Er is een fout opgetreden bij de AI-analyse. Controleer uw API-sleutel.";

/// Ask the model to analyze `audit`. The reply text is returned unmodified.
pub async fn analyze_audit<M: GenerativeModel + ?Sized>(
    model: &M,
    model_id: &str,
    audit: &AuditRecord,
) -> Outcome<String> {
    info!(model = model_id, audit_id = %audit.id, "requesting audit analysis");

    let request = GenerateRequest::text(model_id, prompt::audit_prompt(audit));

    match model.generate(&request).await {
        Ok(text) if text.is_empty() => Outcome::fallback(
            "audit_analysis",
            EMPTY_ANALYSIS.to_string(),
            &GeminiError::EmptyResponse,
        ),
        Ok(text) => {
            info!(audit_id = %audit.id, text_len = text.len(), "audit analysis complete");
            Outcome::generated(text)
        }
        Err(e) => Outcome::fallback("audit_analysis", ANALYSIS_ERROR.to_string(), &e),
    }
}
