use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use ecosave_core::models::audit::{AuditRecord, NewAudit};
use ecosave_gemini::outcome::Source;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub audit: AuditRecord,
    pub source: Source,
}

pub async fn list_audits(State(state): State<AppState>) -> Json<Vec<AuditRecord>> {
    Json(state.audits.lock().await.list().to_vec())
}

pub async fn get_audit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AuditRecord>, ApiError> {
    let audits = state.audits.lock().await;
    let record = audits
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("audit not found: {id}")))?;
    Ok(Json(record.clone()))
}

pub async fn create_audit(
    State(state): State<AppState>,
    payload: Result<Json<NewAudit>, JsonRejection>,
) -> Result<Json<AuditRecord>, ApiError> {
    let Json(new) = payload?;
    let today = jiff::Zoned::now().date();
    let record = state.audits.lock().await.create(new, today);
    tracing::info!(audit_id = %record.id, "audit created");
    Ok(Json(record))
}

/// Run the AI analysis for one audit and attach the result.
///
/// A second request for the same audit while one is outstanding gets 409.
/// The book lock is not held during the model call.
pub async fn analyze_audit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let snapshot = state.audits.lock().await.begin_analysis(id)?;

    let model = Arc::clone(&state.model);
    let model_id = state.models.analysis.clone();
    let audits = Arc::clone(&state.audits);

    let analysis = tokio::spawn(async move {
        let outcome =
            ecosave_gemini::audit::analyze_audit(model.as_ref(), &model_id, &snapshot).await;
        let record = audits
            .lock()
            .await
            .attach_analysis(id, outcome.value)
            .cloned();
        (record, outcome.source)
    });

    // Both tasks outlive the request, so the in-flight mark is released even
    // if the caller disconnects or the analysis task dies.
    let audits = Arc::clone(&state.audits);
    let supervised = tokio::spawn(async move {
        let result = analysis.await;
        if let Err(e) = &result {
            audits.lock().await.abandon_analysis(id);
            tracing::error!(audit_id = %id, error = %e, "audit analysis task failed");
        }
        result
    });

    let (record, source) = supervised.await??;

    Ok(Json(AnalyzeResponse {
        audit: record?,
        source,
    }))
}
