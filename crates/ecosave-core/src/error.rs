use thiserror::Error;
use uuid::Uuid;

use crate::models::audit::AuditStatus;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("audit not found: {0}")]
    AuditNotFound(Uuid),

    #[error("audit {id} is {from} and cannot be analyzed again")]
    InvalidTransition { id: Uuid, from: AuditStatus },

    #[error("analysis already in progress for audit {0}")]
    AnalysisInFlight(Uuid),
}
