use std::sync::Arc;

use ecosave_core::audit_book::AuditBook;
use ecosave_gemini::client::GenerativeModel;
use ecosave_gemini::models::ModelRoster;
use tokio::sync::Mutex;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn GenerativeModel>,
    pub models: ModelRoster,
    pub audits: Arc<Mutex<AuditBook>>,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>, models: ModelRoster, audits: AuditBook) -> Self {
        Self {
            model,
            models,
            audits: Arc::new(Mutex::new(audits)),
        }
    }
}
