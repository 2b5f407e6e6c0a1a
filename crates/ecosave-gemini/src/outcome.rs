//! Tagged workflow results.
//!
//! A workflow never returns an error to its caller: on failure it hands back
//! a fixed substitute. [`Outcome`] carries that value together with where it
//! came from, so logging and telemetry can tell a generated answer from a
//! fallback even though the end user cannot.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::error::GeminiError;

/// Why a workflow fell back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request never got an HTTP answer.
    Transport,
    /// The API key was refused.
    Authentication,
    /// Any other non-success status.
    Api,
    EmptyResponse,
    /// Body present but not usable (bad JSON, wrong shape).
    MalformedResponse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Authentication => "authentication",
            FailureKind::Api => "api",
            FailureKind::EmptyResponse => "empty_response",
            FailureKind::MalformedResponse => "malformed_response",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GeminiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GeminiError::Transport(_) => FailureKind::Transport,
            GeminiError::Api { status, body } => {
                // Gemini reports a bad key as 400 INVALID_ARGUMENT.
                let rejected_key = *status == 401
                    || *status == 403
                    || (*status == 400 && body.contains("API_KEY_INVALID"));
                if rejected_key {
                    FailureKind::Authentication
                } else {
                    FailureKind::Api
                }
            }
            GeminiError::EmptyResponse => FailureKind::EmptyResponse,
            GeminiError::ResponseParse(_) | GeminiError::SchemaViolation(_) => {
                FailureKind::MalformedResponse
            }
        }
    }
}

/// Where a workflow value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    Generated,
    Fallback {
        failure: FailureKind,
        /// Full error text; logged, never serialized to clients.
        #[serde(skip)]
        detail: String,
    },
}

/// A workflow value plus its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Outcome<T> {
    pub fn generated(value: T) -> Self {
        Self {
            value,
            source: Source::Generated,
        }
    }

    /// Substitute `value` for a failed call, logging the failure.
    pub fn fallback(workflow: &'static str, value: T, error: &GeminiError) -> Self {
        let failure = error.kind();
        warn!(workflow, failure = %failure, error = %error, "AI call failed, using fallback");

        Self {
            value,
            source: Source::Fallback {
                failure,
                detail: error.to_string(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, Source::Fallback { .. })
    }

    pub fn failure(&self) -> Option<FailureKind> {
        match &self.source {
            Source::Generated => None,
            Source::Fallback { failure, .. } => Some(*failure),
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
