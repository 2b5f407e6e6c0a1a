//! In-process stand-ins for the Gemini API.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use ecosave_gemini::client::{GenerateRequest, GenerativeModel};
use ecosave_gemini::error::GeminiError;

/// Answers every call with the same scripted result and records what it was
/// asked.
pub struct ScriptedModel {
    reply: Result<String, GeminiError>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: GeminiError) -> Self {
        Self {
            reply: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> GenerateRequest {
        self.requests()
            .pop()
            .expect("model should have been called")
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GeminiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

pub fn transport_error() -> GeminiError {
    GeminiError::Transport("error sending request: connection refused".to_string())
}
