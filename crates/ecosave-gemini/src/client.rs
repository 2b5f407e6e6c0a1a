//! Gemini `generateContent` client.
//!
//! # Request shapes
//!
//! The workflows need three kinds of call, all served by the same REST
//! endpoint (`POST {base_url}/models/{model}:generateContent`):
//!
//! - **Structured**: one user turn plus a `generationConfig` carrying
//!   `responseMimeType: application/json` and a `responseSchema`. Gemini
//!   constrains its output to the schema.
//! - **Text**: one user turn, free-form output.
//! - **Chat**: a `systemInstruction`, the prior turns replayed in order and
//!   the new user message last. The endpoint is stateless, so the whole
//!   history travels with every call.
//!
//! # Credentials
//!
//! The API key goes in the `x-goog-api-key` header. A missing key is a
//! [`ConfigError`] when the config is built. A wrong key is only discovered
//! when a call fails (Gemini answers 400 `API_KEY_INVALID` or 401/403).
//!
//! # Reply text
//!
//! The reply is the concatenation of the text parts of the first candidate,
//! skipping thought parts. A reply without candidates or text parts is an
//! empty string; callers decide what "empty" means for them.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use ecosave_core::models::chat::{ChatRole, ChatTurn};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, GeminiError};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

// ── Configuration ────────────────────────────────────────────────────────────

/// Connection settings for [`GeminiClient`].
#[derive(Clone)]
pub struct GeminiConfig {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Config for the public endpoint with no request timeout.
    ///
    /// Rejects a blank key up front so a missing credential is a startup
    /// error rather than a string of fallback answers.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        })
    }

    /// Point the client at another endpoint (a proxy, or a local fake in
    /// tests). The URL must include the API version path.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        reqwest::Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &redact_api_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn redact_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}

// ── Requests ─────────────────────────────────────────────────────────────────

/// One message sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub role: ChatRole,
    pub text: String,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }
}

impl From<&ChatTurn> for Content {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            role: turn.role,
            text: turn.text.clone(),
        }
    }
}

/// A single `generateContent` call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub contents: Vec<Content>,
    /// When set, the reply is constrained to JSON matching this schema.
    pub response_schema: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// Single-turn call whose output must match `schema`.
    pub fn structured(
        model: impl Into<String>,
        prompt: impl Into<String>,
        schema: serde_json::Value,
    ) -> Self {
        Self {
            model: model.into(),
            system_instruction: None,
            contents: vec![Content::user(prompt)],
            response_schema: Some(schema),
        }
    }

    /// Single-turn call with free-form text output.
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: None,
            contents: vec![Content::user(prompt)],
            response_schema: None,
        }
    }

    /// Multi-turn call: `history` in order, then `message` as the newest
    /// user turn.
    pub fn chat(
        model: impl Into<String>,
        system_instruction: impl Into<String>,
        history: &[ChatTurn],
        message: impl Into<String>,
    ) -> Self {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::user(message));

        Self {
            model: model.into(),
            system_instruction: Some(system_instruction.into()),
            contents,
            response_schema: None,
        }
    }
}

/// Anything that can answer a [`GenerateRequest`] with reply text.
///
/// [`GeminiClient`] is the production implementation; tests substitute
/// in-process doubles.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GeminiError>;
}

// ── Wire format ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: Vec<WireContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
struct WireContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<WirePart<'a>>,
}

#[derive(Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a serde_json::Value,
}

impl<'a> GenerateContentBody<'a> {
    fn from_request(request: &'a GenerateRequest) -> Self {
        let contents = request
            .contents
            .iter()
            .map(|c| WireContent {
                role: Some(c.role.as_str()),
                parts: vec![WirePart { text: &c.text }],
            })
            .collect();

        let system_instruction = request.system_instruction.as_deref().map(|text| WireContent {
            role: None,
            parts: vec![WirePart { text }],
        });

        let generation_config = request
            .response_schema
            .as_ref()
            .map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            });

        Self {
            contents,
            system_instruction,
            generation_config,
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentResponse {
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|p| !p.thought)
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

/// HTTP client for the Gemini API. Build once at startup and share; clones
/// reuse the same connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.config.base_url)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GeminiError> {
        let url = self.endpoint(&request.model);
        let body = GenerateContentBody::from_request(request);

        debug!(
            model = %request.model,
            turns = request.contents.len(),
            structured = request.response_schema.is_some(),
            "calling generateContent"
        );

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ResponseParse(e.to_string()))?;

        Ok(parsed.into_text())
    }
}
