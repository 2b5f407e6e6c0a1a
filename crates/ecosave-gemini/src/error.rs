use thiserror::Error;

/// A failed call to the Gemini API.
///
/// Every workflow catches these and substitutes a fallback value; they are
/// only surfaced to logging and to the [`crate::outcome::Source`] tag.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeminiError {
    #[error("request to Gemini failed: {0}")]
    Transport(String),

    #[error("Gemini returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Gemini returned an empty response")]
    EmptyResponse,

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),
}

/// Invalid client configuration, reported at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Gemini API key is missing or blank")]
    MissingApiKey,

    #[error("invalid Gemini base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
