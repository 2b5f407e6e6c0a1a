//! Which Gemini model serves which workflow.

/// Fast model for the structured customer advice.
pub const DEFAULT_ADVICE_MODEL: &str = "gemini-3-flash-preview";

/// Larger model for the staff audit analysis.
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-3-pro-preview";

pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";

/// Model ids used by each workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRoster {
    pub advice: String,
    pub analysis: String,
    pub chat: String,
}

impl Default for ModelRoster {
    fn default() -> Self {
        Self {
            advice: DEFAULT_ADVICE_MODEL.to_string(),
            analysis: DEFAULT_ANALYSIS_MODEL.to_string(),
            chat: DEFAULT_CHAT_MODEL.to_string(),
        }
    }
}
