//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `GEMINI_API_KEY` | required |
//! | `GEMINI_BASE_URL` | public Gemini endpoint |
//! | `GEMINI_TIMEOUT_SECS` | no timeout |
//! | `ECOSAVE_ADVICE_MODEL` | `gemini-3-flash-preview` |
//! | `ECOSAVE_ANALYSIS_MODEL` | `gemini-3-pro-preview` |
//! | `ECOSAVE_CHAT_MODEL` | `gemini-3-pro-preview` |
//! | `ECOSAVE_BIND_ADDR` | `0.0.0.0:8080` |
//! | `ECOSAVE_SEED_DEMO` | `true` |

use std::net::SocketAddr;
use std::time::Duration;

use ecosave_gemini::client::GeminiConfig;
use ecosave_gemini::models::ModelRoster;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub gemini: GeminiConfig,
    pub models: ModelRoster,
    /// Start the audit book with the sample record.
    pub seed_demo: bool,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut gemini = GeminiConfig::new(get("GEMINI_API_KEY").unwrap_or_default())?;
        if let Some(url) = get("GEMINI_BASE_URL") {
            gemini = gemini.with_base_url(&url)?;
        }
        if let Some(secs) = get("GEMINI_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| eyre::eyre!("invalid GEMINI_TIMEOUT_SECS {secs:?}: {e}"))?;
            gemini = gemini.with_timeout(Duration::from_secs(secs));
        }

        let defaults = ModelRoster::default();
        let models = ModelRoster {
            advice: get("ECOSAVE_ADVICE_MODEL").unwrap_or(defaults.advice),
            analysis: get("ECOSAVE_ANALYSIS_MODEL").unwrap_or(defaults.analysis),
            chat: get("ECOSAVE_CHAT_MODEL").unwrap_or(defaults.chat),
        };

        let bind = get("ECOSAVE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid ECOSAVE_BIND_ADDR {bind:?}: {e}"))?;

        let seed_demo = match get("ECOSAVE_SEED_DEMO") {
            None => true,
            Some(v) => parse_bool(&v)
                .ok_or_else(|| eyre::eyre!("invalid ECOSAVE_SEED_DEMO {v:?}: expected true or false"))?,
        };

        Ok(Self {
            bind_addr,
            gemini,
            models,
            seed_demo,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
