use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// A single message in the assistant conversation, kept by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: jiff::Timestamp,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>, timestamp: jiff::Timestamp) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            timestamp,
        }
    }

    pub fn model(text: impl Into<String>, timestamp: jiff::Timestamp) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            timestamp,
        }
    }
}
