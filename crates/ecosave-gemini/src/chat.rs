//! The EcoBot assistant conversation.
//!
//! The caller owns the history. Each call replays it in order after the
//! system instruction, sends the new message last, and returns the reply.
//! The history is borrowed immutably; appending the user message and the
//! reply is the caller's job.

use ecosave_core::models::chat::ChatTurn;
use tracing::info;

use crate::client::{GenerateRequest, GenerativeModel};
use crate::error::GeminiError;
use crate::outcome::Outcome;
use crate::prompt::CHAT_SYSTEM_INSTRUCTION;

/// Reply when the model answered with nothing.
pub const CHAT_NOT_UNDERSTOOD: &str = "Sorry, ik begreep dat niet helemaal.";

/// Reply when the model could not be reached.
pub const CHAT_CONNECTION_ERROR: &str = "Er is een verbindingfout opgetreden met de AI service.";

/// Send `message` after `history` and return the assistant's reply.
pub async fn send_chat_message<M: GenerativeModel + ?Sized>(
    model: &M,
    model_id: &str,
    history: &[ChatTurn],
    message: &str,
) -> Outcome<String> {
    info!(model = model_id, history_len = history.len(), "sending chat message");

    let request = GenerateRequest::chat(model_id, CHAT_SYSTEM_INSTRUCTION, history, message);

    match model.generate(&request).await {
        Ok(text) if text.is_empty() => Outcome::fallback(
            "chat",
            CHAT_NOT_UNDERSTOOD.to_string(),
            &GeminiError::EmptyResponse,
        ),
        Ok(text) => Outcome::generated(text),
        Err(e) => Outcome::fallback("chat", CHAT_CONNECTION_ERROR.to_string(), &e),
    }
}
