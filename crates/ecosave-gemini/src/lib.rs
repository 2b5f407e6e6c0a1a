//! ecosave-gemini
//!
//! Gemini model invocation, prompt construction, and the three advice
//! workflows with their fallback values.

pub mod advice;
pub mod audit;
pub mod chat;
pub mod client;
pub mod error;
pub mod models;
pub mod outcome;
pub mod prompt;
