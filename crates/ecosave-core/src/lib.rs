//! ecosave-core
//!
//! Pure domain types and the in-memory audit book.
//! No HTTP dependency; shared by the AI client and the API server.

pub mod audit_book;
pub mod error;
pub mod models;
