pub mod advice;
pub mod audits;
pub mod chat;
pub mod health;
