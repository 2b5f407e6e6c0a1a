pub mod audit;
pub mod chat;
pub mod energy;
pub mod report;
