//! Rule-based writing assistant for a personal journaling service

pub mod api;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod logging;
pub mod models;

#[cfg(test)]
mod config_tests;

pub use assistant::JournalAssistant;
pub use config::AppConfig;
pub use database::Authenticator;
pub use database::Database;
pub use database::EntryStore;
pub use database::MemoryStore;
pub use errors::*;
