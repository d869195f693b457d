//! CLI command handlers module
//!
//! - init: Database schema initialization
//! - serve: API server
//! - info: Configuration and prompt listings
//! - journal: Tokens, entries and assistant queries

pub mod info;
pub mod init;
pub mod journal;
pub mod serve;

pub use info::*;
pub use init::*;
pub use journal::*;
pub use serve::*;
