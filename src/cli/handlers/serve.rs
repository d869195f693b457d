//! API server handler

use std::sync::Arc;

use uuid::Uuid;

use crate::api::serve_api;
use crate::api::AppState;
use crate::assistant::JournalAssistant;
use crate::cli::output::print_info;
use crate::cli::output::print_warning;
use crate::database::Authenticator;
use crate::database::Database;
use crate::database::EntryStore;
use crate::database::MemoryStore;
use crate::AppConfig;
use crate::Result;

pub async fn handle_serve_api(
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
    cors: bool,
    memory: bool,
) -> Result<()> {
    // CLI arguments take priority over config
    let host = host.unwrap_or_else(|| config.server_host().to_string());
    let port = port.unwrap_or_else(|| config.server_port());
    let cors = cors || config.cors_enabled();

    println!("🚀 Starting Journal Assistant API Server");
    println!("========================================\n");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌐 CORS: {}", if cors { "Enabled" } else { "Disabled" });

    let (store, authenticator): (Arc<dyn EntryStore>, Arc<dyn Authenticator>) = if memory {
        let store = Arc::new(MemoryStore::new());
        println!("🗄️  Storage: in-memory (data is lost on exit)");

        let owner = Uuid::new_v4();
        let token = store.issue_token(owner).await?;
        print_warning("No users exist yet; a token was issued for a new owner:");
        println!("  Owner: {owner}");
        println!("  Token: {token}");

        (store.clone(), store)
    } else {
        let database = Arc::new(Database::from_config(config).await?);
        database.verify_schema_or_error().await?;
        println!("🗄️  Storage: PostgreSQL");
        (database.clone(), database)
    };
    println!();

    let assistant = JournalAssistant::new(store, config.assistant.clone());
    let state = AppState::new(assistant, authenticator);

    print_info("Press Ctrl+C to stop");
    serve_api(state, &host, port, cors).await
}
