//! Database initialization handler

use crate::cli::output::print_info;
use crate::cli::output::print_success;
use crate::cli::output::print_warning;
use crate::database::Database;
use crate::Result;

/// Handle database initialization command
pub async fn handle_init_command(database: &Database, force: bool) -> Result<()> {
    if !force {
        print_warning("This will create the journal_entries and access_tokens tables.");
        print_warning("This operation is safe - it uses CREATE IF NOT EXISTS.");
        println!("\nUse --force to proceed.");
        return Ok(());
    }

    print_info("🗄️  Initializing journal database...");
    database.init_schema().await?;
    print_success("Tables and indexes created");

    println!();
    print_info("To get an access token, run:");
    println!("   journal-assist issue-token");

    Ok(())
}
