use std::sync::Arc;

use clap::Parser;
use journal_assist::cli::Cli;
use journal_assist::cli::Commands;
use journal_assist::cli::{
    self,
};
use journal_assist::AppConfig;
use journal_assist::Database;
use journal_assist::JournalAssistant;
use journal_assist::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first; offline commands run on defaults without a file
    let config = if cli.command.requires_config() {
        AppConfig::load()?
    } else {
        AppConfig::load().unwrap_or_default()
    };

    if cli.verbose {
        journal_assist::logging::init_logging_with_level("debug")?;
    } else {
        journal_assist::logging::init_logging_with_config(Some(&config))?;
    }
    info!("Configuration loaded successfully");

    if let Err(e) = run(cli.command, &config).await {
        cli::print_error(&e.to_string());
        return Err(e);
    }
    Ok(())
}

async fn run(command: Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Init { force } => {
            let database = Database::from_config(config).await?;
            cli::handle_init_command(&database, force).await
        }
        Commands::Serve {
            host,
            port,
            cors,
            memory,
        } => cli::handle_serve_api(config, host, port, cors, memory).await,
        Commands::Config => cli::handle_config_command(config),
        Commands::Prompts { category, export } => {
            cli::handle_prompts_command(category.as_deref(), export.as_deref())
        }
        Commands::IssueToken { owner } => {
            let database = connect(config).await?;
            cli::handle_issue_token(database.as_ref(), owner).await?;
            Ok(())
        }
        Commands::AddEntry {
            owner,
            title,
            content,
        } => {
            let assistant = assistant(config).await?;
            cli::handle_add_entry(&assistant, owner, title, content).await?;
            Ok(())
        }
        Commands::Chat { owner, message } => {
            let assistant = assistant(config).await?;
            cli::handle_chat(&assistant, owner, &message).await?;
            Ok(())
        }
        Commands::Mood { owner, export } => {
            let assistant = assistant(config).await?;
            cli::handle_mood(&assistant, owner, export.as_deref()).await
        }
        Commands::Insights { owner, export } => {
            let assistant = assistant(config).await?;
            cli::handle_insights(&assistant, owner, export.as_deref()).await
        }
    }
}

async fn connect(config: &AppConfig) -> Result<Arc<Database>> {
    let database = Database::from_config(config).await?;
    database.verify_schema_or_error().await?;
    Ok(Arc::new(database))
}

async fn assistant(config: &AppConfig) -> Result<JournalAssistant> {
    let database = connect(config).await?;
    Ok(JournalAssistant::new(database, config.assistant.clone()))
}
