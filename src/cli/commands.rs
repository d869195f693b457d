//! CLI command definitions and argument parsing

use clap::Parser;
use clap::Subcommand;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "journal-assist")]
#[command(about = "Rule-based writing assistant for a personal journal")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: level from config)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize database schema and indexes
    Init {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Start the HTTP API server
    Serve {
        /// Host to bind (default: from config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (default: from config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable CORS even if disabled in config
        #[arg(long)]
        cors: bool,
        /// Keep entries and tokens in memory instead of `PostgreSQL`
        #[arg(long)]
        memory: bool,
    },
    /// Show current configuration
    Config,
    /// Issue a bearer token for an owner
    IssueToken {
        /// Owner ID (a new one is generated when omitted)
        #[arg(long)]
        owner: Option<Uuid>,
    },
    /// Add a journal entry
    AddEntry {
        /// Owner ID
        #[arg(long)]
        owner: Uuid,
        /// Entry title
        #[arg(short, long)]
        title: String,
        /// Entry content
        #[arg(short, long)]
        content: String,
    },
    /// Send a chat message to the assistant
    Chat {
        /// Owner ID
        #[arg(long)]
        owner: Uuid,
        /// Message text
        message: String,
    },
    /// List writing prompts
    Prompts {
        /// Prompt category (gratitude, reflection, creativity, daily)
        #[arg(short, long)]
        category: Option<String>,
        /// Export the listing to JSON
        #[arg(short, long)]
        export: Option<String>,
    },
    /// Analyze the mood of recent entries
    Mood {
        /// Owner ID
        #[arg(long)]
        owner: Uuid,
        /// Export the analysis to JSON
        #[arg(short, long)]
        export: Option<String>,
    },
    /// Show journaling insights
    Insights {
        /// Owner ID
        #[arg(long)]
        owner: Uuid,
        /// Export the insights to JSON
        #[arg(short, long)]
        export: Option<String>,
    },
}

impl Commands {
    /// Whether the command needs a config file; the rest fall back to defaults
    pub const fn requires_config(&self) -> bool {
        !matches!(self, Self::Prompts { .. })
    }
}
