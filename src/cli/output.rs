//! CLI output formatting utilities

use serde::Serialize;

use crate::assistant::JournalInsights;
use crate::assistant::MoodAnalysis;
use crate::assistant::PromptList;
use crate::models::JournalEntry;
use crate::AppConfig;
use crate::Result;

/// Truncate a string to `max_chars` characters, appending "..." when cut
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Print a stored entry
pub fn print_entry(entry: &JournalEntry) {
    println!("📝 {}", entry.title);
    println!("  ID: {}", entry.id);
    println!("  Owner: {}", entry.owner_id);
    println!("  Created: {}", entry.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("  Content: {}", truncate_str(&entry.content, 100));
}

/// Print a prompt listing
pub fn print_prompt_list(list: &PromptList) {
    println!(
        "💡 {} prompts ({} total):",
        list.category, list.total_prompts
    );
    for (i, prompt) in list.prompts.iter().enumerate() {
        println!("  {}. {}", i + 1, prompt);
    }
}

/// Print a mood analysis
pub fn print_mood_analysis(analysis: &MoodAnalysis) {
    match analysis {
        MoodAnalysis::NotEnoughData { message, .. } => {
            println!("🌤️  {message}");
        }
        MoodAnalysis::Report {
            analysis,
            sentiment,
            entry_count,
            date_range,
        } => {
            println!("🌤️  Mood: {sentiment} ({entry_count} entries)");
            println!(
                "  From {} to {}",
                date_range.from.format("%Y-%m-%d"),
                date_range.to.format("%Y-%m-%d")
            );
            println!();
            println!("{analysis}");
        }
    }
}

/// Print journaling insights
pub fn print_insights(insights: &JournalInsights) {
    match insights {
        JournalInsights::Welcome { message, .. } => {
            println!("📊 {message}");
        }
        JournalInsights::Report {
            total_entries,
            insights,
            last_entry_date,
            days_since_last_entry,
        } => {
            println!("📊 Total entries: {total_entries}");
            if let (Some(last), Some(days)) = (last_entry_date, days_since_last_entry) {
                println!(
                    "  Last entry: {} ({days} days ago)",
                    last.format("%Y-%m-%d")
                );
            }
            if insights.is_empty() {
                println!("  No insights yet. Keep writing!");
            }
            for insight in insights {
                println!("  • {insight}");
            }
        }
    }
}

/// Print configuration
pub fn print_config(config: &AppConfig) {
    println!("📋 Journal Assistant Configuration:");
    println!();

    println!("🗄️  Database:");
    println!("  URL: {}", mask_database_url(config.database_url()));
    println!("  Max connections: {}", config.max_connections());
    println!("  Min connections: {}", config.min_connections());
    println!("  Connection timeout: {}s", config.connection_timeout());
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
    println!();

    println!("🌐 Server:");
    println!("  Address: {}:{}", config.server_host(), config.server_port());
    println!("  CORS: {}", config.cors_enabled());
    println!();

    println!("🤖 Assistant:");
    println!("  Chat context entries: {}", config.assistant.chat_context_limit);
    println!("  Mood window: {}", config.assistant.mood_window);
    println!("  Insight sample: {}", config.assistant.insight_sample);
    println!("  Max message chars: {}", config.assistant.max_message_chars);
}

/// Mask database URL for display (hide password)
pub(crate) fn mask_database_url(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            format!(
                "{}://{}@{}:{}",
                parsed.scheme(),
                parsed.username(),
                host,
                parsed.port().unwrap_or(5432)
            )
        } else {
            "***masked***".to_string()
        }
    } else {
        "***invalid***".to_string()
    }
}

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("❌ {msg}");
}

/// Write `value` as pretty JSON to `path`
pub fn export_json<T: Serialize>(value: &T, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    print_success(&format!("Exported to: {path}"));
    Ok(())
}
