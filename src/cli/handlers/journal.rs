//! Token, entry and assistant command handlers

use uuid::Uuid;

use crate::assistant::JournalAssistant;
use crate::cli::output::export_json;
use crate::cli::output::print_entry;
use crate::cli::output::print_info;
use crate::cli::output::print_insights;
use crate::cli::output::print_mood_analysis;
use crate::cli::output::print_success;
use crate::database::Authenticator;
use crate::models::JournalEntry;
use crate::models::NewJournalEntry;
use crate::JournalError;
use crate::Result;

/// Handle issue-token command, returning the plaintext token
pub async fn handle_issue_token(auth: &dyn Authenticator, owner: Option<Uuid>) -> Result<String> {
    let owner = owner.unwrap_or_else(Uuid::new_v4);
    let token = auth.issue_token(owner).await?;

    print_success("Access token issued");
    println!("  Owner: {owner}");
    println!("  Token: {token}");
    print_info("The token is shown once; only its digest is stored.");

    Ok(token)
}

/// Handle add-entry command
pub async fn handle_add_entry(
    assistant: &JournalAssistant,
    owner: Uuid,
    title: String,
    content: String,
) -> Result<JournalEntry> {
    let entry = assistant
        .store()
        .create_entry(NewJournalEntry::new(owner, title, content))
        .await?;

    print_entry(&entry);
    Ok(entry)
}

/// Handle chat command, returning the assistant's reply
pub async fn handle_chat(assistant: &JournalAssistant, owner: Uuid, message: &str) -> Result<String> {
    let max_chars = assistant.config().max_message_chars;
    let message = message.trim();
    let chars = message.chars().count();
    if chars == 0 || chars > max_chars {
        return Err(JournalError::Validation(format!(
            "message must be between 1 and {max_chars} characters"
        )));
    }

    let reply = assistant.chat(owner, message).await;
    println!("🤖 {reply}");
    Ok(reply)
}

/// Handle mood command
pub async fn handle_mood(
    assistant: &JournalAssistant,
    owner: Uuid,
    export: Option<&str>,
) -> Result<()> {
    let analysis = assistant.analyze_mood(owner).await?;
    print_mood_analysis(&analysis);

    if let Some(path) = export {
        export_json(&analysis, path)?;
    }
    Ok(())
}

/// Handle insights command
pub async fn handle_insights(
    assistant: &JournalAssistant,
    owner: Uuid,
    export: Option<&str>,
) -> Result<()> {
    let insights = assistant.insights(owner).await?;
    print_insights(&insights);

    if let Some(path) = export {
        export_json(&insights, path)?;
    }
    Ok(())
}
