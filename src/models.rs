use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::JournalError;
use crate::Result;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// A journal entry owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Title and content joined the way the sentiment classifier reads them
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

/// Request to create a journal entry
#[derive(Debug, Clone, Deserialize)]
pub struct NewJournalEntry {
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    /// Defaults to now when absent
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewJournalEntry {
    pub fn new(owner_id: Uuid, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            owner_id,
            title: title.into(),
            content: content.into(),
            created_at: None,
        }
    }

    #[must_use]
    pub const fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Trim title and content and check their character bounds
    pub fn validate(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        let content = self.content.trim().to_string();

        check_length("title", &title, MAX_TITLE_CHARS)?;
        check_length("content", &content, MAX_CONTENT_CHARS)?;

        Ok(Self {
            title,
            content,
            ..self
        })
    }

    /// Materialize the validated request as a stored entry
    pub fn into_entry(self) -> JournalEntry {
        JournalEntry {
            id: Uuid::new_v4(),
            owner_id: self.owner_id,
            title: self.title,
            content: self.content,
            deleted: false,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<()> {
    let chars = value.chars().count();
    if chars == 0 {
        return Err(JournalError::Validation(format!("{field} must not be empty")));
    }
    if chars > max {
        return Err(JournalError::Validation(format!(
            "{field} must be at most {max} characters (got {chars})"
        )));
    }
    Ok(())
}
