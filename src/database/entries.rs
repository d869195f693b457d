use async_trait::async_trait;
use uuid::Uuid;

use super::Database;
use super::EntryStore;
use crate::models::JournalEntry;
use crate::models::NewJournalEntry;
use crate::JournalError;
use crate::Result;

#[async_trait]
impl EntryStore for Database {
    async fn create_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry> {
        let entry = entry.validate()?.into_entry();

        let stored = sqlx::query_as::<_, JournalEntry>(
            r"
            INSERT INTO journal_entries (id, owner_id, title, content, deleted, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, owner_id, title, content, deleted, created_at
            ",
        )
        .bind(entry.id)
        .bind(entry.owner_id)
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(entry.deleted)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created journal entry {} for {}", stored.id, stored.owner_id);
        Ok(stored)
    }

    // Soft-deleted entries are hidden from the assistant as well as from listings
    async fn recent_entries(&self, owner: Uuid, limit: usize) -> Result<Vec<JournalEntry>> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            r"
            SELECT id, owner_id, title, content, deleted, created_at
            FROM journal_entries
            WHERE owner_id = $1 AND deleted = FALSE
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(owner)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    // Counts only entries the owner has not soft-deleted
    async fn count_entries(&self, owner: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM journal_entries WHERE owner_id = $1 AND deleted = FALSE",
        )
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn list_entries(&self, owner: Uuid, deleted: bool) -> Result<Vec<JournalEntry>> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            r"
            SELECT id, owner_id, title, content, deleted, created_at
            FROM journal_entries
            WHERE owner_id = $1 AND deleted = $2
            ORDER BY created_at DESC
            ",
        )
        .bind(owner)
        .bind(deleted)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn soft_delete_entry(&self, owner: Uuid, id: Uuid) -> Result<()> {
        set_deleted(self, owner, id, true).await
    }

    async fn restore_entry(&self, owner: Uuid, id: Uuid) -> Result<()> {
        set_deleted(self, owner, id, false).await
    }
}

async fn set_deleted(db: &Database, owner: Uuid, id: Uuid, deleted: bool) -> Result<()> {
    let result = sqlx::query(
        "UPDATE journal_entries SET deleted = $3 WHERE id = $1 AND owner_id = $2",
    )
    .bind(id)
    .bind(owner)
    .bind(deleted)
    .execute(&db.pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(JournalError::EntryNotFound(id));
    }
    Ok(())
}
