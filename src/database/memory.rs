//! In-process entry and token store backed by `DashMap`

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use super::generate_token;
use super::hash_token;
use super::Authenticator;
use super::EntryStore;
use crate::models::JournalEntry;
use crate::models::NewJournalEntry;
use crate::JournalError;
use crate::Result;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<Uuid, Vec<JournalEntry>>,
    tokens: DashMap<String, Uuid>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of `owner` with the given deleted flag; later insertions win ties
    fn newest_first(&self, owner: Uuid, deleted: bool) -> Vec<JournalEntry> {
        let Some(entries) = self.entries.get(&owner) else {
            return Vec::new();
        };

        let mut matching: Vec<JournalEntry> = entries
            .iter()
            .rev()
            .filter(|e| e.deleted == deleted)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }

    fn set_deleted(&self, owner: Uuid, id: Uuid, deleted: bool) -> Result<()> {
        let mut entries = self
            .entries
            .get_mut(&owner)
            .ok_or(JournalError::EntryNotFound(id))?;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(JournalError::EntryNotFound(id))?;
        entry.deleted = deleted;
        Ok(())
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn create_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry> {
        let entry = entry.validate()?.into_entry();
        self.entries
            .entry(entry.owner_id)
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    // Soft-deleted entries are hidden from the assistant as well as from listings
    async fn recent_entries(&self, owner: Uuid, limit: usize) -> Result<Vec<JournalEntry>> {
        let mut visible = self.newest_first(owner, false);
        visible.truncate(limit);
        Ok(visible)
    }

    // Counts only entries the owner has not soft-deleted
    async fn count_entries(&self, owner: Uuid) -> Result<i64> {
        let count = self
            .entries
            .get(&owner)
            .map_or(0, |entries| entries.iter().filter(|e| !e.deleted).count());
        Ok(count as i64)
    }

    async fn list_entries(&self, owner: Uuid, deleted: bool) -> Result<Vec<JournalEntry>> {
        Ok(self.newest_first(owner, deleted))
    }

    async fn soft_delete_entry(&self, owner: Uuid, id: Uuid) -> Result<()> {
        self.set_deleted(owner, id, true)
    }

    async fn restore_entry(&self, owner: Uuid, id: Uuid) -> Result<()> {
        self.set_deleted(owner, id, false)
    }
}

#[async_trait]
impl Authenticator for MemoryStore {
    async fn authenticate(&self, token: &str) -> Result<Option<Uuid>> {
        Ok(self.tokens.get(&hash_token(token)).map(|owner| *owner))
    }

    async fn issue_token(&self, owner: Uuid) -> Result<String> {
        let token = generate_token();
        self.tokens.insert(hash_token(&token), owner);
        Ok(token)
    }
}
