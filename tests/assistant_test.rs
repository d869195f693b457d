use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use journal_assist::assistant::library;
use journal_assist::assistant::JournalInsights;
use journal_assist::assistant::MoodAnalysis;
use journal_assist::assistant::ScriptedRandom;
use journal_assist::assistant::Sentiment;
use journal_assist::config::AssistantConfig;
use journal_assist::models::JournalEntry;
use journal_assist::models::NewJournalEntry;
use journal_assist::EntryStore;
use journal_assist::JournalAssistant;
use journal_assist::JournalError;
use journal_assist::MemoryStore;
use journal_assist::Result;
use uuid::Uuid;

/// Store whose every call fails, as with a lost database connection
struct UnavailableStore;

#[async_trait]
impl EntryStore for UnavailableStore {
    async fn create_entry(&self, _entry: NewJournalEntry) -> Result<JournalEntry> {
        Err(JournalError::Custom("connection refused".into()))
    }

    async fn recent_entries(&self, _owner: Uuid, _limit: usize) -> Result<Vec<JournalEntry>> {
        Err(JournalError::Custom("connection refused".into()))
    }

    async fn list_entries(&self, _owner: Uuid, _deleted: bool) -> Result<Vec<JournalEntry>> {
        Err(JournalError::Custom("connection refused".into()))
    }

    async fn count_entries(&self, _owner: Uuid) -> Result<i64> {
        Err(JournalError::Custom("connection refused".into()))
    }

    async fn soft_delete_entry(&self, _owner: Uuid, _id: Uuid) -> Result<()> {
        Err(JournalError::Custom("connection refused".into()))
    }

    async fn restore_entry(&self, _owner: Uuid, _id: Uuid) -> Result<()> {
        Err(JournalError::Custom("connection refused".into()))
    }
}

fn assistant(store: Arc<dyn EntryStore>) -> JournalAssistant {
    JournalAssistant::new(store, AssistantConfig::default())
        .with_random(Arc::new(ScriptedRandom::constant(0)))
}

/// Five newest entries are negative, the six before them strongly positive
async fn seed_mixed_history(store: &MemoryStore, owner: Uuid) {
    let now = Utc::now();
    for day in (5..11).rev() {
        let entry = NewJournalEntry::new(owner, "Summer", "happy and grateful")
            .created_at(now - Duration::days(day));
        store.create_entry(entry).await.unwrap();
    }
    for day in (0..5).rev() {
        let entry = NewJournalEntry::new(owner, "Lately", "sad")
            .created_at(now - Duration::days(day) - Duration::minutes(1));
        store.create_entry(entry).await.unwrap();
    }
}

#[tokio::test]
async fn test_chat_mood_only_reads_latest_five_entries() {
    let store = Arc::new(MemoryStore::new());
    let owner = Uuid::new_v4();
    seed_mixed_history(&store, owner).await;

    let reply = assistant(store).chat(owner, "what's my mood?").await;
    assert_eq!(reply, library::CHAT_MOOD_NEGATIVE);
}

#[tokio::test]
async fn test_mood_analysis_reads_latest_ten_entries() {
    let store = Arc::new(MemoryStore::new());
    let owner = Uuid::new_v4();
    seed_mixed_history(&store, owner).await;

    let analysis = assistant(store).analyze_mood(owner).await.unwrap();
    assert_eq!(analysis.entry_count(), 10);
    assert_eq!(analysis.sentiment(), Sentiment::Positive);
    match analysis {
        MoodAnalysis::Report { analysis, .. } => {
            assert_eq!(analysis, library::MOOD_ANALYSIS_POSITIVE);
        }
        other => panic!("expected a mood report, got {other:?}"),
    }
}

#[tokio::test]
async fn test_soft_deleted_entries_are_ignored() {
    let store = Arc::new(MemoryStore::new());
    let owner = Uuid::new_v4();
    let entry = store
        .create_entry(NewJournalEntry::new(owner, "Bad day", "angry and upset"))
        .await
        .unwrap();
    let assistant = assistant(store.clone());

    assert_eq!(
        assistant.chat(owner, "how do I feel").await,
        library::CHAT_MOOD_NEGATIVE
    );

    store.soft_delete_entry(owner, entry.id).await.unwrap();
    assert_eq!(
        assistant.chat(owner, "how do I feel").await,
        library::CHAT_MOOD_NO_DATA
    );
    assert_eq!(assistant.insights(owner).await.unwrap().total_entries(), 0);
}

#[tokio::test]
async fn test_insights_sample_only_newest_five() {
    let store = Arc::new(MemoryStore::new());
    let owner = Uuid::new_v4();
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();

    // Long entries are older than the sampled window
    for day in 10..15 {
        let entry = NewJournalEntry::new(owner, "Old", "x".repeat(900))
            .created_at(now - Duration::days(day));
        store.create_entry(entry).await.unwrap();
    }
    for day in 3..8 {
        let entry = NewJournalEntry::new(owner, "New", "short note")
            .created_at(now - Duration::days(day));
        store.create_entry(entry).await.unwrap();
    }

    let insights = assistant(store).insights_at(owner, now).await.unwrap();
    assert_eq!(
        insights,
        JournalInsights::Report {
            total_entries: 10,
            insights: vec![library::INSIGHT_HABIT.to_string()],
            last_entry_date: Some(now - Duration::days(3)),
            days_since_last_entry: Some(3),
        }
    );
}

#[tokio::test]
async fn test_chat_survives_store_outage() {
    let assistant = assistant(Arc::new(UnavailableStore));
    let owner = Uuid::new_v4();

    assert_eq!(
        assistant.chat(owner, "analyze my mood").await,
        library::CHAT_MOOD_NO_DATA
    );
    assert_eq!(assistant.chat(owner, "hey").await, library::GREETINGS[0]);
}

#[tokio::test]
async fn test_mood_and_insights_report_store_outage() {
    let assistant = assistant(Arc::new(UnavailableStore));
    let owner = Uuid::new_v4();

    assert!(assistant.analyze_mood(owner).await.is_err());
    assert!(assistant.insights(owner).await.is_err());
}

#[tokio::test]
async fn test_prompt_lists_are_independent_of_store() {
    let assistant = assistant(Arc::new(UnavailableStore));

    let list = assistant.prompts(Some("creativity"));
    assert_eq!(list.prompts, library::CREATIVITY_PROMPTS.to_vec());
    assert_eq!(list.total_prompts, 5);

    // Category names are case-sensitive
    let list = assistant.prompts(Some("Creativity"));
    assert_eq!(list.prompts, library::DAILY_PROMPTS.to_vec());
}
