//! Rule-based writing assistant
//!
//! - `library`: static prompts, reply templates and keyword sets
//! - `sentiment`: keyword-count mood classifier
//! - `dispatcher`: first-match-wins intent dispatch for chat messages
//! - `insights`: templated observations about journaling activity
//! - `random`: injectable uniform random source
//!
//! [`JournalAssistant`] ties these to an [`EntryStore`] and exposes the four
//! operations served over HTTP and the CLI.

pub mod dispatcher;
pub mod insights;
pub mod library;
pub mod random;
pub mod sentiment;

use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use tracing::debug;
use tracing::warn;
use uuid::Uuid;

pub use dispatcher::classify_intent;
pub use dispatcher::Intent;
pub use dispatcher::IntentDispatcher;
pub use insights::generate_insights;
pub use insights::JournalInsights;
pub use library::PromptCategory;
pub use library::ResponseCategory;
pub use random::RandomSource;
pub use random::ScriptedRandom;
pub use random::ThreadRandom;
pub use sentiment::analyze_sentiment;
pub use sentiment::Sentiment;

use crate::config::AssistantConfig;
use crate::database::EntryStore;
use crate::models::JournalEntry;
use crate::Result;

/// Prompts served for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptList {
    pub prompts: Vec<&'static str>,
    /// Category name as requested, even when the prompts fell back to daily
    pub category: String,
    pub total_prompts: usize,
}

/// Oldest and newest timestamps of the analysed entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Mood analysis over the most recent entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MoodAnalysis {
    #[serde(rename_all = "camelCase")]
    NotEnoughData {
        message: String,
        sentiment: Sentiment,
        entry_count: usize,
    },
    #[serde(rename_all = "camelCase")]
    Report {
        analysis: String,
        sentiment: Sentiment,
        entry_count: usize,
        date_range: DateRange,
    },
}

impl MoodAnalysis {
    pub const fn sentiment(&self) -> Sentiment {
        match self {
            Self::NotEnoughData { sentiment, .. } | Self::Report { sentiment, .. } => *sentiment,
        }
    }

    pub const fn entry_count(&self) -> usize {
        match self {
            Self::NotEnoughData { entry_count, .. } | Self::Report { entry_count, .. } => {
                *entry_count
            }
        }
    }
}

/// Analyse mood over newest-first `entries`
pub fn analyze_mood_entries(entries: &[JournalEntry]) -> MoodAnalysis {
    let (Some(newest), Some(oldest)) = (entries.first(), entries.last()) else {
        return MoodAnalysis::NotEnoughData {
            message: library::MOOD_ANALYSIS_NO_DATA.to_string(),
            sentiment: Sentiment::Neutral,
            entry_count: 0,
        };
    };

    let text = entries
        .iter()
        .map(JournalEntry::text)
        .collect::<Vec<_>>()
        .join(" ");
    let sentiment = analyze_sentiment(&text);

    let analysis = match sentiment {
        Sentiment::Positive => library::MOOD_ANALYSIS_POSITIVE,
        Sentiment::Negative => library::MOOD_ANALYSIS_NEGATIVE,
        Sentiment::Neutral => library::MOOD_ANALYSIS_NEUTRAL,
    };

    MoodAnalysis::Report {
        analysis: analysis.to_string(),
        sentiment,
        entry_count: entries.len(),
        date_range: DateRange {
            from: oldest.created_at,
            to: newest.created_at,
        },
    }
}

/// Prompts for `category`, falling back to the daily prompts
pub fn prompts_for(category: Option<&str>) -> PromptList {
    let prompts = PromptCategory::resolve(category).prompts().to_vec();
    PromptList {
        total_prompts: prompts.len(),
        prompts,
        category: category
            .unwrap_or(PromptCategory::Daily.as_str())
            .to_string(),
    }
}

/// Writing assistant bound to an entry store
#[derive(Clone)]
pub struct JournalAssistant {
    store: Arc<dyn EntryStore>,
    dispatcher: IntentDispatcher,
    config: AssistantConfig,
}

impl JournalAssistant {
    pub fn new(store: Arc<dyn EntryStore>, config: AssistantConfig) -> Self {
        Self {
            store,
            dispatcher: IntentDispatcher::default(),
            config,
        }
    }

    /// Replace the random source, e.g. with a [`ScriptedRandom`]
    #[must_use]
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.dispatcher = IntentDispatcher::new(random);
        self
    }

    pub const fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn EntryStore> {
        &self.store
    }

    /// Reply to a validated chat message.
    ///
    /// A failed entry fetch is logged and treated as having no entries.
    pub async fn chat(&self, owner: Uuid, message: &str) -> String {
        let entries = match self
            .store
            .recent_entries(owner, self.config.chat_context_limit)
            .await
        {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Could not load recent entries for {owner}, replying without them: {e}");
                Vec::new()
            }
        };

        self.dispatcher.reply(message, &entries)
    }

    /// List prompts for a category name (default "daily")
    pub fn prompts(&self, category: Option<&str>) -> PromptList {
        prompts_for(category)
    }

    /// Mood analysis over the owner's latest `mood_window` entries
    pub async fn analyze_mood(&self, owner: Uuid) -> Result<MoodAnalysis> {
        let entries = self
            .store
            .recent_entries(owner, self.config.mood_window)
            .await?;
        debug!("Analyzing mood over {} entries for {owner}", entries.len());
        Ok(analyze_mood_entries(&entries))
    }

    /// Journal insights evaluated now
    pub async fn insights(&self, owner: Uuid) -> Result<JournalInsights> {
        self.insights_at(owner, Utc::now()).await
    }

    /// Journal insights evaluated at `now`
    pub async fn insights_at(&self, owner: Uuid, now: DateTime<Utc>) -> Result<JournalInsights> {
        let total = self.store.count_entries(owner).await?;
        let sample = self
            .store
            .recent_entries(owner, self.config.insight_sample)
            .await?;
        Ok(generate_insights(total, &sample, now))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::models::NewJournalEntry;

    fn entry(title: &str, content: &str, at: DateTime<Utc>) -> JournalEntry {
        NewJournalEntry::new(Uuid::nil(), title, content)
            .created_at(at)
            .into_entry()
    }

    #[test]
    fn test_mood_no_entries() {
        let analysis = analyze_mood_entries(&[]);
        assert_eq!(analysis.sentiment(), Sentiment::Neutral);
        assert_eq!(analysis.entry_count(), 0);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["message"], library::MOOD_ANALYSIS_NO_DATA);
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["entryCount"], 0);
    }

    #[test]
    fn test_mood_report_date_range() {
        let now = Utc::now();
        let entries = vec![
            entry("Great", "a wonderful calm day", now),
            entry("Earlier", "felt okay", now - Duration::days(3)),
        ];

        let analysis = analyze_mood_entries(&entries);
        match &analysis {
            MoodAnalysis::Report {
                analysis,
                sentiment,
                entry_count,
                date_range,
            } => {
                assert_eq!(analysis, library::MOOD_ANALYSIS_POSITIVE);
                assert_eq!(*sentiment, Sentiment::Positive);
                assert_eq!(*entry_count, 2);
                assert_eq!(date_range.to, now);
                assert_eq!(date_range.from, now - Duration::days(3));
            }
            MoodAnalysis::NotEnoughData { .. } => panic!("expected report"),
        }

        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json["dateRange"]["from"].is_string());
    }

    #[test]
    fn test_mood_is_stable_for_same_entries() {
        let now = Utc::now();
        let entries = vec![entry("Rough week", "stressed and anxious", now)];
        let first = analyze_mood_entries(&entries);
        for _ in 0..10 {
            assert_eq!(analyze_mood_entries(&entries), first);
        }
        assert_eq!(first.sentiment(), Sentiment::Negative);
    }

    #[test]
    fn test_prompts_fallback_to_daily() {
        let list = prompts_for(Some("unknown"));
        assert_eq!(list.category, "unknown");
        assert_eq!(list.total_prompts, 5);
        assert_eq!(list.prompts, library::DAILY_PROMPTS.to_vec());

        let list = prompts_for(None);
        assert_eq!(list.category, "daily");
        assert_eq!(list.prompts, library::DAILY_PROMPTS.to_vec());

        let json = serde_json::to_value(prompts_for(Some("gratitude"))).unwrap();
        assert_eq!(json["category"], "gratitude");
        assert_eq!(json["totalPrompts"], 5);
    }
}
