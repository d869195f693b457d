//! Substring-triggered intent dispatch for chat messages
//!
//! Rules are checked in table order against the lower-cased message and the
//! first rule with a matching trigger wins. Triggers overlap in real text
//! ("what should i write about my mood"), so the order is observable.

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::library::PromptCategory;
use super::library::ResponseCategory;
use super::library::CHAT_MOOD_NEGATIVE;
use super::library::CHAT_MOOD_NEUTRAL;
use super::library::CHAT_MOOD_NO_DATA;
use super::library::CHAT_MOOD_POSITIVE;
use super::library::ENCOURAGEMENT_FOLLOW_UP;
use super::library::GRATITUDE_FOLLOW_UP;
use super::library::HELP_REPLY;
use super::library::PROMPT_REPLY_PREFIX;
use super::library::PROMPT_REPLY_SUFFIX;
use super::random::pick;
use super::random::RandomSource;
use super::random::ThreadRandom;
use super::sentiment::analyze_sentiment;
use super::sentiment::Sentiment;
use crate::models::JournalEntry;

/// Entries consulted by the mood branch of chat
pub const CHAT_MOOD_ENTRIES: usize = 5;

/// Purpose of an incoming chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    RequestPrompt,
    RequestMoodAnalysis,
    RequestGratitudePrompt,
    RequestHelp,
    Greeting,
    FallbackEncouragement,
}

/// One dispatch rule: any trigger substring selects the intent
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub triggers: &'static [&'static str],
}

impl IntentRule {
    fn matches(&self, lower_message: &str) -> bool {
        self.triggers.iter().any(|t| lower_message.contains(t))
    }
}

/// Dispatch table, in priority order
pub const INTENT_RULES: [IntentRule; 5] = [
    IntentRule {
        intent: Intent::RequestPrompt,
        triggers: &["prompt", "write about", "what should i write"],
    },
    IntentRule {
        intent: Intent::RequestMoodAnalysis,
        triggers: &["mood", "feel", "emotion"],
    },
    IntentRule {
        intent: Intent::RequestGratitudePrompt,
        triggers: &["gratitude", "thankful", "blessed"],
    },
    IntentRule {
        intent: Intent::RequestHelp,
        triggers: &["help", "assist", "support"],
    },
    // "hi" also matches inside words such as "this" or "think"
    IntentRule {
        intent: Intent::Greeting,
        triggers: &["hello", "hi", "hey"],
    },
];

/// Select the intent for a message; falls back to encouragement
pub fn classify_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map_or(Intent::FallbackEncouragement, |rule| rule.intent)
}

/// Produces chat replies from the static reply tables
#[derive(Clone)]
pub struct IntentDispatcher {
    random: Arc<dyn RandomSource>,
}

impl Default for IntentDispatcher {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRandom))
    }
}

impl IntentDispatcher {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Reply to `message` given the caller's recent entries, newest first
    pub fn reply(&self, message: &str, recent_entries: &[JournalEntry]) -> String {
        let intent = classify_intent(message);
        tracing::debug!(?intent, entries = recent_entries.len(), "dispatching chat message");
        self.reply_for(intent, recent_entries)
    }

    /// Reply for an already classified intent
    pub fn reply_for(&self, intent: Intent, recent_entries: &[JournalEntry]) -> String {
        match intent {
            Intent::RequestPrompt => self.random_prompt_reply(),
            Intent::RequestMoodAnalysis => mood_reply(recent_entries).to_string(),
            Intent::RequestGratitudePrompt => {
                let prompt = pick(self.random.as_ref(), PromptCategory::Gratitude.prompts());
                format!("{prompt}{GRATITUDE_FOLLOW_UP}")
            }
            Intent::RequestHelp => HELP_REPLY.to_string(),
            Intent::Greeting => {
                pick(self.random.as_ref(), ResponseCategory::Greetings.templates()).to_string()
            }
            Intent::FallbackEncouragement => {
                let encouragement = pick(
                    self.random.as_ref(),
                    ResponseCategory::Encouragement.templates(),
                );
                format!("{encouragement}{ENCOURAGEMENT_FOLLOW_UP}")
            }
        }
    }

    fn random_prompt_reply(&self) -> String {
        let categories = PromptCategory::ALL;
        let category = categories[self.random.index(categories.len()) % categories.len()];
        let prompt = pick(self.random.as_ref(), category.prompts());
        format!("{PROMPT_REPLY_PREFIX}{prompt}{PROMPT_REPLY_SUFFIX}")
    }
}

fn mood_reply(recent_entries: &[JournalEntry]) -> &'static str {
    if recent_entries.is_empty() {
        return CHAT_MOOD_NO_DATA;
    }

    let text = recent_entries
        .iter()
        .take(CHAT_MOOD_ENTRIES)
        .map(JournalEntry::text)
        .collect::<Vec<_>>()
        .join(" ");

    match analyze_sentiment(&text) {
        Sentiment::Positive => CHAT_MOOD_POSITIVE,
        Sentiment::Negative => CHAT_MOOD_NEGATIVE,
        Sentiment::Neutral => CHAT_MOOD_NEUTRAL,
    }
}
