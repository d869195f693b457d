//! Static content used by the writing assistant
//!
//! Writing prompts, canned replies and mood keyword sets. Everything here is
//! read-only for the lifetime of the process.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::Deserialize;
use serde::Serialize;

/// Writing prompt categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    Gratitude,
    Reflection,
    Creativity,
    #[default]
    Daily,
}

impl PromptCategory {
    pub const ALL: [Self; 4] = [
        Self::Gratitude,
        Self::Reflection,
        Self::Creativity,
        Self::Daily,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gratitude => "gratitude",
            Self::Reflection => "reflection",
            Self::Creativity => "creativity",
            Self::Daily => "daily",
        }
    }

    pub const fn prompts(self) -> &'static [&'static str] {
        match self {
            Self::Gratitude => &GRATITUDE_PROMPTS,
            Self::Reflection => &REFLECTION_PROMPTS,
            Self::Creativity => &CREATIVITY_PROMPTS,
            Self::Daily => &DAILY_PROMPTS,
        }
    }

    /// Resolve a user-supplied category name, falling back to `Daily`
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(|n| n.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for PromptCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown prompt category: {s}"))
    }
}

impl fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canned reply categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseCategory {
    Greetings,
    WritingHelp,
    MoodSupport,
    Encouragement,
}

impl ResponseCategory {
    pub const ALL: [Self; 4] = [
        Self::Greetings,
        Self::WritingHelp,
        Self::MoodSupport,
        Self::Encouragement,
    ];

    pub const fn templates(self) -> &'static [&'static str] {
        match self {
            Self::Greetings => &GREETINGS,
            Self::WritingHelp => &WRITING_HELP,
            Self::MoodSupport => &MOOD_SUPPORT,
            Self::Encouragement => &ENCOURAGEMENT,
        }
    }
}

pub static GRATITUDE_PROMPTS: [&str; 5] = [
    "What are three things that made you smile today?",
    "Write about someone who has positively impacted your life recently.",
    "What's something beautiful you noticed today that you're grateful for?",
    "Describe a moment today when you felt truly happy and content.",
    "What's something you're looking forward to that fills you with excitement?",
];

pub static REFLECTION_PROMPTS: [&str; 5] = [
    "How have you grown as a person in the last month?",
    "What's a challenge you faced recently and how did you handle it?",
    "What would you tell your past self from a year ago?",
    "What's something you've learned about yourself recently?",
    "How do you want to be remembered by the people in your life?",
];

pub static CREATIVITY_PROMPTS: [&str; 5] = [
    "If you could have dinner with anyone from history, who would it be and why?",
    "Write about your perfect day from start to finish.",
    "What's a dream you have that you haven't shared with anyone?",
    "Describe a place that makes you feel completely at peace.",
    "What would you do if you had unlimited resources and time?",
];

pub static DAILY_PROMPTS: [&str; 5] = [
    "What's the highlight of your day so far?",
    "What's something you're looking forward to tomorrow?",
    "How are you feeling right now, and what's contributing to that feeling?",
    "What's one thing you'd like to improve about today?",
    "What made you laugh today?",
];

pub static GREETINGS: [&str; 3] = [
    "Hello there! I'm here to help you with your journaling journey. How can I assist you today? ✨",
    "Hi! Ready to explore your thoughts and feelings together? What's on your mind? 🌟",
    "Welcome back! I'm excited to help you reflect and grow through journaling. What would you like to work on? 💫",
];

pub static WRITING_HELP: [&str; 3] = [
    "That's a great topic to explore! Try starting with how it makes you feel, then dive deeper into the details. Remember, there are no wrong answers in journaling! 📝",
    "I love that you want to write about this! Consider asking yourself 'why' questions to dig deeper into your thoughts and emotions. 💭",
    "Perfect journaling material! Start with the surface details, then let your thoughts flow naturally. Your authentic voice is what makes your journal special! ✨",
];

pub static MOOD_SUPPORT: [&str; 3] = [
    "It sounds like you're going through a lot right now. Remember that it's okay to feel this way, and writing about it can be really therapeutic. You're doing great! 💕",
    "I hear you, and your feelings are completely valid. Journaling can help you process these emotions. Would you like to explore this further? 🌸",
    "Thank you for sharing that with me. Sometimes just putting our thoughts on paper can bring clarity and peace. You're not alone in this! 💖",
];

pub static ENCOURAGEMENT: [&str; 3] = [
    "You're doing amazing! Every entry you write is a step toward self-discovery and growth. Keep going! 🌟",
    "I'm so proud of your commitment to journaling! Your dedication to self-reflection is truly inspiring. ✨",
    "You have such a beautiful way of expressing yourself! Your journal entries are a testament to your growth and wisdom. 💫",
];

pub static POSITIVE_KEYWORDS: [&str; 20] = [
    "happy", "joy", "excited", "grateful", "blessed", "wonderful", "amazing", "love",
    "beautiful", "fantastic", "great", "good", "awesome", "perfect", "delighted", "thrilled",
    "content", "peaceful", "calm", "relaxed",
];

pub static NEGATIVE_KEYWORDS: [&str; 20] = [
    "sad", "angry", "frustrated", "anxious", "worried", "stressed", "tired", "exhausted",
    "overwhelmed", "disappointed", "hurt", "lonely", "scared", "nervous", "depressed", "upset",
    "mad", "annoyed", "irritated", "confused",
];

pub static NEUTRAL_KEYWORDS: [&str; 14] = [
    "okay", "fine", "normal", "alright", "stable", "balanced", "centered", "focused",
    "determined", "motivated", "productive", "busy", "active", "energetic",
];

lazy_static! {
    pub static ref POSITIVE_SET: HashSet<&'static str> = POSITIVE_KEYWORDS.into_iter().collect();
    pub static ref NEGATIVE_SET: HashSet<&'static str> = NEGATIVE_KEYWORDS.into_iter().collect();
    pub static ref NEUTRAL_SET: HashSet<&'static str> = NEUTRAL_KEYWORDS.into_iter().collect();
}

// Chat replies

pub const PROMPT_REPLY_PREFIX: &str = "Here's a writing prompt for you: \"";
pub const PROMPT_REPLY_SUFFIX: &str = "\"\n\nThis prompt is designed to help you explore your thoughts and feelings. Take your time with it and let your thoughts flow naturally! ✨";

pub const CHAT_MOOD_POSITIVE: &str = "Based on your recent entries, I can see you've been in a positive and uplifting mood! Your writing reflects joy, gratitude, and optimism. Keep embracing those beautiful feelings! 🌟";
pub const CHAT_MOOD_NEGATIVE: &str = "I notice your recent entries have been more challenging. Remember that it's completely normal to have difficult days, and writing about them is a healthy way to process. You're doing great! 💕";
pub const CHAT_MOOD_NEUTRAL: &str = "Your recent entries show a balanced and reflective mood. You seem to be in a thoughtful, contemplative space. This is a wonderful place for growth and self-discovery! ✨";
pub const CHAT_MOOD_NO_DATA: &str = "I'd love to help you analyze your mood! As you write more entries, I'll be able to provide insights about your emotional patterns and growth. For now, how are you feeling today? 💭";

pub const GRATITUDE_FOLLOW_UP: &str = "\n\nGratitude journaling is such a powerful practice! It helps us focus on the positive and appreciate the beauty in our lives. 💖";
pub const HELP_REPLY: &str = "I'm here to help you with your journaling journey! I can provide writing prompts, analyze your mood patterns, help you reflect on your entries, or just chat about your day. What would be most helpful for you right now? 🌸";
pub const ENCOURAGEMENT_FOLLOW_UP: &str = "\n\nIs there anything specific you'd like to explore in your journal today? I'm here to support you! 💫";

// Mood analysis

pub const MOOD_ANALYSIS_POSITIVE: &str = "Your recent entries show a positive and uplifting mood! You've been expressing joy, gratitude, and optimism. This is wonderful energy to carry forward! 🌟";
pub const MOOD_ANALYSIS_NEGATIVE: &str = "I notice your recent entries have been more challenging. Remember that difficult emotions are part of being human, and writing about them is a healthy way to process. You're doing great! 💕";
pub const MOOD_ANALYSIS_NEUTRAL: &str = "Your recent entries show a balanced and reflective mood. You seem to be in a thoughtful, contemplative space. This is a wonderful place for growth and self-discovery! ✨";
pub const MOOD_ANALYSIS_NO_DATA: &str = "I don't have enough entries to analyze your mood yet. Keep writing and I'll be able to provide insights! ✨";

// Insights

pub const INSIGHTS_WELCOME: &str = "Welcome to your journaling journey! Start writing your first entry and I'll provide insights as you grow! ✨";
pub const INSIGHT_HABIT: &str = "You're building a wonderful journaling habit! Your consistency shows dedication to self-reflection and growth. 🌟";
pub const INSIGHT_DEEP_THINKER: &str = "You're a deep thinker! Your detailed entries show thoughtful reflection and self-awareness. 💭";
pub const INSIGHT_ACTIVE: &str = "You're actively engaging with your thoughts! Your recent entries show you're prioritizing self-reflection. ✨";

/// Every prompt across all categories
pub fn all_prompts() -> impl Iterator<Item = &'static str> {
    PromptCategory::ALL
        .into_iter()
        .flat_map(|c| c.prompts().iter().copied())
}
