//! Keyword-count sentiment classifier
//!
//! Text is lower-cased and split on whitespace; each token is looked up
//! exactly in the positive, negative and neutral keyword sets. Punctuation is
//! not stripped, so "happy!" does not count as "happy".

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::library::NEGATIVE_SET;
use super::library::NEUTRAL_SET;
use super::library::POSITIVE_SET;

/// Mood label derived from keyword counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword hits per set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    /// Tracked for reporting only; never affects the label
    pub neutral: usize,
}

impl SentimentCounts {
    pub const fn label(&self) -> Sentiment {
        if self.positive > self.negative {
            Sentiment::Positive
        } else if self.negative > self.positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Count keyword hits in `text`
pub fn count_keywords(text: &str) -> SentimentCounts {
    let lower = text.to_lowercase();
    let mut counts = SentimentCounts::default();

    for word in lower.split_whitespace() {
        if POSITIVE_SET.contains(word) {
            counts.positive += 1;
        } else if NEGATIVE_SET.contains(word) {
            counts.negative += 1;
        } else if NEUTRAL_SET.contains(word) {
            counts.neutral += 1;
        }
    }

    counts
}

/// Classify `text` as positive, negative or neutral
pub fn analyze_sentiment(text: &str) -> Sentiment {
    count_keywords(text).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_majority() {
        let counts = count_keywords("I feel so happy and grateful today");
        assert_eq!(counts.positive, 2);
        assert_eq!(counts.negative, 0);
        assert_eq!(counts.label(), Sentiment::Positive);
    }

    #[test]
    fn test_negative_majority() {
        assert_eq!(
            analyze_sentiment("Tired and stressed, a little happy though. Mostly worried"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_tie_is_neutral() {
        assert_eq!(analyze_sentiment("happy but sad"), Sentiment::Neutral);
    }

    #[test]
    fn test_empty_is_neutral() {
        assert_eq!(count_keywords(""), SentimentCounts::default());
        assert_eq!(analyze_sentiment(""), Sentiment::Neutral);
        assert_eq!(analyze_sentiment("   \n\t "), Sentiment::Neutral);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(analyze_sentiment("HAPPY Joy"), Sentiment::Positive);
    }

    #[test]
    fn test_punctuation_attached_words_do_not_match() {
        let counts = count_keywords("happy! sad, calm.");
        assert_eq!(counts, SentimentCounts::default());
    }

    #[test]
    fn test_neutral_words_counted_but_ignored() {
        let counts = count_keywords("okay fine busy sad");
        assert_eq!(counts.neutral, 3);
        assert_eq!(counts.label(), Sentiment::Negative);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
    }
}
