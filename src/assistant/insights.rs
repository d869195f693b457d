//! Templated observations about a user's journaling activity

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::library::INSIGHTS_WELCOME;
use super::library::INSIGHT_ACTIVE;
use super::library::INSIGHT_DEEP_THINKER;
use super::library::INSIGHT_HABIT;
use crate::models::JournalEntry;

/// Entry count at which the habit observation is made
pub const HABIT_THRESHOLD: i64 = 5;
/// Average content length (characters) above which entries count as detailed
pub const DEEP_THINKER_AVG_CHARS: f64 = 200.0;
/// Maximum whole days since the newest entry for the activity observation
pub const ACTIVE_WITHIN_DAYS: i64 = 1;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Insights response; the welcome form is used when no entries exist
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JournalInsights {
    #[serde(rename_all = "camelCase")]
    Welcome {
        message: String,
        total_entries: i64,
        insights: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Report {
        total_entries: i64,
        insights: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_entry_date: Option<DateTime<Utc>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        days_since_last_entry: Option<i64>,
    },
}

impl JournalInsights {
    pub fn insights(&self) -> &[String] {
        match self {
            Self::Welcome { insights, .. } | Self::Report { insights, .. } => insights,
        }
    }

    pub const fn total_entries(&self) -> i64 {
        match self {
            Self::Welcome { total_entries, .. } | Self::Report { total_entries, .. } => {
                *total_entries
            }
        }
    }
}

/// Whole days elapsed between `then` and `now`, rounded down
pub fn days_between(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Build insights from the total entry count and a newest-first sample
pub fn generate_insights(
    total_entries: i64,
    sample: &[JournalEntry],
    now: DateTime<Utc>,
) -> JournalInsights {
    if total_entries == 0 {
        return JournalInsights::Welcome {
            message: INSIGHTS_WELCOME.to_string(),
            total_entries: 0,
            insights: Vec::new(),
        };
    }

    let mut insights = Vec::new();

    if total_entries >= HABIT_THRESHOLD {
        insights.push(INSIGHT_HABIT.to_string());
    }

    if !sample.is_empty() {
        let total_chars: usize = sample.iter().map(|e| e.content.chars().count()).sum();
        let average = total_chars as f64 / sample.len() as f64;
        if average > DEEP_THINKER_AVG_CHARS {
            insights.push(INSIGHT_DEEP_THINKER.to_string());
        }
    }

    let last_entry_date = sample.first().map(|e| e.created_at);
    let days_since_last_entry = last_entry_date.map(|date| days_between(date, now));

    if days_since_last_entry.is_some_and(|days| days <= ACTIVE_WITHIN_DAYS) {
        insights.push(INSIGHT_ACTIVE.to_string());
    }

    JournalInsights::Report {
        total_entries,
        insights,
        last_entry_date,
        days_since_last_entry,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use uuid::Uuid;

    use super::*;
    use crate::models::NewJournalEntry;

    fn entry_at(content: &str, at: DateTime<Utc>) -> JournalEntry {
        NewJournalEntry::new(Uuid::nil(), "title", content)
            .created_at(at)
            .into_entry()
    }

    #[test]
    fn test_zero_entries_welcome_ignores_sample() {
        let now = Utc::now();
        let sample = vec![entry_at(&"x".repeat(500), now)];

        let insights = generate_insights(0, &sample, now);
        assert_eq!(
            insights,
            JournalInsights::Welcome {
                message: INSIGHTS_WELCOME.to_string(),
                total_entries: 0,
                insights: vec![],
            }
        );
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let now = Utc::now();
        let sample: Vec<_> = (0..5)
            .map(|i| entry_at(&"w".repeat(250), now - Duration::hours(i)))
            .collect();

        let insights = generate_insights(12, &sample, now);
        assert_eq!(
            insights.insights(),
            [INSIGHT_HABIT, INSIGHT_DEEP_THINKER, INSIGHT_ACTIVE]
        );
    }

    #[test]
    fn test_thresholds_are_strict_where_required() {
        let now = Utc::now();
        // exactly 200 average is not "> 200"; two days ago is not "<= 1"
        let sample = vec![entry_at(&"a".repeat(200), now - Duration::days(2))];

        let insights = generate_insights(4, &sample, now);
        assert!(insights.insights().is_empty());
        match insights {
            JournalInsights::Report {
                days_since_last_entry,
                ..
            } => assert_eq!(days_since_last_entry, Some(2)),
            JournalInsights::Welcome { .. } => panic!("expected report"),
        }
    }

    #[test]
    fn test_activity_window_boundary() {
        let now = Utc::now();
        let sample = vec![entry_at("short", now - Duration::hours(47))];
        let insights = generate_insights(1, &sample, now);
        assert_eq!(insights.insights(), [INSIGHT_ACTIVE]);
    }

    #[test]
    fn test_days_between_floors() {
        let now = Utc::now();
        assert_eq!(days_between(now - Duration::hours(23), now), 0);
        assert_eq!(days_between(now - Duration::hours(25), now), 1);
        assert_eq!(days_between(now + Duration::hours(1), now), -1);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let now = Utc::now();
        let insights = generate_insights(1, &[entry_at("hi", now)], now);
        let json = serde_json::to_value(&insights).unwrap();

        assert_eq!(json["totalEntries"], 1);
        assert_eq!(json["daysSinceLastEntry"], 0);
        assert!(json.get("lastEntryDate").is_some());
    }

    #[test]
    fn test_empty_sample_with_entries() {
        let insights = generate_insights(7, &[], Utc::now());
        assert_eq!(insights.insights(), [INSIGHT_HABIT]);
        assert_eq!(insights.total_entries(), 7);
    }
}
