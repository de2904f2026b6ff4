//! Per-source sentiment analyzers.
//!
//! One capability trait, three implementations. The cross-source layer treats
//! them uniformly; anything source-specific lands in the open
//! `source_specific_metrics` map of the aggregate.

mod discord;
mod forum;
mod twitter;

pub use discord::DiscordAnalyzer;
pub use forum::ForumAnalyzer;
pub use twitter::TwitterAnalyzer;

use daopulse_core::Message;

use crate::aggregate::trend_direction;
use crate::types::{SentimentScore, SourceAggregate};

/// Minimum trimmed text length for a message to carry sentiment signal.
pub(crate) const MIN_TEXT_LEN: usize = 3;

/// Capability contract shared by all source analyzers.
pub trait SourceAnalyzer {
    /// Stable channel name (`discord`, `forum`, `twitter`).
    fn source_name(&self) -> &'static str;

    /// Score one message's text with this source's fixed model weighting.
    fn analyze_text(&self, text: &str) -> SentimentScore;

    /// Aggregate a batch of raw messages into a per-source result.
    ///
    /// An empty batch returns the canonical empty aggregate, never an error.
    fn aggregate_messages(&self, messages: &[Message]) -> SourceAggregate;
}

/// A message that survived filtering, paired with its score.
pub(crate) struct ScoredMessage<'a> {
    pub message: &'a Message,
    pub score: SentimentScore,
}

/// Filter and score a batch, ordered by timestamp ascending.
///
/// The statistical aggregates are order-insensitive; the ordering only
/// matters for the trend-direction signal, which needs "most recent" to be
/// well defined.
pub(crate) fn score_messages<'a, A>(analyzer: &A, messages: &'a [Message]) -> Vec<ScoredMessage<'a>>
where
    A: SourceAnalyzer + ?Sized,
{
    let mut ordered: Vec<&Message> = messages.iter().collect();
    ordered.sort_by_key(|m| m.timestamp);
    ordered
        .into_iter()
        .filter(|m| m.text.trim().chars().count() >= MIN_TEXT_LEN)
        .map(|m| ScoredMessage {
            message: m,
            score: analyzer.analyze_text(&m.text),
        })
        .collect()
}

/// Fall back to a literal `"unknown"` bucket when the author is unresolvable.
pub(crate) fn resolve_author(author: &str) -> &str {
    let trimmed = author.trim();
    if trimmed.is_empty() {
        "unknown"
    } else {
        trimmed
    }
}

/// Build the shared portion of a [`SourceAggregate`] from scored messages.
///
/// Attaches the per-source trend direction (latest score vs. running mean) to
/// the metrics map. Callers add their source-specific extras afterwards.
pub(crate) fn base_aggregate(source_name: &str, scored: &[ScoredMessage<'_>]) -> SourceAggregate {
    if scored.is_empty() {
        return SourceAggregate::empty(source_name);
    }

    let combined: Vec<f64> = scored.iter().map(|s| s.score.combined_score).collect();
    #[allow(clippy::cast_precision_loss)]
    let n = combined.len() as f64;

    let positive_count = scored
        .iter()
        .filter(|s| s.score.label == crate::types::SentimentLabel::Positive)
        .count();
    let negative_count = scored
        .iter()
        .filter(|s| s.score.label == crate::types::SentimentLabel::Negative)
        .count();
    let neutral_count = scored.len() - positive_count - negative_count;

    let avg = combined.iter().sum::<f64>() / n;
    let variance = combined.iter().map(|s| (s - avg).powi(2)).sum::<f64>() / n;

    let mut metrics = serde_json::Map::new();
    if let Some(direction) = trend_direction(&combined) {
        metrics.insert(
            "trend_direction".to_string(),
            serde_json::Value::from(direction.as_str()),
        );
    }

    #[allow(clippy::cast_precision_loss)]
    SourceAggregate {
        source_name: source_name.to_string(),
        message_count: scored.len(),
        positive_count,
        negative_count,
        neutral_count,
        positive_ratio: positive_count as f64 / n,
        negative_ratio: negative_count as f64 / n,
        neutral_ratio: neutral_count as f64 / n,
        avg_sentiment: avg,
        std_sentiment: variance.sqrt(),
        source_specific_metrics: metrics,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{TimeZone, Utc};
    use daopulse_core::{Engagement, Message};

    /// Message at minute `minute` of a fixed day, no engagement.
    pub fn msg(text: &str, author: &str, minute: u32) -> Message {
        Message {
            text: text.to_string(),
            author: author.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
            engagement: None,
        }
    }

    pub fn tweet(text: &str, author: &str, minute: u32, likes: u64, shares: u64) -> Message {
        Message {
            engagement: Some(Engagement { likes, shares }),
            ..msg(text, author, minute)
        }
    }
}
