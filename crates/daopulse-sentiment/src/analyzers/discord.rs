//! Discord channel analyzer.

use daopulse_core::Message;

use crate::engine::{ModelWeights, SentimentEngine};
use crate::types::{SentimentScore, SourceAggregate};

use super::{base_aggregate, score_messages, SourceAnalyzer};

/// Analyzer for Discord discussion channels.
///
/// Fast informal chat, so the rule-based model carries most of the weight
/// ([`ModelWeights::CHAT`], 0.7/0.3).
#[derive(Debug, Clone)]
pub struct DiscordAnalyzer {
    engine: SentimentEngine,
}

impl DiscordAnalyzer {
    #[must_use]
    pub fn new(engine: SentimentEngine) -> Self {
        DiscordAnalyzer { engine }
    }
}

/// Bucket raw channel activity by message count.
fn engagement_level(raw_message_count: usize) -> &'static str {
    match raw_message_count {
        0..=4 => "very_low",
        5..=19 => "low",
        20..=49 => "medium",
        50..=99 => "high",
        _ => "very_high",
    }
}

impl SourceAnalyzer for DiscordAnalyzer {
    fn source_name(&self) -> &'static str {
        "discord"
    }

    fn analyze_text(&self, text: &str) -> SentimentScore {
        self.engine.score(text, ModelWeights::CHAT)
    }

    fn aggregate_messages(&self, messages: &[Message]) -> SourceAggregate {
        let scored = score_messages(self, messages);
        let mut agg = base_aggregate(self.source_name(), &scored);
        if !scored.is_empty() {
            // Activity bucket reflects raw channel volume, including messages
            // too short to score.
            agg.source_specific_metrics.insert(
                "engagement_level".to_string(),
                serde_json::Value::from(engagement_level(messages.len())),
            );
        }
        agg
    }
}
