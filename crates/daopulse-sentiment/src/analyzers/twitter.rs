//! Twitter/X analyzer with engagement weighting.

use std::collections::BTreeMap;

use daopulse_core::Message;

use crate::engine::{ModelWeights, SentimentEngine};
use crate::types::{InfluentialAccount, SentimentScore, SourceAggregate};

use super::{base_aggregate, resolve_author, score_messages, ScoredMessage, SourceAnalyzer};

/// How many influential accounts to report.
const TOP_ACCOUNTS: usize = 5;

/// Analyzer for Twitter/X discussion.
///
/// Scores with the even 0.5/0.5 blend ([`ModelWeights::EVEN`]) and weights
/// the aggregate by per-tweet engagement.
#[derive(Debug, Clone)]
pub struct TwitterAnalyzer {
    engine: SentimentEngine,
}

impl TwitterAnalyzer {
    #[must_use]
    pub fn new(engine: SentimentEngine) -> Self {
        TwitterAnalyzer { engine }
    }
}

fn engagement_of(message: &Message) -> u64 {
    message.engagement.map_or(0, daopulse_core::Engagement::total)
}

/// Mean of combined scores weighted by `engagement / max_engagement`.
///
/// When every tweet in the batch has zero engagement, every weight is zero
/// and the weighted average degenerates to 0.0. That is the documented
/// contract, not a bug: with no engagement signal there is nothing to weight
/// by.
fn engagement_weighted_sentiment(scored: &[ScoredMessage<'_>]) -> f64 {
    let max = scored
        .iter()
        .map(|s| engagement_of(s.message))
        .max()
        .unwrap_or(0);
    if max == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let weighted_sum: f64 = scored
        .iter()
        .map(|s| s.score.combined_score * (engagement_of(s.message) as f64 / max as f64))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let n = scored.len() as f64;
    weighted_sum / n
}

fn influential_accounts(scored: &[ScoredMessage<'_>]) -> Vec<InfluentialAccount> {
    let mut by_author: BTreeMap<&str, (Vec<f64>, u64)> = BTreeMap::new();
    for s in scored {
        let entry = by_author
            .entry(resolve_author(&s.message.author))
            .or_default();
        entry.0.push(s.score.combined_score);
        entry.1 += engagement_of(s.message);
    }

    #[allow(clippy::cast_precision_loss)]
    let mut ranked: Vec<InfluentialAccount> = by_author
        .into_iter()
        .map(|(author, (scores, total_engagement))| {
            let avg_sentiment = scores.iter().sum::<f64>() / scores.len() as f64;
            InfluentialAccount {
                author: author.to_string(),
                avg_sentiment,
                total_engagement,
                tweet_count: scores.len(),
                influence_score: avg_sentiment * (total_engagement as f64 / 100.0),
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.influence_score.total_cmp(&a.influence_score));
    ranked.truncate(TOP_ACCOUNTS);
    ranked
}

impl SourceAnalyzer for TwitterAnalyzer {
    fn source_name(&self) -> &'static str {
        "twitter"
    }

    fn analyze_text(&self, text: &str) -> SentimentScore {
        self.engine.score(text, ModelWeights::EVEN)
    }

    fn aggregate_messages(&self, messages: &[Message]) -> SourceAggregate {
        let scored = score_messages(self, messages);
        let mut agg = base_aggregate(self.source_name(), &scored);
        if scored.is_empty() {
            return agg;
        }

        let total_engagement: u64 = scored.iter().map(|s| engagement_of(s.message)).sum();
        #[allow(clippy::cast_precision_loss)]
        let avg_engagement = total_engagement as f64 / scored.len() as f64;

        let metrics = &mut agg.source_specific_metrics;
        metrics.insert(
            "engagement_weighted_sentiment".to_string(),
            serde_json::Value::from(engagement_weighted_sentiment(&scored)),
        );
        metrics.insert(
            "total_engagement".to_string(),
            serde_json::Value::from(total_engagement),
        );
        metrics.insert(
            "avg_engagement_per_tweet".to_string(),
            serde_json::Value::from(avg_engagement),
        );
        metrics.insert(
            "influential_accounts".to_string(),
            serde_json::to_value(influential_accounts(&scored)).unwrap_or_default(),
        );
        agg
    }
}
