//! Result types produced by the sentiment pipeline.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-message sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a combined score with the ±0.2 deadband.
    ///
    /// The deadband keeps weakly-polarized text out of the positive/negative
    /// buckets; every downstream ratio depends on these exact boundaries.
    #[must_use]
    pub fn from_score(combined_score: f64) -> Self {
        if combined_score >= 0.2 {
            SentimentLabel::Positive
        } else if combined_score <= -0.2 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Dual-model score for one message. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Rule-based model summary scalar in [-1, 1].
    pub vader_compound: f64,
    pub vader_pos: f64,
    pub vader_neu: f64,
    pub vader_neg: f64,
    /// General-purpose model polarity in [-1, 1].
    pub pattern_polarity: f64,
    /// 0 = factual, 1 = opinionated.
    pub pattern_subjectivity: f64,
    /// Weighted blend of compound and polarity; the canonical per-message
    /// figure used by all aggregation downstream.
    pub combined_score: f64,
    pub label: SentimentLabel,
    /// `|combined_score|`.
    pub confidence: f64,
}

impl SentimentScore {
    /// The fixed score assigned to blank or unscorable text.
    #[must_use]
    pub fn neutral() -> Self {
        SentimentScore {
            vader_compound: 0.0,
            vader_pos: 0.0,
            vader_neu: 1.0,
            vader_neg: 0.0,
            pattern_polarity: 0.0,
            pattern_subjectivity: 0.0,
            combined_score: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0.0,
        }
    }
}

/// Aggregated sentiment for one source channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAggregate {
    pub source_name: String,
    /// Messages that survived the minimum-length filter and were scored.
    pub message_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    /// Ratios over `message_count`; all zero when nothing was scored.
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub neutral_ratio: f64,
    pub avg_sentiment: f64,
    /// Population standard deviation of combined scores.
    pub std_sentiment: f64,
    /// Open side-map for source-specific derived metrics.
    pub source_specific_metrics: serde_json::Map<String, serde_json::Value>,
}

impl SourceAggregate {
    /// The canonical empty aggregate for a source with no scorable messages.
    #[must_use]
    pub fn empty(source_name: &str) -> Self {
        SourceAggregate {
            source_name: source_name.to_string(),
            message_count: 0,
            positive_count: 0,
            negative_count: 0,
            neutral_count: 0,
            positive_ratio: 0.0,
            negative_ratio: 0.0,
            neutral_ratio: 0.0,
            avg_sentiment: 0.0,
            std_sentiment: 0.0,
            source_specific_metrics: serde_json::Map::new(),
        }
    }
}

/// Five-band classification of an aggregated sentiment figure.
///
/// Coarser than the per-message ±0.2 label deadband; the two must not be
/// confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl TrendLabel {
    #[must_use]
    pub fn from_score(aggregated_sentiment: f64) -> Self {
        if aggregated_sentiment >= 0.5 {
            TrendLabel::VeryPositive
        } else if aggregated_sentiment >= 0.2 {
            TrendLabel::Positive
        } else if aggregated_sentiment >= -0.2 {
            TrendLabel::Neutral
        } else if aggregated_sentiment >= -0.5 {
            TrendLabel::Negative
        } else {
            TrendLabel::VeryNegative
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendLabel::VeryPositive => "Very Positive",
            TrendLabel::Positive => "Positive",
            TrendLabel::Neutral => "Neutral",
            TrendLabel::Negative => "Negative",
            TrendLabel::VeryNegative => "Very Negative",
        };
        f.write_str(s)
    }
}

/// Rolling-sentiment direction: latest score against the running mean.
///
/// A separate, simpler signal from [`TrendLabel`]; downstream consumers use
/// both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
}

impl TrendDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Declining => "declining",
        }
    }
}

/// Proposal-level sentiment across all sources. Built fresh per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalSentiment {
    pub proposal_id: String,
    /// Message-count-weighted mean of per-source averages, in [-1, 1].
    pub aggregated_sentiment: f64,
    pub total_messages: usize,
    /// Sources that contributed at least one scored message.
    pub sources_count: usize,
    pub per_source: BTreeMap<String, SourceAggregate>,
    pub trend_label: TrendLabel,
}

/// Author-level ranking entry for forum discussions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSentiment {
    pub author: String,
    pub avg_sentiment: f64,
    pub message_count: usize,
}

/// Author-level ranking entry for Twitter/X, weighted by engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluentialAccount {
    pub author: String,
    pub avg_sentiment: f64,
    pub total_engagement: u64,
    pub tweet_count: usize,
    /// `avg_sentiment * (total_engagement / 100)`.
    pub influence_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_boundary_exact_positive() {
        assert_eq!(SentimentLabel::from_score(0.2), SentimentLabel::Positive);
    }

    #[test]
    fn label_boundary_exact_negative() {
        assert_eq!(SentimentLabel::from_score(-0.2), SentimentLabel::Negative);
    }

    #[test]
    fn label_inside_deadband_is_neutral() {
        assert_eq!(SentimentLabel::from_score(0.1999), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.1999), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn trend_label_bands() {
        assert_eq!(TrendLabel::from_score(0.5), TrendLabel::VeryPositive);
        assert_eq!(TrendLabel::from_score(0.2), TrendLabel::Positive);
        assert_eq!(TrendLabel::from_score(0.1999), TrendLabel::Neutral);
        assert_eq!(TrendLabel::from_score(-0.2), TrendLabel::Neutral);
        assert_eq!(TrendLabel::from_score(-0.21), TrendLabel::Negative);
        assert_eq!(TrendLabel::from_score(-0.51), TrendLabel::VeryNegative);
    }

    #[test]
    fn neutral_score_is_fixed() {
        let s = SentimentScore::neutral();
        assert_eq!(s.vader_neu, 1.0);
        assert_eq!(s.combined_score, 0.0);
        assert_eq!(s.label, SentimentLabel::Neutral);
        assert_eq!(s.confidence, 0.0);
    }

    #[test]
    fn trend_label_serializes_with_spaces() {
        let json = serde_json::to_string(&TrendLabel::VeryPositive).unwrap();
        assert_eq!(json, "\"Very Positive\"");
    }
}
