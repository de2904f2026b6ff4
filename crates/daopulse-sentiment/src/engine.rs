//! Dual-model scoring engine.
//!
//! Wraps the rule-based and general-purpose models behind one strategy type
//! so a future model swap only touches this component. Scoring is a total
//! function of the input text: there is no failure path, and blank text takes
//! an ordinary branch to the fixed neutral score.

use crate::pattern;
use crate::types::{SentimentLabel, SentimentScore};
use crate::vader;

/// Blend weights for combining the two model outputs.
///
/// Each analyzer carries one fixed weighting; weightings are never mixed
/// within a single aggregation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelWeights {
    pub vader: f64,
    pub pattern: f64,
}

impl ModelWeights {
    /// Unweighted average of the two models.
    pub const EVEN: ModelWeights = ModelWeights {
        vader: 0.5,
        pattern: 0.5,
    };
    /// Rule-based model favored for fast informal chat.
    pub const CHAT: ModelWeights = ModelWeights {
        vader: 0.7,
        pattern: 0.3,
    };
    /// Slight rule-based lean for longer but still informal posts.
    pub const POSTS: ModelWeights = ModelWeights {
        vader: 0.6,
        pattern: 0.4,
    };
}

impl Default for ModelWeights {
    fn default() -> Self {
        ModelWeights::EVEN
    }
}

/// Stateless scoring strategy over the two underlying models.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentEngine;

impl SentimentEngine {
    #[must_use]
    pub fn new() -> Self {
        SentimentEngine
    }

    /// Score one message's text. Never fails.
    ///
    /// Blank or whitespace-only text returns [`SentimentScore::neutral`].
    /// Otherwise both models run on the text and `combined_score` is their
    /// weight-blended mean, labeled with the ±0.2 deadband, with
    /// `confidence = |combined_score|`.
    #[must_use]
    pub fn score(&self, text: &str, weights: ModelWeights) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::neutral();
        }

        let v = vader::polarity_scores(text);
        let p = pattern::sentiment(text);

        let combined_score = v.compound * weights.vader + p.polarity * weights.pattern;

        SentimentScore {
            vader_compound: v.compound,
            vader_pos: v.pos,
            vader_neu: v.neu,
            vader_neg: v.neg,
            pattern_polarity: p.polarity,
            pattern_subjectivity: p.subjectivity,
            combined_score,
            label: SentimentLabel::from_score(combined_score),
            confidence: combined_score.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_returns_fixed_neutral() {
        let engine = SentimentEngine::new();
        assert_eq!(engine.score("", ModelWeights::EVEN), SentimentScore::neutral());
        assert_eq!(
            engine.score("  \t\n", ModelWeights::EVEN),
            SentimentScore::neutral()
        );
    }

    #[test]
    fn scoring_is_deterministic() {
        let engine = SentimentEngine::new();
        let text = "Strong support! This proposal is great for the DAO.";
        let a = engine.score(text, ModelWeights::EVEN);
        let b = engine.score(text, ModelWeights::EVEN);
        assert_eq!(a, b);
    }

    #[test]
    fn combined_score_is_weighted_blend() {
        let engine = SentimentEngine::new();
        let text = "this is a great proposal";
        let s = engine.score(text, ModelWeights::CHAT);
        let expected = s.vader_compound * 0.7 + s.pattern_polarity * 0.3;
        assert!((s.combined_score - expected).abs() < 1e-12);
    }

    #[test]
    fn confidence_is_absolute_combined() {
        let engine = SentimentEngine::new();
        let s = engine.score("terrible idea, waste of funds", ModelWeights::EVEN);
        assert!(s.combined_score < 0.0);
        assert!((s.confidence - s.combined_score.abs()).abs() < 1e-12);
    }

    #[test]
    fn label_matches_combined_score_deadband() {
        let engine = SentimentEngine::new();
        let pos = engine.score("great great awesome best proposal", ModelWeights::EVEN);
        assert_eq!(pos.label, SentimentLabel::Positive);
        let neg = engine.score("terrible scam, worst proposal", ModelWeights::EVEN);
        assert_eq!(neg.label, SentimentLabel::Negative);
        let neu = engine.score("the vote closes on friday", ModelWeights::EVEN);
        assert_eq!(neu.label, SentimentLabel::Neutral);
        assert_eq!(neu.combined_score, 0.0);
    }

    #[test]
    fn weights_change_the_blend() {
        let engine = SentimentEngine::new();
        // "support" is rule-model vocabulary only, so leaning on the
        // rule-based model must move the combined score.
        let text = "i support this";
        let even = engine.score(text, ModelWeights::EVEN);
        let chat = engine.score(text, ModelWeights::CHAT);
        assert!(chat.combined_score > even.combined_score);
    }
}
