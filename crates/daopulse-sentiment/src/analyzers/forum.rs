//! Governance forum analyzer (Discourse-style discussion threads).

use std::collections::{BTreeMap, HashSet};

use daopulse_core::Message;
use regex::Regex;

use crate::engine::{ModelWeights, SentimentEngine};
use crate::types::{AuthorSentiment, SentimentScore, SourceAggregate};

use super::{base_aggregate, resolve_author, score_messages, SourceAnalyzer};

/// How many top-positive authors to report.
const TOP_AUTHORS: usize = 3;

/// Analyzer for forum threads.
///
/// Posts are longer and carry markdown/quoting noise, so bodies are cleaned
/// before scoring and the weighting leans only slightly toward the rule-based
/// model ([`ModelWeights::POSTS`], 0.6/0.4).
#[derive(Debug, Clone)]
pub struct ForumAnalyzer {
    engine: SentimentEngine,
    url_re: Regex,
    markdown_re: Regex,
    quote_re: Regex,
    whitespace_re: Regex,
}

impl ForumAnalyzer {
    /// # Panics
    ///
    /// Does not panic: the regex patterns are static and valid.
    #[must_use]
    pub fn new(engine: SentimentEngine) -> Self {
        ForumAnalyzer {
            engine,
            url_re: Regex::new(r"https?://\S+|www\.\S+").expect("valid url regex"),
            markdown_re: Regex::new(r"[*_~`#]").expect("valid markdown regex"),
            // Quoted lines are usually restatements of earlier posts.
            quote_re: Regex::new(r"(?m)^>.*$").expect("valid quote regex"),
            whitespace_re: Regex::new(r"\s+").expect("valid whitespace regex"),
        }
    }

    /// Strip URLs, markdown markers, and quoted lines from a post body.
    fn clean_text(&self, text: &str) -> String {
        let text = self.quote_re.replace_all(text, "");
        let text = self.url_re.replace_all(&text, "");
        let text = self.markdown_re.replace_all(&text, "");
        self.whitespace_re.replace_all(&text, " ").trim().to_string()
    }
}

fn top_positive_authors(
    scored: &[super::ScoredMessage<'_>],
) -> Vec<AuthorSentiment> {
    let mut by_author: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for s in scored {
        by_author
            .entry(resolve_author(&s.message.author))
            .or_default()
            .push(s.score.combined_score);
    }

    #[allow(clippy::cast_precision_loss)]
    let mut ranked: Vec<AuthorSentiment> = by_author
        .into_iter()
        .map(|(author, scores)| AuthorSentiment {
            author: author.to_string(),
            avg_sentiment: scores.iter().sum::<f64>() / scores.len() as f64,
            message_count: scores.len(),
        })
        .collect();
    ranked.sort_by(|a, b| b.avg_sentiment.total_cmp(&a.avg_sentiment));
    ranked.truncate(TOP_AUTHORS);
    ranked
}

impl SourceAnalyzer for ForumAnalyzer {
    fn source_name(&self) -> &'static str {
        "forum"
    }

    fn analyze_text(&self, text: &str) -> SentimentScore {
        self.engine.score(&self.clean_text(text), ModelWeights::POSTS)
    }

    fn aggregate_messages(&self, messages: &[Message]) -> SourceAggregate {
        let scored = score_messages(self, messages);
        let mut agg = base_aggregate(self.source_name(), &scored);
        if scored.is_empty() {
            return agg;
        }

        let unique_authors: HashSet<&str> = messages
            .iter()
            .map(|m| resolve_author(&m.author))
            .collect();
        #[allow(clippy::cast_precision_loss)]
        let avg_posts_per_author = if unique_authors.is_empty() {
            0.0
        } else {
            agg.message_count as f64 / unique_authors.len() as f64
        };

        let metrics = &mut agg.source_specific_metrics;
        metrics.insert(
            "unique_authors".to_string(),
            serde_json::Value::from(unique_authors.len()),
        );
        metrics.insert(
            "avg_posts_per_author".to_string(),
            serde_json::Value::from(avg_posts_per_author),
        );
        metrics.insert(
            "top_positive_authors".to_string(),
            serde_json::to_value(top_positive_authors(&scored)).unwrap_or_default(),
        );
        agg
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::msg;
    use super::*;

    fn analyzer() -> ForumAnalyzer {
        ForumAnalyzer::new(SentimentEngine::new())
    }

    #[test]
    fn empty_batch_is_canonical_empty() {
        let agg = analyzer().aggregate_messages(&[]);
        assert_eq!(agg, SourceAggregate::empty("forum"));
    }

    #[test]
    fn clean_text_strips_urls_markdown_and_quotes() {
        let a = analyzer();
        let cleaned = a.clean_text(
            "> earlier post restated here\n**great** proposal, see https://forum.example/t/1 for details",
        );
        assert_eq!(cleaned, "great proposal, see for details");
    }

    #[test]
    fn cleaning_happens_before_scoring() {
        let a = analyzer();
        // The only sentiment-bearing word sits inside a quoted line.
        let quoted_only = a.analyze_text("> this is great\nsee thread above");
        assert_eq!(quoted_only.combined_score, 0.0);
    }

    #[test]
    fn unique_authors_and_posts_per_author() {
        let messages = vec![
            msg("this proposal is great", "alice", 0),
            msg("i support this direction", "alice", 1),
            msg("strong support from me too", "bob", 2),
            msg("the vote closes on friday", "bob", 3),
        ];
        let agg = analyzer().aggregate_messages(&messages);
        let metrics = &agg.source_specific_metrics;
        assert_eq!(metrics.get("unique_authors"), Some(&serde_json::Value::from(2)));
        assert_eq!(
            metrics.get("avg_posts_per_author"),
            Some(&serde_json::Value::from(2.0))
        );
    }

    #[test]
    fn top_positive_authors_ranked_by_mean_score() {
        // Author a posts 3 clearly positive messages, author b posts 2
        // mildly negative ones.
        let messages = vec![
            msg("this proposal is great, i love it", "a", 0),
            msg("excellent work, strong support", "a", 1),
            msg("great direction for the dao", "a", 2),
            msg("i have some concerns about cost", "b", 3),
            msg("the risk here worries me", "b", 4),
        ];
        let agg = analyzer().aggregate_messages(&messages);
        let top = agg
            .source_specific_metrics
            .get("top_positive_authors")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0]["author"], "a");
        assert_eq!(top[0]["message_count"], 3);
        let a_avg = top[0]["avg_sentiment"].as_f64().unwrap();
        let b_avg = top[1]["avg_sentiment"].as_f64().unwrap();
        assert!(a_avg > b_avg);
        assert!(a_avg > 0.0);
    }

    #[test]
    fn top_authors_capped_at_three() {
        let messages = vec![
            msg("this proposal is great", "a", 0),
            msg("i support this", "b", 1),
            msg("excellent work here", "c", 2),
            msg("love this direction", "d", 3),
        ];
        let agg = analyzer().aggregate_messages(&messages);
        let top = agg
            .source_specific_metrics
            .get("top_positive_authors")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap();
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn blank_authors_collapse_into_unknown() {
        let messages = vec![
            msg("this proposal is great", "", 0),
            msg("i support this", "  ", 1),
        ];
        let agg = analyzer().aggregate_messages(&messages);
        let metrics = &agg.source_specific_metrics;
        assert_eq!(metrics.get("unique_authors"), Some(&serde_json::Value::from(1)));
        let top = metrics
            .get("top_positive_authors")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap();
        assert_eq!(top[0]["author"], "unknown");
        assert_eq!(top[0]["message_count"], 2);
    }
}
