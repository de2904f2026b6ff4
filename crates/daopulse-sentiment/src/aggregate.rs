//! Cross-source aggregation.
//!
//! Combines per-source aggregates into one proposal-level figure, weighted by
//! message volume (volume as a confidence proxy: a source with many messages
//! dominates one with few). Pure and idempotent; commutative over the input
//! order.

use std::collections::BTreeMap;

use crate::types::{ProposalSentiment, SourceAggregate, TrendDirection, TrendLabel};

/// Combine per-source aggregates into a proposal-level result.
///
/// `aggregated_sentiment` is the message-count-weighted mean of per-source
/// averages. Sources with zero scored messages contribute nothing to the
/// weighted sum and are not counted in `sources_count`, but remain visible in
/// `per_source` so callers can tell "empty" from "absent". Zero messages
/// overall yields the neutral result.
#[must_use]
pub fn aggregate_proposal(proposal_id: &str, sources: Vec<SourceAggregate>) -> ProposalSentiment {
    let total_messages: usize = sources.iter().map(|s| s.message_count).sum();
    let sources_count = sources.iter().filter(|s| s.message_count > 0).count();

    let aggregated_sentiment = if total_messages == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let weighted_sum: f64 = sources
            .iter()
            .map(|s| s.avg_sentiment * s.message_count as f64)
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let denom = total_messages as f64;
        weighted_sum / denom
    };

    let per_source: BTreeMap<String, SourceAggregate> = if total_messages == 0 {
        BTreeMap::new()
    } else {
        sources
            .into_iter()
            .map(|s| (s.source_name.clone(), s))
            .collect()
    };

    ProposalSentiment {
        proposal_id: proposal_id.to_string(),
        aggregated_sentiment,
        total_messages,
        sources_count,
        per_source,
        trend_label: TrendLabel::from_score(aggregated_sentiment),
    }
}

/// Rolling trend direction over a timestamp-ascending score sequence.
///
/// `Improving` when the most recent score exceeds the running mean, else
/// `Declining`. `None` on an empty sequence.
#[must_use]
pub fn trend_direction(combined_scores: &[f64]) -> Option<TrendDirection> {
    let last = combined_scores.last()?;
    #[allow(clippy::cast_precision_loss)]
    let avg = combined_scores.iter().sum::<f64>() / combined_scores.len() as f64;
    if *last > avg {
        Some(TrendDirection::Improving)
    } else {
        Some(TrendDirection::Declining)
    }
}
