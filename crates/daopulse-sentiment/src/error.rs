use daopulse_core::SourceKind;
use thiserror::Error;

use crate::types::SourceAggregate;

/// One source that could not be fetched, with the repository's reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub source: SourceKind,
    pub reason: String,
}

/// Failures surfaced by the sentiment service.
///
/// Scoring never fails; these cover the repository boundary only. A failed
/// source is a distinct state from an empty one: empty data arrives as
/// `Ok(vec![])` from the repository and aggregates normally.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// A single-source query could not fetch its data.
    #[error("{source} unavailable for proposal {proposal_id}: {reason}")]
    SourceUnavailable {
        proposal_id: String,
        source: SourceKind,
        reason: String,
    },

    /// One or more sources failed during a proposal-wide query.
    ///
    /// Carries the aggregates of the sources that did succeed so callers may
    /// report partial results if they choose to.
    #[error("{} source(s) unavailable for proposal {proposal_id}", .failures.len())]
    SourcesUnavailable {
        proposal_id: String,
        failures: Vec<SourceFailure>,
        partial: Vec<SourceAggregate>,
    },
}
