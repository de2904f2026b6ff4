//! Proposal sentiment orchestration.

use daopulse_core::SourceKind;

use crate::aggregate::aggregate_proposal;
use crate::analyzers::{DiscordAnalyzer, ForumAnalyzer, SourceAnalyzer, TwitterAnalyzer};
use crate::engine::SentimentEngine;
use crate::error::{SentimentError, SourceFailure};
use crate::repo::MessageRepository;
use crate::types::{ProposalSentiment, SourceAggregate};

/// Query service over the full pipeline: repository -> per-source analyzers
/// -> cross-source aggregate.
///
/// The engine and analyzers are constructed once here and injected into every
/// query; there is no lazy global state. Both operations are pure queries of
/// the repository's current contents.
pub struct SentimentService<R> {
    repo: R,
    discord: DiscordAnalyzer,
    forum: ForumAnalyzer,
    twitter: TwitterAnalyzer,
}

impl<R: MessageRepository> SentimentService<R> {
    #[must_use]
    pub fn new(repo: R) -> Self {
        let engine = SentimentEngine::new();
        SentimentService {
            repo,
            discord: DiscordAnalyzer::new(engine),
            forum: ForumAnalyzer::new(engine),
            twitter: TwitterAnalyzer::new(engine),
        }
    }

    fn analyzer_for(&self, source: SourceKind) -> &dyn SourceAnalyzer {
        match source {
            SourceKind::Discord => &self.discord,
            SourceKind::Forum => &self.forum,
            SourceKind::Twitter => &self.twitter,
        }
    }

    /// Proposal-level sentiment across all sources.
    ///
    /// The three per-source fetches run concurrently; they have no data
    /// dependency on each other, and aggregation is commutative over their
    /// completion order. An empty source aggregates normally; a failed fetch
    /// does not.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::SourcesUnavailable`] if any source fetch
    /// fails, carrying the aggregates of the sources that succeeded.
    pub async fn proposal_sentiment(
        &self,
        proposal_id: &str,
    ) -> Result<ProposalSentiment, SentimentError> {
        let (discord, forum, twitter) = tokio::join!(
            self.repo.fetch_messages(proposal_id, SourceKind::Discord),
            self.repo.fetch_messages(proposal_id, SourceKind::Forum),
            self.repo.fetch_messages(proposal_id, SourceKind::Twitter),
        );

        let mut failures: Vec<SourceFailure> = Vec::new();
        let mut aggregates: Vec<SourceAggregate> = Vec::new();

        let fetched = [
            (SourceKind::Discord, discord),
            (SourceKind::Forum, forum),
            (SourceKind::Twitter, twitter),
        ];
        for (source, result) in fetched {
            match result {
                Ok(messages) => {
                    tracing::debug!(
                        proposal = proposal_id,
                        source = %source,
                        count = messages.len(),
                        "fetched messages"
                    );
                    aggregates.push(self.analyzer_for(source).aggregate_messages(&messages));
                }
                Err(e) => {
                    tracing::warn!(
                        proposal = proposal_id,
                        source = %source,
                        error = %e,
                        "source fetch failed"
                    );
                    failures.push(SourceFailure {
                        source,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if !failures.is_empty() {
            return Err(SentimentError::SourcesUnavailable {
                proposal_id: proposal_id.to_string(),
                failures,
                partial: aggregates,
            });
        }

        let result = aggregate_proposal(proposal_id, aggregates);
        tracing::info!(
            proposal = proposal_id,
            total_messages = result.total_messages,
            sentiment = result.aggregated_sentiment,
            trend = %result.trend_label,
            "aggregated proposal sentiment"
        );
        Ok(result)
    }

    /// Sentiment for a single source channel.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::SourceUnavailable`] if the fetch fails.
    pub async fn source_sentiment(
        &self,
        proposal_id: &str,
        source: SourceKind,
    ) -> Result<SourceAggregate, SentimentError> {
        let messages = self
            .repo
            .fetch_messages(proposal_id, source)
            .await
            .map_err(|e| SentimentError::SourceUnavailable {
                proposal_id: proposal_id.to_string(),
                source,
                reason: e.to_string(),
            })?;
        tracing::debug!(
            proposal = proposal_id,
            source = %source,
            count = messages.len(),
            "fetched messages"
        );
        Ok(self.analyzer_for(source).aggregate_messages(&messages))
    }
}
