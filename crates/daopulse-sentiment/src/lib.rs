//! Multi-source sentiment pipeline for DAO proposal discussions.
//!
//! Raw messages per source (Discord, forum, Twitter/X) are scored message by
//! message with a dual-model engine, aggregated per source, then combined
//! into one message-count-weighted proposal-level figure with a five-band
//! trend label. The repository supplying raw messages is a port implemented
//! by the storage layer above this crate; everything here is pure, in-process
//! computation.

pub mod aggregate;
pub mod analyzers;
pub mod engine;
pub mod error;
pub mod repo;
pub mod service;
pub mod types;

mod pattern;
mod vader;


pub use aggregate::{aggregate_proposal, trend_direction};
pub use analyzers::{DiscordAnalyzer, ForumAnalyzer, SourceAnalyzer, TwitterAnalyzer};
pub use engine::{ModelWeights, SentimentEngine};
pub use error::{SentimentError, SourceFailure};
pub use repo::{MessageRepository, RepositoryError};
pub use service::SentimentService;
pub use types::{
    AuthorSentiment, InfluentialAccount, ProposalSentiment, SentimentLabel, SentimentScore,
    SourceAggregate, TrendDirection, TrendLabel,
};
