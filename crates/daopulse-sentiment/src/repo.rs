//! Repository port for raw discussion messages.

use std::time::Duration;

use async_trait::async_trait;
use daopulse_core::{Message, SourceKind};
use thiserror::Error;

/// Why a fetch against the backing store failed.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Supplies raw per-source records for a proposal.
///
/// Implemented by the storage layer above this crate. No data is `Ok` with an
/// empty vec — an `Err` always means the source itself was unreachable.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn fetch_messages(
        &self,
        proposal_id: &str,
        source: SourceKind,
    ) -> Result<Vec<Message>, RepositoryError>;
}
