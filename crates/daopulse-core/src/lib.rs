//! Shared domain types for the DAO-Pulse analytics backend.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engagement counters attached to a message, where the source provides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u64,
    /// Shares, retweets, or reposts depending on the source.
    pub shares: u64,
}

impl Engagement {
    #[must_use]
    pub const fn total(self) -> u64 {
        self.likes + self.shares
    }
}

/// One raw discussion message fetched for a proposal.
///
/// Constructed per request from repository records; never persisted by the
/// sentiment core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<Engagement>,
}

/// Discussion channel a batch of messages was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Discord,
    Forum,
    Twitter,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Discord, SourceKind::Forum, SourceKind::Twitter];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SourceKind::Discord => "discord",
            SourceKind::Forum => "forum",
            SourceKind::Twitter => "twitter",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for SourceKind {}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown source: {0}")]
    UnknownSource(String),
}

impl FromStr for SourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "discord" => Ok(SourceKind::Discord),
            "forum" => Ok(SourceKind::Forum),
            "twitter" | "x" => Ok(SourceKind::Twitter),
            other => Err(CoreError::UnknownSource(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kind_round_trips_through_str() {
        for kind in SourceKind::ALL {
            assert_eq!(kind.as_str().parse::<SourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn x_parses_as_twitter() {
        assert_eq!("X".parse::<SourceKind>().unwrap(), SourceKind::Twitter);
    }

    #[test]
    fn unknown_source_is_rejected() {
        assert!("telegram".parse::<SourceKind>().is_err());
    }

    #[test]
    fn engagement_total_sums_likes_and_shares() {
        let e = Engagement { likes: 3, shares: 4 };
        assert_eq!(e.total(), 7);
    }

    #[test]
    fn message_serializes_without_null_engagement() {
        let msg = Message {
            text: "gm".to_string(),
            author: "alice".to_string(),
            timestamp: chrono::Utc::now(),
            engagement: None,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("engagement"));
    }
}
