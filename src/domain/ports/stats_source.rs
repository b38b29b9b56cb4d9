//! Driven port for the statistics snapshot.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use crate::domain::stats::StatsTotals;

/// Errors raised by [`StatsSource`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum StatsSourceError {
    /// Snapshot backend is unavailable.
    #[error("stats source connection failed: {message}")]
    Connection { message: String },
    /// Aggregate read failed during execution.
    #[error("stats source query failed: {message}")]
    Query { message: String },
}

impl StatsSourceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Consistent aggregate read over the operational data.
///
/// Adapters must compute all four figures within one transaction or lock
/// acquisition, so income never straddles a half-applied settlement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Read the current totals in a single consistent snapshot.
    async fn totals(&self) -> Result<StatsTotals, StatsSourceError>;
}
