//! Driven port for booking persistence.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use super::StatusCas;
use crate::domain::booking::{Booking, BookingId, NewBooking};
use crate::domain::role::PatientScope;

/// Persistence errors raised by [`BookingRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum BookingPersistenceError {
    /// Store connectivity failed; the request cannot be served.
    #[error("booking store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("booking store query failed: {message}")]
    Query { message: String },
    /// An optimistic write detected a concurrent change; retry the cycle.
    #[error("booking store detected a concurrent update")]
    Conflict,
}

impl BookingPersistenceError {
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

/// Persistence port for booking aggregates.
///
/// `list` takes the visibility scope so filtering happens at the query
/// boundary; adapters must never return rows outside the scope.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a validated draft, assigning id, Pending status, and timestamp.
    async fn insert(&self, draft: NewBooking) -> Result<Booking, BookingPersistenceError>;

    /// Fetch a booking by identifier.
    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingPersistenceError>;

    /// List bookings visible in `scope`, ordered by identifier.
    async fn list(&self, scope: &PatientScope) -> Result<Vec<Booking>, BookingPersistenceError>;

    /// Atomically move Pending → Completed. `None` means no such booking.
    async fn complete(&self, id: BookingId)
        -> Result<Option<StatusCas>, BookingPersistenceError>;
}
