//! Driven port for payment order persistence.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use super::StatusCas;
use crate::domain::payment::{NewPaymentOrder, OrderId, PaymentOrder, PaymentStatus};
use crate::domain::role::PatientScope;

/// Persistence errors raised by [`PaymentRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PaymentPersistenceError {
    /// Store connectivity failed; the request cannot be served.
    #[error("payment store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("payment store query failed: {message}")]
    Query { message: String },
    /// An optimistic write detected a concurrent change; retry the cycle.
    #[error("payment store detected a concurrent update")]
    Conflict,
}

impl PaymentPersistenceError {
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

/// Persistence port for payment order aggregates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Insert an order produced by the billing collaborator.
    async fn insert(&self, draft: NewPaymentOrder)
        -> Result<PaymentOrder, PaymentPersistenceError>;

    /// Fetch an order by identifier.
    async fn find_by_id(&self, id: OrderId)
        -> Result<Option<PaymentOrder>, PaymentPersistenceError>;

    /// List orders in `status` visible in `scope`, ordered by identifier.
    async fn list(
        &self,
        status: PaymentStatus,
        scope: &PatientScope,
    ) -> Result<Vec<PaymentOrder>, PaymentPersistenceError>;

    /// Atomically move Unpaid → Paid. `None` means no such order.
    async fn settle(&self, id: OrderId) -> Result<Option<StatusCas>, PaymentPersistenceError>;
}
