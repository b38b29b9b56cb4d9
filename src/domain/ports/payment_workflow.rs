//! Driving port for the payment workflow.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::payment::{OrderId, PaymentOrder};
use crate::domain::role::Actor;

/// Domain use-case port for payment order operations.
#[async_trait]
pub trait PaymentWorkflow: Send + Sync {
    /// List unpaid orders visible to the actor.
    async fn list_unpaid(&self, actor: &Actor) -> Result<Vec<PaymentOrder>, Error>;

    /// List settled orders visible to the actor.
    async fn list_history(&self, actor: &Actor) -> Result<Vec<PaymentOrder>, Error>;

    /// Settle an unpaid order exactly once.
    async fn settle(&self, actor: &Actor, id: OrderId) -> Result<(), Error>;
}
